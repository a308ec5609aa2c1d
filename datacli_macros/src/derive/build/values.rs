//! Emits the field initializers used by the generated `from_values`.
//!
//! Required fields (including env-backed fields without a static fallback)
//! must still hold a value after validation; every other field falls back to
//! the record's default when its value was filtered out.

use proc_macro2::TokenStream;
use quote::quote;

use super::{FieldKind, FieldPlan};

/// Builds `ident: <expr>` for the struct literal in `from_values`.
pub(crate) fn field_initializer(plan: &FieldPlan) -> TokenStream {
    let ident = &plan.ident;
    let name = &plan.name;
    let coerced = &plan.coerced;
    let take = quote! { values.take::<#coerced>(#name)? };
    let value = match (plan.kind, &plan.default) {
        (FieldKind::Plain, None) => quote! { values.require::<#coerced>(#name)? },
        (FieldKind::Plain | FieldKind::Switch, Some(default)) => quote! {
            match #take {
                ::core::option::Option::Some(value) => value,
                ::core::option::Option::None => #default,
            }
        },
        (FieldKind::Optional, None) => take,
        (FieldKind::Optional, Some(default)) => quote! {
            match #take {
                ::core::option::Option::Some(value) => ::core::option::Option::Some(value),
                ::core::option::Option::None => ::core::option::Option::Some(#default),
            }
        },
        (FieldKind::Switch, None) => quote! { #take.unwrap_or(false) },
    };
    quote! { #ident: #value }
}
