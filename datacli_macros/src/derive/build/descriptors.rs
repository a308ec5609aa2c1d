//! Emits the `FieldDescriptor` builder chain for each field.

use proc_macro2::TokenStream;
use quote::quote;

use super::{FieldKind, FieldPlan};

fn value_parser_tokens(plan: &FieldPlan, krate: &TokenStream) -> TokenStream {
    let coerced = &plan.coerced;
    plan.arg_type.as_ref().map_or_else(
        || quote! { #krate::clap::value_parser!(#coerced) },
        |custom| quote! { #krate::__private::typed_parser::<#coerced, _>(#custom) },
    )
}

fn default_tokens(plan: &FieldPlan, krate: &TokenStream) -> TokenStream {
    let static_fallback = plan.has_static_default();
    match &plan.env {
        Some(var) => {
            let fallback = plan.env_fallback.as_ref().map_or_else(
                || quote! { ::core::option::Option::None },
                |raw| quote! { ::core::option::Option::Some(#raw) },
            );
            quote! {
                .default_from(#krate::FieldDefault::Env {
                    source: #krate::make_env_default(#var, #fallback),
                    static_fallback: #static_fallback,
                })
            }
        }
        None if static_fallback => quote! { .default_from(#krate::FieldDefault::Static) },
        None => TokenStream::new(),
    }
}

/// Builds the expression constructing the field's descriptor.
pub(crate) fn field_descriptor(plan: &FieldPlan, krate: &TokenStream) -> TokenStream {
    let name = &plan.name;
    let ty = &plan.ty;
    let parser = value_parser_tokens(plan, krate);
    let mut tokens = quote! {
        #krate::FieldDescriptor::new(#name, ::core::any::type_name::<#ty>(), #parser)
    };
    if let Some(short) = plan.short {
        tokens.extend(quote! { .short(#short) });
    }
    if let Some(long) = &plan.long {
        tokens.extend(quote! { .long(#long) });
    }
    if let Some(help) = &plan.help {
        tokens.extend(quote! { .help(#help) });
    }
    tokens.extend(default_tokens(plan, krate));
    if plan.kind == FieldKind::Switch {
        tokens.extend(quote! { .switch() });
    }
    tokens
}
