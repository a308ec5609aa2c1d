//! Emits the `DataCli` trait implementation.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::build::{FieldPlan, field_descriptor, field_initializer};
use crate::derive::parse::ParsedInput;

/// Generates `impl DataCli` with `schema` and `from_values`.
pub(crate) fn data_cli_impl(
    parsed: &ParsedInput,
    plans: &[FieldPlan],
    krate: &TokenStream,
) -> TokenStream {
    let ident = &parsed.ident;
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();
    let command = parsed.command_name();
    let about = parsed
        .struct_attrs
        .about
        .as_ref()
        .map(|about| quote! { .about(#about) });
    let descriptors = plans.iter().map(|plan| field_descriptor(plan, krate));
    let initializers = plans.iter().map(field_initializer);
    // A record without fields never reads its values.
    let values = if plans.is_empty() {
        quote! { _ }
    } else {
        quote! { values }
    };
    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::DataCli for #ident #ty_generics #where_clause {
            fn schema() -> #krate::Schema {
                #krate::Schema::new(#command)
                    #about
                    #( .field(#descriptors) )*
            }

            fn from_values(
                #values: &mut #krate::ParsedValues,
            ) -> #krate::DatacliResult<Self> {
                ::core::result::Result::Ok(Self {
                    #( #initializers, )*
                })
            }
        }
    }
}
