//! Expansion pipeline for `#[derive(DataCli)]`.
//!
//! Parsing collects attributes, building validates flags and plans each
//! field, and generation emits the trait implementation.

mod build;
mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;

/// Expands the derive input into a `DataCli` implementation.
pub(crate) fn expand(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let plans = build::plan_fields(&parsed.fields, &parsed.field_attrs)?;
    let krate = crate_path::resolve(parsed.struct_attrs.crate_path.as_ref());
    Ok(generate::data_cli_impl(&parsed, &plans, &krate))
}
