//! Procedural macros for `datacli`.
//!
//! `#[derive(DataCli)]` turns a struct with named fields into a command-line
//! parser. Each field becomes a flag whose long name is the kebab-cased field
//! name; `#[datacli(...)]` attributes override flag names, help text and
//! defaults, and bind fields to environment variables.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `datacli::DataCli`.
///
/// Field attributes:
///
/// - `cli_short = 'c'` and `cli_long = "name"` override the flags.
/// - `help = "..."` sets the help text; the field's doc comment is used
///   otherwise.
/// - `default = <expr>` supplies the value when no source provides one.
/// - `env = "VAR"` reads the value from an environment variable, with an
///   optional raw `env_fallback = "..."` for when it is unset.
/// - `arg_type = <expr>` replaces the coercion derived from the field type.
///
/// Struct attributes: `name`, `about` and `crate`.
#[proc_macro_derive(DataCli, attributes(datacli))]
pub fn derive_data_cli(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
