//! Parsing utilities for the `DataCli` derive macro.
//!
//! Collects `#[datacli(...)]` metadata from the struct and its fields in one
//! pass so expansion can fail fast with errors pointing at the offending
//! attribute.

use heck::ToKebabCase;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, LitStr};

mod doc_comments;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

use doc_comments::doc_summary;
use literals::{lit_char, lit_str};
pub(crate) use type_utils::{is_bool, option_inner};

/// Struct-level attributes recognised by `#[derive(DataCli)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Command name; defaults to the kebab-cased struct name.
    pub name: Option<String>,
    /// Command description; defaults to the struct's doc comment.
    pub about: Option<String>,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(DataCli)]`.
///
/// - `cli_long`/`cli_short` override generated flags.
/// - `help` sets the help text, falling back to the doc comment.
/// - `default` supplies a typed value when no source provides one.
/// - `env`/`env_fallback` bind the field to an environment variable.
/// - `arg_type` replaces the coercion derived from the field type.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub cli_long: Option<String>,
    pub cli_short: Option<char>,
    pub help: Option<String>,
    pub default: Option<Expr>,
    pub env: Option<LitStr>,
    pub env_fallback: Option<LitStr>,
    pub arg_type: Option<Expr>,
}

/// Everything the builders need from the user's struct.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub fields: Vec<syn::Field>,
    pub struct_attrs: StructAttrs,
    pub field_attrs: Vec<FieldAttrs>,
}

impl ParsedInput {
    /// Command name used in usage output.
    pub(crate) fn command_name(&self) -> String {
        self.struct_attrs
            .name
            .clone()
            .unwrap_or_else(|| self.ident.to_string().to_kebab_case())
    }
}

/// Iterate all `#[datacli(...)]` attributes once and apply a callback.
fn parse_datacli<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("datacli")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn meta_key(meta: &ParseNestedMeta) -> String {
    meta.path
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn unknown_key(meta: &ParseNestedMeta) -> syn::Error {
    let key = meta_key(meta);
    meta.error(format!("unknown datacli attribute `{key}`"))
}

/// Stores `value` in `slot`, rejecting a second occurrence of `key`.
fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    meta: &ParseNestedMeta,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{key}` attribute")));
    }
    *slot = Some(value);
    Ok(())
}

/// Extracts `#[datacli(...)]` metadata applied to a struct.
///
/// Recognised keys are `name`, `about` and `crate`. Unknown keys are
/// rejected so typos surface at compile time.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_datacli(attrs, |meta| match meta_key(meta).as_str() {
        "name" => {
            let value = lit_str(meta, "name")?.value();
            set_once(&mut out.name, value, meta, "name")
        }
        "about" => {
            let value = lit_str(meta, "about")?.value();
            set_once(&mut out.about, value, meta, "about")
        }
        "crate" => {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            set_once(&mut out.crate_path, path, meta, "crate")
        }
        _ => Err(unknown_key(meta)),
    })?;
    if out.about.is_none() {
        out.about = doc_summary(attrs);
    }
    Ok(out)
}

fn validate_env_var(lit: &LitStr) -> syn::Result<()> {
    let var = lit.value();
    if var.is_empty() {
        return Err(syn::Error::new(lit.span(), "`env` must name a variable"));
    }
    if var.contains(['=', '\0']) {
        return Err(syn::Error::new(
            lit.span(),
            format!("invalid `env` '{var}': must not contain '=' or NUL"),
        ));
    }
    Ok(())
}

/// Applies one field attribute key.
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<()> {
    match meta_key(meta).as_str() {
        "cli_long" => {
            let value = lit_str(meta, "cli_long")?.value();
            set_once(&mut out.cli_long, value, meta, "cli_long")
        }
        "cli_short" => {
            let value = lit_char(meta, "cli_short")?;
            set_once(&mut out.cli_short, value, meta, "cli_short")
        }
        "help" => {
            let value = lit_str(meta, "help")?.value();
            set_once(&mut out.help, value, meta, "help")
        }
        "default" => {
            let value = meta.value()?.parse()?;
            set_once(&mut out.default, value, meta, "default")
        }
        "env" => {
            let value = lit_str(meta, "env")?;
            validate_env_var(&value)?;
            set_once(&mut out.env, value, meta, "env")
        }
        "env_fallback" => {
            let value = lit_str(meta, "env_fallback")?;
            set_once(&mut out.env_fallback, value, meta, "env_fallback")
        }
        "arg_type" => {
            let value = meta.value()?.parse()?;
            set_once(&mut out.arg_type, value, meta, "arg_type")
        }
        _ => Err(unknown_key(meta)),
    }
}

/// Parses field-level `#[datacli(...)]` attributes.
///
/// The field's doc comment supplies the help text when `help` is absent.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_datacli(&field.attrs, |meta| apply_field_attr(meta, &mut out))?;
    if let (Some(fallback), None) = (&out.env_fallback, &out.env) {
        return Err(syn::Error::new(
            fallback.span(),
            "`env_fallback` requires `env`",
        ));
    }
    if out.help.is_none() {
        out.help = doc_summary(&field.attrs);
    }
    Ok(out)
}

/// Gathers information from the user-provided struct.
///
/// Only structs with named fields (or no fields at all) are accepted.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "DataCli requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "DataCli can only be derived for structs",
            ));
        }
    };
    let field_attrs = fields
        .iter()
        .map(parse_field_attrs)
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        fields,
        struct_attrs,
        field_attrs,
    })
}
