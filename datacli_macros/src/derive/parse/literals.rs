//! Literal parsing helpers for derive attributes.

use syn::meta::ParseNestedMeta;
use syn::{Lit, LitStr};

/// Parses a literal from an attribute using `extractor`, naming `expected`
/// in the error when the literal has the wrong kind.
fn parse_lit<T, F>(
    meta: &ParseNestedMeta,
    key: &str,
    expected: &str,
    extractor: F,
) -> syn::Result<T>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| syn::Error::new(span, format!("{key} must be a {expected}")))
}

/// Parses a string literal from an attribute.
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    parse_lit(meta, key, "string", |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}

/// Parses a character literal from an attribute.
pub(crate) fn lit_char(meta: &ParseNestedMeta, key: &str) -> syn::Result<char> {
    parse_lit(meta, key, "character", |lit| match lit {
        Lit::Char(c) => Some(c.value()),
        _ => None,
    })
}
