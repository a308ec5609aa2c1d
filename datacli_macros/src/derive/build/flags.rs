//! Flag validation for the `DataCli` derive macro.
//!
//! Tracks claimed short and long flags to reject collisions at compile time
//! and checks that user-supplied flag names are something clap accepts.

use std::collections::HashSet;

use syn::Ident;

const RESERVED_SHORTS: &[char] = &['h'];
const RESERVED_LONGS: &[&str] = &["help"];

fn has_invalid_chars(long: &str) -> bool {
    !long.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn invalid_prefix_message(long: &str) -> Option<String> {
    let prefix = long.chars().next().filter(|c| matches!(c, '-' | '_'))?;
    Some(format!(
        "invalid `cli_long` '{long}': must not start with '{prefix}'"
    ))
}

fn long_validation_error(long: &str) -> Option<String> {
    if long.is_empty() {
        Some(format!("invalid `cli_long` '{long}': must be non-empty"))
    } else if let Some(message) = invalid_prefix_message(long) {
        Some(message)
    } else if has_invalid_chars(long) {
        Some(format!(
            "invalid `cli_long` '{long}': must contain only ASCII alphanumeric characters or '-'"
        ))
    } else {
        None
    }
}

pub(super) fn validate_cli_long(name: &Ident, long: &str) -> syn::Result<()> {
    if let Some(message) = long_validation_error(long) {
        return Err(syn::Error::new_spanned(name, message));
    }
    if RESERVED_LONGS.contains(&long) {
        return Err(syn::Error::new_spanned(
            name,
            format!("reserved `cli_long` '{long}' conflicts with the help flag; supply `cli_long`"),
        ));
    }
    Ok(())
}

pub(super) fn validate_cli_short(name: &Ident, short: char) -> syn::Result<()> {
    if !short.is_ascii_alphanumeric() {
        return Err(syn::Error::new_spanned(
            name,
            format!("invalid `cli_short` '{short}': must be ASCII alphanumeric"),
        ));
    }
    if RESERVED_SHORTS.contains(&short) {
        return Err(syn::Error::new_spanned(
            name,
            format!("reserved `cli_short` '{short}' conflicts with the help flag"),
        ));
    }
    Ok(())
}

/// Flags already claimed by earlier fields.
#[derive(Debug, Default)]
pub(super) struct FlagRegistry {
    used_shorts: HashSet<char>,
    used_longs: HashSet<String>,
}

impl FlagRegistry {
    pub(super) fn claim_long(&mut self, name: &Ident, long: &str) -> syn::Result<()> {
        validate_cli_long(name, long)?;
        if !self.used_longs.insert(long.to_owned()) {
            return Err(syn::Error::new_spanned(
                name,
                format!("duplicate `cli_long` value '{long}'"),
            ));
        }
        Ok(())
    }

    pub(super) fn claim_short(&mut self, name: &Ident, short: char) -> syn::Result<()> {
        validate_cli_short(name, short)?;
        if !self.used_shorts.insert(short) {
            return Err(syn::Error::new_spanned(
                name,
                format!("duplicate `cli_short` value '{short}'"),
            ));
        }
        Ok(())
    }
}
