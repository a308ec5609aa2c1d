//! Environment-sourced defaults.
//!
//! An [`EnvDefault`] names the variable that can supply a field when the
//! command line stays silent, plus an optional raw fallback used when the
//! variable is unset. Lookups go through [`EnvSource`] so tests can supply a
//! fixed map instead of the process environment.

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::hash::BuildHasher;

/// Read-only lookup of environment variables by name.
pub trait EnvSource {
    /// Returns the variable's value, or `None` when it is absent.
    fn var(&self, name: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the real process environment.
///
/// Variables holding non-UTF-8 data are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(
                    variable = name,
                    "ignoring environment variable with non-UTF-8 value"
                );
                None
            }
        }
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Default for a field that is read from an environment variable.
///
/// The fallback is a raw string: it goes through the same coercion as a
/// command-line value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDefault {
    var: String,
    fallback: Option<String>,
}

impl EnvDefault {
    /// Creates a default read from `var` with no fallback.
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            fallback: None,
        }
    }

    /// Sets the raw value used when `var` is unset.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Name of the environment variable.
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Raw fallback used when the variable is unset.
    #[must_use]
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Reads the variable from `env`, falling back to the configured value.
    ///
    /// `None` means the field is still unresolved.
    #[must_use]
    pub fn resolve(&self, env: &dyn EnvSource) -> Option<String> {
        env.var(&self.var).or_else(|| self.fallback.clone())
    }
}

/// Builds an [`EnvDefault`] for `var` with an optional raw `fallback`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use datacli::make_env_default;
///
/// let default = make_env_default("APP_TOKEN", Some("anonymous"));
/// let env = BTreeMap::new();
/// assert_eq!(default.resolve(&env).as_deref(), Some("anonymous"));
/// ```
#[must_use]
pub fn make_env_default(var: impl Into<String>, fallback: Option<&str>) -> EnvDefault {
    let default = EnvDefault::new(var);
    match fallback {
        Some(raw) => default.with_fallback(raw),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use test_helpers::env::fixed;

    #[rstest]
    #[case::set_without_fallback(&[("TOKEN", "abcd")], None, Some("abcd"))]
    #[case::set_with_fallback(&[("TOKEN", "abcd")], Some("xyz"), Some("abcd"))]
    #[case::unset_with_fallback(&[], Some("xyz"), Some("xyz"))]
    #[case::unset_without_fallback(&[], None, None)]
    #[case::empty_value_counts_as_set(&[("TOKEN", "")], Some("xyz"), Some(""))]
    fn resolves_value_then_fallback(
        #[case] pairs: &[(&str, &str)],
        #[case] fallback: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let default = make_env_default("TOKEN", fallback);
        let env = fixed(pairs);
        assert_eq!(default.resolve(&env).as_deref(), expected);
    }

    #[test]
    fn exposes_variable_and_fallback_without_resolving() {
        let default = EnvDefault::new("TOKEN").with_fallback("xyz");
        assert_eq!(default.var(), "TOKEN");
        assert_eq!(default.fallback(), Some("xyz"));
    }

    #[test]
    fn hash_map_source_reads_values() {
        let env: HashMap<String, String> = HashMap::from([("A".to_owned(), "1".to_owned())]);
        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert_eq!(env.var("B"), None);
    }
}
