//! Helpers for safely mutating environment variables in tests.
//!
//! Each mutation acquires a global re-entrant mutex and returns an RAII
//! guard that restores the previous state when dropped (removing the
//! variable if it was previously absent). Guards for the same key stack and
//! restore in LIFO order.
//!
//! Use [`scope`] when a test reads several variables through the real
//! process environment: the scope holds the lock until it drops, so no other
//! test can change those variables mid-parse.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env;
//!
//! let _g = env::set_var("DATACLI_DOC_KEY", "VALUE");
//! assert_eq!(std::env::var("DATACLI_DOC_KEY").as_deref(), Ok("VALUE"));
//! ```

use std::collections::BTreeMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Wrapper around `std::env::set_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_set_var(key: &str, value: &OsStr) {
    unsafe { env::set_var(key, value) };
}

/// Wrapper around `std::env::remove_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_remove_var(key: &str) {
    unsafe { env::remove_var(key) };
}

fn mutate<F>(key: String, mutator: F) -> EnvVarGuard
where
    F: FnOnce(&str),
{
    let _guard = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    mutator(&key);
    EnvVarGuard { key, original }
}

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _guard = ENV_MUTEX.lock();
        if let Some(val) = self.original.take() {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            unsafe { env_set_var(&self.key, &val) };
        } else {
            // SAFETY: We hold `ENV_MUTEX` during restoration.
            unsafe { env_remove_var(&self.key) };
        }
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// # Examples
///
/// ```
/// use test_helpers::env;
///
/// let _g = env::set_var("DATACLI_DOC_SET", "bar");
/// assert!(matches!(std::env::var("DATACLI_DOC_SET"), Ok(ref value) if value == "bar"));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    // SAFETY: `mutate` holds `ENV_MUTEX` while the closure runs.
    mutate(key.into(), |k| unsafe { env_set_var(k, value.as_ref()) })
}

/// Removes an environment variable and returns a guard restoring its prior value.
///
/// # Examples
///
/// ```
/// use test_helpers::env;
///
/// let _g = env::remove_var("DATACLI_DOC_REMOVED");
/// assert!(std::env::var("DATACLI_DOC_REMOVED").is_err());
/// ```
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    // SAFETY: `mutate` holds `ENV_MUTEX` while the closure runs.
    mutate(key.into(), |k| unsafe { env_remove_var(k) })
}

/// RAII scope that holds the environment lock while retaining guards.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl fmt::Debug for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvScope")
            .field("guards", &self.guards)
            .finish_non_exhaustive()
    }
}

/// Applies `vars` under the global lock and keeps the lock until the scope
/// drops.
///
/// `Some(value)` sets the variable and `None` removes it.
///
/// # Examples
///
/// ```
/// use test_helpers::env;
///
/// let _scope = env::scope([
///     ("DATACLI_DOC_TOKEN", Some("secret")),
///     ("DATACLI_DOC_UNSET", None),
/// ]);
/// assert_eq!(std::env::var("DATACLI_DOC_TOKEN").as_deref(), Ok("secret"));
/// assert!(std::env::var("DATACLI_DOC_UNSET").is_err());
/// ```
pub fn scope<'a, I>(vars: I) -> EnvScope
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let lock = ENV_MUTEX.lock();
    let guards = vars
        .into_iter()
        .map(|(key, value)| match value {
            Some(value) => set_var(key, value),
            None => remove_var(key),
        })
        .collect();
    EnvScope {
        guards,
        _lock: lock,
    }
}

/// Builds a fixed environment map for parsers that take an explicit source.
///
/// # Examples
///
/// ```
/// use test_helpers::env;
///
/// let vars = env::fixed(&[("TOKEN", "abcd")]);
/// assert_eq!(vars.get("TOKEN").map(String::as_str), Some("abcd"));
/// ```
#[must_use]
pub fn fixed(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}
