//! Primary error enum for the parse-and-validate pipeline.

use thiserror::Error;

/// Convenience alias for results carrying a [`DatacliError`].
pub type DatacliResult<T> = Result<T, DatacliError>;

/// Errors that can occur while turning command-line tokens into a record.
///
/// The variants form two channels. [`DatacliError::Usage`] is fatal: the
/// process entry points hand it to [`clap::Error::exit`], printing the usage
/// message and terminating. [`DatacliError::Configuration`] is the one
/// recoverable failure and is returned to the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatacliError {
    /// Malformed tokens, unknown flags, or a missing required flag.
    #[error("{0}")]
    Usage(Box<clap::Error>),

    /// An environment-backed field received no value from any source.
    #[error(
        "no value for '{field}': pass {} or set the environment variable {env_var}",
        .flags.join("/")
    )]
    Configuration {
        /// Name of the unresolved record field.
        field: String,
        /// Every CLI flag that can supply the field, short form first.
        flags: Vec<String>,
        /// Environment variable that can supply the field.
        env_var: String,
    },

    /// Parsed values could not populate the record.
    #[error("cannot construct field '{field}': {reason}")]
    Construction {
        /// Name of the field that failed to materialise.
        field: String,
        /// Human-readable explanation of the mismatch.
        reason: String,
    },
}

impl DatacliError {
    /// Terminates the process when `self` is a usage error.
    ///
    /// Usage errors print clap's rendered message (or the requested help)
    /// and exit with clap's status code. Any other variant is returned
    /// unchanged so the caller can decide how to report it.
    #[must_use]
    pub fn exit_on_usage(self) -> Self {
        match self {
            Self::Usage(err) => err.exit(),
            other => other,
        }
    }

    /// Returns `true` for the fatal usage channel.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Returns the clap error behind a usage failure, if any.
    #[must_use]
    pub fn as_usage(&self) -> Option<&clap::Error> {
        match self {
            Self::Usage(err) => Some(&**err),
            _ => None,
        }
    }
}

impl From<clap::Error> for DatacliError {
    fn from(err: clap::Error) -> Self {
        Self::Usage(Box::new(err))
    }
}
