//! Helpers for classifying clap failures.

use clap::{Error as ClapError, error::ErrorKind};

/// Returns `true` when a [`clap::Error`] corresponds to `--help`.
///
/// Clap reports help requests through the error path so the process entry
/// points can delegate to [`clap::Error::exit`] and keep the zero exit status.
/// Callers of the fallible entry points use this to tell a help request apart
/// from a genuine usage mistake.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}
