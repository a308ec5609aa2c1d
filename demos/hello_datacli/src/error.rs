//! Error types for the `hello_datacli` demo.
//!
//! Argument resolution failures and local validation issues are wrapped
//! together so `main` can report one concise diagnostic.

use thiserror::Error;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum HelloError {
    /// An environment-backed argument could not be resolved.
    #[error("failed to resolve arguments: {0}")]
    Arguments(#[from] datacli::DatacliError),
    /// The resolved arguments describe an impossible greeting.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Writing the greeting failed.
    #[error("failed to write greeting: {0}")]
    Output(#[from] std::io::Error),
}

/// Validation issues detected before printing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The recipient collapsed to nothing after trimming.
    #[error("recipient must contain visible characters")]
    BlankRecipient,
    /// The salutation collapsed to nothing after trimming.
    #[error("salutation must contain visible characters")]
    BlankSalutation,
    /// The greeting would never be printed.
    #[error("repeat count must be greater than zero")]
    ZeroRepeat,
}

/// Convenience alias for demo results.
pub type Result<T, E = HelloError> = std::result::Result<T, E>;
