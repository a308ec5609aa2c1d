//! Build simple command-line parsers from annotated structs.
//!
//! `#[derive(DataCli)]` describes each field of a struct as a command-line
//! flag. Values are resolved with a fixed precedence: the command line wins,
//! then the field's environment variable (and its fallback), then the
//! record's own default. A missing required flag is a usage error that ends
//! the process; an environment-backed field that no source could fill is a
//! recoverable [`DatacliError::Configuration`].
//!
//! ```rust,no_run
//! use datacli::DataCli;
//!
//! /// Connects to a server.
//! #[derive(Debug, DataCli)]
//! struct Args {
//!     /// Server host name.
//!     #[datacli(cli_short = 'H', default = String::from("localhost"))]
//!     host: String,
//!     /// Access token.
//!     #[datacli(env = "APP_TOKEN")]
//!     token: String,
//! }
//!
//! fn main() -> Result<(), datacli::DatacliError> {
//!     let args = Args::parse()?;
//!     println!("{args:?}");
//!     Ok(())
//! }
//! ```

use std::ffi::OsString;

pub use datacli_macros::DataCli;

#[doc(hidden)]
pub use clap;

pub mod docs;
mod env;
mod error;
mod parser;
mod resolve;
mod schema;

pub use env::{EnvDefault, EnvSource, ProcessEnv, make_env_default};
pub use error::{DatacliError, DatacliResult, is_display_request};
pub use parser::{ArgSpec, ParserSpec, help_with_env};
pub use resolve::{ParsedValues, resolve, validate};
pub use schema::{FieldDefault, FieldDescriptor, FieldMetadata, Schema};

/// Records that can be parsed from command-line tokens.
///
/// Implemented by `#[derive(DataCli)]`; the derive generates [`schema`] and
/// [`from_values`], and the remaining methods drive the shared pipeline.
///
/// [`schema`]: DataCli::schema
/// [`from_values`]: DataCli::from_values
pub trait DataCli: Sized {
    /// Field descriptors in declaration order.
    fn schema() -> Schema;

    /// Builds the record from filtered values, applying the record's own
    /// defaults to fields that received no value.
    ///
    /// # Errors
    ///
    /// Returns [`DatacliError::Construction`] when a value is missing or has
    /// an unexpected type.
    fn from_values(values: &mut ParsedValues) -> DatacliResult<Self>;

    /// Parses the process arguments.
    ///
    /// Usage errors print clap's message and exit the process.
    ///
    /// # Errors
    ///
    /// Returns [`DatacliError::Configuration`] when an environment-backed
    /// field has no value, or [`DatacliError::Construction`] when the record
    /// cannot be built.
    fn parse() -> DatacliResult<Self> {
        let mut args = std::env::args_os();
        let bin_name = args.next().map(|arg0| {
            let path = std::path::Path::new(&arg0);
            path.file_name().map_or_else(
                || path.to_string_lossy().into_owned(),
                |name| name.to_string_lossy().into_owned(),
            )
        });
        resolve::<Self, _, _>(args, &ProcessEnv, bin_name.as_deref())
            .map_err(DatacliError::exit_on_usage)
    }

    /// Parses `tokens`, which exclude the program name.
    ///
    /// Usage errors print clap's message and exit the process.
    ///
    /// # Errors
    ///
    /// See [`DataCli::parse`].
    fn parse_from<I, A>(tokens: I) -> DatacliResult<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString> + Clone,
    {
        Self::try_parse_from(tokens).map_err(DatacliError::exit_on_usage)
    }

    /// Parses `tokens` without exiting on usage errors.
    ///
    /// # Errors
    ///
    /// Returns [`DatacliError::Usage`] for anything clap rejects, plus the
    /// errors listed on [`DataCli::parse`].
    fn try_parse_from<I, A>(tokens: I) -> DatacliResult<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString> + Clone,
    {
        Self::try_parse_from_env(tokens, &ProcessEnv)
    }

    /// Parses `tokens` reading environment defaults from `env`.
    ///
    /// # Errors
    ///
    /// See [`DataCli::try_parse_from`].
    fn try_parse_from_env<I, A>(tokens: I, env: &dyn EnvSource) -> DatacliResult<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString> + Clone,
    {
        resolve::<Self, _, _>(tokens, env, None)
    }

    /// The clap command for this record, with environment defaults resolved
    /// from the process environment.
    #[must_use]
    fn command() -> clap::Command {
        ParserSpec::build(&Self::schema(), &ProcessEnv).command()
    }
}

/// Parses `tokens` into `T`, exiting the process on usage errors.
///
/// # Errors
///
/// Returns [`DatacliError::Configuration`] when an environment-backed field
/// has no value, or [`DatacliError::Construction`] when the record cannot be
/// built.
pub fn datacli<T, I, A>(tokens: I) -> DatacliResult<T>
where
    T: DataCli,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    T::parse_from(tokens)
}

/// Parses `tokens` into `T`, returning usage errors instead of exiting.
///
/// # Errors
///
/// Returns [`DatacliError::Usage`] for anything clap rejects, plus the errors
/// listed on [`datacli()`].
pub fn try_datacli<T, I, A>(tokens: I) -> DatacliResult<T>
where
    T: DataCli,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    T::try_parse_from(tokens)
}

/// Builds the clap command for `T`.
#[must_use]
pub fn make_parser<T: DataCli>() -> clap::Command {
    T::command()
}

#[doc(hidden)]
pub mod __private {
    //! Support items for code generated by `#[derive(DataCli)]`.

    use clap::builder::TypedValueParser;

    /// Checks at compile time that a custom coercion produces `T`.
    pub const fn typed_parser<T, P>(parser: P) -> P
    where
        P: TypedValueParser<Value = T>,
    {
        parser
    }
}
