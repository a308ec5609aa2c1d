//! Resolution pipeline from raw tokens to a populated record.
//!
//! The stages run in a fixed order:
//!
//! 1. clap matches the tokens against the [`ParserSpec`] (usage errors stop
//!    here);
//! 2. [`ParsedValues::filter`] keeps only values the command line or the
//!    environment actually supplied;
//! 3. [`validate`] rejects environment-backed fields that are still unset;
//! 4. [`DataCli::from_values`] builds the record, filling gaps from the
//!    record's own defaults.

use std::any::Any;
use std::collections::BTreeSet;
use std::ffi::OsString;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::DataCli;
use crate::env::EnvSource;
use crate::error::{DatacliError, DatacliResult};
use crate::parser::{ArgSpec, ParserSpec};
use crate::schema::Schema;

/// Values supplied for a single parse, with unset entries removed.
///
/// Generated [`DataCli::from_values`] implementations take each field out
/// exactly once.
#[derive(Debug)]
pub struct ParsedValues {
    matches: ArgMatches,
    present: BTreeSet<String>,
}

fn is_supplied(matches: &ArgMatches, arg: &ArgSpec) -> bool {
    match matches.value_source(arg.id()) {
        Some(ValueSource::CommandLine) => true,
        // Switches get an implicit `false` from clap; only environment
        // defaults registered by the builder count.
        Some(ValueSource::DefaultValue) => arg.default_value().is_some(),
        Some(_) | None => false,
    }
}

impl ParsedValues {
    /// Drops every value that neither the command line nor the environment
    /// supplied.
    #[must_use]
    pub fn filter(matches: ArgMatches, spec: &ParserSpec) -> Self {
        let present: BTreeSet<String> = spec
            .args()
            .iter()
            .filter(|arg| is_supplied(&matches, arg))
            .map(|arg| arg.id().to_owned())
            .collect();
        tracing::debug!(supplied = ?present, "filtered parsed values");
        Self { matches, present }
    }

    /// Whether a value is still available for `field`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.present.contains(field)
    }

    /// Names of the fields that still hold a value.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.present.iter().map(String::as_str)
    }

    /// Removes and returns the value for `field`, or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`DatacliError::Construction`] when the stored value is not a
    /// `T`, which means the coercion hook and the field type disagree.
    pub fn take<T>(&mut self, field: &str) -> DatacliResult<Option<T>>
    where
        T: Any + Clone + Send + Sync + 'static,
    {
        if !self.present.remove(field) {
            return Ok(None);
        }
        self.matches
            .try_remove_one::<T>(field)
            .map_err(|err| DatacliError::Construction {
                field: field.to_owned(),
                reason: err.to_string(),
            })
    }

    /// Removes and returns the value for a field that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`DatacliError::Construction`] when the value is missing or has
    /// the wrong type.
    pub fn require<T>(&mut self, field: &str) -> DatacliResult<T>
    where
        T: Any + Clone + Send + Sync + 'static,
    {
        self.take(field)?
            .ok_or_else(|| DatacliError::Construction {
                field: field.to_owned(),
                reason: String::from("no value was supplied"),
            })
    }
}

/// Rejects environment-backed fields that no source could fill.
///
/// The first unresolved field in declaration order is reported.
///
/// # Errors
///
/// Returns [`DatacliError::Configuration`] naming the field's flags and its
/// environment variable.
pub fn validate(schema: &Schema, values: &ParsedValues) -> DatacliResult<()> {
    let unresolved = schema.fields().iter().find_map(|field| {
        let source = field.env_default()?;
        let resolved = field.has_static_default() || values.contains(field.name());
        (!resolved).then_some((field, source))
    });
    let Some((field, source)) = unresolved else {
        return Ok(());
    };
    tracing::debug!(
        field = field.name(),
        variable = source.var(),
        "environment-backed field is unresolved"
    );
    Err(DatacliError::Configuration {
        field: field.name().to_owned(),
        flags: field.flags(),
        env_var: source.var().to_owned(),
    })
}

/// Runs the full pipeline for `T`.
///
/// `tokens` exclude the program name. `bin_name`, when given, replaces the
/// command name in usage output.
///
/// # Errors
///
/// Returns [`DatacliError::Usage`] for anything clap rejects (including
/// `--help`), [`DatacliError::Configuration`] for unresolved
/// environment-backed fields, and [`DatacliError::Construction`] when the
/// record cannot be built from the parsed values.
pub fn resolve<T, I, A>(tokens: I, env: &dyn EnvSource, bin_name: Option<&str>) -> DatacliResult<T>
where
    T: DataCli,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    let schema = T::schema();
    let spec = ParserSpec::build(&schema, env);
    let spec = match bin_name {
        Some(name) => spec.with_bin_name(name),
        None => spec,
    };
    let matches = spec.command().try_get_matches_from(tokens)?;
    let mut values = ParsedValues::filter(matches, &spec);
    validate(&schema, &values)?;
    T::from_values(&mut values)
}
