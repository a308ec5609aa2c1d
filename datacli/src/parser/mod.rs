//! Parser specification built from a [`Schema`].
//!
//! [`ParserSpec::build`] turns each field descriptor into an [`ArgSpec`]:
//! flag names, the required flag, the environment-resolved default, help text
//! with an environment hint, and the coercion hook. [`ParserSpec::command`]
//! registers the result with clap.

use clap::builder::ValueParser;
use clap::{Arg, ArgAction, Command};

use crate::env::EnvSource;
use crate::schema::{FieldDescriptor, Schema};

/// Appends an environment-variable hint to `help`.
///
/// The hint is joined with `, ` only when `help` is non-empty. A trailing
/// full stop is dropped from `help` first so doc-comment sentences read
/// naturally before the hint.
///
/// # Examples
///
/// ```
/// use datacli::help_with_env;
///
/// assert_eq!(help_with_env(None, "TOKEN"), "environment variable: TOKEN");
/// assert_eq!(
///     help_with_env(Some("API token."), "TOKEN"),
///     "API token, environment variable: TOKEN"
/// );
/// ```
#[must_use]
pub fn help_with_env(help: Option<&str>, var: &str) -> String {
    match help.map(|text| text.trim_end_matches('.')) {
        Some(text) if !text.is_empty() => format!("{text}, environment variable: {var}"),
        _ => format!("environment variable: {var}"),
    }
}

/// One flag definition handed to clap.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    id: String,
    short: Option<char>,
    long: String,
    required: bool,
    default: Option<String>,
    help: String,
    value_parser: ValueParser,
    switch: bool,
}

impl ArgSpec {
    fn from_field(field: &FieldDescriptor, env: &dyn EnvSource) -> Self {
        let env_default = field.env_default();
        let default = env_default.and_then(|source| source.resolve(env));
        if let Some(source) = env_default {
            tracing::debug!(
                field = field.name(),
                variable = source.var(),
                resolved = default.is_some(),
                "resolved environment default"
            );
        }
        let help = env_default.map_or_else(
            || field.metadata().help.clone().unwrap_or_default(),
            |source| help_with_env(field.metadata().help.as_deref(), source.var()),
        );
        Self {
            id: field.name().to_owned(),
            short: field.metadata().short,
            long: field.long_name(),
            required: field.is_required(),
            default,
            help,
            value_parser: field.value_parser().clone(),
            switch: field.is_switch(),
        }
    }

    /// Argument id; equal to the field name.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Short flag, without the leading `-`.
    #[must_use]
    pub const fn short(&self) -> Option<char> {
        self.short
    }

    /// Long flag, without the leading `--`.
    #[must_use]
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Whether clap must see the flag.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Raw default registered with clap, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Help text, including any environment hint.
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Whether the flag is a boolean switch.
    #[must_use]
    pub const fn is_switch(&self) -> bool {
        self.switch
    }

    fn to_arg(&self) -> Arg {
        let action = if self.switch {
            ArgAction::SetTrue
        } else {
            ArgAction::Set
        };
        let mut arg = Arg::new(self.id.clone())
            .long(self.long.clone())
            .action(action)
            .value_parser(self.value_parser.clone())
            .required(self.required);
        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        if let Some(default) = &self.default {
            arg = arg.default_value(default.clone());
        }
        if !self.help.is_empty() {
            arg = arg.help(self.help.clone());
        }
        arg
    }
}

/// Flag definitions for one record type, ready to register with clap.
#[derive(Debug, Clone)]
pub struct ParserSpec {
    name: String,
    about: Option<String>,
    bin_name: Option<String>,
    args: Vec<ArgSpec>,
}

impl ParserSpec {
    /// Builds one [`ArgSpec`] per field, resolving environment defaults from
    /// `env` now.
    #[must_use]
    pub fn build(schema: &Schema, env: &dyn EnvSource) -> Self {
        let args: Vec<_> = schema
            .fields()
            .iter()
            .map(|field| ArgSpec::from_field(field, env))
            .collect();
        tracing::debug!(
            command = schema.name(),
            fields = args.len(),
            "built parser specification"
        );
        Self {
            name: schema.name().to_owned(),
            about: schema.about_text().map(ToOwned::to_owned),
            bin_name: None,
            args,
        }
    }

    /// Sets the binary name shown in usage output.
    #[must_use]
    pub fn with_bin_name(mut self, bin_name: impl Into<String>) -> Self {
        self.bin_name = Some(bin_name.into());
        self
    }

    /// Flag definitions in declaration order.
    #[must_use]
    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    /// Looks up a flag definition by field name.
    #[must_use]
    pub fn arg(&self, id: &str) -> Option<&ArgSpec> {
        self.args.iter().find(|arg| arg.id == id)
    }

    /// Registers every flag with a clap [`Command`].
    ///
    /// Tokens passed to the command exclude the program name.
    #[must_use]
    pub fn command(&self) -> Command {
        let mut command = Command::new(self.name.clone()).no_binary_name(true);
        if let Some(about) = &self.about {
            command = command.about(about.clone());
        }
        if let Some(bin_name) = &self.bin_name {
            command = command.bin_name(bin_name.clone());
        }
        command.args(self.args.iter().map(ArgSpec::to_arg))
    }
}
