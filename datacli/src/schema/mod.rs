//! Field descriptors produced by `#[derive(DataCli)]`.
//!
//! A [`Schema`] lists a record's fields in declaration order. Each
//! [`FieldDescriptor`] carries the flag metadata, the coercion hook handed to
//! clap, and a [`FieldDefault`] describing where a value comes from when the
//! command line is silent. Building a schema evaluates no user code: static
//! default expressions live in the generated constructor and only run when
//! needed.

use clap::Arg;
use clap::builder::{IntoResettable, ValueParser};

use crate::env::EnvDefault;

/// Where a field's value comes from when no flag is supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDefault {
    /// No default; the flag is required.
    None,
    /// The record supplies its own value.
    Static,
    /// The value is read from an environment variable.
    Env {
        /// Variable name and raw fallback.
        source: EnvDefault,
        /// Whether the record supplies its own value when the variable and
        /// its fallback are both absent.
        static_fallback: bool,
    },
}

impl FieldDefault {
    /// Environment-backed default without a record-level fallback.
    #[must_use]
    pub const fn env(source: EnvDefault) -> Self {
        Self::Env {
            source,
            static_fallback: false,
        }
    }
}

/// Flag naming and help metadata for a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Short flag, without the leading `-`.
    pub short: Option<char>,
    /// Long flag override, without the leading `--`.
    pub long: Option<String>,
    /// Declared help text.
    pub help: Option<String>,
}

/// Everything the parser builder needs to know about one record field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    type_name: &'static str,
    default: FieldDefault,
    metadata: FieldMetadata,
    value_parser: ValueParser,
    switch: bool,
}

impl FieldDescriptor {
    /// Creates a required field coerced with `value_parser`.
    ///
    /// Anything clap accepts as a value parser works here, including the
    /// output of [`clap::value_parser!`] and plain `fn(&str) -> Result<T, E>`
    /// functions.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        type_name: &'static str,
        value_parser: impl IntoResettable<ValueParser>,
    ) -> Self {
        // clap erases every accepted parser shape when attaching it to an arg.
        let value_parser = Arg::new("value")
            .value_parser(value_parser)
            .get_value_parser()
            .clone();
        Self {
            name: name.into(),
            type_name,
            default: FieldDefault::None,
            metadata: FieldMetadata::default(),
            value_parser,
            switch: false,
        }
    }

    /// Sets the short flag.
    #[must_use]
    pub const fn short(mut self, short: char) -> Self {
        self.metadata.short = Some(short);
        self
    }

    /// Overrides the derived long flag.
    #[must_use]
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.metadata.long = Some(long.into());
        self
    }

    /// Sets the declared help text.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.metadata.help = Some(help.into());
        self
    }

    /// Sets the default source.
    #[must_use]
    pub fn default_from(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    /// Marks the field as a boolean switch set by the flag's presence.
    #[must_use]
    pub const fn switch(mut self) -> Self {
        self.switch = true;
        self
    }

    /// Field name as declared on the record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared Rust type of the field.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Default source of the field.
    #[must_use]
    pub const fn default_source(&self) -> &FieldDefault {
        &self.default
    }

    /// Flag naming and help metadata.
    #[must_use]
    pub const fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }

    /// Coercion hook for raw values.
    #[must_use]
    pub const fn value_parser(&self) -> &ValueParser {
        &self.value_parser
    }

    /// Whether the field is a boolean switch.
    #[must_use]
    pub const fn is_switch(&self) -> bool {
        self.switch
    }

    /// Whether the record supplies its own value for an absent flag.
    #[must_use]
    pub const fn has_static_default(&self) -> bool {
        matches!(
            self.default,
            FieldDefault::Static
                | FieldDefault::Env {
                    static_fallback: true,
                    ..
                }
        )
    }

    /// Environment default, when the field is env-backed.
    #[must_use]
    pub const fn env_default(&self) -> Option<&EnvDefault> {
        match &self.default {
            FieldDefault::Env { source, .. } => Some(source),
            FieldDefault::None | FieldDefault::Static => None,
        }
    }

    /// A field is required when neither the record nor the environment can
    /// supply it.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.default, FieldDefault::None)
    }

    /// Long flag without dashes: the override, or the kebab-cased field name.
    #[must_use]
    pub fn long_name(&self) -> String {
        self.metadata
            .long
            .clone()
            .unwrap_or_else(|| self.name.replace('_', "-"))
    }

    /// Every flag that can supply the field, short form first.
    #[must_use]
    pub fn flags(&self) -> Vec<String> {
        self.metadata
            .short
            .map(|short| format!("-{short}"))
            .into_iter()
            .chain(std::iter::once(format!("--{}", self.long_name())))
            .collect()
    }
}

/// Ordered field descriptors for one record type.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    about: Option<String>,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Creates an empty schema for a command called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: None,
            fields: Vec::new(),
        }
    }

    /// Sets the command description.
    #[must_use]
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Appends a field, preserving declaration order.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Command description.
    #[must_use]
    pub fn about_text(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a field by its declared name.
    #[must_use]
    pub fn field_named(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests;
