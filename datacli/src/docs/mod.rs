//! Serializable description of a derived parser.
//!
//! [`Schema::describe`] flattens a schema into plain data: every flag, its
//! environment variable, whether it is required, and the help text exactly as
//! clap renders it. External tooling can serialize the result to generate
//! documentation without building a clap command.

use serde::Serialize;

use crate::parser::help_with_env;
use crate::schema::{FieldDescriptor, Schema};

/// Current version of the [`SchemaDoc`] layout.
pub const SCHEMA_DOC_VERSION: &str = "1.0";

/// Documentation for a whole command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SchemaDoc {
    /// Layout version, see [`SCHEMA_DOC_VERSION`].
    pub version: String,
    /// Command name.
    pub name: String,
    /// Command description.
    pub about: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDoc>,
}

/// Documentation for one field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldDoc {
    /// Field name as declared on the record.
    pub name: String,
    /// Declared Rust type.
    pub type_name: String,
    /// Flags accepted for the field, short form first.
    pub flags: Vec<String>,
    /// Whether the flag must be supplied on the command line.
    pub required: bool,
    /// Whether the field is a boolean switch.
    pub switch: bool,
    /// Whether the record supplies its own default.
    pub static_default: bool,
    /// Help text, including any environment hint.
    pub help: String,
    /// Environment variable backing the field.
    pub env: Option<EnvDoc>,
}

/// Environment variable documentation for a field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnvDoc {
    /// Variable name.
    pub var: String,
    /// Raw fallback used when the variable is unset.
    pub fallback: Option<String>,
}

impl From<&FieldDescriptor> for FieldDoc {
    fn from(field: &FieldDescriptor) -> Self {
        let declared = field.metadata().help.as_deref();
        let env = field.env_default();
        Self {
            name: field.name().to_owned(),
            type_name: field.type_name().to_owned(),
            flags: field.flags(),
            required: field.is_required(),
            switch: field.is_switch(),
            static_default: field.has_static_default(),
            help: env.map_or_else(
                || declared.unwrap_or_default().to_owned(),
                |source| help_with_env(declared, source.var()),
            ),
            env: env.map(|source| EnvDoc {
                var: source.var().to_owned(),
                fallback: source.fallback().map(ToOwned::to_owned),
            }),
        }
    }
}

impl Schema {
    /// Flattens the schema into a serializable [`SchemaDoc`].
    #[must_use]
    pub fn describe(&self) -> SchemaDoc {
        SchemaDoc {
            version: SCHEMA_DOC_VERSION.to_owned(),
            name: self.name().to_owned(),
            about: self.about_text().map(ToOwned::to_owned),
            fields: self.fields().iter().map(FieldDoc::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::value_parser;
    use serde_json::json;

    use crate::env::EnvDefault;
    use crate::schema::{FieldDefault, FieldDescriptor, Schema};

    #[test]
    fn describes_fields_in_order_with_env_hints() {
        let schema = Schema::new("demo")
            .field(FieldDescriptor::new("int_val", "i32", value_parser!(i32)).short('i'))
            .field(
                FieldDescriptor::new("string_val", "String", value_parser!(String))
                    .help("A string")
                    .default_from(FieldDefault::env(
                        EnvDefault::new("STRING_FOR_TEST_CLI").with_fallback("x"),
                    )),
            );
        let doc = serde_json::to_value(schema.describe()).unwrap_or_default();
        assert_eq!(
            doc,
            json!({
                "version": "1.0",
                "name": "demo",
                "about": null,
                "fields": [
                    {
                        "name": "int_val",
                        "type_name": "i32",
                        "flags": ["-i", "--int-val"],
                        "required": true,
                        "switch": false,
                        "static_default": false,
                        "help": "",
                        "env": null
                    },
                    {
                        "name": "string_val",
                        "type_name": "String",
                        "flags": ["--string-val"],
                        "required": false,
                        "switch": false,
                        "static_default": false,
                        "help": "A string, environment variable: STRING_FOR_TEST_CLI",
                        "env": { "var": "STRING_FOR_TEST_CLI", "fallback": "x" }
                    }
                ]
            })
        );
    }
}
