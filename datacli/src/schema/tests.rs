//! Unit tests for field descriptors.

use clap::value_parser;
use rstest::rstest;

use super::{FieldDefault, FieldDescriptor, Schema};
use crate::env::EnvDefault;

fn string_field(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, "alloc::string::String", value_parser!(String))
}

#[rstest]
#[case::derived("string_val", None, None, &["--string-val"])]
#[case::short_first("string_val", Some('s'), None, &["-s", "--string-val"])]
#[case::long_override("string_val", None, Some("text"), &["--text"])]
#[case::both("string_val", Some('s'), Some("text"), &["-s", "--text"])]
fn derives_flag_names(
    #[case] name: &str,
    #[case] short: Option<char>,
    #[case] long: Option<&str>,
    #[case] expected: &[&str],
) {
    let mut field = string_field(name);
    if let Some(short) = short {
        field = field.short(short);
    }
    if let Some(long) = long {
        field = field.long(long);
    }
    assert_eq!(field.flags(), expected);
}

#[rstest]
#[case::no_default(FieldDefault::None, true, false)]
#[case::static_default(FieldDefault::Static, false, true)]
#[case::env_only(FieldDefault::env(EnvDefault::new("VAR")), false, false)]
#[case::env_with_static(
    FieldDefault::Env { source: EnvDefault::new("VAR"), static_fallback: true },
    false,
    true
)]
fn required_iff_no_static_and_no_env(
    #[case] default: FieldDefault,
    #[case] required: bool,
    #[case] has_static: bool,
) {
    let field = string_field("value").default_from(default);
    assert_eq!(field.is_required(), required);
    assert_eq!(field.has_static_default(), has_static);
}

#[test]
fn env_default_is_recoverable_without_resolving() {
    let field = string_field("token")
        .default_from(FieldDefault::env(EnvDefault::new("TOKEN").with_fallback("x")));
    let env = field.env_default().map(|source| (source.var(), source.fallback()));
    assert_eq!(env, Some(("TOKEN", Some("x"))));
    assert!(string_field("plain").env_default().is_none());
}

#[test]
fn schema_preserves_declaration_order() {
    let schema = Schema::new("demo")
        .about("Demo command")
        .field(string_field("zeta"))
        .field(string_field("alpha"))
        .field(string_field("mid"));
    let names: Vec<_> = schema.fields().iter().map(FieldDescriptor::name).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
    assert_eq!(schema.about_text(), Some("Demo command"));
    assert!(schema.field_named("alpha").is_some());
    assert!(schema.field_named("missing").is_none());
}
