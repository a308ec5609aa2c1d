//! Tests that read environment defaults from the real process environment.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface parsing mistakes"
)]

use datacli::{DataCli, DatacliError, try_datacli};
use rstest::rstest;
use serial_test::serial;
use test_helpers::env;

#[derive(Debug, DataCli, PartialEq, Eq)]
struct EnvBacked {
    int_val: i32,
    #[datacli(env = "STRING_FOR_TEST_CLI")]
    string_val: String,
}

/// Both variables back optional fields, so neither can fail validation.
#[derive(Debug, DataCli, PartialEq, Eq)]
struct Layered {
    #[datacli(env = "DATACLI_TEST_RETRIES", default = 3)]
    retries: u8,
    #[datacli(env = "DATACLI_TEST_LABEL")]
    label: Option<String>,
}

#[test]
#[serial]
fn unset_variable_reports_configuration_error() {
    let _scope = env::scope([("STRING_FOR_TEST_CLI", None)]);
    let err = try_datacli::<EnvBacked, _, _>(["--int-val", "10"]).expect_err("variable unset");
    match err {
        DatacliError::Configuration { field, env_var, .. } => {
            assert_eq!(field, "string_val");
            assert_eq!(env_var, "STRING_FOR_TEST_CLI");
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
#[serial]
fn set_variable_supplies_the_value() {
    let _scope = env::scope([("STRING_FOR_TEST_CLI", Some("abcd"))]);
    let parsed = try_datacli::<EnvBacked, _, _>(["--int-val", "10"]).expect("env value");
    assert_eq!(
        parsed,
        EnvBacked {
            int_val: 10,
            string_val: String::from("abcd"),
        }
    );
}

#[test]
#[serial]
fn command_line_overrides_the_variable() {
    let _scope = env::scope([("STRING_FOR_TEST_CLI", Some("abcd"))]);
    let parsed = EnvBacked::parse_from(["--int-val", "10", "--string-val", "cli"])
        .expect("cli value");
    assert_eq!(parsed.string_val, "cli");
}

#[rstest]
#[case::static_default(None, None, 3, None)]
#[case::from_env(Some("7"), Some("nightly"), 7, Some("nightly"))]
#[serial]
fn static_default_is_the_last_fallback(
    #[case] retries: Option<&str>,
    #[case] label: Option<&str>,
    #[case] expected_retries: u8,
    #[case] expected_label: Option<&str>,
) {
    let _scope = env::scope([
        ("DATACLI_TEST_RETRIES", retries),
        ("DATACLI_TEST_LABEL", label),
    ]);
    let parsed = try_datacli::<Layered, _, _>(Vec::<String>::new()).expect("layered parse");
    assert_eq!(parsed.retries, expected_retries);
    assert_eq!(parsed.label.as_deref(), expected_label);
}

#[test]
#[serial]
fn invalid_variable_value_is_a_usage_error() {
    let _scope = env::scope([("DATACLI_TEST_RETRIES", Some("many"))]);
    let err = try_datacli::<Layered, _, _>(Vec::<String>::new()).expect_err("bad env value");
    assert!(err.is_usage(), "{err}");
}

#[test]
#[serial]
fn help_shows_the_variable_whether_or_not_it_is_set() {
    let _scope = env::scope([("STRING_FOR_TEST_CLI", None)]);
    let help = EnvBacked::command().render_help().to_string();
    assert!(
        help.contains("environment variable: STRING_FOR_TEST_CLI"),
        "{help}"
    );
}
