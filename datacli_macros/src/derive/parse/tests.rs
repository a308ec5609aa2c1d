//! Tests for `#[datacli(...)]` parsing behaviour.

use anyhow::{Result, anyhow, ensure};
use quote::ToTokens;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::{is_bool, option_inner, parse_input};

#[test]
fn parses_struct_and_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[datacli(name = "demo", about = "Demo command", crate = "alias")]
        struct Demo {
            #[datacli(cli_long = "opt", cli_short = 'o', default = 5)]
            field1: Option<u32>,
            #[datacli(env = "DEMO_TOKEN", env_fallback = "anon", help = "Token")]
            token: String,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;

    ensure!(parsed.ident == "Demo", "expected Demo ident");
    ensure!(parsed.command_name() == "demo", "command name not parsed");
    ensure!(
        parsed.struct_attrs.about.as_deref() == Some("Demo command"),
        "about not parsed"
    );
    ensure!(parsed.struct_attrs.crate_path.is_some(), "crate not parsed");

    let [first, second] = parsed.field_attrs.as_slice() else {
        return Err(anyhow!("expected two field attribute sets"));
    };
    ensure!(first.cli_long.as_deref() == Some("opt"), "cli_long not parsed");
    ensure!(first.cli_short == Some('o'), "cli_short not parsed");
    ensure!(
        first.default.as_ref().map(|e| e.to_token_stream().to_string()) == Some("5".to_owned()),
        "default not parsed"
    );
    ensure!(
        second.env.as_ref().map(syn::LitStr::value).as_deref() == Some("DEMO_TOKEN"),
        "env not parsed"
    );
    ensure!(
        second.env_fallback.as_ref().map(syn::LitStr::value).as_deref() == Some("anon"),
        "env_fallback not parsed"
    );
    ensure!(second.help.as_deref() == Some("Token"), "help not parsed");
    Ok(())
}

#[test]
fn doc_comments_supply_help_and_about() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        /// Greets people.
        ///
        /// Longer description that stays out of the summary.
        struct Greeter {
            /// Name of the person
            /// to greet.
            name: String,
            /// Ignored doc.
            #[datacli(help = "Explicit")]
            loud: bool,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(
        parsed.struct_attrs.about.as_deref() == Some("Greets people."),
        "about should come from the first doc paragraph"
    );
    let helps: Vec<_> = parsed
        .field_attrs
        .iter()
        .map(|attrs| attrs.help.as_deref())
        .collect();
    ensure!(
        helps == [Some("Name of the person to greet."), Some("Explicit")],
        "unexpected help: {helps:?}"
    );
    Ok(())
}

#[test]
fn command_name_defaults_to_kebab_case() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct ServerArgs {}
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!(err))?;
    ensure!(parsed.command_name() == "server-args", "unexpected name");
    Ok(())
}

#[rstest]
#[case::unknown_key(
    parse_quote! { struct Demo { #[datacli(cli_lng = "x")] a: u8 } },
    "unknown datacli attribute `cli_lng`"
)]
#[case::fallback_without_env(
    parse_quote! { struct Demo { #[datacli(env_fallback = "x")] a: u8 } },
    "`env_fallback` requires `env`"
)]
#[case::empty_env(
    parse_quote! { struct Demo { #[datacli(env = "")] a: u8 } },
    "`env` must name a variable"
)]
#[case::env_with_equals(
    parse_quote! { struct Demo { #[datacli(env = "A=B")] a: u8 } },
    "invalid `env` 'A=B': must not contain '=' or NUL"
)]
#[case::duplicate_key(
    parse_quote! { struct Demo { #[datacli(cli_short = 'a', cli_short = 'b')] a: u8 } },
    "duplicate `cli_short` attribute"
)]
#[case::wrong_literal(
    parse_quote! { struct Demo { #[datacli(cli_short = "a")] a: u8 } },
    "cli_short must be a character"
)]
#[case::tuple_struct(parse_quote! { struct Demo(u8); }, "DataCli requires named fields")]
#[case::enumeration(
    parse_quote! { enum Demo { A } },
    "DataCli can only be derived for structs"
)]
#[case::unknown_struct_key(
    parse_quote! { #[datacli(prefix = "APP_")] struct Demo {} },
    "unknown datacli attribute `prefix`"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] expected: &str) -> Result<()> {
    let Err(err) = parse_input(&input) else {
        return Err(anyhow!("expected parse failure"));
    };
    ensure!(
        err.to_string() == expected,
        "unexpected error: {err}, wanted {expected}"
    );
    Ok(())
}

#[rstest]
#[case::plain(parse_quote!(Option<u32>), Some("u32"))]
#[case::qualified(parse_quote!(std::option::Option<String>), Some("String"))]
#[case::not_option(parse_quote!(Vec<u32>), None)]
fn option_inner_is_shallow(#[case] ty: syn::Type, #[case] expected: Option<&str>) {
    let inner = option_inner(&ty).map(|inner| inner.to_token_stream().to_string());
    assert_eq!(inner.as_deref(), expected);
}

#[rstest]
#[case::bool(parse_quote!(bool), true)]
#[case::optional_bool(parse_quote!(Option<bool>), false)]
#[case::other(parse_quote!(u8), false)]
fn detects_bool_switches(#[case] ty: syn::Type, #[case] expected: bool) {
    assert_eq!(is_bool(&ty), expected);
}
