use clap::Parser;
use std::fs;

use super::args::CliArgs;
use super::config::{CONFIG_FILE_NAME, find_config, load_options, parse_options, resolve_options};

fn args(argv: &[&str]) -> CliArgs {
    let mut full = vec!["replscope"];
    full.extend_from_slice(argv);
    CliArgs::try_parse_from(full).expect("args should parse")
}

#[test]
fn parses_camel_case_options() {
    let options = parse_options(
        r#"{ "globalBinding": "g", "scopeBinding": "s", "moduleBinding": "m", "indentWidth": 2 }"#,
    )
    .expect("options should parse");

    assert_eq!(options.global_binding, "g");
    assert_eq!(options.scope_binding, "s");
    assert_eq!(options.module_binding, "m");
    assert_eq!(options.indent_width, 2);
    assert!(options.hoist_functions, "unset fields keep their defaults");
}

#[test]
fn parses_boolean_strings() {
    let options = parse_options(r#"{ "hoistFunctions": "false" }"#).expect("string bool");
    assert!(!options.hoist_functions);

    let err = parse_options(r#"{ "hoistFunctions": "maybe" }"#).expect_err("invalid bool");
    assert!(format!("{err:#}").contains("invalid boolean value"));
}

#[test]
fn load_reports_path_on_error() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write config");

    let err = load_options(&path).expect_err("broken config");
    assert!(format!("{err:#}").contains("broken.json"));
}

#[test]
fn finds_config_in_working_directory() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    assert!(find_config(&args(&[]), temp.path()).is_none());

    fs::write(temp.path().join(CONFIG_FILE_NAME), "{}").expect("write config");
    assert_eq!(
        find_config(&args(&[]), temp.path()),
        Some(temp.path().join(CONFIG_FILE_NAME))
    );
    assert_eq!(
        find_config(&args(&["--config", "other.json"]), temp.path()),
        Some(temp.path().join("other.json"))
    );
}

#[test]
fn cli_overrides_config_file() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        r#"{ "globalBinding": "fromFile", "scopeBinding": "scopeFromFile" }"#,
    )
    .expect("write config");

    let options = resolve_options(&args(&["--global", "g", "--no-hoist-functions"]), temp.path())
        .expect("options resolve");
    assert_eq!(options.global_binding, "g");
    assert_eq!(options.scope_binding, "scopeFromFile");
    assert!(!options.hoist_functions);
}

#[test]
fn rejects_invalid_binding_names() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let err = resolve_options(&args(&["--module", "not valid"]), temp.path())
        .expect_err("invalid name");
    assert!(format!("{err:#}").contains("moduleBinding"));
}
