//! Tests for `berth targets` and `berth compiler`.

use crate::support::*;

#[test]
fn test_default_targets() {
    let t = Test::new();

    let output = t.targets();
    assert_success(&output);
    assert_stdout_contains(&output, "1 target");
    assert_stdout_contains(&output, "goerli");
    assert_stdout_contains(&output, "GOERLI_URL / PRIVAT_KEY");
}

#[test]
fn test_targets_json() {
    let t = Test::new();
    t.write_config(TWO_TARGETS);

    let output = t.run(&["targets", "--json"]);
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["count"], 2);
    assert_eq!(json["targets"][0]["name"], "goerli");
    assert_eq!(json["targets"][1]["name"], "sepolia");
    assert_eq!(json["targets"][1]["credential_env"], "SEPOLIA_KEY");
}

#[test]
fn test_targets_needs_no_environment() {
    // Listing works even when no variable is set
    let t = Test::new();
    assert_success(&t.targets());
}

#[test]
fn test_compiler_default() {
    let t = Test::new();

    let output = t.run(&["compiler"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "0.8.4");
}

#[test]
fn test_compiler_from_config() {
    let t = Test::new();
    t.write_config(TWO_TARGETS);

    let output = t.run(&["compiler"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "0.8.19");
}

#[test]
fn test_explicit_config_path() {
    let t = Test::new();
    t.write_file("deploy.toml", "[compiler]\nversion = \"0.7.6\"\n");

    let output = t.run(&["--config", "deploy.toml", "compiler"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "0.7.6");
}
