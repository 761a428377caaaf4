//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();
    assert_failure(&t.run(&["unknown-command"]));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "berth");
}

#[test]
fn test_malformed_config() {
    let t = Test::new();
    t.write_config("this is not valid toml { [ }");

    let output = t.targets();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse");
}

#[test]
fn test_invalid_descriptor_hint() {
    let t = Test::new();
    t.write_config("[networks.goerli]\nendpoint_env = \"GOERLI URL\"\ncredential_env = \"PRIVAT_KEY\"\n");

    let output = t.targets();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid target descriptor 'goerli'");
    assert_stderr_contains(&output, "check berth.toml");
}

#[test]
fn test_bad_compiler_version() {
    let t = Test::new();
    t.write_config("[compiler]\nversion = \"latest\"\n");

    let output = t.run(&["compiler"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "latest");
}

#[test]
fn test_env_file_conflicts_with_no_env_file() {
    let t = Test::new();
    assert_failure(&t.run(&["--env-file", ".env", "--no-env-file", "targets"]));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "berth");
}
