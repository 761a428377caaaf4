//! Tests for `berth resolve`.

use crate::support::*;

#[test]
fn test_resolve_default_target() {
    let t = Test::with_vars(GOERLI_ENV);

    let output = t.resolve("goerli");
    assert_success(&output);
    assert_stdout_contains(&output, "goerli resolved");
    assert_stdout_contains(&output, GOERLI_URL);
    assert_stdout_contains(&output, "6 hex digits from PRIVAT_KEY");
    assert_stdout_contains(&output, "0.8.4");
    assert_not_leaked(&output, SHORT_KEY);
}

#[test]
fn test_resolve_json() {
    let t = Test::with_vars(&[("GOERLI_URL", GOERLI_URL), ("PRIVAT_KEY", FULL_KEY)]);

    let output = t.resolve_json("goerli");
    assert_success(&output);
    assert_not_leaked(&output, FULL_KEY);

    let json = stdout_json(&output);
    assert_eq!(json["target"], "goerli");
    assert_eq!(json["endpoint_url"], GOERLI_URL);
    assert_eq!(json["credential_env"], "PRIVAT_KEY");
    assert_eq!(json["credential_digits"], 64);
    assert_eq!(json["compiler"], "0.8.4");
}

#[test]
fn test_resolve_from_env_file() {
    let t = Test::new();
    t.write_env(&format!("GOERLI_URL={}\nPRIVAT_KEY=\"{}\"\n", GOERLI_URL, SHORT_KEY));

    let output = t.resolve("goerli");
    assert_success(&output);
    assert_stdout_contains(&output, GOERLI_URL);
}

#[test]
fn test_process_env_overrides_env_file() {
    let t = Test::with_vars(&[("GOERLI_URL", "https://process.example")]);
    t.write_env(&format!("GOERLI_URL={}\nPRIVAT_KEY={}\n", GOERLI_URL, SHORT_KEY));

    let output = t.resolve_json("goerli");
    assert_success(&output);
    assert_eq!(stdout_json(&output)["endpoint_url"], "https://process.example");
}

#[test]
fn test_no_env_file_flag() {
    let t = Test::new();
    t.write_env(&format!("GOERLI_URL={}\nPRIVAT_KEY={}\n", GOERLI_URL, SHORT_KEY));

    let output = t.run(&["--no-env-file", "resolve", "goerli"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "GOERLI_URL");
}

#[test]
fn test_explicit_env_file() {
    let t = Test::new();
    t.write_file(
        "deploy.env",
        &format!("GOERLI_URL={}\nPRIVAT_KEY={}\n", GOERLI_URL, SHORT_KEY),
    );

    let output = t.run(&["--env-file", "deploy.env", "resolve", "goerli"]);
    assert_success(&output);

    let output = t.run(&["--env-file", "missing.env", "resolve", "goerli"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing.env");
}

#[test]
fn test_resolve_configured_target() {
    let t = Test::with_vars(&[
        ("SEPOLIA_URL", "https://sepolia.example"),
        ("SEPOLIA_KEY", "0xABCDEF"),
    ]);
    t.write_config(TWO_TARGETS);

    let output = t.resolve_json("sepolia");
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["endpoint_url"], "https://sepolia.example");
    assert_eq!(json["credential_digits"], 6);
    assert_eq!(json["compiler"], "0.8.19");
}

#[test]
fn test_resolve_unknown_target() {
    let t = Test::with_vars(GOERLI_ENV);

    let output = t.resolve("mainnet");
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown target: mainnet");
    assert_stderr_contains(&output, "berth targets");
}

#[test]
fn test_resolve_missing_credential() {
    let t = Test::with_vars(&[("GOERLI_URL", GOERLI_URL)]);

    let output = t.resolve("goerli");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required environment variable: PRIVAT_KEY");
    assert_stderr_contains(&output, "set PRIVAT_KEY");
}

#[test]
fn test_resolve_both_missing_names_endpoint() {
    let t = Test::new();

    let output = t.resolve("goerli");
    assert_failure(&output);
    assert_stderr_contains(&output, "GOERLI_URL");
}

#[test]
fn test_resolve_invalid_endpoint() {
    let t = Test::with_vars(&[("GOERLI_URL", "not-a-url"), ("PRIVAT_KEY", SHORT_KEY)]);

    let output = t.resolve("goerli");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid endpoint url: not-a-url");
}

#[test]
fn test_resolve_invalid_credential_not_leaked() {
    let t = Test::with_vars(&[("GOERLI_URL", GOERLI_URL), ("PRIVAT_KEY", LEAKY_KEY)]);

    let output = t.run(&["--verbose", "resolve", "goerli"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid credential in PRIVAT_KEY");
    assert_not_leaked(&output, LEAKY_KEY);
}
