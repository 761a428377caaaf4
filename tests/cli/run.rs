//! Tests for `berth run`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_injects_target() {
    let t = Test::with_vars(GOERLI_ENV);

    let output = t.run(&[
        "run",
        "goerli",
        "--",
        "sh",
        "-c",
        "echo \"$BERTH_NETWORK|$BERTH_RPC_URL|$BERTH_PRIVATE_KEY|$BERTH_COMPILER_VERSION\"",
    ]);
    assert_success(&output);
    assert_eq!(
        stdout(&output).trim(),
        format!("goerli|{}|0x{}|0.8.4", GOERLI_URL, SHORT_KEY)
    );
}

#[cfg(unix)]
#[test]
fn test_run_propagates_exit_code() {
    let t = Test::with_vars(GOERLI_ENV);

    let output = t.run(&["run", "goerli", "--", "sh", "-c", "exit 7"]);
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn test_run_does_not_spawn_on_failure() {
    let t = Test::new();
    let marker = t.dir.path().join("spawned");

    let output = t.run(&[
        "run",
        "goerli",
        "--",
        "touch",
        marker.to_str().unwrap(),
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "GOERLI_URL");
    assert!(!marker.exists(), "driver must not start without a target");
}

#[test]
fn test_run_requires_command() {
    let t = Test::with_vars(GOERLI_ENV);

    let output = t.run(&["run", "goerli"]);
    assert_failure(&output);
}
