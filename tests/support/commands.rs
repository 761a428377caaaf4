//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a berth command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - a cleared environment, keeping only PATH (and SYSTEMROOT on Windows)
    /// - NO_COLOR so output is plain text
    /// - the test's own variables
    /// - current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("berth").expect("failed to find berth binary");
        cmd.env_clear();
        for key in ["PATH", "SYSTEMROOT"] {
            if let Ok(value) = std::env::var(key) {
                cmd.env(key, value);
            }
        }
        cmd.env("NO_COLOR", "1");
        for (k, v) in &self.vars {
            cmd.env(k, v);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run berth with arguments and capture output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd().args(args).output().expect("failed to run berth")
    }

    /// Shortcut for `berth resolve <target>`.
    pub fn resolve(&self, target: &str) -> Output {
        self.run(&["resolve", target])
    }

    /// Shortcut for `berth resolve <target> --json`.
    pub fn resolve_json(&self, target: &str) -> Output {
        self.run(&["resolve", target, "--json"])
    }

    /// Shortcut for `berth targets`.
    pub fn targets(&self) -> Output {
        self.run(&["targets"])
    }

    /// Shortcut for `berth check`.
    pub fn check(&self) -> Output {
        self.run(&["check"])
    }
}
