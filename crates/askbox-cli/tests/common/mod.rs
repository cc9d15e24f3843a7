use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// An isolated home for one test: its own session file and server URL.
pub struct Sandbox {
    dir: TempDir,
    api_url: String,
}

impl Sandbox {
    pub fn new(api_url: &str) -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            api_url: api_url.to_string(),
        }
    }

    pub fn session_file(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    pub fn home(&self) -> &Path {
        self.dir.path()
    }

    /// Run the CLI binary with arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_askbox"));
        cmd.args(args);
        cmd.env("HOME", self.home());
        cmd.env("XDG_DATA_HOME", self.home().join("data"));
        cmd.env("ASKBOX_SESSION_FILE", self.session_file());
        cmd.env("ASKBOX_API_URL", &self.api_url);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("ASKBOX_PASSWORD");
        cmd.env_remove("RUST_LOG");
        cmd.output().expect("Failed to execute CLI")
    }

    /// Run the CLI and expect success, returning stdout.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the CLI and expect failure, returning stderr.
    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            panic!("CLI command unexpectedly succeeded: {:?}\nstdout: {}", args, stdout);
        }
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
