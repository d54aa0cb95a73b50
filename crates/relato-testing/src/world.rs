//! TestWorld pattern for declarative integration test setup.
//!
//! Provides:
//! - An isolated data directory per test
//! - SDK clients opened on that directory
//! - Draft and image files placed next to it
//! - CLI execution with `--data-dir` already set

use anyhow::Result;
use assert_cmd::Command;
use relato_sdk::Client;
use relato_types::CurrentUser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SAMPLE_JPEG;

pub const TEST_PASSWORD: &str = "segredo123";

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use relato_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.run(&["auth", "signup", "ana@example.com", "--password", "segredo123"]).unwrap();
/// let result = world.run(&["feed", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    json: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".relato");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            json: false,
        }
    }

    /// Run CLI commands with `--format json`.
    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Get the data directory path (.relato).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Open an SDK client on this world's data directory.
    ///
    /// Each call opens a fresh client, the way a new CLI invocation would.
    pub fn get_client(&self) -> Result<Client> {
        Ok(Client::connect(self.data_dir.clone())?)
    }

    /// Register a user through the SDK; the session stays signed in.
    pub fn sign_up(&self, email: &str, name: &str) -> Result<CurrentUser> {
        let client = self.get_client()?;
        Ok(client.auth().sign_up(email, TEST_PASSWORD, name)?)
    }

    /// Write a draft file under the temp root and return its path.
    pub fn write_draft(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write the sample JPEG under the temp root and return its path.
    pub fn write_image(&self, name: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, SAMPLE_JPEG)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(if self.json { "json" } else { "plain" });

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RELATO_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `relato` binary in this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("relato")
            .map_err(|e| anyhow::anyhow!("Failed to find relato binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
