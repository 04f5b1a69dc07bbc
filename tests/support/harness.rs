use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables that would leak the host CI context into a test run.
const HOST_ENV: &[&str] = &[
    "INPUT_PR-BODY",
    "INPUT_PR_BODY",
    "GITHUB_EVENT_PATH",
    "PRGATE_LOG",
    "PRGATE_QUIET",
];

/// TestHarness provides an isolated working directory for running the prgate binary.
/// Each harness creates a temporary directory that is removed on drop.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub prgate_binary: PathBuf,
}

impl TestHarness {
    /// Creates a new test harness with no project config.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".prgate/config.md");

        TestHarness {
            dir: temp_dir,
            config_path,
            prgate_binary: PathBuf::from(env!("CARGO_BIN_EXE_prgate")),
        }
    }

    /// Creates a test harness with a project config at `.prgate/config.md`.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        fs::create_dir_all(harness.config_path.parent().unwrap())
            .expect("Failed to create config dir");
        fs::write(&harness.config_path, config_content).expect("Failed to write custom config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the harness directory and returns its path.
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Builds a prgate command in the harness directory with host CI variables removed.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.prgate_binary);
        cmd.args(args).current_dir(self.path());
        for var in HOST_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Executes the prgate binary with the given arguments in the harness directory.
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to run prgate")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
