use std::path::PathBuf;
use tempfile::TempDir;

/// Helper struct for managing test resources
pub struct TestContext {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with a temporary directory
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::new()?;
        Ok(TestContext { temp_dir })
    }

    /// Get the path to the temporary directory
    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a temporary file with given content
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let file_path = self.temp_path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new().expect("Failed to create test context")
    }
}

/// Get the ttir-sync command
#[allow(deprecated)]
pub fn cmd() -> assert_cmd::Command {
    let mut cmd =
        assert_cmd::Command::cargo_bin("ttir-sync").expect("Failed to find ttir-sync binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Path of a fixture dump, relative to the crate root
pub fn fixture(name: &str) -> String {
    format!("tests/fixtures/ttir/{}.ttir", name)
}

/// Parse stdout of a `--format json` invocation
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("Invalid UTF-8 in stdout");
    serde_json::from_str(&stdout).expect("stdout is not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = TestContext::new().expect("Failed to create test context");
        assert!(ctx.temp_path().exists());
    }

    #[test]
    fn test_fixture_paths_exist() {
        assert!(PathBuf::from(fixture("add_kernel")).exists());
        assert!(PathBuf::from(fixture("no_anchor")).exists());
    }
}
