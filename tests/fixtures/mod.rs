//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use folio::config::CONFIG_PATH_ENV;
use folio::models::SiteContent;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the folio binary.
pub fn folio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_folio")
}

/// A scratch directory with its own config file location.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    /// Runs folio with the config file isolated to this workspace.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(folio_bin())
            .env(CONFIG_PATH_ENV, self.config_path())
            .env("RUST_LOG", "warn")
            .current_dir(self.path())
            .args(args)
            .output()
            .expect("Failed to execute folio")
    }

    /// Writes `content` as TOML and returns its path.
    pub fn write_content(&self, name: &str, content: &SiteContent) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content.to_toml().expect("content serializes"))
            .expect("Failed to write content");
        path
    }

    /// Creates a media directory holding the hero clip and portrait.
    pub fn media_dir(&self) -> PathBuf {
        let media = self.path().join("media");
        fs::create_dir_all(&media).expect("Failed to create media dir");
        fs::write(media.join("MANYA.gif"), b"GIF89a").expect("write gif");
        fs::write(media.join("me.svg"), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>")
            .expect("write svg");
        media
    }
}

/// Built-in content with a different owner, for telling pages apart.
pub fn renamed_content(name: &str) -> SiteContent {
    let mut content = SiteContent::builtin().expect("built-in content parses");
    content.owner.name = name.to_string();
    content
}

/// Asserts the process exited with `code`, printing stderr otherwise.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit status. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Should parse JSON output")
}
