use std::fs;
use std::path::{Path, PathBuf};

use squadsolver::domain::PlayerRecord;
use squadsolver::testkit::config::scenario_toml;
use squadsolver::testkit::dataset::to_history_csv;
use tempfile::TempDir;

/// A temporary directory holding a history CSV and a config pointing at it.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Workspace with `records` written as history and the scenario config.
    pub fn with_history(records: &[PlayerRecord]) -> Self {
        let workspace = Self::new();
        workspace.write("history.csv", &to_history_csv(records));
        let config = scenario_toml(&workspace.path("history.csv"));
        workspace.write("config.toml", &config);
        workspace
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write workspace file");
        path
    }
}
