// tests/common/temp.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::Builder::new().prefix("cloc_runner_test").tempdir().expect("tempdir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| panic!("Failed to create {parent:?}: {e}"));
        }
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
        path
    }

    /// Drop an empty marker file the fake tool reacts to.
    pub fn mark(&self, marker: &str) {
        self.create_file(marker, "");
    }
}
