use aoa_post::{AoaPlugin, CaseConfigBuilder};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A plugin working inside its own temporary solver directory.
pub struct TestCase {
    pub plugin: AoaPlugin,
    dir: TempDir,
}

impl TestCase {
    pub fn angle_path(&self) -> PathBuf {
        self.dir.path().join("aoa.txt")
    }

    pub fn results_path(&self) -> PathBuf {
        self.dir.path().join("aoa_results.txt")
    }

    pub fn write_angle(&self, contents: &str) {
        let path = self.angle_path();
        fs::write(&path, contents).expect("write angle file");
    }

    pub fn remove_angle(&self) {
        let path = self.angle_path();
        fs::remove_file(&path).expect("remove angle file");
    }
}

pub struct TestCaseBuilder {
    config: CaseConfigBuilder,
}

impl TestCaseBuilder {
    pub fn new() -> Self {
        Self {
            config: CaseConfigBuilder::new(),
        }
    }

    pub fn with_config(mut self, f: impl FnOnce(CaseConfigBuilder) -> CaseConfigBuilder) -> Self {
        self.config = f(self.config);
        self
    }

    pub fn build(self) -> TestCase {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = self
            .config
            .angle_file(dir.path().join("aoa.txt"))
            .results_file(dir.path().join("aoa_results.txt"))
            .build()
            .expect("test config should be valid");
        TestCase {
            plugin: AoaPlugin::new(config),
            dir,
        }
    }
}
