use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use npup_core::{archive_file_name, MODULES_DIR_NAME, PACKAGE_BIN_DIR_NAME, PACKAGE_DIR_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistLayout {
    root: PathBuf,
}

impl DistLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIR_NAME)
    }

    pub fn package_dir(&self) -> PathBuf {
        self.modules_dir().join(PACKAGE_DIR_NAME)
    }

    pub fn package_bin_dir(&self) -> PathBuf {
        self.package_dir().join(PACKAGE_BIN_DIR_NAME)
    }

    pub fn extracted_dir(&self, name: &str) -> PathBuf {
        self.modules_dir().join(name)
    }

    pub fn launcher_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn archive_path(&self, version_label: &str) -> PathBuf {
        self.root.join(archive_file_name(version_label))
    }

    pub fn ensure_modules_dir(&self) -> Result<()> {
        let modules = self.modules_dir();
        fs::create_dir_all(&modules)
            .with_context(|| format!("failed to create directory: {}", modules.display()))?;
        Ok(())
    }
}
