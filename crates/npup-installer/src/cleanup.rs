use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use npup_core::LAUNCHER_NAMES;

use crate::layout::DistLayout;
use crate::types::UninstallStatus;

pub fn clean_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to inspect {}", path.display()))
        }
    };

    let removal = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match removal {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
    }
}

pub fn clean_previous_install(layout: &DistLayout) -> Result<()> {
    clean_path(&layout.package_dir())?;
    for name in LAUNCHER_NAMES {
        clean_path(&layout.launcher_path(name))?;
    }
    Ok(())
}

pub fn uninstall_distribution(layout: &DistLayout) -> Result<UninstallStatus> {
    let installed = layout.package_dir().exists()
        || LAUNCHER_NAMES
            .iter()
            .any(|name| layout.launcher_path(name).exists());
    if !installed {
        return Ok(UninstallStatus::NotInstalled);
    }
    clean_previous_install(layout)?;
    Ok(UninstallStatus::Uninstalled)
}
