use std::fs::{self, File};
use std::io;

use anyhow::{Context, Result};
use npup_core::LAUNCHER_NAMES;

use crate::layout::DistLayout;

pub fn promote_extracted_root(layout: &DistLayout, extracted_root: &str) -> Result<()> {
    let source = layout.extracted_dir(extracted_root);
    let package_dir = layout.package_dir();
    fs::rename(&source, &package_dir).with_context(|| {
        format!(
            "failed to move {} to {}",
            source.display(),
            package_dir.display()
        )
    })?;

    for name in LAUNCHER_NAMES {
        copy_launcher(layout, name)?;
    }
    Ok(())
}

fn copy_launcher(layout: &DistLayout, name: &str) -> Result<()> {
    let source_path = layout.package_bin_dir().join(name);
    let destination = layout.launcher_path(name);

    let mut source = File::open(&source_path)
        .with_context(|| format!("failed to open launcher source: {}", source_path.display()))?;
    let mut out = File::create(&destination)
        .with_context(|| format!("failed to create launcher: {}", destination.display()))?;
    io::copy(&mut source, &mut out)
        .with_context(|| format!("failed to copy launcher '{name}' to {}", destination.display()))?;
    out.sync_all()
        .with_context(|| format!("failed to sync launcher: {}", destination.display()))?;

    #[cfg(unix)]
    {
        let metadata = source
            .metadata()
            .with_context(|| format!("failed to read metadata of {}", source_path.display()))?;
        fs::set_permissions(&destination, metadata.permissions())
            .with_context(|| format!("failed to set permissions on {}", destination.display()))?;
    }

    Ok(())
}
