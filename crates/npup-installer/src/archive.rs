use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use zip::ZipArchive;

pub fn extract_archive(archive_path: &Path, destination_dir: &Path) -> Result<String> {
    let file = File::open(archive_path)
        .with_context(|| format!("failed to open archive: {}", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("failed to read archive: {}", archive_path.display()))?;

    let root_name = validate_single_root(&archive, archive_path)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).with_context(|| {
            format!(
                "failed to read entry {index} of archive: {}",
                archive_path.display()
            )
        })?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(anyhow!("archive entry has an unsafe path: {}", entry.name()));
        };

        let out_path = destination_dir.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .with_context(|| format!("failed to create directory: {}", out_path.display()))?;
            #[cfg(unix)]
            apply_unix_mode(&out_path, entry.unix_mode())?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        let mut out_file = File::create(&out_path)
            .with_context(|| format!("failed to create file: {}", out_path.display()))?;
        io::copy(&mut entry, &mut out_file).with_context(|| {
            format!(
                "failed to write entry '{}' to {}",
                entry.name(),
                out_path.display()
            )
        })?;

        #[cfg(unix)]
        apply_unix_mode(&out_path, entry.unix_mode())?;
    }

    Ok(root_name)
}

#[cfg(unix)]
fn apply_unix_mode(path: &Path, mode: Option<u32>) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let Some(mode) = mode else {
        return Ok(());
    };
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .with_context(|| format!("failed to set permissions on {}", path.display()))
}

fn validate_single_root<R: io::Read + io::Seek>(
    archive: &ZipArchive<R>,
    archive_path: &Path,
) -> Result<String> {
    let mut top_level = BTreeSet::new();
    let mut directories = BTreeSet::new();
    for name in archive.file_names() {
        let trimmed = name.strip_suffix('/').unwrap_or(name);
        if trimmed.is_empty() {
            return Err(anyhow!(
                "archive entry has an empty path: {}",
                archive_path.display()
            ));
        }
        if trimmed
            .split('/')
            .any(|part| part.is_empty() || part == "." || part == "..")
        {
            return Err(anyhow!(
                "archive entry has an unsafe path '{name}': {}",
                archive_path.display()
            ));
        }
        let mut parts = trimmed.splitn(2, '/');
        let first = parts.next().unwrap_or("");
        top_level.insert(first);
        if parts.next().is_some() || name.ends_with('/') {
            directories.insert(first);
        }
    }

    if top_level.len() > 1 {
        let names = top_level.into_iter().collect::<Vec<_>>().join(", ");
        return Err(anyhow!(
            "archive must contain a single top-level directory, found: {names} ({})",
            archive_path.display()
        ));
    }
    let Some(root) = top_level.into_iter().next() else {
        return Err(anyhow!("archive is empty: {}", archive_path.display()));
    };
    if !directories.contains(root) {
        return Err(anyhow!(
            "top-level archive entry '{root}' is not a directory: {}",
            archive_path.display()
        ));
    }
    Ok(root.to_string())
}
