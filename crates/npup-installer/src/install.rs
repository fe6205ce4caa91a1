use anyhow::Result;

use crate::archive::extract_archive;
use crate::cleanup::{clean_path, clean_previous_install};
use crate::layout::DistLayout;
use crate::promote::promote_extracted_root;

pub fn install_from_archive(layout: &DistLayout, version_label: &str) -> Result<()> {
    layout.ensure_modules_dir()?;
    clean_previous_install(layout)?;
    let extracted_root =
        extract_archive(&layout.archive_path(version_label), &layout.modules_dir())?;
    promote_extracted_root(layout, &extracted_root)?;
    clean_path(&layout.archive_path(version_label))?;
    Ok(())
}
