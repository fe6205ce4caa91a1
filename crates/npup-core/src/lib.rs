mod config;
mod descriptor;
mod dist;
mod version;

pub use config::{
    load_settings, resolve_install_root, resolve_install_root_from, settings_path, Settings,
    SETTINGS_FILE_NAME,
};
pub use descriptor::parse_version_descriptor;
pub use dist::{
    archive_file_name, Mirror, LAUNCHER_NAMES, MODULES_DIR_NAME, PACKAGE_BIN_DIR_NAME,
    PACKAGE_DIR_NAME, VERSION_DESCRIPTOR_URL,
};
pub use version::{compare_version_labels, parse_version_components, UNKNOWN_VERSION};

#[cfg(test)]
mod tests;
