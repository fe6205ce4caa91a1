mod archive;
mod cleanup;
mod install;
mod layout;
mod promote;
mod types;

pub use archive::extract_archive;
pub use cleanup::{clean_path, clean_previous_install, uninstall_distribution};
pub use install::install_from_archive;
pub use layout::DistLayout;
pub use promote::promote_extracted_root;
pub use types::UninstallStatus;
