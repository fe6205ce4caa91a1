use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::dist::Mirror;

pub const SETTINGS_FILE_NAME: &str = "npup.toml";
const ROOT_ENV_VAR: &str = "NPUP_ROOT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub root: Option<PathBuf>,
    pub mirror: Option<Mirror>,
}

impl Settings {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).context("failed to parse npup settings")
    }
}

pub fn settings_path() -> Result<PathBuf> {
    Ok(executable_dir()?.join(SETTINGS_FILE_NAME))
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file: {}", path.display()))?;
    Settings::from_toml_str(&raw)
        .with_context(|| format!("failed to load settings file: {}", path.display()))
}

pub fn resolve_install_root(cli_root: Option<&Path>, settings: &Settings) -> Result<PathBuf> {
    let env_root = env::var_os(ROOT_ENV_VAR);
    let exe_dir = executable_dir()?;
    Ok(resolve_install_root_from(
        cli_root,
        env_root.as_deref(),
        settings,
        &exe_dir,
    ))
}

pub fn resolve_install_root_from(
    cli_root: Option<&Path>,
    env_root: Option<&OsStr>,
    settings: &Settings,
    exe_dir: &Path,
) -> PathBuf {
    if let Some(root) = cli_root {
        return root.to_path_buf();
    }
    if let Some(root) = env_root {
        if !root.is_empty() {
            return PathBuf::from(root);
        }
    }
    if let Some(root) = &settings.root {
        return root.clone();
    }
    exe_dir.to_path_buf()
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("failed to determine the npup executable path")?;
    let dir = exe
        .parent()
        .context("npup executable path has no parent directory")?;
    Ok(dir.to_path_buf())
}
