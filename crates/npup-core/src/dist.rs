use anyhow::{anyhow, Result};
use serde::Deserialize;

pub const VERSION_DESCRIPTOR_URL: &str =
    "https://raw.githubusercontent.com/npm/npm/master/package.json";

pub const MODULES_DIR_NAME: &str = "node_modules";
pub const PACKAGE_DIR_NAME: &str = "npm";
pub const PACKAGE_BIN_DIR_NAME: &str = "bin";
pub const LAUNCHER_NAMES: [&str; 2] = ["npm", "npm.cmd"];

const GITHUB_BASE_URL: &str = "https://github.com/npm/npm/releases/";
const TAOBAO_BASE_URL: &str = "http://npm.taobao.org/mirrors/npm/";

pub fn archive_file_name(version_label: &str) -> String {
    format!("v{version_label}.zip")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mirror {
    #[default]
    Github,
    Taobao,
}

impl Mirror {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Taobao => "taobao",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Github => GITHUB_BASE_URL,
            Self::Taobao => TAOBAO_BASE_URL,
        }
    }

    pub fn archive_url(self, version_label: &str) -> String {
        format!("{}{}", self.base_url(), archive_file_name(version_label))
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "taobao" => Ok(Self::Taobao),
            _ => Err(anyhow!("invalid mirror: {value} (expected github or taobao)")),
        }
    }
}
