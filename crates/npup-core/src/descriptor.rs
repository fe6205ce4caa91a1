use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VersionDescriptor {
    version: String,
}

pub fn parse_version_descriptor(body: &str) -> Result<String> {
    let descriptor: VersionDescriptor =
        serde_json::from_str(body).context("failed to parse npm version descriptor")?;
    let version = descriptor.version.trim().to_string();
    if version.is_empty() {
        return Err(anyhow!("npm version descriptor has an empty version field"));
    }
    Ok(version)
}
