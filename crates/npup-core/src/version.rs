use std::cmp::Ordering;

use anyhow::{anyhow, Result};

pub const UNKNOWN_VERSION: &str = "unknown";

pub fn compare_version_labels(a: &str, b: &str) -> Result<Ordering> {
    let left = parse_version_components(a)?;
    let right = parse_version_components(b)?;
    let width = left.len().max(right.len());
    for index in 0..width {
        let lhs = left.get(index).copied().unwrap_or(0);
        let rhs = right.get(index).copied().unwrap_or(0);
        match lhs.cmp(&rhs) {
            Ordering::Equal => continue,
            ordering => return Ok(ordering),
        }
    }
    Ok(Ordering::Equal)
}

pub fn parse_version_components(label: &str) -> Result<Vec<u64>> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("version label is empty"));
    }
    trimmed
        .split('.')
        .map(|component| {
            if component.is_empty() || !component.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(anyhow!(
                    "invalid version label '{trimmed}': component '{component}' is not numeric"
                ));
            }
            component.parse::<u64>().map_err(|_| {
                anyhow!("invalid version label '{trimmed}': component '{component}' is out of range")
            })
        })
        .collect()
}
