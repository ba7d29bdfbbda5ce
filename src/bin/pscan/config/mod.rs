use std::fs;

use anyhow::{Context, Result};

use pinned_scan::io::read_file;
use pinned_scan::{ReferenceGeometry, ScanConfig};

use crate::cli::ScanOptions;

/// Resolves the scan definition: built-in defaults, then the TOML file,
/// then the reference coordinate file.
pub fn build_scan_config(opts: &ScanOptions) -> Result<ScanConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| {
                format!("Failed to read scan configuration: {}", path.display())
            })?;
            ScanConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid scan configuration: {}", path.display()))?
        }
        None => ScanConfig::default(),
    };

    if let Some(path) = &opts.reference {
        let system = read_file(path)
            .with_context(|| format!("Failed to read reference geometry: {}", path.display()))?;
        config.reference = ReferenceGeometry::from_system(&system)
            .with_context(|| format!("Unusable reference geometry: {}", path.display()))?;
    }

    Ok(config)
}
