//! JSON output of the edited VNet.
//!
//! The document is the same shape `az network vnet show` prints, so it can be
//! handed to `az network vnet update` or a template deployment.

use crate::models::VirtualNetwork;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Pretty printed JSON for `vnet`.
pub fn vnet_to_json(vnet: &VirtualNetwork) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(vnet)
        .map_err(|e| Box::<dyn Error>::from(format!("Error serializing VNet JSON: {e}")))
}

/// Write `vnet` as JSON to `path`, or to stdout when `path` is `None`.
///
/// An existing file is first copied next to itself with a timestamp suffix.
///
/// # Returns
/// * `Ok(Some(PathBuf))` - Backup file written before overwriting
/// * `Ok(None)` - Nothing needed backing up
pub fn write_vnet_json(
    vnet: &VirtualNetwork,
    path: Option<&Path>,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let json = vnet_to_json(vnet)?;

    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
        return Ok(None);
    };

    let backup = if path.exists() {
        let backup = backup_path(path, Utc::now());
        log::warn!("Backing up {} to {}", path.display(), backup.display());
        std::fs::copy(path, &backup)
            .map_err(|e| format!("Error writing backup {}: {e}", backup.display()))?;
        Some(backup)
    } else {
        None
    };

    std::fs::write(path, json + "\n")
        .map_err(|e| format!("Error writing VNet file {}: {e}", path.display()))?;
    log::info!("Wrote {vnet} to {}", path.display());
    Ok(backup)
}

/// `vnet.json` -> `vnet.json.2024-05-01_101500.bak`
fn backup_path(path: &Path, now: DateTime<Utc>) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(format!(".{}.bak", now.format("%Y-%m-%d_%H%M%S")));
    path.with_file_name(name)
}
