//! # Snapshot Export
//!
//! Writes the current store snapshot to `~/.saathi/exports/<uuid>.json`
//! so it can be handed to a share target. This is a one-way dump; nothing
//! is ever read back into the store.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;
use serde::Serialize;

use crate::core::config::app_dir;
use crate::core::ids::new_id;
use crate::core::state::AppState;

#[derive(Debug)]
pub enum ExportError {
    NoHomeDir,
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoHomeDir => write!(f, "no home directory to export into"),
            ExportError::Io(e) => write!(f, "export I/O error: {e}"),
            ExportError::Serialize(e) => write!(f, "export encoding error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Envelope written to disk.
#[derive(Serialize)]
struct ExportDocument<'a> {
    exported_at: String,
    version: &'static str,
    state: &'a AppState,
}

/// Returns `~/.saathi/exports/`, creating it if needed.
pub fn exports_dir() -> Result<PathBuf, ExportError> {
    let dir = app_dir().ok_or(ExportError::NoHomeDir)?.join("exports");
    fs::create_dir_all(&dir).map_err(ExportError::Io)?;
    Ok(dir)
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), ExportError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data).map_err(ExportError::Serialize)?;
    fs::write(&tmp_path, json).map_err(ExportError::Io)?;
    fs::rename(&tmp_path, path).map_err(ExportError::Io)?;
    Ok(())
}

/// Export into `dir`, returning the written file's path.
pub fn write_export_to(dir: &Path, state: &AppState) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("{}.json", new_id()));
    let doc = ExportDocument {
        exported_at: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        state,
    };
    atomic_write_json(&path, &doc)?;
    info!("Exported snapshot to {}", path.display());
    Ok(path)
}

pub fn write_export(state: &AppState) -> Result<PathBuf, ExportError> {
    write_export_to(&exports_dir()?, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{IncidentCategory, IncidentReport, TrustedContact};

    #[test]
    fn test_export_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new();
        state.trusted_contacts.push(TrustedContact::new("Jane", "123"));
        state
            .incident_reports
            .push(IncidentReport::new(IncidentCategory::UnsafeFeeling, "Main Square", "felt followed"));

        let path = write_export_to(dir.path(), &state).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["state"]["trusted_contacts"][0]["name"], "Jane");
        assert_eq!(json["state"]["incident_reports"][0]["category"], "unsafe-feeling");
        assert_eq!(json["state"]["theme"], "dark");
        assert!(json["exported_at"].is_string());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = write_export_to(&missing, &AppState::new()).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
