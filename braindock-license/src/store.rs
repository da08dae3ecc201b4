//! Checksum-stamped JSON persistence for the license record.
//!
//! The store owns the on-disk representation only for the duration of a
//! load or save call; the live record belongs to the manager.

use crate::error::{LicenseError, LicenseResult};
use crate::record::LicenseRecord;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Hex characters kept from the SHA-256 digest.
const CHECKSUM_LEN: usize = 16;

/// Durable, integrity-checked storage for a single [`LicenseRecord`].
pub struct LicenseStore {
    path: PathBuf,
}

impl LicenseStore {
    /// Creates a store over the given license file path.
    ///
    /// Nothing is read or written until [`load`](Self::load) or
    /// [`save`](Self::save) is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted record.
    ///
    /// Returns the default (unlicensed) record when the file is missing,
    /// unreadable, unparsable, or fails its checksum. A record with no
    /// stored checksum predates checksum stamping and is accepted as-is.
    #[must_use]
    pub fn load(&self) -> LicenseRecord {
        if !self.path.exists() {
            return LicenseRecord::default();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to read license file {}: {e}", self.path.display());
                return LicenseRecord::default();
            }
        };

        let record: LicenseRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("failed to parse license file {}: {e}", self.path.display());
                return LicenseRecord::default();
            }
        };

        let Some(stored) = &record.checksum else {
            // Pre-checksum record, trusted for upgrade compatibility.
            debug!("loaded legacy license record without checksum");
            return record;
        };

        match calculate_checksum(&record) {
            Ok(expected) if *stored == expected => {
                debug!(licensed = record.licensed, "loaded license record");
                record
            }
            Ok(_) => {
                warn!("license file checksum mismatch, possible tampering");
                LicenseRecord::default()
            }
            Err(e) => {
                warn!("failed to checksum license record: {e}");
                LicenseRecord::default()
            }
        }
    }

    /// Saves the record with a freshly computed checksum.
    ///
    /// Missing parent directories are created. On failure the caller's
    /// in-memory state is unaffected but will not survive a restart.
    pub fn save(&self, record: &LicenseRecord) -> LicenseResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                warn!("failed to create license directory {}: {e}", parent.display());
                LicenseError::Storage(format!("failed to create license directory: {e}"))
            })?;
        }

        let mut stamped = record.clone();
        stamped.checksum = Some(calculate_checksum(record)?);
        let json = serde_json::to_string_pretty(&stamped)?;

        fs::write(&self.path, json).map_err(|e| {
            warn!("failed to save license file {}: {e}", self.path.display());
            LicenseError::Storage(format!("failed to save license file: {e}"))
        })?;

        debug!("saved license record to {}", self.path.display());
        Ok(())
    }
}

/// Computes the integrity checksum for a record.
///
/// The record minus its `checksum` field is serialized as compact JSON with
/// lexicographically ordered keys, hashed with SHA-256, and truncated to
/// [`CHECKSUM_LEN`] hex characters. The fixed key order makes the digest
/// reproducible across processes.
pub fn calculate_checksum(record: &LicenseRecord) -> LicenseResult<String> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.remove("checksum");
    }
    let canonical = serde_json::to_string(&value)?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();

    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    Ok(hex[..CHECKSUM_LEN].to_string())
}
