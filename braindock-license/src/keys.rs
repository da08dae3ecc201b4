//! License key validation against the distributed key list.
//!
//! Keys are accepted by set membership, not by signature: a key is valid
//! iff its normalized form appears on the distributor's whitelist. No
//! cryptographic verification happens here.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// The key-list file, either the current object shape or the legacy bare
/// list written by older key-generation tooling.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeyListFile {
    Modern { keys: Vec<String> },
    Legacy(Vec<String>),
}

impl KeyListFile {
    fn into_keys(self) -> Vec<String> {
        match self {
            Self::Modern { keys } | Self::Legacy(keys) => keys,
        }
    }
}

/// Normalizes a license key for comparison: surrounding whitespace is
/// stripped and the key is uppercased.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Validates license keys against a lazily-loaded, cached key set.
///
/// The backing file is read once on first validation and treated as
/// immutable for the process. A missing or malformed file loads zero keys,
/// so every key is rejected rather than any being accepted.
pub struct KeyValidator {
    path: Option<PathBuf>,
    cache: OnceLock<HashSet<String>>,
}

impl KeyValidator {
    /// Creates a validator over the given key-list file.
    ///
    /// `None` means no keys were distributed and validation always fails.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            cache: OnceLock::new(),
        }
    }

    /// Returns true if the normalized key is on the distributed key list.
    #[must_use]
    pub fn is_valid(&self, key: &str) -> bool {
        self.keys().contains(&normalize_key(key))
    }

    /// Returns the number of loaded valid keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys().len()
    }

    fn keys(&self) -> &HashSet<String> {
        self.cache.get_or_init(|| self.load_keys())
    }

    fn load_keys(&self) -> HashSet<String> {
        let Some(path) = &self.path else {
            return HashSet::new();
        };
        if !path.exists() {
            return HashSet::new();
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to read license keys {}: {e}", path.display());
                return HashSet::new();
            }
        };

        match serde_json::from_str::<KeyListFile>(&raw) {
            Ok(file) => {
                let keys: HashSet<String> = file
                    .into_keys()
                    .iter()
                    .map(|key| normalize_key(key))
                    .collect();
                debug!("loaded {} valid license keys", keys.len());
                keys
            }
            Err(e) => {
                warn!("failed to parse license keys {}: {e}", path.display());
                HashSet::new()
            }
        }
    }
}
