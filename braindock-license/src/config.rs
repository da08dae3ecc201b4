//! File locations for license state.

use std::path::{Path, PathBuf};

/// Directory name under the platform data dir.
const APP_DIR: &str = "braindock";

/// Where the license record and the distributed key list live on disk.
#[derive(Debug, Clone)]
pub struct LicenseConfig {
    /// Path of the persisted license record.
    pub license_file: PathBuf,
    /// Path of the distributed key list. `None` rejects every key.
    pub license_keys_file: Option<PathBuf>,
}

impl LicenseConfig {
    /// Builds a config with both files under the given directory, matching
    /// the default installation layout.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            license_file: dir.join("license.json"),
            license_keys_file: Some(dir.join("license_keys.json")),
        }
    }

    /// Replaces the key-list location.
    #[must_use]
    pub fn with_keys_file(mut self, path: Option<PathBuf>) -> Self {
        self.license_keys_file = path;
        self
    }
}

impl Default for LicenseConfig {
    /// Uses the platform data directory, falling back to the current
    /// directory when the platform reports none.
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(base.join(APP_DIR))
    }
}
