//! Shared test helpers for license tests.

#![allow(dead_code)]

use braindock_license::LicenseConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A distributed key used across tests.
pub const VALID_KEY: &str = "BD-AAAA-BBBB-CCCC-DDDD";

/// A well-formed key that is not on any distributed list.
pub const UNKNOWN_KEY: &str = "BD-0000-0000-0000-0000";

/// Creates an isolated config with no key file, inside a fresh temp dir.
pub fn temp_config() -> (TempDir, LicenseConfig) {
    let dir = TempDir::new().unwrap();
    let config = LicenseConfig::in_dir(dir.path()).with_keys_file(None);
    (dir, config)
}

/// Creates an isolated config whose key file holds the given keys in the
/// current `{"keys": [...]}` shape.
pub fn config_with_keys(keys: &[&str]) -> (TempDir, LicenseConfig) {
    let dir = TempDir::new().unwrap();
    let body = serde_json::json!({ "keys": keys });
    fs::write(
        dir.path().join("license_keys.json"),
        serde_json::to_string_pretty(&body).unwrap(),
    )
    .unwrap();
    let config = LicenseConfig::in_dir(dir.path());
    (dir, config)
}

/// Creates an isolated config whose key file holds the given raw bytes.
pub fn config_with_raw_keys(raw: &str) -> (TempDir, LicenseConfig) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("license_keys.json"), raw).unwrap();
    let config = LicenseConfig::in_dir(dir.path());
    (dir, config)
}

/// Edits the persisted license JSON in place.
pub fn tamper(path: &Path, edit: impl FnOnce(&mut serde_json::Value)) {
    let mut value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    edit(&mut value);
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}
