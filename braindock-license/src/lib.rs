//! Licensing and activation for BrainDock.
//!
//! This module handles:
//! - License state persistence with checksum-based tamper detection
//! - License key validation against the distributed key list
//! - Activation via hosted checkout, license key, or promo code
//! - Revocation back to the unlicensed state
//!
//! # Design Principles
//!
//! - **Local-only**: every check reads local files; no network calls
//! - **Fail-closed keys**: a missing or malformed key list rejects all keys
//! - **Safe default state**: an unreadable or tampered license file degrades
//!   to the unlicensed record instead of crashing the host
//! - **Whole-record activation**: each activation path replaces the stored
//!   record outright, never patches individual fields
//!
//! # Trust Model
//!
//! The record checksum detects corruption and casual on-disk edits. It
//! carries no secret, so it cannot stop an attacker who recomputes and
//! re-stamps a forged record; it is a tamper detector, not authentication.
//! License keys are accepted by membership on the distributor's whitelist,
//! not by signature.

mod config;
mod error;
mod keys;
mod manager;
mod record;
mod store;

pub use config::LicenseConfig;
pub use error::{LicenseError, LicenseResult};
pub use keys::{normalize_key, KeyValidator};
pub use manager::{LicenseInfo, LicenseManager};
pub use record::{ActivationMethod, LicenseRecord};
pub use store::{calculate_checksum, LicenseStore};
