//! The activation state machine.
//!
//! Owns the single in-memory license record and the three activation
//! paths. Checkout-based activations are unconditional because the payment
//! provider confirmed the purchase before this code runs, so the only
//! failure left is persistence. Key activation validates against the
//! distributed key set first.
//!
//! Activation and revocation mutate the in-memory record before
//! persisting; a persistence error is surfaced to the caller but never
//! rolls the transition back. Callers should warn the operator that the
//! new state may not survive a restart.

use crate::config::LicenseConfig;
use crate::error::LicenseResult;
use crate::keys::{normalize_key, KeyValidator};
use crate::record::{ActivationMethod, LicenseRecord};
use crate::store::LicenseStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// License details for display.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseInfo {
    /// Whether the installation is licensed.
    pub licensed: bool,
    /// How the license was activated, if at all.
    #[serde(rename = "type")]
    pub method: Option<ActivationMethod>,
    /// Activation time, ISO-8601.
    pub activated_at: Option<String>,
    /// Customer email reported by the checkout flow.
    pub email: Option<String>,
}

/// Manages BrainDock license state.
///
/// Construct one per process and pass references to consumers. The manager
/// is not internally synchronized; embedders sharing it across threads
/// must serialize access themselves, and concurrent writers are
/// last-writer-wins.
pub struct LicenseManager {
    store: LicenseStore,
    validator: KeyValidator,
    record: LicenseRecord,
}

impl LicenseManager {
    /// Creates a manager over the configured file locations, loading any
    /// previously persisted record.
    #[must_use]
    pub fn new(config: LicenseConfig) -> Self {
        let store = LicenseStore::new(config.license_file);
        let validator = KeyValidator::new(config.license_keys_file);
        let record = store.load();
        Self {
            store,
            validator,
            record,
        }
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Returns true if the installation is licensed.
    #[must_use]
    pub fn is_licensed(&self) -> bool {
        self.record.licensed
    }

    /// Returns how the license was activated, or `None` when unlicensed.
    #[must_use]
    pub fn activation_method(&self) -> Option<ActivationMethod> {
        self.record.activation_method
    }

    /// Returns license details for display.
    #[must_use]
    pub fn license_info(&self) -> LicenseInfo {
        LicenseInfo {
            licensed: self.record.licensed,
            method: self.record.activation_method,
            activated_at: self.record.activated_at.clone(),
            email: self.record.email.clone(),
        }
    }

    /// Returns when the license was activated, or `None` when the stored
    /// timestamp is absent or unparsable.
    #[must_use]
    pub fn activation_date(&self) -> Option<DateTime<Utc>> {
        self.record.activation_date()
    }

    /// Returns true if a key would be accepted, without activating.
    #[must_use]
    pub fn validate_license_key(&self, key: &str) -> bool {
        self.validator.is_valid(key)
    }

    /// Returns the current record.
    #[must_use]
    pub fn record(&self) -> &LicenseRecord {
        &self.record
    }

    // ── Activation ───────────────────────────────────────────────

    /// Activates after a completed hosted-payment checkout.
    ///
    /// Always succeeds in memory; no format validation is applied to the
    /// session id, that trust boundary lies with the caller that ran the
    /// checkout. An `Err` carries only persistence failure.
    pub fn activate_with_checkout(
        &mut self,
        session_id: &str,
        payment_reference: Option<&str>,
        email: Option<&str>,
    ) -> LicenseResult<()> {
        self.record = LicenseRecord::hosted_payment(
            session_id,
            payment_reference.map(str::to_owned),
            email.map(str::to_owned),
        );
        self.store.save(&self.record)?;
        info!("license activated via hosted payment");
        Ok(())
    }

    /// Activates with a pre-distributed license key.
    ///
    /// Returns `Ok(false)` and leaves the stored record untouched when the
    /// key is not on the distributed key list. Returns `Ok(true)` once the
    /// licensed record is persisted; `Err` means the in-memory activation
    /// happened but persistence failed.
    pub fn activate_with_key(&mut self, key: &str) -> LicenseResult<bool> {
        if !self.validator.is_valid(key) {
            warn!("invalid license key attempted");
            return Ok(false);
        }

        self.record = LicenseRecord::from_key(normalize_key(key));
        self.store.save(&self.record)?;
        info!("license activated via license key");
        Ok(true)
    }

    /// Activates after a promo-code redemption through the hosted checkout.
    ///
    /// Unconditional like [`activate_with_checkout`](Self::activate_with_checkout);
    /// the redeemed promo code is kept in the record's `license_key` field.
    pub fn activate_with_promo(
        &mut self,
        session_id: &str,
        promo_code: &str,
        email: Option<&str>,
    ) -> LicenseResult<()> {
        self.record = LicenseRecord::promo(session_id, promo_code, email.map(str::to_owned));
        self.store.save(&self.record)?;
        info!("license activated via promo code");
        Ok(())
    }

    /// Revokes the license, resetting to the unlicensed record.
    ///
    /// Idempotent; an `Err` carries only persistence failure.
    pub fn revoke(&mut self) -> LicenseResult<()> {
        self.record = LicenseRecord::default();
        self.store.save(&self.record)?;
        info!("license revoked");
        Ok(())
    }
}
