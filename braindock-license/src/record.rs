//! The persisted license record.
//!
//! A `LicenseRecord` is replaced wholesale by every activation path and by
//! revocation; nothing ever patches individual fields of a stored record.
//! The per-path constructors are the only way to build a licensed record,
//! which keeps the field invariants intact without ad hoc clearing: an
//! unlicensed record carries no identity fields, and a licensed record
//! carries exactly the fields its activation method uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the installation became licensed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMethod {
    /// Paid through the hosted checkout flow.
    HostedPayment,
    /// Redeemed a pre-distributed license key.
    LicenseKey,
    /// Redeemed a promotional code through the hosted checkout flow.
    PromoCode,
}

/// The persisted license state.
///
/// `checksum` covers every other field and is stamped by the store on save.
/// Records written by versions that predate checksum stamping have no
/// `checksum` field and are accepted as-is on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseRecord {
    /// Whether the installation is licensed.
    pub licensed: bool,
    /// How the license was activated, if at all.
    pub activation_method: Option<ActivationMethod>,
    /// Checkout session that granted the license (hosted payment or promo).
    pub checkout_session_id: Option<String>,
    /// Payment reference from the provider (hosted payment only).
    pub payment_reference: Option<String>,
    /// The normalized license key, or the promo code for promo activations.
    pub license_key: Option<String>,
    /// Activation time, ISO-8601.
    pub activated_at: Option<String>,
    /// Customer email reported by the checkout flow.
    pub email: Option<String>,
    /// Integrity checksum over all other fields.
    pub checksum: Option<String>,
}

impl LicenseRecord {
    /// Builds a licensed record for a completed hosted-payment checkout.
    #[must_use]
    pub fn hosted_payment(
        session_id: impl Into<String>,
        payment_reference: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            licensed: true,
            activation_method: Some(ActivationMethod::HostedPayment),
            checkout_session_id: Some(session_id.into()),
            payment_reference,
            email,
            activated_at: Some(Utc::now().to_rfc3339()),
            ..Self::default()
        }
    }

    /// Builds a licensed record for a validated license key.
    ///
    /// The key is stored as given; callers normalize it first.
    #[must_use]
    pub fn from_key(normalized_key: impl Into<String>) -> Self {
        Self {
            licensed: true,
            activation_method: Some(ActivationMethod::LicenseKey),
            license_key: Some(normalized_key.into()),
            activated_at: Some(Utc::now().to_rfc3339()),
            ..Self::default()
        }
    }

    /// Builds a licensed record for a redeemed promo code.
    ///
    /// The promo code is kept in the `license_key` field.
    #[must_use]
    pub fn promo(
        session_id: impl Into<String>,
        promo_code: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            licensed: true,
            activation_method: Some(ActivationMethod::PromoCode),
            checkout_session_id: Some(session_id.into()),
            license_key: Some(promo_code.into()),
            email,
            activated_at: Some(Utc::now().to_rfc3339()),
            ..Self::default()
        }
    }

    /// Parses the stored activation timestamp.
    ///
    /// Returns `None` when the timestamp is unset or unparsable rather
    /// than failing.
    #[must_use]
    pub fn activation_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.activated_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
