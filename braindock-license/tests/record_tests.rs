use braindock_license::{ActivationMethod, LicenseRecord};

// ── Default record ───────────────────────────────────────────────

#[test]
fn default_record_is_unlicensed() {
    let record = LicenseRecord::default();
    assert!(!record.licensed);
    assert_eq!(record.activation_method, None);
    assert_eq!(record.checkout_session_id, None);
    assert_eq!(record.payment_reference, None);
    assert_eq!(record.license_key, None);
    assert_eq!(record.activated_at, None);
    assert_eq!(record.email, None);
    assert_eq!(record.checksum, None);
}

// ── Constructors ─────────────────────────────────────────────────

#[test]
fn hosted_payment_record_fields() {
    let record = LicenseRecord::hosted_payment(
        "cs_test_123",
        Some("pi_456".into()),
        Some("user@example.com".into()),
    );
    assert!(record.licensed);
    assert_eq!(record.activation_method, Some(ActivationMethod::HostedPayment));
    assert_eq!(record.checkout_session_id.as_deref(), Some("cs_test_123"));
    assert_eq!(record.payment_reference.as_deref(), Some("pi_456"));
    assert_eq!(record.email.as_deref(), Some("user@example.com"));
    assert_eq!(record.license_key, None);
    assert!(record.activated_at.is_some());
    assert_eq!(record.checksum, None);
}

#[test]
fn key_record_fields() {
    let record = LicenseRecord::from_key("BD-AAAA-BBBB-CCCC-DDDD");
    assert!(record.licensed);
    assert_eq!(record.activation_method, Some(ActivationMethod::LicenseKey));
    assert_eq!(record.license_key.as_deref(), Some("BD-AAAA-BBBB-CCCC-DDDD"));
    assert_eq!(record.checkout_session_id, None);
    assert_eq!(record.payment_reference, None);
    assert_eq!(record.email, None);
    assert!(record.activated_at.is_some());
}

#[test]
fn promo_record_fields() {
    let record = LicenseRecord::promo("cs_promo_1", "LAUNCH50", None);
    assert!(record.licensed);
    assert_eq!(record.activation_method, Some(ActivationMethod::PromoCode));
    assert_eq!(record.checkout_session_id.as_deref(), Some("cs_promo_1"));
    assert_eq!(record.license_key.as_deref(), Some("LAUNCH50"));
    assert_eq!(record.payment_reference, None);
}

// ── Activation date ──────────────────────────────────────────────

#[test]
fn activation_date_parses_constructor_timestamp() {
    let record = LicenseRecord::from_key("BD-AAAA-BBBB-CCCC-DDDD");
    assert!(record.activation_date().is_some());
}

#[test]
fn activation_date_none_when_unset() {
    let record = LicenseRecord::default();
    assert_eq!(record.activation_date(), None);
}

#[test]
fn activation_date_none_when_unparsable() {
    let record = LicenseRecord {
        activated_at: Some("yesterday-ish".into()),
        ..LicenseRecord::default()
    };
    assert_eq!(record.activation_date(), None);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn activation_method_wire_names() {
    let json = serde_json::to_string(&ActivationMethod::HostedPayment).unwrap();
    assert_eq!(json, "\"hosted_payment\"");
    let json = serde_json::to_string(&ActivationMethod::LicenseKey).unwrap();
    assert_eq!(json, "\"license_key\"");
    let json = serde_json::to_string(&ActivationMethod::PromoCode).unwrap();
    assert_eq!(json, "\"promo_code\"");
}

#[test]
fn record_parses_with_missing_fields() {
    // Older records may lack fields added later; they default.
    let record: LicenseRecord = serde_json::from_str(r#"{"licensed": false}"#).unwrap();
    assert_eq!(record, LicenseRecord::default());
}
