use base64::Engine;
use invoseal_canonical::{Canonicalizer, Digest, PayloadFields, SigningPayload, Timestamp};

fn make_payload() -> SigningPayload {
    SigningPayload {
        version: "1.0".into(),
        timestamp: "2024-01-01T00:00:00.000Z".into(),
        invoice_id: "INV-100".into(),
        user_id: "user-1".into(),
        signature_image: "data:image/png;base64,iVBORw0KGgo=".into(),
        signed_at: "2024-01-01T00:00:00.000Z".into(),
    }
}

const GOLDEN: &str = r#"{"version":"1.0","timestamp":"2024-01-01T00:00:00.000Z","invoiceId":"INV-100","userId":"user-1","signatureImage":"data:image/png;base64,iVBORw0KGgo=","signedAt":"2024-01-01T00:00:00.000Z"}"#;

#[test]
fn canonical_string_matches_golden_bytes() {
    let canonical = Canonicalizer::new().canonicalize(&make_payload()).unwrap();
    assert_eq!(canonical.as_str(), GOLDEN);
    assert_eq!(canonical.as_bytes(), GOLDEN.as_bytes());
}

#[test]
fn scrambled_input_key_order_yields_identical_bytes() {
    let scrambled = r#"{
        "signedAt": "2024-01-01T00:00:00.000Z",
        "userId": "user-1",
        "version": "1.0",
        "invoiceId": "INV-100",
        "timestamp": "2024-01-01T00:00:00.000Z",
        "signatureImage": "data:image/png;base64,iVBORw0KGgo="
    }"#;
    let parsed: SigningPayload = serde_json::from_str(scrambled).unwrap();
    assert_eq!(parsed, make_payload());

    let canonical = Canonicalizer::new().canonicalize(&parsed).unwrap();
    assert_eq!(canonical.as_str(), GOLDEN);
}

#[test]
fn sparse_json_resolves_missing_fields_to_defaults() {
    let parsed: SigningPayload = serde_json::from_str(r#"{"invoiceId":"INV-100"}"#).unwrap();
    assert_eq!(parsed.version, "1.0");
    assert_eq!(parsed.invoice_id, "INV-100");
    assert_eq!(parsed.user_id, "");
    assert_eq!(parsed.signature_image, "");

    let canonical = Canonicalizer::new().canonicalize(&parsed).unwrap();
    assert_eq!(
        canonical.as_str(),
        r#"{"version":"1.0","timestamp":"","invoiceId":"INV-100","userId":"","signatureImage":"","signedAt":""}"#
    );
}

#[test]
fn unknown_fields_are_ignored() {
    let parsed: SigningPayload =
        serde_json::from_str(r#"{"invoiceId":"INV-100","attachments":["a.pdf"]}"#).unwrap();
    let canonical = Canonicalizer::new().canonicalize(&parsed).unwrap();
    assert!(!canonical.as_str().contains("attachments"));
}

#[test]
fn empty_version_encodes_as_schema_version() {
    let mut payload = make_payload();
    payload.version = String::new();

    let canonical = Canonicalizer::new().canonicalize(&payload).unwrap();
    assert_eq!(canonical.as_str(), GOLDEN);
}

#[test]
fn resolve_backfills_signed_at_from_timestamp() {
    let fields = PayloadFields::new("INV-100", "user-1", "data:image/png;base64,iVBORw0KGgo=")
        .with_timestamp("2024-01-01T00:00:00.000Z");
    let fallback = Timestamp::parse("2099-01-01T00:00:00.000Z").unwrap();
    let payload = SigningPayload::resolve(fields, fallback);

    assert_eq!(payload, make_payload());
}

#[test]
fn resolve_uses_fallback_timestamp_when_absent() {
    let fields = PayloadFields::new("INV-100", "user-1", "sig");
    let fallback = Timestamp::parse("2024-03-05T10:00:00.000Z").unwrap();
    let payload = SigningPayload::resolve(fields, fallback);

    assert_eq!(payload.timestamp, "2024-03-05T10:00:00.000Z");
    assert_eq!(payload.signed_at, "2024-03-05T10:00:00.000Z");
}

#[test]
fn digest_matches_nist_sha384_vectors() {
    let abc = Digest::compute(b"abc");
    let raw = base64::engine::general_purpose::STANDARD
        .decode(abc.as_str())
        .unwrap();
    assert_eq!(
        hex::encode(raw),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );

    let empty = Digest::compute(b"");
    let raw = base64::engine::general_purpose::STANDARD
        .decode(empty.as_str())
        .unwrap();
    assert_eq!(
        hex::encode(raw),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    );
}

#[test]
fn computed_digest_is_parseable_and_unpadded() {
    let digest = Digest::compute(GOLDEN.as_bytes());
    assert_eq!(digest.as_str().len(), 64);
    assert!(!digest.as_str().contains('='));
    assert!(Digest::parse(digest.as_str()).is_ok());
}

#[test]
fn digest_parse_enforces_standard_base64_shape() {
    assert!(Digest::parse("A".repeat(64)).is_ok());
    assert!(Digest::parse("A".repeat(63)).is_err());
    assert!(Digest::parse("A".repeat(65)).is_err());
    assert!(Digest::parse(format!("{}=", "A".repeat(63))).is_err());
    assert!(Digest::parse(format!("{}-_", "A".repeat(62))).is_err());
}

#[test]
fn timestamp_parse_accepts_utc_forms_only() {
    assert!(Timestamp::parse("2024-01-01T00:00:00Z").is_ok());
    assert!(Timestamp::parse("2024-01-01T00:00:00.123Z").is_ok());
    assert!(Timestamp::parse("2024-01-01 00:00:00").is_err());
    assert!(Timestamp::parse("2024-01-01T00:00:00+05:00").is_err());
}

#[test]
fn payload_serializes_with_camel_case_member_names() {
    let value = serde_json::to_value(make_payload()).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "version",
        "timestamp",
        "invoiceId",
        "userId",
        "signatureImage",
        "signedAt",
    ] {
        assert!(object.contains_key(key), "missing member {key}");
    }
    assert_eq!(object.len(), 6);
}
