use crate::payload::{SCHEMA_VERSION, SigningPayload};

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The payload could not be encoded as canonical JSON.
    #[error("canonical encoding failed: {0}")]
    Encoding(String),
}

/// Canonical UTF-8 encoding of a signing payload.
///
/// These are the exact bytes that get hashed and signed; any transformation
/// of this value invalidates the attestation it participates in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalString(String);

impl CanonicalString {
    /// Canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical bytes, suitable for hashing and signing.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<str> for CanonicalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalizer that emits deterministic bytes for signing payloads.
///
/// The encoding is a single JSON object whose members appear in payload
/// declaration order with no insignificant whitespace. Member order is fixed
/// rather than sorted, so the same field values always yield the same bytes
/// regardless of how the payload was constructed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonicalizer;

impl Canonicalizer {
    /// Creates a new canonicalizer.
    pub fn new() -> Self {
        Self
    }

    /// Produces the canonical encoding of `payload`.
    ///
    /// An empty `version` is treated as absent and resolves to
    /// [`SCHEMA_VERSION`] before encoding; all other fields are encoded
    /// verbatim, empty strings included.
    pub fn canonicalize(
        &self,
        payload: &SigningPayload,
    ) -> Result<CanonicalString, CanonicalizationError> {
        let normalized = normalize(payload);
        let encoded = serde_json::to_string(&normalized)
            .map_err(|err| CanonicalizationError::Encoding(err.to_string()))?;
        Ok(CanonicalString(encoded))
    }
}

fn normalize(payload: &SigningPayload) -> SigningPayload {
    let mut normalized = payload.clone();
    if normalized.version.is_empty() {
        normalized.version = SCHEMA_VERSION.to_string();
    }
    normalized
}
