use base64::Engine;
use regex::Regex;
use serde::{Deserialize, Serialize};

use invoseal_canonical::{Digest, SigningPayload, Timestamp, ValidationError};

use crate::errors::SignatureDecodeError;

/// ECDSA P-384 signature in transportable form: raw `r || s` bytes wrapped in
/// standard base64.
///
/// The raw signature is 96 bytes, so the encoding is always exactly 128
/// characters with no padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureValue(String);

impl SignatureValue {
    /// Creates a signature value without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated signature value from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let re = Regex::new(r"^[A-Za-z0-9+/]{128}$").expect("invalid regex");
        if !re.is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "signature",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Encodes a curve signature for transport.
    pub fn from_signature(signature: &p384::ecdsa::Signature) -> Self {
        Self(base64::engine::general_purpose::STANDARD.encode(signature.to_bytes()))
    }

    /// Decodes the value back into a curve signature.
    pub fn decode(&self) -> Result<p384::ecdsa::Signature, SignatureDecodeError> {
        let raw = base64::engine::general_purpose::STANDARD.decode(&self.0)?;
        p384::ecdsa::Signature::from_slice(&raw)
            .map_err(|err| SignatureDecodeError::Ecdsa(err.to_string()))
    }

    /// Encoded signature text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SignatureValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for SignatureValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Self-describing attestation over one signing payload.
///
/// Every field is required on the wire; a bundle missing any of them fails
/// deserialization and is treated as malformed by verification. Bundles are
/// produced once by [`crate::Signer`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBundle {
    /// The resolved payload the attestation covers.
    pub data: SigningPayload,
    /// SHA-384 digest of the canonical payload encoding.
    pub hash: Digest,
    /// ECDSA signature over the same canonical payload encoding.
    pub signature: SignatureValue,
    /// Moment the attestation was produced; mirrors `data.timestamp`.
    pub timestamp: Timestamp,
    /// Bundle schema tag, currently `1.0`.
    pub version: String,
}
