use base64::Engine;
use p384::ecdsa::VerifyingKey;
use p384::pkcs8::{DecodePublicKey, EncodePublicKey};
use serde::{Deserialize, Serialize};

use crate::errors::{KeyDecodeError, KeyGenerationError};

/// Public key in transportable form: SPKI DER wrapped in standard base64.
///
/// For an uncompressed P-384 point the DER document is 120 bytes, so the
/// encoding is always 160 base64 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedPublicKey(String);

impl EncodedPublicKey {
    /// Creates an encoded key without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Exports a verifying key as base64-wrapped SPKI DER.
    pub fn from_verifying_key(key: &VerifyingKey) -> Result<Self, KeyGenerationError> {
        let der = key
            .to_public_key_der()
            .map_err(|err| KeyGenerationError::Export(err.to_string()))?;
        Ok(Self(
            base64::engine::general_purpose::STANDARD.encode(der.as_bytes()),
        ))
    }

    /// Decodes the key back into a curve point usable for verification.
    pub fn decode(&self) -> Result<VerifyingKey, KeyDecodeError> {
        let der = base64::engine::general_purpose::STANDARD.decode(&self.0)?;
        VerifyingKey::from_public_key_der(&der).map_err(|err| KeyDecodeError::Spki(err.to_string()))
    }

    /// Encoded key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EncodedPublicKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for EncodedPublicKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
