use base64::Engine;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha384};

use crate::canonicalizer::CanonicalString;
use crate::validation::ValidationError;

/// SHA-384 digest of canonical bytes, encoded as standard base64.
///
/// The raw digest is 48 bytes, so the encoding is always exactly 64
/// characters with no padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Creates a digest without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated digest from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let re = Regex::new(r"^[A-Za-z0-9+/]{64}$").expect("invalid regex");
        if !re.is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Computes the digest of the given bytes.
    pub fn compute(bytes: &[u8]) -> Self {
        let mut hasher = Sha384::new();
        hasher.update(bytes);
        let hash = hasher.finalize();
        Self(base64::engine::general_purpose::STANDARD.encode(hash))
    }

    /// Computes the digest of a canonical payload encoding.
    pub fn of_canonical(canonical: &CanonicalString) -> Self {
        Self::compute(canonical.as_bytes())
    }

    /// Encoded digest text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Digest {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
