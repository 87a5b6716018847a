use chrono::{SecondsFormat, Utc};

use invoseal_canonical::{
    Canonicalizer, Digest, PayloadFields, SCHEMA_VERSION, SigningPayload, Timestamp,
};
use invoseal_keys::EphemeralKeyPair;

use crate::bundle::{SignatureBundle, SignatureValue};
use crate::errors::SigningError;

/// Produces signature bundles from resolved payloads.
///
/// Both attestation values are derived from the same canonical encoding: the
/// digest is SHA-384 over the canonical bytes, and the signature is ECDSA
/// over those bytes as well (hashed inside the signing primitive), not over
/// the digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Signer {
    canonicalizer: Canonicalizer,
}

impl Signer {
    /// Creates a signer over the given canonicalizer.
    pub fn new(canonicalizer: Canonicalizer) -> Self {
        Self { canonicalizer }
    }

    /// Resolves `fields` into a payload and signs it, consuming `key_pair`.
    ///
    /// When the caller did not supply a timestamp the payload is stamped with
    /// the current UTC time; the bundle timestamp always mirrors the payload
    /// timestamp. The key pair is consumed whether or not signing succeeds,
    /// so a failed call cannot leak a reusable private key.
    pub fn sign(
        &self,
        fields: PayloadFields,
        key_pair: EphemeralKeyPair,
    ) -> Result<SignatureBundle, SigningError> {
        let payload = SigningPayload::resolve(fields, current_timestamp());
        let stamped_at = Timestamp::new(payload.timestamp.clone());

        let canonical = self.canonicalizer.canonicalize(&payload)?;
        let hash = Digest::of_canonical(&canonical);
        let signature = key_pair.sign(canonical.as_bytes())?;

        tracing::debug!(
            invoice_id = %payload.invoice_id,
            hash = %hash.as_str(),
            "produced signature bundle"
        );

        Ok(SignatureBundle {
            data: payload,
            hash,
            signature: SignatureValue::from_signature(&signature),
            timestamp: stamped_at,
            version: SCHEMA_VERSION.to_string(),
        })
    }
}

fn current_timestamp() -> Timestamp {
    Timestamp::new(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}
