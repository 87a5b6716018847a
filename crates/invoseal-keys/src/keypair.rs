use std::fmt;

use p384::ecdsa::signature::Signer;
use p384::ecdsa::{Signature, SigningKey, VerifyingKey};

/// Single-use ECDSA P-384 key pair.
///
/// The pair cannot be cloned, and [`EphemeralKeyPair::sign`] takes it by
/// value, so the private half is consumed by the one signature it produces.
/// The underlying secret scalar is zeroized when the key is dropped.
pub struct EphemeralKeyPair {
    signing_key: SigningKey,
}

impl EphemeralKeyPair {
    pub(crate) fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Public half of the pair.
    pub fn verifying_key(&self) -> VerifyingKey {
        *self.signing_key.verifying_key()
    }

    /// Signs `message` with a deterministic (RFC 6979) nonce, consuming the pair.
    ///
    /// The message is hashed with SHA-384 inside the signing primitive; callers
    /// pass the raw canonical bytes, not a digest.
    pub fn sign(self, message: &[u8]) -> Result<Signature, p384::ecdsa::Error> {
        let signature: Signature = self.signing_key.try_sign(message)?;
        Ok(signature)
    }
}

impl fmt::Debug for EphemeralKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EphemeralKeyPair(***)")
    }
}
