use std::fmt;

use p384::ecdsa::signature::Verifier as _;

use invoseal_canonical::{Canonicalizer, Digest, SCHEMA_VERSION};
use invoseal_keys::EncodedPublicKey;

use crate::bundle::{SignatureBundle, SignatureValue};

/// Outcome of a verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationVerdict {
    /// Digest and signature both check out.
    Valid,
    /// The bundle failed verification; the diagnostic names the first failed check.
    Invalid(VerificationDiagnostic),
}

impl VerificationVerdict {
    /// True when every check passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationVerdict::Valid)
    }
}

/// First check that failed during verification.
///
/// Diagnostics are ordered by the verification pipeline: structural problems
/// surface before digest comparison, and the signature is only examined once
/// the digest matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationDiagnostic {
    /// The bundle or public key is structurally unusable.
    MalformedBundle {
        /// Which part was unusable.
        reason: String,
    },
    /// Recomputed digest differs from the stored one; the payload was altered.
    HashMismatch {
        /// Digest stored in the bundle.
        stored: String,
        /// Digest recomputed from the payload.
        computed: String,
    },
    /// Digest matches but the signature does not verify under the public key.
    SignatureMismatch,
    /// The payload could not be re-canonicalized.
    Canonicalization {
        /// Error reported by the canonicalizer.
        reason: String,
    },
}

impl fmt::Display for VerificationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBundle { reason } => write!(f, "malformed bundle: {reason}"),
            Self::HashMismatch { stored, computed } => {
                write!(f, "hash mismatch: stored {stored}, computed {computed}")
            }
            Self::SignatureMismatch => {
                f.write_str("signature does not verify under the supplied public key")
            }
            Self::Canonicalization { reason } => write!(f, "canonicalization failed: {reason}"),
        }
    }
}

/// Checks signature bundles against the public key they were produced with.
///
/// Verification is read-only and never raises: malformed input, decode
/// failures, and primitive rejections all degrade to an invalid verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier {
    canonicalizer: Canonicalizer,
}

impl Verifier {
    /// Creates a verifier over the given canonicalizer.
    pub fn new(canonicalizer: Canonicalizer) -> Self {
        Self { canonicalizer }
    }

    /// Boolean verification outcome for `bundle` under `public_key`.
    pub fn verify(&self, bundle: &SignatureBundle, public_key: &EncodedPublicKey) -> bool {
        self.verify_with_diagnostic(bundle, public_key).is_valid()
    }

    /// Verification outcome along with the first failed check, if any.
    ///
    /// The digest comparison runs before any signature work: a bundle whose
    /// payload no longer matches its stored digest is rejected without
    /// decoding the key or signature.
    pub fn verify_with_diagnostic(
        &self,
        bundle: &SignatureBundle,
        public_key: &EncodedPublicKey,
    ) -> VerificationVerdict {
        match self.run_checks(bundle, public_key) {
            Ok(()) => {
                tracing::debug!(invoice_id = %bundle.data.invoice_id, "signature bundle verified");
                VerificationVerdict::Valid
            }
            Err(diagnostic) => {
                tracing::debug!(%diagnostic, "signature bundle rejected");
                VerificationVerdict::Invalid(diagnostic)
            }
        }
    }

    fn run_checks(
        &self,
        bundle: &SignatureBundle,
        public_key: &EncodedPublicKey,
    ) -> Result<(), VerificationDiagnostic> {
        if bundle.version != SCHEMA_VERSION {
            return Err(VerificationDiagnostic::MalformedBundle {
                reason: format!("unsupported bundle version '{}'", bundle.version),
            });
        }
        if Digest::parse(bundle.hash.as_str()).is_err() {
            return Err(VerificationDiagnostic::MalformedBundle {
                reason: "stored hash is not a digest encoding".to_string(),
            });
        }
        if SignatureValue::parse(bundle.signature.as_str()).is_err() {
            return Err(VerificationDiagnostic::MalformedBundle {
                reason: "stored signature is not a curve signature encoding".to_string(),
            });
        }

        let canonical = self
            .canonicalizer
            .canonicalize(&bundle.data)
            .map_err(|err| VerificationDiagnostic::Canonicalization {
                reason: err.to_string(),
            })?;
        let computed = Digest::of_canonical(&canonical);
        if computed != bundle.hash {
            return Err(VerificationDiagnostic::HashMismatch {
                stored: bundle.hash.as_str().to_string(),
                computed: computed.as_str().to_string(),
            });
        }

        let verifying_key =
            public_key
                .decode()
                .map_err(|err| VerificationDiagnostic::MalformedBundle {
                    reason: err.to_string(),
                })?;
        let signature =
            bundle
                .signature
                .decode()
                .map_err(|err| VerificationDiagnostic::MalformedBundle {
                    reason: err.to_string(),
                })?;

        verifying_key
            .verify(canonical.as_bytes(), &signature)
            .map_err(|_| VerificationDiagnostic::SignatureMismatch)
    }
}
