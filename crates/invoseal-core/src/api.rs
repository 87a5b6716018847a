//! One-call entry points wiring key generation, signing, and verification.

use rand_core::CryptoRngCore;

use invoseal_canonical::{Canonicalizer, PayloadFields};
use invoseal_keys::{EncodedPublicKey, KeyPairProvider};

use crate::bundle::SignatureBundle;
use crate::errors::SignRequestError;
use crate::signer::Signer;
use crate::verifier::Verifier;

/// A signature bundle paired with the public key that verifies it.
///
/// The private half of the pair is gone by the time this value exists; the
/// bundle and public key together are everything verification needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedDocument {
    /// The attestation bundle.
    pub bundle: SignatureBundle,
    /// Public half of the single-use pair that produced `bundle`.
    pub public_key: EncodedPublicKey,
}

/// Generates a fresh single-use key pair and signs `fields` with it.
///
/// Each call draws a new key pair from `provider`, so two signatures over
/// identical fields never share a key.
pub fn request_signature<R: CryptoRngCore>(
    provider: &mut KeyPairProvider<R>,
    fields: PayloadFields,
) -> Result<SignedDocument, SignRequestError> {
    let generated = provider.generate()?;
    let signer = Signer::new(Canonicalizer::new());
    let bundle = signer.sign(fields, generated.key_pair)?;
    Ok(SignedDocument {
        bundle,
        public_key: generated.public_key,
    })
}

/// Boolean verification outcome for `bundle` under `public_key`.
///
/// Never raises; any failure yields `false`. Call
/// [`Verifier::verify_with_diagnostic`] directly when the reason matters.
pub fn request_verification(bundle: &SignatureBundle, public_key: &EncodedPublicKey) -> bool {
    Verifier::new(Canonicalizer::new()).verify(bundle, public_key)
}
