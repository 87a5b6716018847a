use p384::ecdsa::SigningKey;
use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::errors::KeyGenerationError;
use crate::keypair::EphemeralKeyPair;
use crate::public_key::EncodedPublicKey;

/// Secret scalar width for the signing curve, in bytes.
const SEED_LEN: usize = 48;

/// Upper bound on candidate scalar draws before generation gives up.
const MAX_DRAWS: usize = 8;

/// Freshly generated key material: the private half and its exported public half.
#[derive(Debug)]
pub struct GeneratedKeyPair {
    /// Private half; consumed by the one signature it may produce.
    pub key_pair: EphemeralKeyPair,
    /// Public half, ready to travel alongside the signature.
    pub public_key: EncodedPublicKey,
}

/// Key pair generator backed by a caller-chosen randomness source.
///
/// Production call sites use [`KeyPairProvider::system`]; tests inject a
/// seeded source through [`KeyPairProvider::from_rng`] to make generation
/// reproducible.
pub struct KeyPairProvider<R: CryptoRngCore> {
    rng: R,
}

impl KeyPairProvider<OsRng> {
    /// Provider backed by operating system randomness.
    pub fn system() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: CryptoRngCore> KeyPairProvider<R> {
    /// Provider backed by an explicit randomness source.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a fresh P-384 key pair together with its exported public half.
    ///
    /// Candidate scalars are drawn from the randomness source until the curve
    /// accepts one; zero and out-of-range candidates are rejected and redrawn.
    /// Seed buffers are zeroized before the draw loop continues.
    pub fn generate(&mut self) -> Result<GeneratedKeyPair, KeyGenerationError> {
        for _ in 0..MAX_DRAWS {
            let mut seed = [0u8; SEED_LEN];
            self.rng
                .try_fill_bytes(&mut seed)
                .map_err(|err| KeyGenerationError::ProviderUnavailable(err.to_string()))?;
            let candidate = SigningKey::from_bytes((&seed).into());
            seed.zeroize();
            if let Ok(signing_key) = candidate {
                let public_key = EncodedPublicKey::from_verifying_key(signing_key.verifying_key())?;
                return Ok(GeneratedKeyPair {
                    key_pair: EphemeralKeyPair::new(signing_key),
                    public_key,
                });
            }
        }
        Err(KeyGenerationError::CandidatesExhausted(MAX_DRAWS))
    }
}
