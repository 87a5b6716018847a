//! Ephemeral ECDSA P-384 key pairs for document signing.
//!
//! This crate provides:
//! - [`KeyPairProvider`]: fallible key generation over an injectable randomness source
//! - [`EphemeralKeyPair`]: the private half of a pair, consumed by its one signature
//! - [`EncodedPublicKey`]: the public half as base64-wrapped SPKI DER
//!
//! Key pairs are never persisted. The private half lives exactly as long as
//! the signing call that consumes it; the public half travels alongside the
//! signature it verifies.
//!
#![deny(missing_docs)]

/// Error types for key generation and decoding.
pub mod errors;
/// Single-use signing key pairs.
pub mod keypair;
/// Key pair generation over injectable randomness.
pub mod provider;
/// Transportable public key encoding.
pub mod public_key;

pub use errors::{KeyDecodeError, KeyGenerationError};
pub use keypair::EphemeralKeyPair;
pub use provider::{GeneratedKeyPair, KeyPairProvider};
pub use public_key::EncodedPublicKey;
