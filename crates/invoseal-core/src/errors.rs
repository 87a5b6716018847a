use thiserror::Error;

use invoseal_canonical::CanonicalizationError;
use invoseal_keys::KeyGenerationError;

/// Errors raised while producing a signature bundle.
#[derive(Debug, Error)]
pub enum SigningError {
    /// Canonical encoding of the payload failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
    /// The signing primitive rejected the key or message.
    #[error("signing failed: {0}")]
    Primitive(#[from] p384::ecdsa::Error),
}

/// Errors raised by the signing entry point.
#[derive(Debug, Error)]
pub enum SignRequestError {
    /// Key pair generation failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] KeyGenerationError),
    /// Bundle production failed.
    #[error("bundle production failed: {0}")]
    Signing(#[from] SigningError),
}

/// Errors raised while decoding a transported signature value.
#[derive(Debug, Error)]
pub enum SignatureDecodeError {
    /// The encoded signature is not valid base64.
    #[error("signature is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not a signature for the signing curve.
    #[error("signature bytes rejected: {0}")]
    Ecdsa(String),
}
