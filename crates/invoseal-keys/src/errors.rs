use thiserror::Error;

/// Errors raised while generating a key pair.
#[derive(Debug, Error)]
pub enum KeyGenerationError {
    /// The runtime randomness source refused to produce bytes.
    #[error("randomness provider unavailable: {0}")]
    ProviderUnavailable(String),
    /// No candidate scalar was accepted by the curve within the draw budget.
    #[error("no valid signing key after {0} draws")]
    CandidatesExhausted(usize),
    /// The generated public key could not be exported.
    #[error("public key export failed: {0}")]
    Export(String),
}

/// Errors raised while decoding a transported public key.
#[derive(Debug, Error)]
pub enum KeyDecodeError {
    /// The encoded key is not valid base64.
    #[error("public key is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not an SPKI document for the signing curve.
    #[error("public key is not valid SPKI: {0}")]
    Spki(String),
}
