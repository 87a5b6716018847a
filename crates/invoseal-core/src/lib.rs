//! Signing and verification core for Invoseal attestation bundles.
//!
//! This crate provides:
//! - [`Signer`]: resolves payload fields, canonicalizes, and produces a [`SignatureBundle`]
//! - [`Verifier`]: re-derives the canonical bytes and checks digest and signature
//! - [`request_signature`] / [`request_verification`]: one-call entry points
//!
//! ## Quick Start
//!
//! ```rust
//! use invoseal_canonical::PayloadFields;
//! use invoseal_core::{request_signature, request_verification};
//! use invoseal_keys::KeyPairProvider;
//!
//! let mut provider = KeyPairProvider::system();
//! let fields = PayloadFields::new("INV-2041", "user-7", "data:image/png;base64,AAAA");
//! let signed = request_signature(&mut provider, fields)?;
//!
//! assert!(request_verification(&signed.bundle, &signed.public_key));
//! # Ok::<(), invoseal_core::SignRequestError>(())
//! ```
//!
//! The digest and the signature are both computed over the same canonical
//! payload encoding. The digest gives verification a cheap first check for
//! payload tampering; the signature proves possession of the single-use
//! private key. Verification never raises: every failure degrades to a
//! `false` verdict with a diagnostic naming the first check that failed.

#![deny(missing_docs)]

/// One-call signing and verification entry points.
pub mod api;
/// Signature bundle model.
pub mod bundle;
/// Error types for signing operations.
pub mod errors;
/// Bundle production.
pub mod signer;
/// Bundle verification.
pub mod verifier;

pub use api::{request_signature, request_verification, SignedDocument};
pub use bundle::{SignatureBundle, SignatureValue};
pub use errors::{SignatureDecodeError, SigningError, SignRequestError};
pub use signer::Signer;
pub use verifier::{VerificationDiagnostic, VerificationVerdict, Verifier};
