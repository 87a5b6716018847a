//! Canonical data model primitives for Invoseal signing payloads.
//!
//! These types pin down the exact bytes that participate in hashing and
//! signature verification. Two independently constructed payloads that agree
//! field-by-field must canonicalize to identical bytes, so every field that
//! participates in attestation lives in this crate.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic hashing and signing.
pub mod canonicalizer;
/// Digest primitives for canonical bytes.
pub mod digest;
/// Signing payload model and field resolution.
pub mod payload;
/// UTC timestamp newtype shared by payloads and bundles.
pub mod timestamp;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{CanonicalString, CanonicalizationError, Canonicalizer};
pub use digest::Digest;
pub use payload::{PayloadFields, SCHEMA_VERSION, SigningPayload};
pub use timestamp::Timestamp;
pub use validation::ValidationError;
