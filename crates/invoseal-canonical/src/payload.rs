use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// Schema tag stamped into every payload and bundle.
pub const SCHEMA_VERSION: &str = "1.0";

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Fully resolved signing payload.
///
/// Field declaration order is load-bearing: the canonical encoding emits
/// members in exactly this order, and reordering fields changes the bytes
/// that are hashed and signed. Absent fields resolve to the empty string
/// (`version` resolves to [`SCHEMA_VERSION`]) so that sparse and explicit
/// inputs canonicalize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningPayload {
    /// Payload schema tag; absent or empty values resolve to `1.0`.
    #[serde(default = "default_version")]
    pub version: String,
    /// Moment the attestation was produced, RFC3339 UTC with millisecond precision.
    #[serde(default)]
    pub timestamp: String,
    /// Identifier of the invoice being attested.
    #[serde(rename = "invoiceId", default)]
    pub invoice_id: String,
    /// Identifier of the signing principal.
    #[serde(rename = "userId", default)]
    pub user_id: String,
    /// Data-URL encoded image of the handwritten signature.
    #[serde(rename = "signatureImage", default)]
    pub signature_image: String,
    /// Caller-supplied signing moment; falls back to `timestamp` when absent.
    #[serde(rename = "signedAt", default)]
    pub signed_at: String,
}

impl SigningPayload {
    /// Resolves caller-supplied fields into a complete payload.
    ///
    /// `fallback` supplies the `timestamp` when the caller did not, and the
    /// resolved `timestamp` in turn supplies `signedAt` when that is absent.
    pub fn resolve(fields: PayloadFields, fallback: Timestamp) -> Self {
        let PayloadFields {
            invoice_id,
            user_id,
            signature_image,
            signed_at,
            timestamp,
        } = fields;
        let timestamp = timestamp.unwrap_or_else(|| fallback.as_ref().to_string());
        let signed_at = signed_at.unwrap_or_else(|| timestamp.clone());
        Self {
            version: SCHEMA_VERSION.to_string(),
            timestamp,
            invoice_id,
            user_id,
            signature_image,
            signed_at,
        }
    }
}

/// Caller-supplied fields for a signing request.
///
/// `version` is deliberately absent; the schema tag is owned by the payload
/// model and cannot be overridden by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadFields {
    /// Identifier of the invoice being attested.
    pub invoice_id: String,
    /// Identifier of the signing principal.
    pub user_id: String,
    /// Data-URL encoded image of the handwritten signature.
    pub signature_image: String,
    /// Optional signing moment; resolved from `timestamp` when absent.
    pub signed_at: Option<String>,
    /// Optional attestation moment; stamped with the current time when absent.
    pub timestamp: Option<String>,
}

impl PayloadFields {
    /// Creates a field set for the given invoice, principal, and signature image.
    pub fn new(
        invoice_id: impl Into<String>,
        user_id: impl Into<String>,
        signature_image: impl Into<String>,
    ) -> Self {
        Self {
            invoice_id: invoice_id.into(),
            user_id: user_id.into(),
            signature_image: signature_image.into(),
            signed_at: None,
            timestamp: None,
        }
    }

    /// Supplies an explicit signing moment.
    pub fn with_signed_at(mut self, signed_at: impl Into<String>) -> Self {
        self.signed_at = Some(signed_at.into());
        self
    }

    /// Supplies an explicit attestation moment instead of the current time.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}
