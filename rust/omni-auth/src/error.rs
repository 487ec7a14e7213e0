//! Failure type for the signing layer.

use omni_credentials::CredentialsError;

/// Errors surfaced by request signing and token generation.
///
/// There is no transient-failure handling here: nothing in this crate does
/// network I/O, so retries, if any, belong to the transport layer above.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Credential loading or key parsing failed.
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// The signing primitive itself failed.
    #[error("signing failed: {0}")]
    Signature(#[from] signature::Error),

    /// The canonical payload or token claims could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
