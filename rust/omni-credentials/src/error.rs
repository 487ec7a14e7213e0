//! Failure taxonomy for credential handling.

use std::path::PathBuf;

/// Errors produced while loading credentials and extracting key material.
///
/// Every variant is deterministic for a given input, so none of them are
/// retried internally. Callers branch on the variant, not on error text.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    /// The credential source is not valid base64.
    #[error("credential is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// The decoded credential is not a well-formed JSON document.
    #[error("malformed credential: {0}")]
    MalformedCredential(String),

    /// A required credential field is absent or null.
    #[error("credential field {0:?} is missing")]
    MissingField(&'static str),

    /// The armored block could not be parsed as an OpenPGP key ring.
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(#[from] pgp::errors::Error),

    /// The key ring parsed, but no key in it is flagged signing-capable.
    #[error("key ring contains no signing-capable key")]
    NoSigningKey,

    /// The private key component could not be extracted, e.g. because the
    /// key is passphrase-protected.
    #[error("failed to extract private key: {0}")]
    KeyExtractionFailed(String),

    /// The key type is valid OpenPGP but not one of the supported signing
    /// algorithms.
    #[error("unsupported key algorithm: {0}")]
    UnsupportedKeyAlgorithm(String),

    /// The credential file path does not exist.
    #[error("credential file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other I/O failure while reading the credential source.
    #[error("i/o error reading credential: {0}")]
    Io(#[from] std::io::Error),
}
