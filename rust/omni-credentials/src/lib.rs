//! Key material for authenticating Omni API calls.
//!
//! A caller is issued a credential blob: base64 text wrapping a JSON object
//! with the account name and an armored OpenPGP private key. This crate
//! decodes that blob, selects the signing-capable key from the ring, and
//! exposes it as a [`SigningIdentity`] — an immutable name / fingerprint /
//! private-key bundle that the signing layer invokes on every outbound call.
//!
//! Key parsing is done exactly once, when the owning client is constructed.
//! After that a [`SigningIdentity`] is read-only and can be shared by
//! reference across concurrent signing calls.

pub mod credential;
pub mod error;
pub mod identity;
pub mod keyring;
pub mod signer;

pub use credential::KeyCredential;
pub use error::CredentialsError;
pub use identity::SigningIdentity;
pub use keyring::SigningKeyPair;
pub use signer::{KeyAlgorithm, SigningKey};
