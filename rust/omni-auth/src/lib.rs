//! Request authentication for the Omni control-plane client.
//!
//! Outbound calls are authenticated by signing a canonical payload — the
//! RPC method path plus an allow-listed subset of call metadata — with the
//! caller's private key, and attaching the payload and a structured
//! signature string as metadata the server can verify independently, with
//! no shared secret or token exchange. A separate path issues short-lived
//! bearer tokens signed with the same key material.
//!
//! ```no_run
//! use chrono::Utc;
//! use omni_auth::{MetadataMap, RequestSigner};
//! use omni_credentials::{KeyCredential, SigningIdentity};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credential = KeyCredential::read("credentials").await?;
//! let signer = RequestSigner::new(SigningIdentity::from_credential(&credential)?);
//!
//! let mut metadata = MetadataMap::new();
//! signer.sign(
//!     &mut metadata,
//!     "/omni.management.ManagementService/ListClusters",
//!     Utc::now(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod payload;
pub mod request;
pub mod token;

pub use config::{AuthConfig, CredentialSource};
pub use error::AuthError;
pub use metadata::MetadataMap;
pub use payload::{ALLOWED_HEADERS, Payload};
pub use request::{
    PAYLOAD_HEADER, RequestSigner, SIGNATURE_HEADER, SIGNATURE_VERSION, TIMESTAMP_HEADER,
};
