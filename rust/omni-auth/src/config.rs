//! Authentication configuration for a host client.

use std::path::PathBuf;

use omni_credentials::{KeyCredential, SigningIdentity};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::request::RequestSigner;

/// Where the client's credential blob comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// Path to a file whose entire contents are the base64 blob.
    File(PathBuf),
    /// The base64 blob itself.
    Inline(String),
}

/// Authentication section of a client configuration.
///
/// Absent credentials are a deliberate mode, not an error: the client is
/// built without an authenticator and calls go out unsigned, for the
/// server to accept or reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Credential source; `None` disables request signing.
    #[serde(default)]
    pub credentials: Option<CredentialSource>,
}

impl AuthConfig {
    /// Build the request signer this configuration calls for.
    ///
    /// Returns `Ok(None)` when no credentials are configured.
    ///
    /// # Errors
    ///
    /// Everything credential loading and key parsing can return, including
    /// [`CredentialsError::FileNotFound`] for a missing credential file.
    ///
    /// [`CredentialsError::FileNotFound`]: omni_credentials::CredentialsError::FileNotFound
    pub async fn signer(&self) -> Result<Option<RequestSigner>, AuthError> {
        let Some(source) = &self.credentials else {
            tracing::warn!("no credentials configured, requests will not be signed");
            return Ok(None);
        };

        let credential = match source {
            CredentialSource::File(path) => KeyCredential::read(path).await?,
            CredentialSource::Inline(blob) => KeyCredential::decode(blob)?,
        };
        let identity = SigningIdentity::from_credential(&credential)?;

        Ok(Some(RequestSigner::new(identity)))
    }
}
