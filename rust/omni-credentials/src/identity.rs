//! Caller identity: an account name bound to parsed key material.

use crate::credential::KeyCredential;
use crate::error::CredentialsError;
use crate::keyring::SigningKeyPair;
use crate::signer::KeyAlgorithm;

/// An account name plus the signing key that proves it.
///
/// Built once when the owning client is constructed. The key handle is
/// owned exclusively by this struct and never mutated afterwards, so a
/// `&SigningIdentity` can be shared across concurrent signing calls.
#[derive(Debug, Clone)]
pub struct SigningIdentity {
    name: String,
    keypair: SigningKeyPair,
}

impl SigningIdentity {
    /// Bind an already-parsed key pair to `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, keypair: SigningKeyPair) -> Self {
        Self {
            name: name.into(),
            keypair,
        }
    }

    /// Parse the credential's armored key and bind it to the credential
    /// name.
    ///
    /// # Errors
    ///
    /// Everything [`SigningKeyPair::parse`] returns.
    pub fn from_credential(credential: &KeyCredential) -> Result<Self, CredentialsError> {
        Ok(Self {
            name: credential.name.clone(),
            keypair: SigningKeyPair::parse(&credential.pgp_key)?,
        })
    }

    /// The account name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase hex fingerprint of the signing key.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        self.keypair.fingerprint()
    }

    /// The key's algorithm tag.
    #[must_use]
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.keypair.algorithm()
    }

    /// Sign `data` with this identity's key.
    ///
    /// # Errors
    ///
    /// Propagates the signing primitive's failure unchanged.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>, signature::Error> {
        self.keypair.key().sign(data)
    }
}
