//! Armored key-ring parsing and signing-key selection.
//!
//! A credential's `pgp_key` field is an armored OpenPGP private-key block,
//! possibly holding several keys. Parsing happens once per client: the
//! first key flagged signing-capable is selected (primary key first, then
//! subkeys in ring order), its secret material is converted into a
//! [`SigningKey`], and its fingerprint becomes the caller's stable public
//! identity.

use pgp::composed::{Deserializable as _, SignedSecretKey};
use pgp::crypto::public_key::PublicKeyAlgorithm;
use pgp::crypto::{ecdsa, eddsa_legacy};
use pgp::types::{
    EcdsaPublicParams, Fingerprint, KeyDetails as _, PlainSecretParams, PublicParams, SecretParams,
};
use rsa::traits::PublicKeyParts as _;
use rsa::BigUint;

use crate::error::CredentialsError;
use crate::signer::{KeyAlgorithm, SigningKey};

/// A parsed signing key plus the fingerprint derived from its public half.
#[derive(Debug, Clone)]
pub struct SigningKeyPair {
    key: SigningKey,
    fingerprint: String,
}

impl SigningKeyPair {
    /// Parse an armored private-key block and select its signing key.
    ///
    /// # Errors
    ///
    /// - [`CredentialsError::InvalidKeyFormat`] if the block is not a
    ///   parseable key ring.
    /// - [`CredentialsError::NoSigningKey`] if no key carries the signing
    ///   flag.
    /// - [`CredentialsError::KeyExtractionFailed`] for passphrase-protected
    ///   secret material (passphrases are unsupported by contract).
    /// - [`CredentialsError::UnsupportedKeyAlgorithm`] for key types outside
    ///   RSA / ECDSA P-256 / Ed25519.
    pub fn parse(armored: &str) -> Result<Self, CredentialsError> {
        let (ring, _headers) = SignedSecretKey::from_string(armored)?;

        // The primary key's flags live on its user self-signatures, a
        // subkey's on its binding signature.
        let primary = &ring.primary_key;
        if ring
            .details
            .users
            .iter()
            .flat_map(|user| user.signatures.iter())
            .any(|sig| sig.key_flags().sign())
        {
            return Self::extract(
                primary.fingerprint(),
                primary.algorithm(),
                primary.public_params(),
                primary.secret_params(),
            );
        }

        for subkey in &ring.secret_subkeys {
            if subkey.signatures.iter().any(|sig| sig.key_flags().sign()) {
                return Self::extract(
                    subkey.key.fingerprint(),
                    subkey.key.algorithm(),
                    subkey.key.public_params(),
                    subkey.key.secret_params(),
                );
            }
        }

        Err(CredentialsError::NoSigningKey)
    }

    /// The selected private key.
    #[must_use]
    pub fn key(&self) -> &SigningKey {
        &self.key
    }

    /// Lowercase hex encoding of the key's OpenPGP fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// The algorithm tag decided at parse time.
    #[must_use]
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.key.algorithm()
    }

    fn extract(
        fingerprint: Fingerprint,
        algorithm: PublicKeyAlgorithm,
        public: &PublicParams,
        secret: &SecretParams,
    ) -> Result<Self, CredentialsError> {
        let plain = match secret {
            SecretParams::Plain(plain) => plain,
            SecretParams::Encrypted(_) => {
                return Err(CredentialsError::KeyExtractionFailed(
                    "secret key is passphrase-protected".to_string(),
                ));
            }
        };

        let key = match (plain, public) {
            (PlainSecretParams::RSA(secret), PublicParams::RSA(params)) => {
                let (d, p, q, _u) = secret.to_bytes();
                let private = rsa::RsaPrivateKey::from_components(
                    params.key.n().clone(),
                    params.key.e().clone(),
                    BigUint::from_bytes_be(&d),
                    vec![BigUint::from_bytes_be(&p), BigUint::from_bytes_be(&q)],
                )
                .map_err(|e| CredentialsError::KeyExtractionFailed(e.to_string()))?;

                SigningKey::Rsa(rsa::pkcs1v15::SigningKey::new(private))
            }
            (
                PlainSecretParams::ECDSA(ecdsa::SecretKey::P256(secret)),
                PublicParams::ECDSA(EcdsaPublicParams::P256 { .. }),
            ) => {
                let scalar = left_pad::<32>(&secret.to_bytes())?;
                let key = p256::ecdsa::SigningKey::from_slice(&scalar)
                    .map_err(|e| CredentialsError::KeyExtractionFailed(e.to_string()))?;

                SigningKey::Ecdsa(key)
            }
            (PlainSecretParams::ECDSA(_), _) => {
                return Err(CredentialsError::UnsupportedKeyAlgorithm(
                    "ECDSA over a curve other than P-256".to_string(),
                ));
            }
            (PlainSecretParams::EdDSALegacy(eddsa_legacy::SecretKey::Ed25519(secret)), _) => {
                let seed = left_pad::<32>(secret.as_bytes())?;

                SigningKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&seed))
            }
            _ => {
                return Err(CredentialsError::UnsupportedKeyAlgorithm(format!(
                    "{algorithm:?}"
                )));
            }
        };

        let fingerprint = hex::encode(fingerprint.as_bytes());
        tracing::debug!(algorithm = %key.algorithm(), fingerprint, "parsed signing key");

        Ok(Self { key, fingerprint })
    }
}

/// Restore an MPI's big-endian bytes to the fixed field width. MPIs strip
/// leading zero octets, so short encodings are valid and must be padded
/// back on the left.
fn left_pad<const N: usize>(bytes: &[u8]) -> Result<[u8; N], CredentialsError> {
    if bytes.len() > N {
        return Err(CredentialsError::KeyExtractionFailed(format!(
            "key material is {} bytes, expected at most {N}",
            bytes.len()
        )));
    }

    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}
