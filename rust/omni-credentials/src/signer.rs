//! Signature dispatch over the supported key algorithms.
//!
//! The algorithm is decided once, at key-parse time, and carried as the
//! variant of [`SigningKey`]. Everything downstream, request signing and
//! token generation alike, switches on that tag.

use sha2::Sha256;
use signature::{SignatureEncoding as _, Signer as _};

/// Supported signing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    /// RSA with PKCS#1 v1.5 padding over SHA-256.
    Rsa,
    /// ECDSA over NIST P-256 with SHA-256.
    Ecdsa,
    /// Ed25519.
    Ed25519,
}

impl KeyAlgorithm {
    /// Compact-token (JWS) algorithm tag for this key type.
    #[must_use]
    pub const fn jwt_alg(&self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "RS256",
            KeyAlgorithm::Ecdsa => "ES256",
            KeyAlgorithm::Ed25519 => "EdDSA",
        }
    }
}

impl std::fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            KeyAlgorithm::Rsa => "RSA",
            KeyAlgorithm::Ecdsa => "ECDSA-P256",
            KeyAlgorithm::Ed25519 => "Ed25519",
        })
    }
}

/// A private signing key, tagged by algorithm.
///
/// Immutable after construction. [`SigningKey::sign`] takes `&self`, so a
/// single key can serve concurrent signing calls without synchronization.
#[derive(Clone)]
pub enum SigningKey {
    /// RSA private key, pre-wrapped for PKCS#1 v1.5 / SHA-256 signing.
    Rsa(rsa::pkcs1v15::SigningKey<Sha256>),
    /// P-256 private scalar.
    Ecdsa(p256::ecdsa::SigningKey),
    /// Ed25519 seed.
    Ed25519(ed25519_dalek::SigningKey),
}

impl SigningKey {
    /// The algorithm tag of this key.
    #[must_use]
    pub const fn algorithm(&self) -> KeyAlgorithm {
        match self {
            SigningKey::Rsa(_) => KeyAlgorithm::Rsa,
            SigningKey::Ecdsa(_) => KeyAlgorithm::Ecdsa,
            SigningKey::Ed25519(_) => KeyAlgorithm::Ed25519,
        }
    }

    /// Sign `data`, producing raw signature bytes.
    ///
    /// - RSA: deterministic PKCS#1 v1.5 over a SHA-256 digest of `data`.
    /// - ECDSA: SHA-256 digest, then fixed-width `r ‖ s` output. Each
    ///   component is left-padded to the 32-byte field width and the two
    ///   are concatenated; the verifier expects this 64-byte layout, never
    ///   DER.
    /// - Ed25519: the raw message is signed directly, no external pre-hash.
    ///
    /// # Errors
    ///
    /// Propagates the underlying primitive's failure; signing is otherwise
    /// a pure function of `(data, key)` and is never retried.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>, signature::Error> {
        match self {
            SigningKey::Rsa(key) => {
                let signature: rsa::pkcs1v15::Signature = key.try_sign(data)?;
                Ok(signature.to_vec())
            }
            SigningKey::Ecdsa(key) => {
                let signature: p256::ecdsa::Signature = key.try_sign(data)?;
                let (r, s) = signature.split_bytes();

                let mut out = Vec::with_capacity(64);
                out.extend_from_slice(r.as_slice());
                out.extend_from_slice(s.as_slice());
                Ok(out)
            }
            SigningKey::Ed25519(key) => {
                let signature: ed25519_dalek::Signature = key.try_sign(data)?;
                Ok(signature.to_bytes().to_vec())
            }
        }
    }
}

// Key material stays out of logs and error messages.
impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningKey").field(&self.algorithm()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signature::Verifier as _;
    use testresult::TestResult;

    #[test]
    fn test_ed25519_sign_and_verify() -> TestResult {
        let dalek = ed25519_dalek::SigningKey::from_bytes(&[42u8; 32]);
        let key = SigningKey::Ed25519(dalek.clone());

        let message = b"these pretzels are making me thirsty";
        let raw = key.sign(message)?;
        assert_eq!(raw.len(), 64);

        let signature = ed25519_dalek::Signature::from_slice(&raw)?;
        dalek.verifying_key().verify(message, &signature)?;

        Ok(())
    }

    #[test]
    fn test_ecdsa_signature_is_fixed_width() -> TestResult {
        let scalar = p256::ecdsa::SigningKey::from_slice(&[7u8; 32])?;
        let key = SigningKey::Ecdsa(scalar.clone());

        let message = b"canonical payload bytes";
        let raw = key.sign(message)?;
        assert_eq!(raw.len(), 64, "r and s must each be padded to 32 bytes");

        let signature = p256::ecdsa::Signature::from_slice(&raw)?;
        scalar.verifying_key().verify(message, &signature)?;

        Ok(())
    }

    #[test]
    fn test_ecdsa_signatures_differ_per_message() -> TestResult {
        let key = SigningKey::Ecdsa(p256::ecdsa::SigningKey::from_slice(&[7u8; 32])?);

        assert_ne!(key.sign(b"one")?, key.sign(b"two")?);

        Ok(())
    }

    #[test]
    fn test_jwt_alg_mapping() {
        assert_eq!(KeyAlgorithm::Rsa.jwt_alg(), "RS256");
        assert_eq!(KeyAlgorithm::Ecdsa.jwt_alg(), "ES256");
        assert_eq!(KeyAlgorithm::Ed25519.jwt_alg(), "EdDSA");
    }

    #[test]
    fn test_debug_does_not_leak_key_material() {
        let key = SigningKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&[42u8; 32]));
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("42"));
        assert!(rendered.contains("Ed25519"));
    }
}
