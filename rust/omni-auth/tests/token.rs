//! Bearer-token generation against real key fixtures.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use omni_auth::token::{self, Claims, Header, VALIDITY_SECS};
use omni_credentials::{SigningIdentity, SigningKey, SigningKeyPair};
use signature::Verifier as _;
use testresult::TestResult;

const ED25519_KEY: &str = include_str!("fixtures/ed25519.asc");
const RSA_KEY: &str = include_str!("fixtures/rsa.asc");
const P256_KEY: &str = include_str!("fixtures/p256.asc");

fn identity(name: &str, armored: &str) -> SigningIdentity {
    SigningIdentity::new(name, SigningKeyPair::parse(armored).expect("fixture key parses"))
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
}

#[test]
fn test_token_has_three_base64url_segments() -> TestResult {
    let token = token::generate(&identity("alice", ED25519_KEY), "alice", now())?;

    let segments: Vec<_> = token.split('.').collect();
    assert_eq!(segments.len(), 3);
    for segment in segments {
        assert!(!segment.is_empty());
        URL_SAFE_NO_PAD.decode(segment)?;
    }

    Ok(())
}

#[test]
fn test_claims_carry_subject_and_validity_window() -> TestResult {
    let token = token::generate(&identity("alice", ED25519_KEY), "alice", now())?;

    let payload = token.split('.').nth(1).expect("payload segment");
    let claims: Claims = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload)?)?;

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.iat, 1_700_000_000);
    assert_eq!(claims.exp, 1_700_000_000 + VALIDITY_SECS);

    Ok(())
}

#[test]
fn test_header_algorithm_matches_key_type() -> TestResult {
    let ed25519 = token::generate(&identity("alice", ED25519_KEY), "alice", now())?;
    let rsa = token::generate(&identity("bob", RSA_KEY), "bob", now())?;

    let alg = |token: &str| -> TestResult<String> {
        let segment = token.split('.').next().expect("header segment");
        let header: Header = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segment)?)?;
        assert_eq!(header.typ, "JWT");
        Ok(header.alg)
    };

    assert_eq!(alg(&ed25519)?, "EdDSA");
    assert_eq!(alg(&rsa)?, "RS256");

    Ok(())
}

#[test]
fn test_es256_token_signature_is_fixed_width() -> TestResult {
    let token = token::generate(&identity("carol", P256_KEY), "carol", now())?;

    let segment = token.split('.').next().expect("header segment");
    let header: Header = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segment)?)?;
    assert_eq!(header.alg, "ES256");

    let (unsigned, signature) = token.rsplit_once('.').expect("three segments");
    let raw = URL_SAFE_NO_PAD.decode(signature)?;
    assert_eq!(raw.len(), 64, "ES256 signature must be fixed-width r ‖ s");

    let keypair = SigningKeyPair::parse(P256_KEY)?;
    let SigningKey::Ecdsa(key) = keypair.key() else {
        panic!("expected a P-256 key");
    };
    let signature = p256::ecdsa::Signature::from_slice(&raw)?;
    key.verifying_key().verify(unsigned.as_bytes(), &signature)?;

    Ok(())
}

#[test]
fn test_signature_covers_the_unsigned_segments() -> TestResult {
    let token = token::generate(&identity("alice", ED25519_KEY), "alice", now())?;

    let (unsigned, signature) = token.rsplit_once('.').expect("three segments");
    let raw = URL_SAFE_NO_PAD.decode(signature)?;

    let keypair = SigningKeyPair::parse(ED25519_KEY)?;
    let SigningKey::Ed25519(key) = keypair.key() else {
        panic!("expected an Ed25519 key");
    };
    let signature = ed25519_dalek::Signature::from_slice(&raw)?;
    key.verifying_key().verify(unsigned.as_bytes(), &signature)?;

    Ok(())
}
