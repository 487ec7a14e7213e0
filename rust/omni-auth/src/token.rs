//! Bearer-token generation.
//!
//! For callers that need a stand-alone credential rather than a per-request
//! signature, this issues a compact JWS-style assertion: three dot-joined
//! base64url segments (header claims, payload claims, signature), signed
//! with the same key dispatch as request signing, including the
//! fixed-width `r ‖ s` encoding for ES256.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use omni_credentials::SigningIdentity;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Fixed validity window of every issued token, in seconds.
pub const VALIDITY_SECS: i64 = 3600;

/// Header claims of the compact token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Token type, always `JWT`.
    pub typ: String,
    /// Algorithm tag: `RS256`, `ES256`, or `EdDSA`.
    pub alg: String,
}

/// Payload claims of the compact token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject of the assertion.
    pub sub: String,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expiry, Unix seconds; always `iat + VALIDITY_SECS`.
    pub exp: i64,
}

/// Issue a signed bearer token for `subject`, valid for one hour from
/// `now`.
///
/// The token is built fresh per call and never persisted here; callers may
/// reuse it until expiry, but that policy is theirs.
///
/// # Errors
///
/// Claim serialization and signing failures propagate unchanged.
pub fn generate(
    identity: &SigningIdentity,
    subject: &str,
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let header = Header {
        typ: "JWT".to_string(),
        alg: identity.algorithm().jwt_alg().to_string(),
    };
    let claims = Claims {
        sub: subject.to_string(),
        iat: now.timestamp(),
        exp: now.timestamp() + VALIDITY_SECS,
    };

    let unsigned = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?),
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?),
    );
    let signature = identity.sign(unsigned.as_bytes())?;

    tracing::debug!(subject, alg = header.alg, "issued bearer token");

    Ok(format!("{unsigned}.{}", URL_SAFE_NO_PAD.encode(signature)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_names_follow_compact_token_convention() {
        let claims = Claims {
            sub: "alice".to_string(),
            iat: 100,
            exp: 3700,
        };

        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"sub":"alice","iat":100,"exp":3700}"#);
    }

    #[test]
    fn test_header_serialization() {
        let header = Header {
            typ: "JWT".to_string(),
            alg: "EdDSA".to_string(),
        };

        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"typ":"JWT","alg":"EdDSA"}"#);
    }
}
