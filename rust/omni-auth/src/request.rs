//! Per-call request signing.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use omni_credentials::SigningIdentity;

use crate::error::AuthError;
use crate::metadata::MetadataMap;
use crate::payload::Payload;

/// Version tag of the signature scheme, the first field of the signature
/// header. Bump it if canonicalization or algorithm rules ever change.
pub const SIGNATURE_VERSION: &str = "siderov1";

/// Decimal Unix seconds of the moment the call was signed.
pub const TIMESTAMP_HEADER: &str = "x-sidero-timestamp";

/// The canonical payload: the exact JSON bytes that were signed.
pub const PAYLOAD_HEADER: &str = "x-sidero-payload";

/// Structured signature: `siderov1 <name> <fingerprint> <base64 signature>`.
pub const SIGNATURE_HEADER: &str = "x-sidero-signature";

/// Signs outgoing call metadata with the caller's key.
///
/// Constructed once per logical client and invoked immediately before each
/// outbound call. Stateless per call except for the clock reading passed
/// in; a `&RequestSigner` can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    identity: SigningIdentity,
}

impl RequestSigner {
    /// Create a signer for `identity`.
    #[must_use]
    pub fn new(identity: SigningIdentity) -> Self {
        Self { identity }
    }

    /// The identity this signer proves.
    #[must_use]
    pub fn identity(&self) -> &SigningIdentity {
        &self.identity
    }

    /// Sign the call described by `method` and `metadata`, in place.
    ///
    /// Sets the timestamp header to `now`, removes any previous payload and
    /// signature headers, then attaches the canonical payload and the
    /// structured signature string. Re-signing a reused metadata container
    /// is safe: after any number of invocations each signing header holds
    /// exactly one value.
    ///
    /// # Errors
    ///
    /// Payload serialization and signing failures propagate unchanged;
    /// there is no local recovery and no I/O in this step.
    pub fn sign(
        &self,
        metadata: &mut MetadataMap,
        method: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        metadata.set(TIMESTAMP_HEADER, now.timestamp().to_string());
        metadata.remove(PAYLOAD_HEADER);
        metadata.remove(SIGNATURE_HEADER);

        let payload = Payload::from_metadata(method, metadata);
        let json = payload.to_json()?;
        let signature = self.identity.sign(json.as_bytes())?;

        tracing::debug!(
            method,
            fingerprint = self.identity.fingerprint(),
            "signed request payload"
        );

        metadata.set(PAYLOAD_HEADER, json);
        metadata.set(
            SIGNATURE_HEADER,
            format!(
                "{SIGNATURE_VERSION} {} {} {}",
                self.identity.name(),
                self.identity.fingerprint(),
                STANDARD.encode(signature),
            ),
        );

        Ok(())
    }
}
