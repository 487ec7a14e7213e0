//! Canonical signable payload.
//!
//! The payload is the exact byte sequence that gets signed: the call's
//! method path plus the allow-listed subset of its metadata, serialized as
//! JSON with a stable key order. The serialized string is also transmitted
//! verbatim, so the verifier checks the very bytes that were signed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metadata::MetadataMap;
use crate::request::TIMESTAMP_HEADER;

/// Header names eligible for inclusion in the signed payload.
///
/// The timestamp header plus the call-context headers: node selection,
/// label/field selectors, runtime and context identifiers, cluster,
/// namespace, resource uid, and the transport's own authorization header.
/// Anything else on the call is transmitted but never signed.
pub const ALLOWED_HEADERS: &[&str] = &[
    TIMESTAMP_HEADER,
    "nodes",
    "node",
    "selectors",
    "fieldselector",
    "runtime",
    "context",
    "cluster",
    "namespace",
    "uid",
    "authorization",
];

/// The canonical structure whose JSON form is signed.
///
/// `BTreeMap` keys give a stable serialization order across calls; within a
/// header name, values keep their metadata order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Full RPC method path, e.g.
    /// `/omni.management.ManagementService/ListClusters`.
    pub method: String,
    /// Allow-listed headers and their values.
    pub headers: BTreeMap<String, Vec<String>>,
}

impl Payload {
    /// Build the payload for `method` from the allow-listed subset of
    /// `metadata`.
    #[must_use]
    pub fn from_metadata(method: impl Into<String>, metadata: &MetadataMap) -> Self {
        let headers = ALLOWED_HEADERS
            .iter()
            .filter_map(|&name| {
                let values = metadata.get_all(name);
                (!values.is_empty()).then(|| (name.to_string(), values.to_vec()))
            })
            .collect();

        Self {
            method: method.into(),
            headers,
        }
    }

    /// Serialize to the exact JSON string that gets signed and transmitted.
    ///
    /// # Errors
    ///
    /// Propagates the serializer's failure.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
