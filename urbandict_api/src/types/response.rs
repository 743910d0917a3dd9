//! Envelope returned by both the `/define` and `/random` endpoints.

use serde::{Deserialize, Serialize};

/// One element of the upstream `list`, exactly as received.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Decoded response body.
///
/// Upstream sends `{"list": [...]}`. A missing or `null` list decodes as
/// empty so that the client can report it as "not found" rather than as a
/// malformed payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefineResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<RawRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RawRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<RawRecord>>::deserialize(deserializer)?.unwrap_or_default())
}
