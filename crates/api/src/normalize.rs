//! Response normalization into the uniform result envelope.
//!
//! Every call outcome funnels through here: real HTTP responses of any
//! status pass through with their body parsed, while transport-class faults
//! are synthesized into a 500 envelope carrying the error text. Callers
//! therefore inspect exactly one shape.

use std::fmt;

use falcon_types::ResultEnvelope;
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::transport::RawResponse;

/// Normalizes a raw HTTP response into a [`ResultEnvelope`].
///
/// An empty or whitespace-only body becomes `Value::Null` while the real
/// status and headers are kept, so 204-style responses stay observable. A
/// non-empty body that is not valid JSON counts as a transport-class fault
/// and produces the failure envelope.
pub fn normalize(raw: RawResponse) -> ResultEnvelope {
    if raw.body.trim().is_empty() {
        return ResultEnvelope::new(raw.status, raw.headers, Value::Null);
    }
    match parse_body_strict(&raw.body, raw.status) {
        Ok(body) => ResultEnvelope::new(raw.status, raw.headers, body),
        Err(error) => {
            warn!(status = raw.status, error = %error, "response body is not valid JSON");
            failure_envelope(&error)
        }
    }
}

/// Synthesizes the uniform failure envelope: status 500, no headers, and the
/// error text as the body.
pub fn failure_envelope<E: fmt::Display + ?Sized>(error: &E) -> ResultEnvelope {
    ResultEnvelope::new(500, IndexMap::new(), Value::String(error.to_string()))
}

/// Parses a response body as JSON, decorating failures with the HTTP status
/// and a truncated preview of the offending text.
fn parse_body_strict(text: &str, status: u16) -> Result<Value, JsonParseError> {
    serde_json::from_str::<Value>(text).map_err(|source| JsonParseError {
        status,
        source,
        body_preview: truncate_preview(text, 200),
    })
}

fn truncate_preview(text: &str, limit: usize) -> String {
    if text.trim().is_empty() {
        return "<empty>".to_string();
    }

    let mut preview = String::new();
    for ch in text.chars() {
        if preview.len() >= limit {
            preview.push_str("...");
            break;
        }
        match ch {
            '\n' | '\r' | '\t' => {
                if !preview.ends_with(' ') {
                    preview.push(' ');
                }
            }
            _ => preview.push(ch),
        }
    }

    preview.trim().to_string()
}

/// Error produced when a non-empty response body fails strict JSON parsing.
#[derive(Debug, Error)]
#[error("failed to parse JSON response (status {status}): {source}. body preview: {body_preview}")]
struct JsonParseError {
    status: u16,
    #[source]
    source: serde_json::Error,
    body_preview: String,
}
