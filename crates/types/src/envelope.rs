//! Request and result containers shared by the builder, transport, and
//! service façades.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named arguments supplied by the caller, keyed by parameter name.
pub type Params = Map<String, Value>;

/// Body payload attached to an outbound request.
#[derive(Clone, PartialEq)]
pub enum RequestBody {
    /// Structured JSON payload, passed through verbatim.
    Json(Value),
    /// Opaque bytes for upload operations.
    Raw(Vec<u8>),
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Raw(bytes) => write!(f, "Raw({} bytes)", bytes.len()),
        }
    }
}

/// Per-call argument container handed to the request builder.
///
/// An omitted parameter container collapses to an empty map, so downstream
/// stages never distinguish "no parameters" from "empty parameters".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    /// Named arguments routed to path and query parameters by the builder.
    pub params: Params,
    /// Optional request body.
    pub body: Option<RequestBody>,
}

impl CallArgs {
    /// Arguments with no parameters and no body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments from an optional parameter map.
    pub fn parameters(parameters: Option<Params>) -> Self {
        Self {
            params: parameters.unwrap_or_default(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attaches a raw byte body.
    pub fn with_raw(mut self, body: Vec<u8>) -> Self {
        self.body = Some(RequestBody::Raw(body));
        self
    }
}

/// Fully resolved outbound request, ready for a transport to send.
///
/// `url` carries the base URL plus the resolved path; query pairs are kept
/// separate and already ordered. Exactly one network attempt is made per
/// envelope.
#[derive(Clone, PartialEq)]
pub struct RequestEnvelope {
    /// HTTP method.
    pub method: String,
    /// Absolute URL without the query string.
    pub url: String,
    /// Ordered query pairs; repeated names encode multi-format arrays.
    pub query: Vec<(String, String)>,
    /// Optional body payload.
    pub body: Option<RequestBody>,
    /// Headers to send, including the bearer authorization.
    pub headers: IndexMap<String, String>,
}

impl fmt::Debug for RequestEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tokens must never leak through debug output.
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("RequestEnvelope")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("query", &self.query)
            .field("body", &self.body)
            .field("headers", &headers)
            .finish()
    }
}

/// Uniform outcome of one API call.
///
/// Every call produces exactly one envelope: HTTP responses of any status
/// pass through unmodified, and transport failures are synthesized into a
/// 500 envelope whose body carries the error text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// HTTP status code, or 500 for synthesized transport failures.
    pub status_code: u16,
    /// Response headers materialized into a plain ordered map.
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    /// Parsed JSON body, `null` for empty bodies, or an error string for
    /// synthesized failures.
    #[serde(default)]
    pub body: Value,
}

impl ResultEnvelope {
    /// Assembles an envelope from its parts.
    pub fn new(status_code: u16, headers: IndexMap<String, String>, body: Value) -> Self {
        Self {
            status_code,
            headers,
            body,
        }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn omitted_parameters_collapse_to_empty_map() {
        let args = CallArgs::parameters(None);
        assert!(args.params.is_empty());
        assert!(args.body.is_none());

        let explicit = CallArgs::parameters(Some(Params::new()));
        assert_eq!(args, explicit);
    }

    #[test]
    fn call_args_builder_attaches_bodies() {
        let json_args = CallArgs::new().with_json(json!({"ids": ["a"]}));
        assert!(matches!(json_args.body, Some(RequestBody::Json(_))));

        let raw_args = CallArgs::new().with_raw(vec![1, 2, 3]);
        assert!(matches!(raw_args.body, Some(RequestBody::Raw(ref b)) if b.len() == 3));
    }

    #[test]
    fn request_envelope_debug_redacts_authorization() {
        let mut headers = IndexMap::new();
        headers.insert(
            "Authorization".to_string(),
            "Bearer super-secret".to_string(),
        );
        headers.insert("X-Trace".to_string(), "abc".to_string());
        let envelope = RequestEnvelope {
            method: "GET".to_string(),
            url: "https://api.crowdstrike.com/devices/queries/devices/v1".to_string(),
            query: vec![],
            body: None,
            headers,
        };

        let rendered = format!("{envelope:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("abc"));
    }

    #[test]
    fn raw_body_debug_hides_payload_bytes() {
        let body = RequestBody::Raw(vec![0u8; 1024]);
        assert_eq!(format!("{body:?}"), "Raw(1024 bytes)");
    }

    #[test]
    fn result_envelope_round_trip() {
        let envelope = ResultEnvelope::new(
            200,
            IndexMap::from([("content-type".to_string(), "application/json".to_string())]),
            json!({"resources": ["abc"]}),
        );

        let text = serde_json::to_string(&envelope).expect("serialize ResultEnvelope");
        let back: ResultEnvelope = serde_json::from_str(&text).expect("deserialize ResultEnvelope");
        assert_eq!(back, envelope);
        assert!(back.is_success());
    }

    #[test]
    fn result_envelope_success_range() {
        let mk = |status| ResultEnvelope::new(status, IndexMap::new(), Value::Null);
        assert!(mk(200).is_success());
        assert!(mk(204).is_success());
        assert!(mk(299).is_success());
        assert!(!mk(199).is_success());
        assert!(!mk(300).is_success());
        assert!(!mk(429).is_success());
        assert!(!mk(500).is_success());
    }
}
