//! HTTP transport behind the client.
//!
//! The [`Transport`] trait is the seam between request construction and the
//! network: production code uses [`HttpTransport`] over reqwest, while tests
//! inject doubles through the client constructor.

use async_trait::async_trait;
use falcon_types::{RequestBody, RequestEnvelope};
use indexmap::IndexMap;
use reqwest::header::{CONTENT_TYPE, HeaderMap, USER_AGENT};
use reqwest::{Client, Method};
use thiserror::Error;

use crate::config::TransportConfig;

/// Raw HTTP response before normalization.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers materialized into an ordered map.
    pub headers: IndexMap<String, String>,
    /// Unparsed body text.
    pub body: String,
}

/// Failure to complete the single network attempt.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, timeout, or protocol failure from the HTTP stack.
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The envelope carries a method this transport cannot send. Envelopes
    /// built through the request builder never hit this.
    #[error("transport cannot send method: {0}")]
    Method(String),
}

/// Sends one fully resolved request and returns the raw response.
///
/// Implementations make exactly one network attempt per envelope; retry
/// policy is deliberately left to callers.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, envelope: &RequestEnvelope) -> Result<RawResponse, TransportError>;
}

/// Production transport over a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    user_agent: String,
}

impl HttpTransport {
    /// Builds the underlying HTTP client from the transport configuration.
    ///
    /// # Errors
    /// Returns the reqwest construction error when the TLS backend cannot be
    /// initialized.
    pub fn new(config: &TransportConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self {
            http,
            user_agent: config.user_agent.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, envelope: &RequestEnvelope) -> Result<RawResponse, TransportError> {
        let method = match envelope.method.as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PATCH" => Method::PATCH,
            "DELETE" => Method::DELETE,
            other => return Err(TransportError::Method(other.to_string())),
        };

        let mut request = self
            .http
            .request(method, &envelope.url)
            .header(USER_AGENT, &self.user_agent);
        if !envelope.query.is_empty() {
            request = request.query(&envelope.query);
        }
        for (name, value) in &envelope.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = match &envelope.body {
            Some(RequestBody::Json(value)) => request.json(value),
            Some(RequestBody::Raw(bytes)) => request
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(bytes.clone()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = materialize_headers(response.headers());
        let body = response.text().await?;
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Flattens a response header map, comma-joining repeated names the way
/// intermediaries collapse duplicates.
fn materialize_headers(headers: &HeaderMap) -> IndexMap<String, String> {
    let mut out: IndexMap<String, String> = IndexMap::new();
    for (name, value) in headers {
        let text = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match out.entry(name.as_str().to_string()) {
            indexmap::map::Entry::Occupied(mut entry) => {
                let joined = entry.get_mut();
                joined.push_str(", ");
                joined.push_str(&text);
            }
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(text);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_response_headers_comma_join() {
        let mut headers = HeaderMap::new();
        headers.append("x-ratelimit-limit", "6000".parse().expect("header value"));
        headers.append("x-ratelimit-limit", "300".parse().expect("header value"));
        headers.insert("content-type", "application/json".parse().expect("header value"));

        let out = materialize_headers(&headers);
        assert_eq!(
            out.get("x-ratelimit-limit").map(String::as_str),
            Some("6000, 300")
        );
        assert_eq!(
            out.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn unknown_method_is_rejected_without_sending() {
        let transport = HttpTransport::new(&TransportConfig::default()).expect("build transport");
        let envelope = RequestEnvelope {
            method: "TRACE".to_string(),
            url: "https://api.invalid/anything".to_string(),
            query: vec![],
            body: None,
            headers: IndexMap::new(),
        };

        let err = transport.send(&envelope).await.unwrap_err();
        assert!(matches!(err, TransportError::Method(m) if m == "TRACE"));
    }
}
