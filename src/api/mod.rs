//! Remote API plumbing.
//!
//! This module defines the request/response types exchanged with the issue
//! management server, the [`Transport`] seam that executes them, and the
//! classification of responses into [`Outcome`]s.

pub mod endpoint;
pub mod http;
pub mod outcome;

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use endpoint::{Endpoint, EndpointKind, StatisticMetric};
pub use http::HttpTransport;
pub use outcome::{Outcome, classify};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single request against the API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub kind: EndpointKind,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: BTreeMap<String, String>,
}

impl ApiRequest {
    pub fn new(endpoint: &Endpoint) -> Self {
        Self {
            method: endpoint.method(),
            path: endpoint.path(),
            kind: endpoint.kind(),
            query: Vec::new(),
            body: None,
            headers: BTreeMap::new(),
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> serde_json::Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// What came back from the server for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Decoded JSON body; `None` for empty or non-JSON bodies.
    pub body: Option<Value>,
    /// Cookies set by the server, in the order received.
    pub cookies: Vec<(String, String)>,
}

impl ApiResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.push((name.to_string(), value.to_string()));
        self
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Classify this response and decode the success payload into `T`.
    ///
    /// A success response whose body does not decode into `T` becomes
    /// `UnknownFailure` with the response status.
    pub fn into_outcome<T: DeserializeOwned>(self, kind: EndpointKind) -> Outcome<T> {
        let status = self.status;
        match classify(status, kind) {
            Outcome::Success(()) => {
                let body = if kind.expects_payload() {
                    self.body.unwrap_or(Value::Null)
                } else {
                    Value::Null
                };
                match serde_json::from_value(body) {
                    Ok(payload) => Outcome::Success(payload),
                    Err(e) => {
                        tracing::warn!(status, "failed to decode response body: {e}");
                        Outcome::UnknownFailure(Some(status))
                    }
                }
            }
            Outcome::ValidationError(_) => {
                Outcome::ValidationError(self.body.as_ref().and_then(error_detail))
            }
            Outcome::NotFound => Outcome::NotFound,
            Outcome::Unauthorized => Outcome::Unauthorized,
            Outcome::Conflict => Outcome::Conflict,
            Outcome::UnknownFailure(code) => Outcome::UnknownFailure(code),
        }
    }
}

/// Pull a human-readable message out of an error body.
fn error_detail(body: &Value) -> Option<String> {
    match body {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => ["message", "error", "detail"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

/// The request never produced a response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("could not connect: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

/// Executes API requests. [`HttpTransport`] talks to the real server; tests
/// substitute a scripted implementation.
pub trait Transport {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}
