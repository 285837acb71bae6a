//! reqwest-backed transport for the issue management API.
//!
//! # Security Note - Logging
//!
//! Auth headers copied from the session are marked sensitive on the
//! outgoing request, so reqwest's own debug logging prints them as
//! `Sensitive` instead of the session token. Request logging in this module
//! only records method, path and status.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::HeaderValue;
use url::Url;

use crate::config::Config;
use crate::error::Result;

use super::{ApiRequest, ApiResponse, Method, Transport, TransportError};

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for the configured API base URL and timeouts.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_base_url,
            config.request_timeout(),
            config.connect_timeout(),
        )
    }

    pub fn new(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for a path such as `/projects/3/issues`.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: ApiRequest,
    ) -> std::result::Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (name, value) in &request.headers {
            let mut header_value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::Other(format!("invalid header '{name}': {e}")))?;
            header_value.set_sensitive(true);
            builder = builder.header(name.as_str(), header_value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = builder.send().await?;

        let status = response.status().as_u16();
        let cookies = response
            .cookies()
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect();
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(&bytes).ok()
        };

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            "response received"
        );
        Ok(ApiResponse {
            status,
            body,
            cookies,
        })
    }
}
