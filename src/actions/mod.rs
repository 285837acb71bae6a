//! Domain actions against the issue management API.
//!
//! Each submodule groups the remote operations for one resource. Every
//! operation is a single request/response round trip that returns an
//! [`Outcome`]; none of them print or retry. Rendering is left to the
//! navigation layer.

pub mod auth;
pub mod comment;
pub mod issue;
pub mod project;
pub mod recommendation;
pub mod statistics;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::{ApiRequest, Endpoint, Outcome, Transport};
use crate::session::Session;

/// Borrowed context for authenticated operations: a transport to send
/// through and the session whose headers are attached to every request.
pub struct Api<'a, T> {
    transport: &'a T,
    session: &'a Session,
}

impl<'a, T: Transport> Api<'a, T> {
    pub fn new(transport: &'a T, session: &'a Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        self.session
    }

    fn request(&self, endpoint: &Endpoint) -> ApiRequest {
        ApiRequest::new(endpoint).headers(self.session.auth_headers())
    }

    /// Send a request with no body.
    pub(crate) async fn call<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> Outcome<R> {
        send(self.transport, self.request(endpoint)).await
    }

    /// Send a request with query parameters.
    pub(crate) async fn call_with_query<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        query: Vec<(String, String)>,
    ) -> Outcome<R> {
        let mut request = self.request(endpoint);
        request.query = query;
        send(self.transport, request).await
    }

    /// Send a request with a JSON body.
    pub(crate) async fn call_with_body<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Outcome<R> {
        match self.request(endpoint).json(body) {
            Ok(request) => send(self.transport, request).await,
            Err(e) => {
                tracing::warn!(path = %endpoint.path(), "failed to encode request body: {e}");
                Outcome::UnknownFailure(None)
            }
        }
    }
}

/// Execute one request and classify the result. A transport failure
/// becomes `UnknownFailure(None)`.
pub(crate) async fn send<T: Transport, R: DeserializeOwned>(
    transport: &T,
    request: ApiRequest,
) -> Outcome<R> {
    let kind = request.kind;
    let method = request.method;
    let path = request.path.clone();

    match transport.execute(request).await {
        Ok(response) => {
            let status = response.status;
            let outcome = response.into_outcome(kind);
            tracing::debug!(%method, %path, status, outcome = outcome.tag(), "request finished");
            outcome
        }
        Err(e) => {
            tracing::warn!(%method, %path, "request failed: {e}");
            Outcome::UnknownFailure(None)
        }
    }
}
