//! Authentication state for the console session.
//!
//! The [`Session`] is the only owner of the token the server issued at
//! login. Every request borrows it to build headers; only login and logout
//! mutate it.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Name of the cookie the server uses for the session token.
pub const SESSION_COOKIE: &str = "jwt";

/// Header carrying the session token on every authenticated request.
pub const AUTH_HEADER: &str = "Cookie";

/// Token issued by a successful login, together with the user it belongs to.
pub struct Credential {
    token: SecretString,
    username: String,
}

impl Credential {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Header value in the form the server expects (`jwt=<token>`).
    fn header_value(&self) -> String {
        format!("{}={}", SESSION_COOKIE, self.token.expose_secret())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .field("username", &self.username)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Session {
    credential: Option<Credential>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current credential. The new one is used verbatim for
    /// every following request.
    pub fn set_credential(&mut self, credential: Credential) {
        tracing::debug!(username = %credential.username(), "session credential set");
        self.credential = Some(credential);
    }

    /// Forget the current credential. Safe to call when already logged out.
    pub fn clear_credential(&mut self) {
        if self.credential.take().is_some() {
            tracing::debug!("session credential cleared");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Username of the logged-in user, if any.
    pub fn username(&self) -> Option<&str> {
        self.credential.as_ref().map(Credential::username)
    }

    /// Headers to attach to a request. Empty when logged out; the server
    /// answers such requests with 401 which surfaces as `Unauthorized`.
    pub fn auth_headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        if let Some(credential) = &self.credential {
            headers.insert(AUTH_HEADER.to_string(), credential.header_value());
        }
        headers
    }
}
