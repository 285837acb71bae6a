//! Login, logout and account operations.

use serde_json::Value;

use super::{Api, send};
use crate::api::{ApiRequest, Endpoint, Outcome, Transport};
use crate::selection::FetchedList;
use crate::session::{Credential, SESSION_COOKIE, Session};
use crate::types::{Developer, LoginRequest, NewAccount};

/// Log in and store the issued credential on `session`.
///
/// The token is read from the `jwt` cookie, or from a `token` field in the
/// body for servers that return it there. A success response carrying
/// neither is reported as `UnknownFailure` and leaves the session untouched.
pub async fn login<T: Transport>(
    transport: &T,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Outcome<()> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let request = match ApiRequest::new(&Endpoint::Login).json(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("failed to encode login request: {e}");
            return Outcome::UnknownFailure(None);
        }
    };

    let response = match transport.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("login request failed: {e}");
            return Outcome::UnknownFailure(None);
        }
    };

    let status = response.status;
    let token = response
        .cookie(SESSION_COOKIE)
        .map(str::to_string)
        .or_else(|| token_from_body(response.body.as_ref()));

    match response.into_outcome::<()>(Endpoint::Login.kind()) {
        Outcome::Success(()) => match token {
            Some(token) => {
                session.set_credential(Credential::new(token, username));
                Outcome::Success(())
            }
            None => {
                tracing::warn!(status, "login succeeded without a session token");
                Outcome::UnknownFailure(Some(status))
            }
        },
        failure => failure,
    }
}

fn token_from_body(body: Option<&Value>) -> Option<String> {
    body?
        .get("token")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Log out. The local credential is dropped when the server confirms, and
/// also when it answers `Unauthorized` since the token is no longer usable.
pub async fn logout<T: Transport>(transport: &T, session: &mut Session) -> Outcome<()> {
    let outcome: Outcome<()> = send(
        transport,
        ApiRequest::new(&Endpoint::Logout).headers(session.auth_headers()),
    )
    .await;

    if matches!(outcome, Outcome::Success(()) | Outcome::Unauthorized) {
        session.clear_credential();
    }
    outcome
}

/// Create a new account. Only administrators are allowed to do this; the
/// server answers `Unauthorized` for anyone else.
pub async fn signup<T: Transport>(api: &Api<'_, T>, account: &NewAccount) -> Outcome<()> {
    api.call_with_body(&Endpoint::Signup, account).await
}

/// Accounts that can be assigned to issues.
pub async fn developers<T: Transport>(api: &Api<'_, T>) -> Outcome<FetchedList<Developer>> {
    api.call::<Vec<Developer>>(&Endpoint::Developers)
        .await
        .map(FetchedList::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_from_body() {
        assert_eq!(
            token_from_body(Some(&json!({"token": "abc"}))),
            Some("abc".to_string())
        );
        assert_eq!(token_from_body(Some(&json!({"message": "ok"}))), None);
        assert_eq!(token_from_body(Some(&json!({"token": 5}))), None);
        assert_eq!(token_from_body(None), None);
    }
}
