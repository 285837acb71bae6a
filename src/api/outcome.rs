//! Classification of HTTP status codes into request outcomes.
//!
//! Every screen handles remote results through [`Outcome`], so a 400 on a
//! comment update is treated exactly like a 400 anywhere else.

use super::EndpointKind;

/// Result of one remote operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The server rejected the request body (400), with its message if any.
    ValidationError(Option<String>),
    NotFound,
    /// Missing or expired credential, or insufficient role (401/403).
    Unauthorized,
    Conflict,
    /// Any other status; `None` when no response arrived at all.
    UnknownFailure(Option<u16>),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::ValidationError(detail) => Outcome::ValidationError(detail),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::Unauthorized => Outcome::Unauthorized,
            Outcome::Conflict => Outcome::Conflict,
            Outcome::UnknownFailure(code) => Outcome::UnknownFailure(code),
        }
    }

    /// Short lowercase name of the variant, for logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::ValidationError(_) => "validation_error",
            Outcome::NotFound => "not_found",
            Outcome::Unauthorized => "unauthorized",
            Outcome::Conflict => "conflict",
            Outcome::UnknownFailure(_) => "unknown_failure",
        }
    }
}

/// Map a status code to an outcome. Pure; the endpoint kind only affects
/// logging of success codes that differ from the documented one.
pub fn classify(status: u16, kind: EndpointKind) -> Outcome<()> {
    match status {
        200 | 201 | 204 => {
            if status != kind.expected_status() {
                tracing::debug!(
                    status,
                    expected = kind.expected_status(),
                    "success status differs from the documented one"
                );
            }
            Outcome::Success(())
        }
        400 => Outcome::ValidationError(None),
        401 | 403 => Outcome::Unauthorized,
        404 => Outcome::NotFound,
        409 => Outcome::Conflict,
        other => Outcome::UnknownFailure(Some(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [EndpointKind; 5] = [
        EndpointKind::Read,
        EndpointKind::Create,
        EndpointKind::Update,
        EndpointKind::Delete,
        EndpointKind::Command,
    ];

    #[test]
    fn test_success_codes() {
        for kind in KINDS {
            for status in [200, 201, 204] {
                assert_eq!(classify(status, kind), Outcome::Success(()), "{status}");
            }
        }
    }

    #[test]
    fn test_client_error_codes() {
        for kind in KINDS {
            assert_eq!(classify(400, kind), Outcome::ValidationError(None));
            assert_eq!(classify(401, kind), Outcome::Unauthorized);
            assert_eq!(classify(403, kind), Outcome::Unauthorized);
            assert_eq!(classify(404, kind), Outcome::NotFound);
            assert_eq!(classify(409, kind), Outcome::Conflict);
        }
    }

    #[test]
    fn test_other_codes_are_unknown_failure() {
        for status in [202, 302, 405, 418, 429, 500, 502, 503] {
            assert_eq!(
                classify(status, EndpointKind::Read),
                Outcome::UnknownFailure(Some(status))
            );
        }
    }

    #[test]
    fn test_map_keeps_failures() {
        let failed: Outcome<u32> = Outcome::NotFound;
        assert_eq!(failed.map(|n| n + 1), Outcome::NotFound);

        let ok: Outcome<u32> = Outcome::Success(1);
        assert_eq!(ok.map(|n| n + 1), Outcome::Success(2));
    }

    #[test]
    fn test_success_accessors() {
        assert!(Outcome::Success(5).is_success());
        assert_eq!(Outcome::Success(5).success(), Some(5));
        assert_eq!(Outcome::<u8>::Conflict.success(), None);
        assert_eq!(Outcome::<u8>::UnknownFailure(None).tag(), "unknown_failure");
    }
}
