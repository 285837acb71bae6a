use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

macro_rules! resource_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

resource_id!(ProjectId);
resource_id!(IssueId);
resource_id!(CommentId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueStatus {
    #[default]
    New,
    Assigned,
    Fixed,
    Resolved,
    Closed,
    Reopened,
}

enum_display_fromstr!(IssueStatus, "issue status", {
    New => "NEW",
    Assigned => "ASSIGNED",
    Fixed => "FIXED",
    Resolved => "RESOLVED",
    Closed => "CLOSED",
    Reopened => "REOPENED",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssuePriority {
    Blocker,
    Critical,
    Major,
    Minor,
    Trivial,
}

enum_display_fromstr!(IssuePriority, "issue priority", {
    Blocker => "BLOCKER",
    Critical => "CRITICAL",
    Major => "MAJOR",
    Minor => "MINOR",
    Trivial => "TRIVIAL",
});

/// Account role. Permissions attached to each role live on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Pl,
    Dev,
    Tester,
}

enum_display_fromstr!(Role, "role", {
    Admin => "ADMIN",
    Pl => "PL",
    Dev => "DEV",
    Tester => "TESTER",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

/// An issue as returned by `GET /projects/{p}/issues/{i}`.
///
/// Fields the client does not model are kept in `extra` so that an edited
/// issue can be sent back with `PUT` without dropping server data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reporter_username: Option<String>,
    #[serde(default)]
    pub reported_date: Option<String>,
    #[serde(default)]
    pub fixer_username: Option<String>,
    #[serde(default)]
    pub assignee_username: Option<String>,
    #[serde(default)]
    pub priority: Option<IssuePriority>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: IssueStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /projects/{p}/issues`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub reporter_username: String,
    pub reported_date: String,
    #[serde(rename = "project_id")]
    pub project_id: ProjectId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A user entry from `/users/devs` or the assignee recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub username: String,
}

/// Body of `POST /users/login`.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of `POST /users/signup`.
#[derive(Clone, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}
