#[macro_use]
mod macros;

pub mod actions;
pub mod api;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod navigation;
pub mod selection;
pub mod session;
pub mod types;

pub use api::{ApiRequest, ApiResponse, Endpoint, EndpointKind, Outcome, Transport, classify};
pub use config::Config;
pub use error::{IssueDeskError, Result};
pub use navigation::{MainMode, NavigationController, Screen};
pub use selection::{FetchedList, SelectionError};
pub use session::{Credential, Session};
pub use types::{
    Comment, CommentId, Developer, Issue, IssueId, IssuePriority, IssueStatus, Project, ProjectId,
    Role,
};
