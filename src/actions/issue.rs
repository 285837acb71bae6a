//! Issue operations: listing, registration, editing and search.

use super::Api;
use crate::api::{Endpoint, Outcome, Transport};
use crate::selection::FetchedList;
use crate::types::{Issue, IssueId, IssuePriority, IssueStatus, NewIssue, ProjectId};

/// Format of `reportedDate` on new issues, in local time.
const REPORTED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Keyword filter for `GET /projects/{p}/issues/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueQuery {
    Assignee(String),
    Reporter(String),
    Status(IssueStatus),
    All,
}

impl IssueQuery {
    /// Query parameters sent to the server. `projectId` is always included.
    pub fn params(&self, project: ProjectId) -> Vec<(String, String)> {
        let mut params = vec![("projectId".to_string(), project.to_string())];
        match self {
            IssueQuery::Assignee(name) => {
                params.push(("assigneeUsername".to_string(), name.clone()));
            }
            IssueQuery::Reporter(name) => {
                params.push(("reporterUsername".to_string(), name.clone()));
            }
            IssueQuery::Status(status) => {
                params.push(("status".to_string(), status.to_string()));
            }
            IssueQuery::All => {}
        }
        params
    }
}

/// A single-field change to an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueEdit {
    Title(String),
    Description(String),
    Priority(IssuePriority),
    Status(IssueStatus),
    /// Assigning a developer also moves the issue to `ASSIGNED`.
    Assignee(String),
}

impl IssueEdit {
    pub fn apply(self, issue: &mut Issue) {
        match self {
            IssueEdit::Title(title) => issue.title = title,
            IssueEdit::Description(description) => issue.description = Some(description),
            IssueEdit::Priority(priority) => issue.priority = Some(priority),
            IssueEdit::Status(status) => issue.status = status,
            IssueEdit::Assignee(username) => {
                issue.assignee_username = Some(username);
                issue.status = IssueStatus::Assigned;
            }
        }
    }
}

pub async fn list<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
) -> Outcome<FetchedList<Issue>> {
    api.call::<Vec<Issue>>(&Endpoint::Issues(project))
        .await
        .map(FetchedList::from)
}

pub async fn get<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    issue: IssueId,
) -> Outcome<Issue> {
    api.call(&Endpoint::Issue(project, issue)).await
}

/// Register a new issue reported by the logged-in user, dated now.
pub async fn register<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    title: &str,
    description: &str,
) -> Outcome<()> {
    let issue = NewIssue {
        title: title.to_string(),
        description: description.to_string(),
        reporter_username: api.session().username().unwrap_or_default().to_string(),
        reported_date: jiff::Zoned::now()
            .strftime(REPORTED_DATE_FORMAT)
            .to_string(),
        project_id: project,
    };
    api.call_with_body(&Endpoint::CreateIssue(project), &issue)
        .await
}

/// Replace an issue with its edited copy.
pub async fn update<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    issue: &Issue,
) -> Outcome<()> {
    api.call_with_body(&Endpoint::UpdateIssue(project, issue.id), issue)
        .await
}

pub async fn search<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    query: &IssueQuery,
) -> Outcome<FetchedList<Issue>> {
    api.call_with_query::<Vec<Issue>>(&Endpoint::SearchIssues(project), query.params(project))
        .await
        .map(FetchedList::from)
}

/// Free-text search; the server interprets `message`.
pub async fn search_natural_language<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    message: &str,
) -> Outcome<FetchedList<Issue>> {
    let query = vec![("userMessage".to_string(), message.to_string())];
    api.call_with_query::<Vec<Issue>>(&Endpoint::SearchIssuesByNl(project), query)
        .await
        .map(FetchedList::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn issue() -> Issue {
        Issue {
            id: IssueId(1),
            title: "Crash".to_string(),
            description: None,
            reporter_username: Some("tester1".to_string()),
            reported_date: None,
            fixer_username: None,
            assignee_username: None,
            priority: None,
            status: IssueStatus::New,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_query_params_include_project() {
        assert_eq!(
            IssueQuery::All.params(ProjectId(3)),
            vec![("projectId".to_string(), "3".to_string())]
        );
        assert_eq!(
            IssueQuery::Status(IssueStatus::Fixed).params(ProjectId(3))[1],
            ("status".to_string(), "FIXED".to_string())
        );
        assert_eq!(
            IssueQuery::Reporter("tester1".to_string()).params(ProjectId(3))[1],
            ("reporterUsername".to_string(), "tester1".to_string())
        );
    }

    #[test]
    fn test_assignee_edit_sets_assigned() {
        let mut issue = issue();
        IssueEdit::Assignee("dev1".to_string()).apply(&mut issue);
        assert_eq!(issue.assignee_username.as_deref(), Some("dev1"));
        assert_eq!(issue.status, IssueStatus::Assigned);
    }

    #[test]
    fn test_single_field_edits() {
        let mut issue = issue();
        IssueEdit::Title("Crash on save".to_string()).apply(&mut issue);
        IssueEdit::Priority(IssuePriority::Critical).apply(&mut issue);
        IssueEdit::Status(IssueStatus::Resolved).apply(&mut issue);

        assert_eq!(issue.title, "Crash on save");
        assert_eq!(issue.priority, Some(IssuePriority::Critical));
        assert_eq!(issue.status, IssueStatus::Resolved);
        assert_eq!(issue.assignee_username, None);
    }

    #[test]
    fn test_reported_date_format() {
        let stamp = jiff::Zoned::now().strftime(REPORTED_DATE_FORMAT).to_string();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[10..11], "T");
    }
}
