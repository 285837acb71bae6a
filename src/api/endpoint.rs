//! Catalogue of the server's REST endpoints.

use crate::types::{CommentId, IssueId, IssuePriority, IssueStatus, ProjectId};

use super::Method;

/// Broad category of an endpoint, used when classifying its responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// `GET` returning data (expects 200).
    Read,
    /// `POST` creating a resource (expects 201).
    Create,
    /// `PUT` replacing a resource (expects 200).
    Update,
    /// `DELETE` (expects 204).
    Delete,
    /// Session commands such as login and logout (expects 200).
    Command,
}

impl EndpointKind {
    /// Whether a success response carries data the client decodes.
    /// Mutations only report success; their response bodies are ignored.
    pub fn expects_payload(self) -> bool {
        matches!(self, EndpointKind::Read)
    }

    /// Status code the server documents for success on this kind.
    pub fn expected_status(self) -> u16 {
        match self {
            EndpointKind::Read | EndpointKind::Update | EndpointKind::Command => 200,
            EndpointKind::Create => 201,
            EndpointKind::Delete => 204,
        }
    }
}

/// Per-project statistics the server can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticMetric {
    IssuesPerMonth,
    IssuesPerStatus,
    IssuesPerFixer,
    /// Optionally narrowed to a single status.
    IssuesPerDayAndStatusInWeek(Option<IssueStatus>),
    IssuesOrderByComments,
    IssuesPerDayInMonth,
    IssuesPerDayAndPriorityInWeek(IssuePriority),
    IssuesPerPriorityInMonth,
}

impl StatisticMetric {
    /// Path segment(s) below `/projects/{p}/statistics/`.
    pub fn path_segment(&self) -> String {
        match self {
            StatisticMetric::IssuesPerMonth => "issuesPerMonth".to_string(),
            StatisticMetric::IssuesPerStatus => "issuesPerStatus".to_string(),
            StatisticMetric::IssuesPerFixer => "issuesPerFixer".to_string(),
            StatisticMetric::IssuesPerDayAndStatusInWeek(None) => {
                "issuesPerDayAndStatusInWeek".to_string()
            }
            StatisticMetric::IssuesPerDayAndStatusInWeek(Some(status)) => {
                format!("issuesPerDayAndStatusInWeek/{status}")
            }
            StatisticMetric::IssuesOrderByComments => "issuesOrderByComments".to_string(),
            StatisticMetric::IssuesPerDayInMonth => "issuesPerDayInMonth".to_string(),
            StatisticMetric::IssuesPerDayAndPriorityInWeek(priority) => {
                format!("issuesPerDayAndPriorityInWeek/{priority}")
            }
            StatisticMetric::IssuesPerPriorityInMonth => "issuesPerPriorityInMonth".to_string(),
        }
    }

    /// Chart title for this metric.
    pub fn title(&self) -> String {
        match self {
            StatisticMetric::IssuesPerMonth => "Issues per month".to_string(),
            StatisticMetric::IssuesPerStatus => "Issues per status".to_string(),
            StatisticMetric::IssuesPerFixer => "Issues per fixer".to_string(),
            StatisticMetric::IssuesPerDayAndStatusInWeek(None) => {
                "Issues per day and status this week".to_string()
            }
            StatisticMetric::IssuesPerDayAndStatusInWeek(Some(status)) => {
                format!("{status} issues per day this week")
            }
            StatisticMetric::IssuesOrderByComments => "Issues by comment count".to_string(),
            StatisticMetric::IssuesPerDayInMonth => "Issues per day this month".to_string(),
            StatisticMetric::IssuesPerDayAndPriorityInWeek(priority) => {
                format!("{priority} issues per day this week")
            }
            StatisticMetric::IssuesPerPriorityInMonth => {
                "Issues per priority this month".to_string()
            }
        }
    }
}

/// Every remote operation the client performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Logout,
    Signup,
    Developers,
    Projects,
    CreateProject,
    DeleteProject(ProjectId),
    Issues(ProjectId),
    CreateIssue(ProjectId),
    Issue(ProjectId, IssueId),
    UpdateIssue(ProjectId, IssueId),
    SearchIssues(ProjectId),
    SearchIssuesByNl(ProjectId),
    RecommendedAssignees(ProjectId, IssueId),
    Comments(ProjectId, IssueId),
    CreateComment(ProjectId, IssueId),
    UpdateComment(ProjectId, IssueId, CommentId),
    DeleteComment(ProjectId, IssueId, CommentId),
    GlobalIssuesPerMonth,
    ProjectStatistic(ProjectId, StatisticMetric),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login | Endpoint::Logout | Endpoint::Signup => Method::Post,
            Endpoint::CreateProject | Endpoint::CreateIssue(_) | Endpoint::CreateComment(..) => {
                Method::Post
            }
            Endpoint::UpdateIssue(..) | Endpoint::UpdateComment(..) => Method::Put,
            Endpoint::DeleteProject(_) | Endpoint::DeleteComment(..) => Method::Delete,
            Endpoint::Developers
            | Endpoint::Projects
            | Endpoint::Issues(_)
            | Endpoint::Issue(..)
            | Endpoint::SearchIssues(_)
            | Endpoint::SearchIssuesByNl(_)
            | Endpoint::RecommendedAssignees(..)
            | Endpoint::Comments(..)
            | Endpoint::GlobalIssuesPerMonth
            | Endpoint::ProjectStatistic(..) => Method::Get,
        }
    }

    pub fn kind(&self) -> EndpointKind {
        match self {
            Endpoint::Login | Endpoint::Logout => EndpointKind::Command,
            Endpoint::Signup
            | Endpoint::CreateProject
            | Endpoint::CreateIssue(_)
            | Endpoint::CreateComment(..) => EndpointKind::Create,
            Endpoint::UpdateIssue(..) | Endpoint::UpdateComment(..) => EndpointKind::Update,
            Endpoint::DeleteProject(_) | Endpoint::DeleteComment(..) => EndpointKind::Delete,
            _ => EndpointKind::Read,
        }
    }

    /// Path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/users/login".to_string(),
            Endpoint::Logout => "/users/logout".to_string(),
            Endpoint::Signup => "/users/signup".to_string(),
            Endpoint::Developers => "/users/devs".to_string(),
            Endpoint::Projects | Endpoint::CreateProject => "/projects".to_string(),
            Endpoint::DeleteProject(p) => format!("/projects/{p}"),
            Endpoint::Issues(p) | Endpoint::CreateIssue(p) => format!("/projects/{p}/issues"),
            Endpoint::Issue(p, i) | Endpoint::UpdateIssue(p, i) => {
                format!("/projects/{p}/issues/{i}")
            }
            Endpoint::SearchIssues(p) => format!("/projects/{p}/issues/search"),
            Endpoint::SearchIssuesByNl(p) => format!("/projects/{p}/issues/searchbynl"),
            Endpoint::RecommendedAssignees(p, i) => {
                format!("/projects/{p}/issues/{i}/recommendedAssignees")
            }
            Endpoint::Comments(p, i) | Endpoint::CreateComment(p, i) => {
                format!("/projects/{p}/issues/{i}/comments")
            }
            Endpoint::UpdateComment(p, i, c) | Endpoint::DeleteComment(p, i, c) => {
                format!("/projects/{p}/issues/{i}/comments/{c}")
            }
            Endpoint::GlobalIssuesPerMonth => "/statistics/issuesPerMonth".to_string(),
            Endpoint::ProjectStatistic(p, metric) => {
                format!("/projects/{p}/statistics/{}", metric.path_segment())
            }
        }
    }
}
