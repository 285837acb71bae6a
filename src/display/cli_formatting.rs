use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::selection::FetchedList;
use crate::types::{Comment, Developer, Issue, Project};

const UNASSIGNED: &str = "(unassigned)";

/// A row in the issue search results table
#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Reporter")]
    reporter: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn format_project_list(projects: &FetchedList<Project>) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }
    projects
        .numbered()
        .map(|(n, project)| format!("{}. {}", n.to_string().cyan(), project.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an issue for single-line display with colors
pub fn format_issue_line(number: usize, issue: &Issue) -> String {
    format!(
        "{}. {} {}",
        number.to_string().cyan(),
        super::format_status_colored(issue.status),
        issue.title
    )
}

pub fn format_issue_list(issues: &FetchedList<Issue>) -> String {
    if issues.is_empty() {
        return "No issues found.".to_string();
    }
    issues
        .numbered()
        .map(|(n, issue)| format_issue_line(n, issue))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_issue_detail(issue: &Issue) -> String {
    let or_unassigned =
        |value: &Option<String>| value.clone().unwrap_or_else(|| UNASSIGNED.to_string());
    let lines = [
        "-".repeat(20),
        format!("ID:          {}", issue.id.cyan()),
        format!("Title:       {}", issue.title.bold()),
        format!(
            "Description: {}",
            issue.description.as_deref().unwrap_or("")
        ),
        format!(
            "Reporter:    {}",
            issue.reporter_username.as_deref().unwrap_or("")
        ),
        format!(
            "Reported:    {}",
            issue.reported_date.as_deref().unwrap_or("")
        ),
        format!("Fixer:       {}", or_unassigned(&issue.fixer_username)),
        format!("Assignee:    {}", or_unassigned(&issue.assignee_username)),
        format!("Priority:    {}", super::format_priority_colored(issue.priority)),
        format!("Status:      {}", super::format_status_colored(issue.status)),
        "-".repeat(20),
    ];
    lines.join("\n")
}

/// Search results as a rounded table, numbered like every other list.
pub fn format_issue_table(issues: &FetchedList<Issue>) -> String {
    if issues.is_empty() {
        return "No matching issues.".to_string();
    }

    let rows: Vec<IssueRow> = issues
        .numbered()
        .map(|(n, issue)| IssueRow {
            number: n,
            id: issue.id.to_string(),
            title: issue.title.clone(),
            reporter: issue.reporter_username.clone().unwrap_or_default(),
            assignee: issue
                .assignee_username
                .clone()
                .unwrap_or_else(|| UNASSIGNED.to_string()),
            status: issue.status.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{table}\n\n{} result(s)", issues.len())
}

pub fn format_comment_list(comments: &FetchedList<Comment>) -> String {
    if comments.is_empty() {
        return "No comments yet.".to_string();
    }
    comments
        .numbered()
        .map(|(n, comment)| {
            let when = comment
                .created_at
                .as_deref()
                .map(|at| format!(" ({at})"))
                .unwrap_or_default();
            format!(
                "{}. {}{}: {}",
                n.to_string().cyan(),
                comment.username.bold(),
                when.dimmed(),
                comment.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_developer_list(developers: &FetchedList<Developer>) -> String {
    if developers.is_empty() {
        return "No developers found.".to_string();
    }
    developers
        .numbered()
        .map(|(n, dev)| format!("{}. {}", n.to_string().cyan(), dev.username))
        .collect::<Vec<_>>()
        .join("\n")
}
