use crate::api::Outcome;
use crate::selection::SelectionError;
use crate::types::{IssuePriority, IssueStatus};
use owo_colors::OwoColorize;

pub mod chart;
pub mod cli_formatting;

pub use chart::{ChartSink, TerminalChart, render_bars};
pub use cli_formatting::*;

pub fn format_status_colored(status: IssueStatus) -> String {
    let badge = format!("[{}]", status);
    match status {
        IssueStatus::New => badge.yellow().to_string(),
        IssueStatus::Assigned => badge.cyan().to_string(),
        IssueStatus::Fixed => badge.blue().to_string(),
        IssueStatus::Resolved => badge.green().to_string(),
        IssueStatus::Closed => badge.dimmed().to_string(),
        IssueStatus::Reopened => badge.magenta().to_string(),
    }
}

pub fn format_priority_colored(priority: Option<IssuePriority>) -> String {
    match priority {
        Some(p @ (IssuePriority::Blocker | IssuePriority::Critical)) => {
            p.to_string().red().to_string()
        }
        Some(p @ IssuePriority::Major) => p.to_string().yellow().to_string(),
        Some(p) => p.to_string(),
        None => "-".dimmed().to_string(),
    }
}

/// User-facing message for a failed operation, or `None` on success.
///
/// `operation` names what was attempted, e.g. "Delete comment".
pub fn failure_message<T>(operation: &str, outcome: &Outcome<T>) -> Option<String> {
    let reason = match outcome {
        Outcome::Success(_) => return None,
        Outcome::ValidationError(Some(detail)) => format!("invalid request ({detail})"),
        Outcome::ValidationError(None) => "the server rejected the request as invalid".to_string(),
        Outcome::NotFound => "not found".to_string(),
        Outcome::Unauthorized => "not authorized (log in again or check your role)".to_string(),
        Outcome::Conflict => "conflicts with existing data".to_string(),
        Outcome::UnknownFailure(Some(code)) => {
            format!("unexpected server response (status {code})")
        }
        Outcome::UnknownFailure(None) => "no response from the server".to_string(),
    };
    Some(format!("{operation} failed: {reason}").red().to_string())
}

pub fn success_message(text: &str) -> String {
    text.green().to_string()
}

pub fn selection_error_message(err: &SelectionError) -> String {
    format!("Invalid selection: {err}").yellow().to_string()
}

pub fn input_error_message(text: &str) -> String {
    text.yellow().to_string()
}

/// Menu block: a bold heading followed by `key. label` lines.
pub fn format_menu(title: &str, entries: &[(&str, &str)]) -> String {
    let mut output = format!("\n{}", format!("--- {title} ---").bold());
    for (key, label) in entries {
        output.push_str(&format!("\n{}. {}", key.cyan(), label));
    }
    output
}

pub fn invalid_choice_message(keys: &[&str]) -> String {
    format!("Invalid choice. Enter one of: {}.", keys.join(", "))
        .yellow()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_names_operation() {
        let msg = failure_message::<()>("Delete comment", &Outcome::NotFound).unwrap();
        assert!(msg.contains("Delete comment failed: not found"));
    }

    #[test]
    fn test_failure_message_includes_status_code() {
        let msg =
            failure_message::<()>("Load projects", &Outcome::UnknownFailure(Some(503))).unwrap();
        assert!(msg.contains("status 503"));
    }

    #[test]
    fn test_failure_message_validation_detail() {
        let outcome: Outcome<()> = Outcome::ValidationError(Some("content is empty".to_string()));
        let msg = failure_message("Update comment", &outcome).unwrap();
        assert!(msg.contains("content is empty"));
    }

    #[test]
    fn test_no_message_on_success() {
        assert_eq!(failure_message("Log in", &Outcome::Success(())), None);
    }

    #[test]
    fn test_format_menu() {
        let menu = format_menu("Comments", &[("1", "Add comment"), ("0", "Back")]);
        assert!(menu.contains("Comments"));
        assert!(menu.contains("Add comment"));
        assert!(menu.contains("Back"));
    }
}
