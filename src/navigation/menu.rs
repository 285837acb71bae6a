//! Fixed, numbered menus offered by each screen.
//!
//! `0` always means "back" (or "quit" on the main screen).

/// An enumerated set of choices shown as `key. label` lines.
pub trait MenuAction: Copy + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
    fn label(self) -> &'static str;

    /// Resolve typed input to a menu entry.
    fn parse(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        Self::ALL.iter().copied().find(|action| action.key() == choice)
    }

    fn entries() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|a| (a.key(), a.label())).collect()
    }

    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.key()).collect()
    }
}

macro_rules! menu {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($key:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl MenuAction for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }
    };
}

menu!(
    /// Main screen before login.
    LoggedOutAction {
        Login => ("1", "Log in"),
        Quit => ("0", "Quit"),
    }
);

menu!(
    /// Main screen after login.
    LoggedInAction {
        SelectProject => ("1", "Select project"),
        AddAccount => ("2", "Add account (admin)"),
        ManageProjects => ("3", "Manage projects (admin)"),
        Logout => ("4", "Log out"),
        Quit => ("0", "Quit"),
    }
);

menu!(ProjectAdminAction {
    Create => ("1", "Create project"),
    Delete => ("2", "Delete project"),
    Back => ("0", "Back"),
});

menu!(ProjectAction {
    IssueList => ("1", "Issue list"),
    RegisterIssue => ("2", "Register issue"),
    SearchIssues => ("3", "Browse and search issues"),
    NaturalLanguageSearch => ("4", "Natural-language search"),
    Statistics => ("5", "Issue statistics"),
    Back => ("0", "Back"),
});

menu!(IssueDetailAction {
    Comments => ("1", "Comments"),
    EditIssue => ("2", "Edit issue"),
    RecommendAssignees => ("3", "Recommend assignees"),
    Back => ("0", "Back"),
});

menu!(CommentAction {
    Add => ("1", "Add comment"),
    Edit => ("2", "Edit comment"),
    Delete => ("3", "Delete comment"),
    Back => ("0", "Back"),
});

menu!(
    /// Which single field of an issue to change.
    IssueField {
        Title => ("1", "Title"),
        Description => ("2", "Description"),
        Priority => ("3", "Priority (BLOCKER, CRITICAL, MAJOR, MINOR, TRIVIAL)"),
        Status => ("4", "Status (NEW, ASSIGNED, FIXED, RESOLVED, CLOSED, REOPENED)"),
        Assignee => ("5", "Assignee"),
        Cancel => ("0", "Cancel"),
    }
);

menu!(SearchCriterion {
    Assignee => ("1", "By assignee"),
    Reporter => ("2", "By reporter"),
    Status => ("3", "By status"),
    All => ("4", "All issues"),
    Cancel => ("0", "Cancel"),
});

menu!(StatisticsAction {
    GlobalPerMonth => ("1", "Issues per month (all projects)"),
    PerMonth => ("2", "Issues per month"),
    PerStatus => ("3", "Issues per status"),
    PerFixer => ("4", "Issues per fixer"),
    PerDayAndStatusInWeek => ("5", "Issues per day and status this week"),
    OrderByComments => ("6", "Issues by comment count"),
    PerDayInMonth => ("7", "Issues per day this month"),
    PerDayAndPriorityInWeek => ("8", "Issues per day and priority this week"),
    PerPriorityInMonth => ("9", "Issues per priority this month"),
    Back => ("0", "Back"),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_input() {
        assert_eq!(CommentAction::parse(" 3 "), Some(CommentAction::Delete));
        assert_eq!(CommentAction::parse("0"), Some(CommentAction::Back));
        assert_eq!(CommentAction::parse("4"), None);
        assert_eq!(CommentAction::parse("delete"), None);
    }

    #[test]
    fn test_logged_out_menu_hides_account_actions() {
        assert_eq!(LoggedOutAction::keys(), vec!["1", "0"]);
        assert_eq!(LoggedOutAction::parse("2"), None);
        assert_eq!(LoggedInAction::parse("2"), Some(LoggedInAction::AddAccount));
    }

    #[test]
    fn test_every_menu_has_zero() {
        assert!(ProjectAdminAction::parse("0").is_some());
        assert!(ProjectAction::parse("0").is_some());
        assert!(IssueDetailAction::parse("0").is_some());
        assert!(IssueField::parse("0").is_some());
        assert!(SearchCriterion::parse("0").is_some());
        assert!(StatisticsAction::parse("0").is_some());
    }

    #[test]
    fn test_keys_are_unique() {
        let keys = StatisticsAction::keys();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), keys.len());
    }
}
