//! Per-screen rendering and dispatch.

use super::menu::{
    CommentAction, IssueDetailAction, IssueField, LoggedInAction, LoggedOutAction, ProjectAction,
    ProjectAdminAction, SearchCriterion, StatisticsAction,
};
use super::{MainMode, NavigationController, Screen, Transition};
use crate::actions::issue::{IssueEdit, IssueQuery};
use crate::actions::statistics::Series;
use crate::actions::{auth, comment, issue, project, recommendation, statistics};
use crate::api::{Outcome, StatisticMetric, Transport};
use crate::console::Console;
use crate::display::{self, ChartSink};
use crate::error::Result;
use crate::selection::FetchedList;
use crate::types::{
    Issue, IssueId, IssuePriority, IssueStatus, NewAccount, Project, ProjectId, Role,
};

const BACK: &str = "0";

impl<T: Transport, C: Console, S: ChartSink> NavigationController<T, C, S> {
    pub(super) async fn main_screen(&mut self) -> Result<Transition> {
        match self.main_mode() {
            MainMode::LoggedOut => {
                match self.choose_action::<LoggedOutAction>("Logged out")? {
                    Some(LoggedOutAction::Login) => self.login().await?,
                    Some(LoggedOutAction::Quit) => return Ok(Transition::Quit),
                    None => {}
                }
                Ok(Transition::Stay)
            }
            MainMode::LoggedIn => {
                let title = format!("Logged in as {}", self.session.username().unwrap_or(""));
                match self.choose_action::<LoggedInAction>(&title)? {
                    Some(LoggedInAction::SelectProject) => {
                        return Ok(Transition::Push(Screen::ProjectList));
                    }
                    Some(LoggedInAction::AddAccount) => self.add_account().await?,
                    Some(LoggedInAction::ManageProjects) => {
                        return Ok(Transition::Push(Screen::ProjectAdmin));
                    }
                    Some(LoggedInAction::Logout) => self.logout().await,
                    Some(LoggedInAction::Quit) => return Ok(Transition::Quit),
                    None => {}
                }
                Ok(Transition::Stay)
            }
        }
    }

    async fn login(&mut self) -> Result<()> {
        let username = self.console.read_line("Username: ")?;
        let password = self.console.read_secret("Password: ")?;
        let username = username.trim();

        let outcome = auth::login(&self.transport, &mut self.session, username, &password).await;
        let done = format!("Logged in as {username}.");
        self.report_done("Log in", outcome, &done);
        Ok(())
    }

    async fn logout(&mut self) {
        let outcome = auth::logout(&self.transport, &mut self.session).await;
        self.report_done("Log out", outcome, "Logged out.");
    }

    async fn add_account(&mut self) -> Result<()> {
        let username = self.console.prompt_text("New username", None)?;
        let password = self.console.read_secret("New password: ")?;
        let role_input = self.console.prompt_text("Role (ADMIN, PL, DEV, TESTER)", None)?;

        if username.is_empty() || password.is_empty() {
            self.console
                .print(&display::input_error_message("Username and password are required."));
            return Ok(());
        }
        let role: Role = match role_input.parse() {
            Ok(role) => role,
            Err(e) => {
                self.console.print(&display::input_error_message(&e.to_string()));
                return Ok(());
            }
        };

        let account = NewAccount {
            username,
            password,
            role,
        };
        let outcome = auth::signup(&self.api(), &account).await;
        self.report_done("Add account", outcome, "Account created.");
        Ok(())
    }

    pub(super) async fn project_list_screen(&mut self) -> Result<Transition> {
        let outcome = project::list(&self.api()).await;
        let Some(projects) = self.report("Load projects", outcome) else {
            return Ok(Transition::Pop);
        };

        self.console.print(&display::format_menu(Screen::ProjectList.title(), &[]));
        self.console.print(&display::format_project_list(&projects));
        if projects.is_empty() {
            return Ok(Transition::Pop);
        }

        let raw = self.console.read_line("Select a project (0 to go back): ")?;
        if raw.trim() == BACK {
            return Ok(Transition::Pop);
        }
        match projects.select(&raw) {
            Ok(selected) => Ok(Transition::Push(Screen::ProjectScreen(selected.id))),
            Err(e) => {
                self.console.print(&display::selection_error_message(&e));
                Ok(Transition::Stay)
            }
        }
    }

    pub(super) async fn project_admin_screen(&mut self) -> Result<Transition> {
        let outcome = project::list(&self.api()).await;
        let Some(projects) = self.report("Load projects", outcome) else {
            return Ok(Transition::Pop);
        };
        self.console.print(&display::format_project_list(&projects));

        match self.choose_action::<ProjectAdminAction>(Screen::ProjectAdmin.title())? {
            Some(ProjectAdminAction::Create) => {
                let name = self.console.prompt_text("New project name", None)?;
                if name.is_empty() {
                    self.console
                        .print(&display::input_error_message("Project name cannot be empty."));
                } else {
                    let outcome = project::create(&self.api(), &name).await;
                    self.report_done("Create project", outcome, "Project created.");
                }
            }
            Some(ProjectAdminAction::Delete) => self.delete_project(&projects).await?,
            Some(ProjectAdminAction::Back) => return Ok(Transition::Pop),
            None => {}
        }
        Ok(Transition::Stay)
    }

    async fn delete_project(&mut self, projects: &FetchedList<Project>) -> Result<()> {
        if projects.is_empty() {
            self.console
                .print(&display::input_error_message("There are no projects to delete."));
            return Ok(());
        }
        let Some(selected) = self.choose_from(projects, "Project number to delete: ")? else {
            return Ok(());
        };
        if !self
            .console
            .confirm(&format!("Delete project '{}'", selected.name))?
        {
            return Ok(());
        }

        let outcome = project::delete(&self.api(), selected.id).await;
        self.report_done("Delete project", outcome, "Project deleted.");
        Ok(())
    }

    pub(super) async fn project_screen(&mut self, project: ProjectId) -> Result<Transition> {
        match self.choose_action::<ProjectAction>(Screen::ProjectScreen(project).title())? {
            Some(ProjectAction::IssueList) => {
                return Ok(Transition::Push(Screen::IssueList(project)));
            }
            Some(ProjectAction::RegisterIssue) => self.register_issue(project).await?,
            Some(ProjectAction::SearchIssues) => self.search_issues(project).await?,
            Some(ProjectAction::NaturalLanguageSearch) => {
                let message = self.console.prompt_text("Search", None)?;
                if message.is_empty() {
                    self.console
                        .print(&display::input_error_message("Search text cannot be empty."));
                } else {
                    let outcome =
                        issue::search_natural_language(&self.api(), project, &message).await;
                    if let Some(found) = self.report("Search issues", outcome) {
                        self.console.print(&display::format_issue_table(&found));
                    }
                }
            }
            Some(ProjectAction::Statistics) => {
                return Ok(Transition::Push(Screen::StatisticsScreen(project)));
            }
            Some(ProjectAction::Back) => return Ok(Transition::Pop),
            None => {}
        }
        Ok(Transition::Stay)
    }

    async fn register_issue(&mut self, project: ProjectId) -> Result<()> {
        let title = self.console.prompt_text("Issue title", None)?;
        let description = self.console.prompt_text("Issue description", None)?;
        if title.is_empty() {
            self.console
                .print(&display::input_error_message("Issue title cannot be empty."));
            return Ok(());
        }

        let outcome = issue::register(&self.api(), project, &title, &description).await;
        self.report_done("Register issue", outcome, "Issue registered.");
        Ok(())
    }

    async fn search_issues(&mut self, project: ProjectId) -> Result<()> {
        let query = match self.choose_action::<SearchCriterion>("Search by")? {
            Some(SearchCriterion::Assignee) => {
                IssueQuery::Assignee(self.console.prompt_text("Assignee username", None)?)
            }
            Some(SearchCriterion::Reporter) => {
                IssueQuery::Reporter(self.console.prompt_text("Reporter username", None)?)
            }
            Some(SearchCriterion::Status) => {
                let input = self.console.prompt_text(
                    "Status (NEW, ASSIGNED, FIXED, RESOLVED, CLOSED, REOPENED)",
                    None,
                )?;
                match input.parse::<IssueStatus>() {
                    Ok(status) => IssueQuery::Status(status),
                    Err(e) => {
                        self.console.print(&display::input_error_message(&e.to_string()));
                        return Ok(());
                    }
                }
            }
            Some(SearchCriterion::All) => IssueQuery::All,
            Some(SearchCriterion::Cancel) | None => return Ok(()),
        };

        let outcome = issue::search(&self.api(), project, &query).await;
        if let Some(found) = self.report("Search issues", outcome) {
            self.console.print(&display::format_issue_table(&found));
        }
        Ok(())
    }

    pub(super) async fn issue_list_screen(&mut self, project: ProjectId) -> Result<Transition> {
        let outcome = issue::list(&self.api(), project).await;
        let Some(issues) = self.report("Load issues", outcome) else {
            return Ok(Transition::Pop);
        };

        self.console
            .print(&display::format_menu(Screen::IssueList(project).title(), &[]));
        self.console.print(&display::format_issue_list(&issues));
        if issues.is_empty() {
            return Ok(Transition::Pop);
        }

        let raw = self.console.read_line("Select an issue (0 to go back): ")?;
        if raw.trim() == BACK {
            return Ok(Transition::Pop);
        }
        match issues.select(&raw) {
            Ok(selected) => Ok(Transition::Push(Screen::IssueDetail(project, selected.id))),
            Err(e) => {
                self.console.print(&display::selection_error_message(&e));
                Ok(Transition::Stay)
            }
        }
    }

    pub(super) async fn issue_detail_screen(
        &mut self,
        project: ProjectId,
        issue_id: IssueId,
    ) -> Result<Transition> {
        let outcome = issue::get(&self.api(), project, issue_id).await;
        let Some(current) = self.report("Load issue", outcome) else {
            return Ok(Transition::Pop);
        };
        self.console.print(&display::format_issue_detail(&current));

        let title = Screen::IssueDetail(project, issue_id).title();
        match self.choose_action::<IssueDetailAction>(title)? {
            Some(IssueDetailAction::Comments) => {
                return Ok(Transition::Push(Screen::CommentScreen(project, issue_id)));
            }
            Some(IssueDetailAction::EditIssue) => self.edit_issue(project, current).await?,
            Some(IssueDetailAction::RecommendAssignees) => {
                let outcome =
                    recommendation::recommended_assignees(&self.api(), project, issue_id).await;
                if let Some(devs) = self.report("Recommend assignees", outcome) {
                    self.console.print("Recommended assignees:");
                    self.console.print(&display::format_developer_list(&devs));
                }
            }
            Some(IssueDetailAction::Back) => return Ok(Transition::Pop),
            None => {}
        }
        Ok(Transition::Stay)
    }

    /// Change one field of the issue as it was rendered and send it back.
    async fn edit_issue(&mut self, project: ProjectId, mut current: Issue) -> Result<()> {
        let edit = match self.choose_action::<IssueField>("Edit issue")? {
            Some(IssueField::Title) => {
                let title = self.console.prompt_text("New title", Some(&current.title))?;
                IssueEdit::Title(title)
            }
            Some(IssueField::Description) => {
                let description = self
                    .console
                    .prompt_text("New description", current.description.as_deref())?;
                IssueEdit::Description(description)
            }
            Some(IssueField::Priority) => {
                let input = self.console.prompt_text("New priority", None)?;
                match input.parse::<IssuePriority>() {
                    Ok(priority) => IssueEdit::Priority(priority),
                    Err(e) => {
                        self.console.print(&display::input_error_message(&e.to_string()));
                        return Ok(());
                    }
                }
            }
            Some(IssueField::Status) => {
                let input = self.console.prompt_text("New status", None)?;
                match input.parse::<IssueStatus>() {
                    Ok(status) => IssueEdit::Status(status),
                    Err(e) => {
                        self.console.print(&display::input_error_message(&e.to_string()));
                        return Ok(());
                    }
                }
            }
            Some(IssueField::Assignee) => match self.choose_assignee().await? {
                Some(username) => IssueEdit::Assignee(username),
                None => return Ok(()),
            },
            Some(IssueField::Cancel) | None => return Ok(()),
        };

        edit.apply(&mut current);
        let outcome = issue::update(&self.api(), project, &current).await;
        self.report_done("Update issue", outcome, "Issue updated.");
        Ok(())
    }

    async fn choose_assignee(&mut self) -> Result<Option<String>> {
        let outcome = auth::developers(&self.api()).await;
        let Some(devs) = self.report("Load developers", outcome) else {
            return Ok(None);
        };
        self.console.print(&display::format_developer_list(&devs));
        if devs.is_empty() {
            return Ok(None);
        }

        let selected = self.choose_from(&devs, "Assignee number: ")?;
        Ok(selected.map(|dev| dev.username.clone()))
    }

    pub(super) async fn comment_screen(
        &mut self,
        project: ProjectId,
        issue_id: IssueId,
    ) -> Result<Transition> {
        let outcome = comment::list(&self.api(), project, issue_id).await;
        let Some(comments) = self.report("Load comments", outcome) else {
            return Ok(Transition::Pop);
        };
        self.console.print(&display::format_comment_list(&comments));

        let title = Screen::CommentScreen(project, issue_id).title();
        match self.choose_action::<CommentAction>(title)? {
            Some(CommentAction::Add) => {
                let content = self.console.prompt_text("Comment", None)?;
                if content.is_empty() {
                    self.console
                        .print(&display::input_error_message("Comment cannot be empty."));
                } else {
                    let outcome = comment::add(&self.api(), project, issue_id, &content).await;
                    self.report_done("Add comment", outcome, "Comment added.");
                }
            }
            Some(CommentAction::Edit) => {
                if comments.is_empty() {
                    self.console
                        .print(&display::input_error_message("There are no comments to edit."));
                } else if let Some(selected) = self.choose_from(&comments, "Comment number: ")? {
                    let content = self.console.prompt_text("New comment", None)?;
                    if content.is_empty() {
                        self.console.print(&display::input_error_message(
                            "Comment content is empty. Enter some text.",
                        ));
                    } else {
                        let outcome =
                            comment::update(&self.api(), project, issue_id, selected.id, &content)
                                .await;
                        self.report_done("Update comment", outcome, "Comment updated.");
                    }
                }
            }
            Some(CommentAction::Delete) => {
                if comments.is_empty() {
                    self.console
                        .print(&display::input_error_message("There are no comments to delete."));
                } else if let Some(selected) = self.choose_from(&comments, "Comment number: ")? {
                    let outcome =
                        comment::delete(&self.api(), project, issue_id, selected.id).await;
                    self.report_done("Delete comment", outcome, "Comment deleted.");
                }
            }
            Some(CommentAction::Back) => return Ok(Transition::Pop),
            None => {}
        }
        Ok(Transition::Stay)
    }

    pub(super) async fn statistics_screen(&mut self, project: ProjectId) -> Result<Transition> {
        let title = Screen::StatisticsScreen(project).title();
        let metric = match self.choose_action::<StatisticsAction>(title)? {
            Some(StatisticsAction::GlobalPerMonth) => {
                let outcome = statistics::global_issues_per_month(&self.api()).await;
                self.plot("Load statistics", outcome);
                return Ok(Transition::Stay);
            }
            Some(StatisticsAction::PerMonth) => StatisticMetric::IssuesPerMonth,
            Some(StatisticsAction::PerStatus) => StatisticMetric::IssuesPerStatus,
            Some(StatisticsAction::PerFixer) => StatisticMetric::IssuesPerFixer,
            Some(StatisticsAction::PerDayAndStatusInWeek) => {
                let input = self
                    .console
                    .prompt_text("Status (leave empty for all)", None)?;
                if input.is_empty() {
                    StatisticMetric::IssuesPerDayAndStatusInWeek(None)
                } else {
                    match input.parse::<IssueStatus>() {
                        Ok(status) => StatisticMetric::IssuesPerDayAndStatusInWeek(Some(status)),
                        Err(e) => {
                            self.console.print(&display::input_error_message(&e.to_string()));
                            return Ok(Transition::Stay);
                        }
                    }
                }
            }
            Some(StatisticsAction::OrderByComments) => StatisticMetric::IssuesOrderByComments,
            Some(StatisticsAction::PerDayInMonth) => StatisticMetric::IssuesPerDayInMonth,
            Some(StatisticsAction::PerDayAndPriorityInWeek) => {
                let input = self.console.prompt_text("Priority", None)?;
                match input.parse::<IssuePriority>() {
                    Ok(priority) => StatisticMetric::IssuesPerDayAndPriorityInWeek(priority),
                    Err(e) => {
                        self.console.print(&display::input_error_message(&e.to_string()));
                        return Ok(Transition::Stay);
                    }
                }
            }
            Some(StatisticsAction::PerPriorityInMonth) => StatisticMetric::IssuesPerPriorityInMonth,
            Some(StatisticsAction::Back) => return Ok(Transition::Pop),
            None => return Ok(Transition::Stay),
        };

        let outcome = statistics::project_metric(&self.api(), project, metric).await;
        self.plot("Load statistics", outcome);
        Ok(Transition::Stay)
    }

    fn plot(&mut self, operation: &str, outcome: Outcome<Series>) {
        let Some(series) = self.report(operation, outcome) else {
            return;
        };
        if series.is_empty() {
            self.console.print("No data to chart.");
        } else {
            self.chart.plot(&series);
        }
    }
}
