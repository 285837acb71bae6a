//! Menu state machine.
//!
//! The controller owns a stack of [`Screen`]s. Each [`step`] renders the
//! screen on top (fetching whatever it lists), reads one choice and
//! dispatches it. Remote failures are reported and never end the session:
//! a failed action leaves the user where they were, and a screen whose
//! data cannot be loaded pops back to its parent.
//!
//! [`step`]: NavigationController::step

pub mod menu;
mod screens;

use crate::api::{Outcome, Transport};
use crate::console::Console;
use crate::display::{self, ChartSink};
use crate::error::{IssueDeskError, Result};
use crate::selection::FetchedList;
use crate::session::Session;
use crate::types::{IssueId, ProjectId};

use menu::MenuAction;

/// One level of the menu hierarchy with the identifiers it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    ProjectList,
    ProjectAdmin,
    ProjectScreen(ProjectId),
    IssueList(ProjectId),
    IssueDetail(ProjectId, IssueId),
    CommentScreen(ProjectId, IssueId),
    StatisticsScreen(ProjectId),
}

impl Screen {
    pub fn project(&self) -> Option<ProjectId> {
        match self {
            Screen::Main | Screen::ProjectList | Screen::ProjectAdmin => None,
            Screen::ProjectScreen(p)
            | Screen::IssueList(p)
            | Screen::IssueDetail(p, _)
            | Screen::CommentScreen(p, _)
            | Screen::StatisticsScreen(p) => Some(*p),
        }
    }

    pub fn issue(&self) -> Option<IssueId> {
        match self {
            Screen::IssueDetail(_, i) | Screen::CommentScreen(_, i) => Some(*i),
            _ => None,
        }
    }

    /// Whether this screen can sit directly on top of `parent`: it must carry
    /// every identifier the parent carries.
    pub fn extends(&self, parent: &Screen) -> bool {
        let keeps_project = parent.project().is_none() || parent.project() == self.project();
        let keeps_issue = parent.issue().is_none() || parent.issue() == self.issue();
        keeps_project && keeps_issue
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Main => "Main",
            Screen::ProjectList => "Projects",
            Screen::ProjectAdmin => "Project management",
            Screen::ProjectScreen(_) => "Project",
            Screen::IssueList(_) => "Issues",
            Screen::IssueDetail(..) => "Issue detail",
            Screen::CommentScreen(..) => "Comments",
            Screen::StatisticsScreen(_) => "Statistics",
        }
    }
}

/// Which menu the main screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMode {
    LoggedOut,
    LoggedIn,
}

/// Result of a single controller step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What a screen handler asks the controller to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Stay,
    Push(Screen),
    Pop,
    Quit,
}

pub struct NavigationController<T, C, S> {
    transport: T,
    console: C,
    chart: S,
    session: Session,
    stack: Vec<Screen>,
    clear_screen: bool,
}

impl<T: Transport, C: Console, S: ChartSink> NavigationController<T, C, S> {
    pub fn new(transport: T, console: C, chart: S) -> Self {
        Self {
            transport,
            console,
            chart,
            session: Session::new(),
            stack: vec![Screen::Main],
            clear_screen: false,
        }
    }

    /// Clear the terminal whenever a new screen is entered.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn current_screen(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Main)
    }

    pub fn stack(&self) -> &[Screen] {
        &self.stack
    }

    pub fn main_mode(&self) -> MainMode {
        if self.session.is_authenticated() {
            MainMode::LoggedIn
        } else {
            MainMode::LoggedOut
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn chart(&self) -> &S {
        &self.chart
    }

    /// Drive the menus until the user quits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(IssueDeskError::InputClosed) => {
                    tracing::debug!("input closed, leaving");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Render the current screen, handle one choice and apply the resulting
    /// transition.
    pub async fn step(&mut self) -> Result<Flow> {
        let screen = self.current_screen();
        let transition = match screen {
            Screen::Main => self.main_screen().await?,
            Screen::ProjectList => self.project_list_screen().await?,
            Screen::ProjectAdmin => self.project_admin_screen().await?,
            Screen::ProjectScreen(p) => self.project_screen(p).await?,
            Screen::IssueList(p) => self.issue_list_screen(p).await?,
            Screen::IssueDetail(p, i) => self.issue_detail_screen(p, i).await?,
            Screen::CommentScreen(p, i) => self.comment_screen(p, i).await?,
            Screen::StatisticsScreen(p) => self.statistics_screen(p).await?,
        };
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> Result<Flow> {
        match transition {
            Transition::Stay => {}
            Transition::Push(next) => {
                debug_assert!(next.extends(&self.current_screen()));
                tracing::debug!(from = ?self.current_screen(), to = ?next, "enter screen");
                self.stack.push(next);
                if self.clear_screen {
                    self.console.clear()?;
                }
            }
            Transition::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
                tracing::debug!(to = ?self.current_screen(), "back");
            }
            Transition::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn api(&self) -> crate::actions::Api<'_, T> {
        crate::actions::Api::new(&self.transport, &self.session)
    }

    fn show_menu<M: MenuAction>(&mut self, title: &str) {
        self.console.print(&display::format_menu(title, &M::entries()));
    }

    /// Show the menu for `M` and read a choice. Unknown input is reported and
    /// yields `None`.
    fn choose_action<M: MenuAction>(&mut self, title: &str) -> Result<Option<M>> {
        self.show_menu::<M>(title);
        let input = self.console.read_line("Choose an option: ")?;
        let action = M::parse(&input);
        if action.is_none() {
            self.console
                .print(&display::invalid_choice_message(&M::keys()));
        }
        Ok(action)
    }

    /// Read a 1-based number and resolve it against `list`.
    fn choose_from<'l, X>(
        &mut self,
        list: &'l FetchedList<X>,
        prompt: &str,
    ) -> Result<Option<&'l X>> {
        let raw = self.console.read_line(prompt)?;
        match list.select(&raw) {
            Ok(item) => Ok(Some(item)),
            Err(e) => {
                self.console.print(&display::selection_error_message(&e));
                Ok(None)
            }
        }
    }

    /// Print the failure for `outcome`, if any; return its payload on success.
    fn report<X>(&mut self, operation: &str, outcome: Outcome<X>) -> Option<X> {
        if let Some(message) = display::failure_message(operation, &outcome) {
            self.console.print(&message);
        }
        outcome.success()
    }

    /// Like [`Self::report`] for operations without a payload, printing
    /// `done` on success.
    fn report_done(&mut self, operation: &str, outcome: Outcome<()>, done: &str) {
        if self.report(operation, outcome).is_some() {
            self.console.print(&display::success_message(done));
        }
    }
}
