#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use serde_json::{Value, json};

use issuedesk::actions::statistics::Series;
use issuedesk::api::{ApiRequest, ApiResponse, Transport, TransportError};
use issuedesk::console::Console;
use issuedesk::display::ChartSink;
use issuedesk::{IssueDeskError, NavigationController};

pub const TOKEN: &str = "tok-123";

/// Transport that answers from a queue of scripted responses and records
/// every request it was given.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: ApiResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn pending(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let next = self.responses.borrow_mut().pop_front();
        let described = format!("{} {}", request.method, request.path);
        self.requests.borrow_mut().push(request);
        next.unwrap_or_else(|| panic!("no scripted response for {described}"))
    }
}

/// Console fed from a list of lines, capturing everything printed.
#[derive(Default)]
pub struct ScriptedConsole {
    input: RefCell<VecDeque<String>>,
    output: RefCell<Vec<String>>,
    clears: Cell<usize>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        let console = Self::default();
        console.feed(lines);
        console
    }

    pub fn feed(&self, lines: &[&str]) {
        self.input
            .borrow_mut()
            .extend(lines.iter().map(|l| l.to_string()));
    }

    pub fn output(&self) -> String {
        self.output.borrow().join("\n")
    }

    /// Output printed since the last call, which is then forgotten.
    pub fn take_output(&self) -> String {
        let output = self.output.borrow_mut().drain(..).collect::<Vec<_>>();
        output.join("\n")
    }

    pub fn clears(&self) -> usize {
        self.clears.get()
    }

    pub fn unread(&self) -> usize {
        self.input.borrow().len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> issuedesk::Result<String> {
        self.input
            .borrow_mut()
            .pop_front()
            .ok_or(IssueDeskError::InputClosed)
    }

    fn read_secret(&mut self, prompt: &str) -> issuedesk::Result<String> {
        self.read_line(prompt)
    }

    fn print(&mut self, text: &str) {
        self.output.borrow_mut().push(text.to_string());
    }

    fn clear(&mut self) -> issuedesk::Result<()> {
        self.clears.set(self.clears.get() + 1);
        Ok(())
    }
}

/// Chart sink that keeps every series it receives.
#[derive(Default)]
pub struct RecordingChart {
    pub plotted: Vec<Series>,
}

impl ChartSink for RecordingChart {
    fn plot(&mut self, series: &Series) {
        self.plotted.push(series.clone());
    }
}

pub type TestController = NavigationController<MockTransport, ScriptedConsole, RecordingChart>;

pub fn controller(lines: &[&str]) -> TestController {
    NavigationController::new(
        MockTransport::new(),
        ScriptedConsole::new(lines),
        RecordingChart::default(),
    )
}

/// A controller that has already logged in as `alice`.
pub async fn logged_in() -> TestController {
    let mut ctrl = controller(&["1", "alice", "secret"]);
    ctrl.transport().respond(login_ok());
    ctrl.step().await.expect("login step failed");
    assert!(ctrl.session().is_authenticated(), "login did not succeed");
    ctrl.console().take_output();
    ctrl
}

/// Feed `lines` and queue `responses`, then run one step.
pub async fn step_with(ctrl: &mut TestController, lines: &[&str], responses: Vec<ApiResponse>) {
    ctrl.console().feed(lines);
    for response in responses {
        ctrl.transport().respond(response);
    }
    ctrl.step().await.expect("step failed");
}

pub fn login_ok() -> ApiResponse {
    ApiResponse::new(200).with_cookie("jwt", TOKEN)
}

pub fn ok(body: Value) -> ApiResponse {
    ApiResponse::new(200).with_body(body)
}

pub fn status(code: u16) -> ApiResponse {
    ApiResponse::new(code)
}

pub fn project_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

pub fn issue_json(id: i64, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "steps to reproduce",
        "reporterUsername": "tester1",
        "reportedDate": "2024-05-01T10:00:00",
        "fixerUsername": null,
        "assigneeUsername": null,
        "priority": "MAJOR",
        "status": status,
        "projectId": 5
    })
}

pub fn comment_json(id: i64, username: &str, content: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "content": content,
        "createdAt": "2024-05-02T09:00:00"
    })
}
