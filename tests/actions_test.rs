mod common;

use serde_json::json;

use common::{MockTransport, TOKEN, issue_json, ok, status};
use issuedesk::actions::{Api, auth, comment, issue, project, recommendation, statistics};
use issuedesk::api::{ApiResponse, Method, StatisticMetric, TransportError};
use issuedesk::types::NewAccount;
use issuedesk::{
    CommentId, Credential, IssueId, IssuePriority, IssueStatus, Outcome, ProjectId, Role,
    Session,
};

fn authenticated() -> Session {
    let mut session = Session::new();
    session.set_credential(Credential::new(TOKEN, "alice"));
    session
}

#[tokio::test]
async fn test_login_reads_token_from_body() {
    let transport = MockTransport::new();
    transport.respond(ok(json!({"token": "from-body"})));
    let mut session = Session::new();

    let outcome = auth::login(&transport, &mut session, "alice", "pw").await;

    assert_eq!(outcome, Outcome::Success(()));
    assert_eq!(
        session.auth_headers().get("Cookie").map(String::as_str),
        Some("jwt=from-body")
    );
}

#[tokio::test]
async fn test_login_without_token_is_unknown_failure() {
    let transport = MockTransport::new();
    transport.respond(status(200));
    let mut session = Session::new();

    let outcome = auth::login(&transport, &mut session, "alice", "pw").await;

    assert_eq!(outcome, Outcome::UnknownFailure(Some(200)));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_login_transport_failure() {
    let transport = MockTransport::new();
    transport.fail(TransportError::Connect("refused".to_string()));
    let mut session = Session::new();

    let outcome = auth::login(&transport, &mut session, "alice", "pw").await;
    assert_eq!(outcome, Outcome::UnknownFailure(None));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_requests_carry_session_cookie() {
    let transport = MockTransport::new();
    transport.respond(ok(json!([])));
    let session = authenticated();

    let outcome = project::list(&Api::new(&transport, &session)).await;

    assert_eq!(outcome.success().map(|l| l.len()), Some(0));
    let request = transport.last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/projects");
    assert_eq!(
        request.headers.get("Cookie").map(String::as_str),
        Some(format!("jwt={TOKEN}").as_str())
    );
}

#[tokio::test]
async fn test_anonymous_requests_have_no_cookie() {
    let transport = MockTransport::new();
    transport.respond(status(401));
    let session = Session::new();

    let outcome = project::list(&Api::new(&transport, &session)).await;

    assert_eq!(outcome, Outcome::Unauthorized);
    assert!(transport.last_request().headers.is_empty());
}

#[tokio::test]
async fn test_create_project_accepts_any_success_code() {
    let transport = MockTransport::new();
    transport.respond(status(200).with_body(json!({"id": 4, "name": "Alpha"})));
    let session = authenticated();

    let outcome = project::create(&Api::new(&transport, &session), "Alpha").await;

    assert_eq!(outcome, Outcome::Success(()));
    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.body, Some(json!({"name": "Alpha"})));
}

#[tokio::test]
async fn test_malformed_list_body_is_unknown_failure() {
    let transport = MockTransport::new();
    transport.respond(ok(json!({"unexpected": true})));
    let session = authenticated();

    let outcome = issue::list(&Api::new(&transport, &session), ProjectId(5)).await;
    assert_eq!(outcome.tag(), "unknown_failure");
}

#[tokio::test]
async fn test_get_issue_decodes_fields() {
    let transport = MockTransport::new();
    transport.respond(ok(issue_json(11, "Crash on save", "REOPENED")));
    let session = authenticated();

    let found = issue::get(&Api::new(&transport, &session), ProjectId(5), IssueId(11))
        .await
        .success()
        .unwrap();

    assert_eq!(found.id, IssueId(11));
    assert_eq!(found.priority, Some(IssuePriority::Major));
    assert_eq!(found.reporter_username.as_deref(), Some("tester1"));
}

#[tokio::test]
async fn test_comment_update_and_delete_paths() {
    let transport = MockTransport::new();
    transport.respond(status(200));
    transport.respond(status(204));
    let session = authenticated();
    let api = Api::new(&transport, &session);

    let updated = comment::update(&api, ProjectId(5), IssueId(11), CommentId(3), "edited").await;
    let deleted = comment::delete(&api, ProjectId(5), IssueId(11), CommentId(3)).await;

    assert!(updated.is_success());
    assert!(deleted.is_success());
    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].path, "/projects/5/issues/11/comments/3");
    assert_eq!(requests[0].body, Some(json!({"content": "edited"})));
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].body, None);
}

#[tokio::test]
async fn test_signup_body() {
    let transport = MockTransport::new();
    transport.respond(status(201));
    let session = authenticated();
    let account = NewAccount {
        username: "carol".to_string(),
        password: "pw".to_string(),
        role: Role::Pl,
    };

    let outcome = auth::signup(&Api::new(&transport, &session), &account).await;

    assert!(outcome.is_success());
    assert_eq!(
        transport.last_request().body,
        Some(json!({"username": "carol", "password": "pw", "role": "PL"}))
    );
}

#[tokio::test]
async fn test_recommended_assignees_order_kept() {
    let transport = MockTransport::new();
    transport.respond(ok(json!([{"username": "dev2"}, {"username": "dev1"}])));
    let session = authenticated();

    let devs = recommendation::recommended_assignees(
        &Api::new(&transport, &session),
        ProjectId(5),
        IssueId(11),
    )
    .await
    .success()
    .unwrap();

    let names: Vec<_> = devs.items().iter().map(|d| d.username.as_str()).collect();
    assert_eq!(names, vec!["dev2", "dev1"]);
}

#[tokio::test]
async fn test_statistic_paths() {
    let transport = MockTransport::new();
    transport.respond(ok(json!({"2024-01": 3})));
    transport.respond(ok(json!({"MON": 1})));
    let session = authenticated();
    let api = Api::new(&transport, &session);

    let global = statistics::global_issues_per_month(&api).await.success().unwrap();
    let weekly = statistics::project_metric(
        &api,
        ProjectId(5),
        StatisticMetric::IssuesPerDayAndPriorityInWeek(IssuePriority::Blocker),
    )
    .await
    .success()
    .unwrap();

    assert_eq!(global.points, vec![("2024-01".to_string(), 3.0)]);
    assert_eq!(weekly.points, vec![("MON".to_string(), 1.0)]);
    let requests = transport.requests();
    assert_eq!(requests[0].path, "/statistics/issuesPerMonth");
    assert_eq!(
        requests[1].path,
        "/projects/5/statistics/issuesPerDayAndPriorityInWeek/BLOCKER"
    );
}

#[tokio::test]
async fn test_unexpected_status_keeps_code() {
    let transport = MockTransport::new();
    transport.respond(ApiResponse::new(503));
    let session = authenticated();

    let outcome = project::delete(&Api::new(&transport, &session), ProjectId(5)).await;
    assert_eq!(outcome, Outcome::UnknownFailure(Some(503)));
}

#[tokio::test]
async fn test_issue_list_tolerates_null_fields() {
    let transport = MockTransport::new();
    transport.respond(ok(json!([
        {"id": 1, "title": "t", "status": null},
        issue_json(2, "Crash on save", "NEW")
    ])));
    let session = authenticated();

    let issues = issue::list(&Api::new(&transport, &session), ProjectId(5))
        .await
        .success()
        .unwrap();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues.items()[0].status, IssueStatus::New);
}
