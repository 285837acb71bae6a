use serde::Serialize;

use super::Api;
use crate::api::{Endpoint, Outcome, Transport};
use crate::selection::FetchedList;
use crate::types::{Comment, CommentId, IssueId, ProjectId};

#[derive(Debug, Serialize)]
struct CommentBody<'a> {
    content: &'a str,
}

pub async fn list<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    issue: IssueId,
) -> Outcome<FetchedList<Comment>> {
    api.call::<Vec<Comment>>(&Endpoint::Comments(project, issue))
        .await
        .map(FetchedList::from)
}

pub async fn add<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    issue: IssueId,
    content: &str,
) -> Outcome<()> {
    api.call_with_body(&Endpoint::CreateComment(project, issue), &CommentBody { content })
        .await
}

/// Replace a comment's text. Callers reject blank content before calling.
pub async fn update<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    issue: IssueId,
    comment: CommentId,
    content: &str,
) -> Outcome<()> {
    api.call_with_body(
        &Endpoint::UpdateComment(project, issue, comment),
        &CommentBody { content },
    )
    .await
}

pub async fn delete<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    issue: IssueId,
    comment: CommentId,
) -> Outcome<()> {
    api.call(&Endpoint::DeleteComment(project, issue, comment))
        .await
}
