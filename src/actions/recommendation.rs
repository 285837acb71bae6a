use super::Api;
use crate::api::{Endpoint, Outcome, Transport};
use crate::selection::FetchedList;
use crate::types::{Developer, IssueId, ProjectId};

/// Developers the server suggests for an issue, best match first.
pub async fn recommended_assignees<T: Transport>(
    api: &Api<'_, T>,
    project: ProjectId,
    issue: IssueId,
) -> Outcome<FetchedList<Developer>> {
    api.call::<Vec<Developer>>(&Endpoint::RecommendedAssignees(project, issue))
        .await
        .map(FetchedList::from)
}
