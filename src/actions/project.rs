use serde::Serialize;

use super::Api;
use crate::api::{Endpoint, Outcome, Transport};
use crate::selection::FetchedList;
use crate::types::{Project, ProjectId};

#[derive(Debug, Serialize)]
struct NewProject<'a> {
    name: &'a str,
}

pub async fn list<T: Transport>(api: &Api<'_, T>) -> Outcome<FetchedList<Project>> {
    api.call::<Vec<Project>>(&Endpoint::Projects)
        .await
        .map(FetchedList::from)
}

pub async fn create<T: Transport>(api: &Api<'_, T>, name: &str) -> Outcome<()> {
    api.call_with_body(&Endpoint::CreateProject, &NewProject { name })
        .await
}

pub async fn delete<T: Transport>(api: &Api<'_, T>, project: ProjectId) -> Outcome<()> {
    api.call(&Endpoint::DeleteProject(project)).await
}
