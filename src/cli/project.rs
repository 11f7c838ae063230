//! Project commands

use crate::cli::handlers::{run_list_command, run_view_command};
use crate::cli::{GlobalOptions, ProjectFilterArgs};
use crate::client::{DetailApi, ListingApi};
use crate::error::Result;

/// Run `project list`.
pub async fn list(opts: &GlobalOptions, filters: &ProjectFilterArgs) -> Result<()> {
    let list_opts = filters.to_options();
    run_list_command(opts, "projects", |client| async move {
        client.list_projects(&list_opts).await
    })
    .await
}

/// Run `project view <id>`.
pub async fn view(opts: &GlobalOptions, id: &str) -> Result<()> {
    let id = id.to_string();
    run_view_command(opts, "project", |client| async move {
        client.get_project(&id).await
    })
    .await
}
