//! Issue commands

use crate::cli::handlers::{run_list_command, run_view_command};
use crate::cli::{GlobalOptions, IssueFilterArgs};
use crate::client::{DetailApi, ListingApi};
use crate::error::Result;

/// Run `issue list`.
pub async fn list(opts: &GlobalOptions, filters: &IssueFilterArgs) -> Result<()> {
    let list_opts = filters.to_options();
    run_list_command(opts, "issues", |client| async move {
        client.list_issues(&list_opts).await
    })
    .await
}

/// Run `issue search <query>`.
pub async fn search(opts: &GlobalOptions, query: &str, filters: &IssueFilterArgs) -> Result<()> {
    let query = query.to_string();
    let list_opts = filters.to_options();
    run_list_command(opts, "issues", |client| async move {
        client.search_issues(&query, &list_opts).await
    })
    .await
}

/// Run `issue view <id>`. Accepts either the UUID or the identifier (ENG-123).
pub async fn view(opts: &GlobalOptions, id: &str) -> Result<()> {
    let id = id.to_string();
    run_view_command(opts, "issue", |client| async move { client.get_issue(&id).await }).await
}
