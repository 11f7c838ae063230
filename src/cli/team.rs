//! Team commands

use crate::cli::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_view_command};
use crate::client::{DetailApi, ListingApi};
use crate::error::Result;

/// Run `team list`.
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command(opts, "teams", |client| async move { client.list_teams().await }).await
}

/// Run `team view <id>`.
pub async fn view(opts: &GlobalOptions, id: &str) -> Result<()> {
    let id = id.to_string();
    run_view_command(opts, "team", |client| async move { client.get_team(&id).await }).await
}
