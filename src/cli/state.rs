//! Workflow state commands

use crate::cli::handlers::run_list_command;
use crate::cli::{GlobalOptions, TeamFilterArgs};
use crate::client::ListingApi;
use crate::error::Result;

/// Run `state list [--team]`.
pub async fn list(opts: &GlobalOptions, filter: &TeamFilterArgs) -> Result<()> {
    let team = filter.team.clone();
    run_list_command(opts, "workflow states", |client| async move {
        client.list_workflow_states(team.as_deref()).await
    })
    .await
}
