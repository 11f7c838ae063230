//! Label commands

use crate::cli::handlers::run_list_command;
use crate::cli::{GlobalOptions, TeamFilterArgs};
use crate::client::ListingApi;
use crate::error::Result;

/// Run `label list [--team]`.
pub async fn list(opts: &GlobalOptions, filter: &TeamFilterArgs) -> Result<()> {
    let team = filter.team.clone();
    run_list_command(opts, "labels", |client| async move {
        client.list_labels(team.as_deref()).await
    })
    .await
}
