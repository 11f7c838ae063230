//! Cycle commands

use crate::cli::handlers::{render_detail, run_list_command, run_view_command};
use crate::cli::{CommandContext, GlobalOptions, OutputFormat, TeamFilterArgs};
use crate::client::{DetailApi, ListingApi};
use crate::error::Result;

/// Printed when the team exists but has no cycle running.
pub const NO_ACTIVE_CYCLE: &str = "No active cycle for this team.";

/// Run `cycle list [--team]`.
pub async fn list(opts: &GlobalOptions, filter: &TeamFilterArgs) -> Result<()> {
    let team = filter.team.clone();
    run_list_command(opts, "cycles", |client| async move {
        client.list_cycles(team.as_deref()).await
    })
    .await
}

/// Run `cycle view <id>`.
pub async fn view(opts: &GlobalOptions, id: &str) -> Result<()> {
    let id = id.to_string();
    run_view_command(opts, "cycle", |client| async move { client.get_cycle(&id).await }).await
}

/// Run `cycle active <team-id>`. A team with no running cycle is not an error.
pub async fn active(opts: &GlobalOptions, team_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let output = active_cycle_output(ctx.client.as_ref(), team_id, ctx.format).await?;
    println!("{}", output);
    Ok(())
}

/// Render the team's active cycle, or [`NO_ACTIVE_CYCLE`].
pub async fn active_cycle_output<C: DetailApi + ?Sized>(
    client: &C,
    team_id: &str,
    format: OutputFormat,
) -> Result<String> {
    match client.get_active_cycle(team_id).await {
        Ok(cycle) => render_detail(&cycle, format),
        Err(err) if err.is_no_active_cycle() => Ok(NO_ACTIVE_CYCLE.to_string()),
        Err(err) => Err(err),
    }
}
