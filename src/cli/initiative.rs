//! Initiative commands

use crate::cli::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_view_command};
use crate::client::{DetailApi, ListingApi};
use crate::error::Result;

/// Run `initiative list`.
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command(opts, "initiatives", |client| async move {
        client.list_initiatives().await
    })
    .await
}

/// Run `initiative view <id>`.
pub async fn view(opts: &GlobalOptions, id: &str) -> Result<()> {
    let id = id.to_string();
    run_view_command(opts, "initiative", |client| async move {
        client.get_initiative(&id).await
    })
    .await
}
