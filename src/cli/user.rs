//! User commands

use crate::cli::GlobalOptions;
use crate::cli::handlers::{run_list_command, run_view_command};
use crate::client::{ListingApi, ViewerApi};
use crate::error::Result;

/// Run `user list`.
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command(opts, "users", |client| async move { client.list_users().await }).await
}

/// Run `user me`.
pub async fn me(opts: &GlobalOptions) -> Result<()> {
    run_view_command(opts, "viewer", |client| async move { client.viewer().await }).await
}
