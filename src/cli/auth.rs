//! Auth status command

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::ViewerApi;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::models::{AuthStatus, Describe};
use crate::output::detail::format_detail;
use crate::output::json::format_json;

/// Printed instead of an error when no API key is configured.
pub const SETUP_HELP: &str = "\
To authenticate, set your Linear API key:
  export LINEAR_API_KEY=your_api_key

You can create an API key at:
  Settings > Account > Security & Access > Personal API keys";

/// Run `auth status`.
pub async fn status(opts: &GlobalOptions) -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(Error::Config(ConfigError::MissingApiKey)) => {
            println!("{} Not authenticated.\n", "✗".red());
            println!("{}", SETUP_HELP);
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let ctx = CommandContext::with_config(config, opts)?;
    let status = fetch_status(ctx.client.as_ref()).await?;
    println!("{}", render_status(&status, ctx.format)?);

    Ok(())
}

/// Look up the key's user and organisation.
pub async fn fetch_status<C: ViewerApi + ?Sized>(client: &C) -> Result<AuthStatus> {
    let user = client.viewer().await?;
    let organisation = client.organisation().await?;
    Ok(AuthStatus::new(user, organisation))
}

pub fn render_status(status: &AuthStatus, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format_json(status)?),
        OutputFormat::Table => Ok(format!(
            "{} Authenticated!\n\n{}",
            "✓".green(),
            format_detail(&status.detail_fields())
        )),
    }
}
