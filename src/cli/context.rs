//! Command execution context
//!
//! Loads configuration from the environment and builds the API client, so
//! every command starts from the same place.

use std::sync::Arc;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{LinearApi, LinearClient};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing the client and output format.
pub struct CommandContext {
    /// Linear API client (Arc-wrapped so fetchers can own a handle)
    pub client: Arc<dyn LinearApi>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config from the environment and build the client.
    ///
    /// # Errors
    /// Fails before any network call if `LINEAR_API_KEY` is missing or a
    /// setting override is malformed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::from_env()?;
        Self::with_config(config, opts)
    }

    /// Build a context from already-loaded configuration.
    pub fn with_config(config: Config, opts: &GlobalOptions) -> Result<Self> {
        debug!("Using endpoint {}", config.settings.endpoint);

        let client = LinearClient::new(&config, opts.cancel.clone())?;

        Ok(Self {
            client: Arc::new(client),
            format: opts.format,
        })
    }
}
