//! Global CLI options shared across all commands
//!
//! Collects the global flags and the process-wide cancel token so handlers
//! take a single argument instead of threading each one through.

use crate::cli::{Cli, OutputFormat};
use crate::client::CancelToken;

/// Global CLI options passed to all command handlers.
///
/// Precedence for the output format is `--json` > `--format` > `LNR_FORMAT` > table.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Debug logging requested
    pub debug: bool,

    /// Tripped on Ctrl-C; aborts in-flight requests and retry waits
    pub cancel: CancelToken,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    ///
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli, cancel: CancelToken) -> Self {
        Self {
            format: cli.output_format(),
            debug: cli.debug,
            cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_json_flag_wins_over_format() {
        let cli = Cli::parse_from(["lnr", "--format", "table", "--json", "team", "list"]);
        let opts = GlobalOptions::from_cli(&cli, CancelToken::new());
        assert_eq!(opts.format, OutputFormat::Json);
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["lnr", "team", "list", "--format", "json"]);
        let opts = GlobalOptions::from_cli(&cli, CancelToken::new());
        assert_eq!(opts.format, OutputFormat::Json);
        assert!(!opts.debug);
    }

    #[test]
    fn test_shared_cancel_token() {
        let cli = Cli::parse_from(["lnr", "--debug", "user", "me"]);
        let cancel = CancelToken::new();
        let opts = GlobalOptions::from_cli(&cli, cancel.clone());

        assert!(opts.debug);
        cancel.cancel();
        assert!(opts.cancel.is_cancelled());
    }
}
