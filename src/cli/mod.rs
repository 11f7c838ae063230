//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod context;
pub mod cycle;
pub mod handlers;
pub mod initiative;
pub mod issue;
pub mod label;
pub mod project;
pub mod state;
pub mod team;
pub mod user;

pub use args::{GlobalOptions, IssueFilterArgs, OutputFormat, ProjectFilterArgs, TeamFilterArgs};
pub use context::CommandContext;

/// lnr - read-only command-line client for Linear
#[derive(Parser, Debug)]
#[command(name = "lnr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "LNR_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Shortcut for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "LNR_DEBUG", hide_env = true)]
    pub debug: bool,
}

impl Cli {
    /// The format after applying the `--json` shortcut.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check authentication
    #[command(subcommand)]
    Auth(AuthCommands),

    /// List workspace users
    #[command(subcommand)]
    User(UserCommands),

    /// List and view teams
    #[command(subcommand)]
    Team(TeamCommands),

    /// List issue labels
    #[command(subcommand)]
    Label(LabelCommands),

    /// List workflow states
    #[command(subcommand)]
    State(StateCommands),

    /// List, search and view issues
    #[command(subcommand)]
    Issue(IssueCommands),

    /// List and view projects
    #[command(subcommand)]
    Project(ProjectCommands),

    /// List and view initiatives
    #[command(subcommand)]
    Initiative(InitiativeCommands),

    /// List and view cycles
    #[command(subcommand)]
    Cycle(CycleCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   lnr completion bash > /etc/bash_completion.d/lnr
  zsh:    lnr completion zsh > \"${fpath[1]}/_lnr\"
  fish:   lnr completion fish > ~/.config/fish/completions/lnr.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Authentication subcommands
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Show who the API key belongs to
    Status,
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users in the workspace
    List,

    /// Show the authenticated user
    Me,
}

/// Team subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List teams
    List,

    /// View team details
    View {
        /// Team ID
        id: String,
    },
}

/// Label subcommands
#[derive(Subcommand, Debug)]
pub enum LabelCommands {
    /// List issue labels
    List {
        #[command(flatten)]
        filter: TeamFilterArgs,
    },
}

/// Workflow state subcommands
#[derive(Subcommand, Debug)]
pub enum StateCommands {
    /// List workflow states
    List {
        #[command(flatten)]
        filter: TeamFilterArgs,
    },
}

/// Issue subcommands
#[derive(Subcommand, Debug)]
pub enum IssueCommands {
    /// List issues
    List {
        #[command(flatten)]
        filters: IssueFilterArgs,
    },

    /// View issue details
    #[command(after_help = "EXAMPLES:\n  \
        lnr issue view ENG-123     # By identifier\n  \
        lnr issue view <uuid>      # By ID")]
    View {
        /// Issue ID or identifier (e.g., ENG-123)
        id: String,
    },

    /// Search issues by title
    Search {
        /// Text to look for in issue titles (case-insensitive)
        query: String,

        #[command(flatten)]
        filters: IssueFilterArgs,
    },
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects
    List {
        #[command(flatten)]
        filters: ProjectFilterArgs,
    },

    /// View project details
    View {
        /// Project ID
        id: String,
    },
}

/// Initiative subcommands
#[derive(Subcommand, Debug)]
pub enum InitiativeCommands {
    /// List initiatives
    List,

    /// View initiative details
    View {
        /// Initiative ID
        id: String,
    },
}

/// Cycle subcommands
#[derive(Subcommand, Debug)]
pub enum CycleCommands {
    /// List cycles
    List {
        #[command(flatten)]
        filter: TeamFilterArgs,
    },

    /// View cycle details
    View {
        /// Cycle ID
        id: String,
    },

    /// Show the active cycle for a team
    Active {
        /// Team ID
        team_id: String,
    },
}
