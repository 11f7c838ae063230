//! lnr - read-only command-line client for the Linear GraphQL API

use clap::{CommandFactory, Parser};
use log::debug;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{
    AuthCommands, Cli, Commands, CycleCommands, GlobalOptions, InitiativeCommands, IssueCommands,
    LabelCommands, ProjectCommands, StateCommands, TeamCommands, UserCommands,
};
use client::CancelToken;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        // 130 is the conventional status for a run stopped by Ctrl-C
        let code = if err.is_cancelled() { 130 } else { 1 };
        std::process::exit(code);
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Trip `cancel` on Ctrl-C.
fn spawn_interrupt_handler(cancel: CancelToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received, cancelling");
            cancel.cancel();
        }
    });
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let cancel = CancelToken::new();
    let opts = GlobalOptions::from_cli(&cli, cancel.clone());
    init_logging(opts.debug);
    spawn_interrupt_handler(cancel);

    match cli.command {
        Commands::Version => {
            println!("lnr version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "lnr", &mut std::io::stdout());
            Ok(())
        }
        Commands::Auth(AuthCommands::Status) => cli::auth::status(&opts).await,
        Commands::User(user_cmd) => match user_cmd {
            UserCommands::List => cli::user::list(&opts).await,
            UserCommands::Me => cli::user::me(&opts).await,
        },
        Commands::Team(team_cmd) => match team_cmd {
            TeamCommands::List => cli::team::list(&opts).await,
            TeamCommands::View { id } => cli::team::view(&opts, &id).await,
        },
        Commands::Label(LabelCommands::List { filter }) => cli::label::list(&opts, &filter).await,
        Commands::State(StateCommands::List { filter }) => cli::state::list(&opts, &filter).await,
        Commands::Issue(issue_cmd) => match issue_cmd {
            IssueCommands::List { filters } => cli::issue::list(&opts, &filters).await,
            IssueCommands::View { id } => cli::issue::view(&opts, &id).await,
            IssueCommands::Search { query, filters } => {
                cli::issue::search(&opts, &query, &filters).await
            }
        },
        Commands::Project(project_cmd) => match project_cmd {
            ProjectCommands::List { filters } => cli::project::list(&opts, &filters).await,
            ProjectCommands::View { id } => cli::project::view(&opts, &id).await,
        },
        Commands::Initiative(initiative_cmd) => match initiative_cmd {
            InitiativeCommands::List => cli::initiative::list(&opts).await,
            InitiativeCommands::View { id } => cli::initiative::view(&opts, &id).await,
        },
        Commands::Cycle(cycle_cmd) => match cycle_cmd {
            CycleCommands::List { filter } => cli::cycle::list(&opts, &filter).await,
            CycleCommands::View { id } => cli::cycle::view(&opts, &id).await,
            CycleCommands::Active { team_id } => cli::cycle::active(&opts, &team_id).await,
        },
    }
}
