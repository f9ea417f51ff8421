//! quizhub CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "quizhub", version, about = "Terminal quiz player with a local quiz catalog")]
struct Cli {
    /// Settings file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory (overrides settings and QUIZHUB_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play quizzes interactively
    Play {
        /// Player name (asked for when omitted)
        #[arg(long)]
        name: Option<String>,
    },

    /// List quizzes in the catalog
    List,

    /// Show completed quiz results, most recent first
    History {
        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Check a quiz JSON file without importing it
    Validate {
        /// Path to the quiz JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Manage the catalog and app name
    Admin {
        /// Admin username
        #[arg(long)]
        username: String,

        /// Admin password
        #[arg(long)]
        password: String,

        #[command(subcommand)]
        action: AdminAction,
    },

    /// Create starter settings and an example quiz file
    Init,
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// Import a quiz from a JSON file
    Import {
        /// Path to the quiz JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Delete a quiz by id
    Delete {
        /// Quiz id (see `quizhub list`)
        #[arg(long)]
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Change the app display name
    SetName {
        /// New display name
        #[arg(long)]
        name: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let location = commands::DataLocation {
        config: cli.config,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        Commands::Play { name } => commands::play::execute(&location, name).await,
        Commands::List => commands::list::execute(&location),
        Commands::History { limit } => commands::history::execute(&location, limit),
        Commands::Validate { file } => commands::validate::execute(file).await,
        Commands::Admin {
            username,
            password,
            action,
        } => commands::admin::execute(&location, &username, &password, action).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
