use clap::{Parser, Subcommand};

use recast_cli::CliContext;
use recast_cli::commands;
use recast_cli::logging;

#[derive(Parser)]
#[command(name = "recast", version, about = "FFXIV cooldown overlay core")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the skill database
    Skills {
        /// Restrict to one job (abbreviation or full name)
        #[arg(short, long)]
        job: Option<String>,

        /// Only skills with cooldowns long enough to track
        #[arg(short, long)]
        trackable: bool,
    },
    /// Replay a network log file and print the resulting timers
    Replay {
        #[arg(short, long)]
        path: String,

        /// Player name used for own-cast classification
        #[arg(long)]
        player: Option<String>,
    },
    /// Follow a live network log file, or a directory's newest file
    Tail {
        /// Log file to follow
        #[arg(short, long)]
        path: Option<String>,

        /// Directory to watch (defaults to the configured one)
        #[arg(short, long)]
        directory: Option<String>,

        /// Player name used for own-cast classification
        #[arg(long)]
        player: Option<String>,
    },
    /// Show or update the persisted configuration
    Config {
        #[arg(long)]
        set_player: Option<String>,

        #[arg(long)]
        set_directory: Option<String>,

        #[arg(long)]
        enable_timers: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let _guard = logging::init();

    let cli = Cli::parse();
    let mut ctx = CliContext::new();

    match cli.command {
        Commands::Skills { job, trackable } => commands::skills(job.as_deref(), trackable),
        Commands::Replay { path, player } => commands::replay(&mut ctx, &path, player).await,
        Commands::Tail {
            path,
            directory,
            player,
        } => commands::tail(&mut ctx, path, directory, player).await,
        Commands::Config {
            set_player,
            set_directory,
            enable_timers,
        } => commands::config(&mut ctx, set_player, set_directory, enable_timers),
    }
}
