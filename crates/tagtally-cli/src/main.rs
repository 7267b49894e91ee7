use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tagtally-cli", version, about = "Tagtally CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-tag time summaries
    Summary {
        #[command(subcommand)]
        action: commands::summary::SummaryAction,
    },
    /// Calendar events on the backend
    Events {
        #[command(subcommand)]
        action: commands::events::EventsAction,
    },
    /// Backend authentication
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Tag helpers
    Tag {
        #[command(subcommand)]
        action: commands::tag::TagAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Summary { action } => commands::summary::run(action),
        Commands::Events { action } => commands::events::run(action),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Tag { action } => commands::tag::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
