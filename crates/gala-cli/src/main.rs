use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gala-cli", version, about = "Gala CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Countdown gate
    Countdown {
        #[command(subcommand)]
        action: commands::countdown::CountdownAction,
    },
    /// Reveal widgets (scratch card, envelope)
    Widget {
        #[command(subcommand)]
        action: commands::widget::WidgetAction,
    },
    /// Gallery viewer
    Gallery {
        #[command(subcommand)]
        action: commands::gallery::GalleryAction,
    },
    /// The accept/reject contract
    Contract {
        #[command(subcommand)]
        action: commands::contract::ContractAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Countdown { action } => commands::countdown::run(action),
        Commands::Widget { action } => commands::widget::run(action),
        Commands::Gallery { action } => commands::gallery::run(action),
        Commands::Contract { action } => commands::contract::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
