//! GWA CLI - web archive navigation tools.
//!
//! Provides commands for:
//! - `check`: Validate configuration and every menu entry
//! - `menus`: Print the resolved site menus
//! - `sidebar`: Print the sidebar of a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, MenusArgs, SidebarArgs};
use output::Output;

/// GWA - web archive navigation tools.
#[derive(Parser)]
#[command(name = "gwa", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and navigation entries.
    Check(CheckArgs),
    /// Print resolved menus as JSON.
    Menus(MenusArgs),
    /// Print the sidebar of a page as JSON.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Menus(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
