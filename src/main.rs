mod about;
mod cli;
mod models;
mod mpris;
mod tui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use tui::PlayerController;

fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the TUI
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let player = cli.connect()?;
    let uri = player.uri().to_string();

    tui::run(PlayerController::new(player, uri))
}
