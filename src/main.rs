//! Binary entry point: parse arguments and run the TUI.

use anyhow::Result;
use clap::Parser;
use tictactui::cli::Cli;
use tictactui::tui::run_tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run_tui(&cli).await
}
