//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe - two players or human vs computer
#[derive(Parser, Debug)]
#[command(name = "tictactui")]
#[command(about = "Terminal tic-tac-toe with a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Computer deliberation delay in milliseconds
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    /// Log file path
    #[arg(long, default_value = "tictactui.log")]
    pub log_file: PathBuf,
}
