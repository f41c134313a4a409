//! Terminal UI: event loop, rendering, and computer-move scheduling.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::cli::Cli;
use app::{App, AppEvent};

/// Runs the TUI until the user quits.
pub async fn run_tui(cli: &Cli) -> Result<()> {
    // Log to file so output never corrupts the alternate screen
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(delay_ms = cli.delay_ms, "starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, Duration::from_millis(cli.delay_ms)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "event loop error");
    }

    res
}

/// Drives the game: draws frames, routes key presses, and turns the
/// controller's computer-move requests into delayed tasks.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    delay: Duration,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut app = App::new();
    let mut rng = StdRng::from_entropy();

    loop {
        let snapshot = app.snapshot();
        terminal.draw(|frame| ui::draw(frame, &snapshot, app.cursor()))?;

        if app.should_quit() {
            info!("user quit");
            return Ok(());
        }

        // Deliver any computer turns whose delay has elapsed. The
        // controller drops stale or post-terminal ones.
        while let Ok(event) = event_rx.try_recv() {
            app.apply_event(event, &mut rng);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code);
            }
        }

        // The delayed move is a scheduled task tied to the round it
        // was requested in, never a bare timer mutating state.
        if let Some(round) = app.take_pending_computer() {
            debug!(round, delay_ms = delay.as_millis() as u64, "scheduling computer move");
            let tx = event_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(AppEvent::ComputerTurn { round });
            });
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
