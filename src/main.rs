mod app;
mod bank;
mod config;
mod logging;
mod quiz;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::bank::QuestionBank;
use crate::quiz::{QuizSession, TokioTimer};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Timed multiple-choice quiz in the terminal
#[derive(Parser, Debug)]
#[command(name = "crabquiz")]
#[command(about = "Timed multiple-choice quiz in the terminal")]
#[command(version)]
struct Args {
    /// Question bank to use (TOML). Defaults to the bundled bank.
    #[arg(short, long)]
    bank: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load config
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let mut cfg = config::load_config(&config_path)?;
    if let Some(bank) = args.bank {
        cfg.quiz.bank_path = Some(bank);
    }

    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::info!(log = %path.display(), "crabquiz starting");
    }

    // Fail on a bad bank before touching the terminal
    let bank = match &cfg.quiz.bank_path {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("Failed to load question bank {}", path.display()))?,
        None => QuestionBank::builtin().context("Bundled question bank is invalid")?,
    };

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, bank).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "crabquiz exited with an error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    bank: QuestionBank,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let timer = TokioTimer::new(
        event_tx.clone(),
        Duration::from_millis(cfg.quiz.tick_interval_ms.max(1)),
    );
    let session = QuizSession::new(bank, Box::new(timer));
    let mut state = AppState::new(cfg, session);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });
    drop(event_tx);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        for action in handler::handle_event(&mut state, event) {
            match action {
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            tracing::info!("quit requested");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
