//! daily-puzzles - deterministic daily Boggle and Word Ladder
//!
//! Same date, same puzzles, everywhere.

mod app;
mod cli;
mod tui;

use app::{AppCoordinator, Move, Screen};
use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Command, GameArg};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use daily_puzzles::config::{Config, ConfigError};
use daily_puzzles::game::seed::today;
use daily_puzzles::game::{GameKind, PuzzleSession};
use daily_puzzles::ladder::validation::shortest_ladder;
use serde_json::json;
use std::path::Path;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tui::Tui;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode puzzle: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Show { game, date }) => {
            init_logging(None)?;
            show(&config, game, date.unwrap_or_else(today))
        }
        Some(Command::Boggle { date }) => {
            init_logging(cli.log_file.as_deref())?;
            let date = date.unwrap_or_else(today);
            run(AppCoordinator::with_game(config, date, GameKind::Boggle))
        }
        Some(Command::Ladder { date }) => {
            init_logging(cli.log_file.as_deref())?;
            let date = date.unwrap_or_else(today);
            run(AppCoordinator::with_game(config, date, GameKind::WordLadder))
        }
        None => {
            init_logging(cli.log_file.as_deref())?;
            run(AppCoordinator::new(config, today()))
        }
    }
}

/// Logs go to stderr for one-shot commands. The terminal UI owns the
/// screen, so it logs only when given a file.
fn init_logging(log_file: Option<&Path>) -> Result<(), AppError> {
    let filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}

/// Print one day's puzzle, its metadata and a solution as JSON.
fn show(config: &Config, game: GameArg, date: NaiveDate) -> Result<(), AppError> {
    let value = match game {
        GameArg::Boggle => {
            let engine = config.boggle_engine(date);
            let grid: Vec<String> = engine.grid().to_string().lines().map(String::from).collect();
            json!({
                "game": GameKind::Boggle,
                "date": date,
                "seed": engine.seed(),
                "grid": grid,
                "metadata": engine.puzzle_metadata(),
                "possibleWords": engine.possible_words(),
                "totalPossibleScore": engine.total_possible_score(),
            })
        }
        GameArg::Ladder => {
            let engine = config.word_ladder_engine(date);
            let dictionary = config.ladder_dictionary();
            let puzzle = engine.puzzle();
            let solution =
                shortest_ladder(&puzzle.start_word, &puzzle.target_word, dictionary.as_ref());
            if solution.is_none() {
                warn!(start = %puzzle.start_word, target = %puzzle.target_word, "no ladder found");
            }
            json!({
                "game": GameKind::WordLadder,
                "date": date,
                "seed": engine.seed(),
                "puzzle": puzzle,
                "metadata": engine.puzzle_metadata(),
                "solution": solution,
            })
        }
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn run(mut coordinator: AppCoordinator) -> Result<(), AppError> {
    info!(date = %coordinator.date, "starting terminal UI");

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut coordinator, key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            coordinator.tick();
            last_tick = Instant::now();
        }

        if coordinator.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

fn handle_key(coordinator: &mut AppCoordinator, key: KeyEvent) {
    if let Screen::Menu { .. } = coordinator.screen {
        match key.code {
            KeyCode::Up => coordinator.menu_up(),
            KeyCode::Down => coordinator.menu_down(),
            KeyCode::Enter => coordinator.menu_select(),
            KeyCode::Esc | KeyCode::Char('q') => coordinator.quit(),
            _ => {}
        }
        return;
    }

    let Some(play) = coordinator.play_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            if !play.on_cancel() {
                coordinator.go_to_menu();
            }
        }
        KeyCode::Tab => play.toggle_pause(),
        KeyCode::F(10) => play.give_up(),
        KeyCode::Enter => play.on_submit(),
        KeyCode::Backspace => play.on_backspace(),
        KeyCode::Up => play.move_cursor(Move::Up),
        KeyCode::Down => play.move_cursor(Move::Down),
        KeyCode::Left => play.move_cursor(Move::Left),
        KeyCode::Right => play.move_cursor(Move::Right),
        KeyCode::Char(' ') => play.on_select(),
        KeyCode::Char('?') => play.on_hint(),
        KeyCode::Char(c) => {
            // Only accept alphabetic characters
            if c.is_ascii_alphabetic() {
                play.on_char(c);
            }
        }
        _ => {}
    }
}
