//! UI rendering using ratatui
//!
//! Supports two screens:
//! - Menu: pick today's game
//! - Playing: Boggle board or Word Ladder, then the end-of-game summary

use crate::app::{AppCoordinator, Feedback, Game, MenuOption, Play, Screen, Tone};
use chrono::NaiveDate;
use daily_puzzles::boggle::BoggleEngine;
use daily_puzzles::game::share::format_timer;
use daily_puzzles::ladder::WordLadderEngine;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Menu { selected } => render_menu(frame, *selected, coordinator.date),
        Screen::Playing { play } => render_game(frame, play),
    }
}

/// Render the main menu
fn render_menu(frame: &mut Frame, selected: usize, date: NaiveDate) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Logo
            Constraint::Length(2), // Date
            Constraint::Min(4),    // Menu options
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 ___   _   ___ _ __   __
|   \ /_\ |_ _| |\ \ / /
| |) / _ \ | || |_\ V /
|___/_/ \_\___|____|_|
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let date_widget = Paragraph::new(format!("Puzzles for {}", date))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(date_widget, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();
    frame.render_widget(List::new(items).block(Block::default()), layout[2]);

    let footer = Paragraph::new("↑↓ Navigate  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render the in-game screen
fn render_game(frame: &mut Frame, play: &Play) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with title, timer
            Constraint::Min(0),    // Main content area
            Constraint::Length(1), // Key help
        ])
        .split(area);

    render_header(frame, layout[0], play);

    if play.is_over() {
        render_end_summary(frame, layout[1], play);
    } else {
        match &play.game {
            Game::Boggle(engine) => render_boggle(frame, layout[1], play, engine),
            Game::Ladder(engine) => render_ladder(frame, layout[1], play, engine),
        }
    }

    let help = match (&play.game, play.is_over()) {
        (_, true) => "Esc Menu",
        (Game::Boggle(_), false) => {
            "←↑↓→ Move  Space Select  Enter Submit  Bksp Undo  Esc Clear  Tab Pause  F10 Finish"
        }
        (Game::Ladder(_), false) => {
            "Type word  Enter Submit  Bksp Undo  ? Hint  Tab Pause  F10 Give up  Esc Menu"
        }
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout[2]);
}

/// Render the header: game name, score, timer
fn render_header(frame: &mut Frame, area: Rect, play: &Play) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Title
            Constraint::Min(20),    // Score
            Constraint::Length(10), // Timer
        ])
        .split(inner);

    let title = match &play.game {
        Game::Boggle(_) => "BOGGLE",
        Game::Ladder(_) => "WORD LADDER",
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let score = Paragraph::new(format!("Score: {}", play.score()))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, header_layout[1]);

    let remaining = play.time_remaining();
    let timer_display = if play.is_paused() {
        "PAUSED".to_string()
    } else {
        format_timer(remaining)
    };
    let timer_color = if play.is_paused() {
        Color::DarkGray
    } else if remaining <= 10 {
        Color::Red
    } else if remaining <= 30 {
        Color::Yellow
    } else {
        Color::Green
    };
    let timer = Paragraph::new(timer_display)
        .style(Style::default().fg(timer_color).bold())
        .alignment(Alignment::Right);
    frame.render_widget(timer, header_layout[2]);
}

/// Board on the left, current word and found words on the right
fn render_boggle(frame: &mut Frame, area: Rect, play: &Play, engine: &BoggleEngine) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .margin(1)
        .split(area);

    let state = engine.boggle_state();
    let lines: Vec<Line> = state
        .grid
        .iter()
        .flat_map(|row| {
            let cells: Vec<Span> = row
                .iter()
                .map(|cell| {
                    let mut style = Style::default().fg(Color::White);
                    if cell.is_in_current_path {
                        style = style.fg(Color::Cyan).bold();
                    }
                    if cell.is_selected {
                        style = style.fg(Color::Yellow);
                    }
                    if cell.position == play.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {} ", display_letter(cell.letter)), style)
                })
                .collect();
            [Line::from(cells), Line::from("")]
        })
        .collect();
    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(board, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current word
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Feedback line
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Found words
        ])
        .margin(1)
        .split(columns[1]);

    let word = Paragraph::new(format!("> {}_", state.current_word.to_uppercase()))
        .style(Style::default().fg(Color::White));
    frame.render_widget(word, side[0]);

    render_feedback(frame, side[2], play.feedback.as_ref());

    let items: Vec<ListItem> = engine
        .found_words()
        .iter()
        .rev()
        .map(|found| {
            ListItem::new(format!("{} +{}", found.word.to_uppercase(), found.score))
                .style(Style::default().fg(Color::Green))
        })
        .collect();
    let title = format!(
        "Found {}/{}",
        state.found_words.len(),
        engine.possible_words().len()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title),
    );
    frame.render_widget(list, side[4]);
}

/// The ladder so far, the word being typed and the target
fn render_ladder(frame: &mut Frame, area: Rect, play: &Play, engine: &WordLadderEngine) {
    let state = engine.word_ladder_state();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Start to target
            Constraint::Length(1), // Spacer
            Constraint::Min(4),    // Ladder
            Constraint::Length(1), // Input line
            Constraint::Length(1), // Feedback line
            Constraint::Length(1), // Hints
        ])
        .margin(1)
        .split(area);

    let goal = Paragraph::new(format!(
        "{} → {}   (best: {} steps)",
        state.puzzle.start_word.to_uppercase(),
        state.puzzle.target_word.to_uppercase(),
        state.puzzle.minimum_steps
    ))
    .style(Style::default().fg(Color::Cyan).bold())
    .alignment(Alignment::Center);
    frame.render_widget(goal, layout[0]);

    let items: Vec<ListItem> = state
        .current_path
        .iter()
        .map(|step| {
            let style = if step.index == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{:>2}. {}", step.index, step.word.to_uppercase())).style(style)
        })
        .collect();
    let ladder = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!("Steps: {}", engine.steps())),
    );
    frame.render_widget(ladder, layout[2]);

    let width = state.puzzle.start_word.chars().count();
    let input = Paragraph::new(format!(
        "> {:_<width$}",
        play.input.to_uppercase(),
        width = width
    ))
    .style(Style::default().fg(Color::White));
    frame.render_widget(input, layout[3]);

    render_feedback(frame, layout[4], play.feedback.as_ref());

    let hints = Paragraph::new(format!("Hints left: {}", state.hints))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, layout[5]);
}

/// Render the end-of-game summary with the share text
fn render_end_summary(frame: &mut Frame, area: Rect, play: &Play) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Final score
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Share text
        ])
        .split(area);

    let solved = matches!(&play.game, Game::Ladder(engine) if engine.is_solved());
    let (title, color) = if solved {
        ("SOLVED!", Color::Green)
    } else if play.time_remaining() == 0 {
        ("TIME'S UP!", Color::Red)
    } else {
        ("GAME OVER", Color::Yellow)
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, main_layout[0]);

    let score = Paragraph::new(format!("Final Score: {}", play.score()))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, main_layout[1]);

    let share = Paragraph::new(play.share_text().unwrap_or_default())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Share"),
        );
    frame.render_widget(share, main_layout[3]);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<&Feedback>) {
    let (text, color) = format_feedback(feedback);
    frame.render_widget(Paragraph::new(text).style(Style::default().fg(color)), area);
}

fn display_letter(letter: char) -> char {
    letter.to_ascii_uppercase()
}

/// Format feedback with appropriate color
fn format_feedback(feedback: Option<&Feedback>) -> (String, Color) {
    match feedback {
        None => (String::new(), Color::White),
        Some(feedback) => {
            let color = match feedback.tone {
                Tone::Good => Color::Green,
                Tone::Bad => Color::Red,
                Tone::Info => Color::Yellow,
            };
            (feedback.text.clone(), color)
        }
    }
}
