//! Application screen state management
//!
//! Handles transitions between the two screens:
//! - Main menu (pick a game)
//! - Playing (one daily puzzle, through to its summary)

use chrono::NaiveDate;
use daily_puzzles::config::Config;
use daily_puzzles::game::GameKind;
use tracing::info;

use super::state::{Game, Play};

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Boggle,
    WordLadder,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[MenuOption::Boggle, MenuOption::WordLadder, MenuOption::Quit]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Boggle => "Boggle",
            MenuOption::WordLadder => "Word Ladder",
            MenuOption::Quit => "Quit",
        }
    }
}

/// The current application screen
pub enum Screen {
    /// Main menu
    Menu { selected: usize },
    /// Playing a daily puzzle
    Playing { play: Box<Play> },
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Date whose puzzles are served
    pub date: NaiveDate,
    config: Config,
}

impl AppCoordinator {
    /// Start at the menu
    pub fn new(config: Config, date: NaiveDate) -> Self {
        Self {
            screen: Screen::Menu { selected: 0 },
            should_quit: false,
            date,
            config,
        }
    }

    /// Skip the menu and open a game directly
    pub fn with_game(config: Config, date: NaiveDate, kind: GameKind) -> Self {
        let mut coordinator = Self::new(config, date);
        coordinator.open(kind);
        coordinator
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Go back to the main menu
    pub fn go_to_menu(&mut self) {
        self.screen = Screen::Menu { selected: 0 };
    }

    /// Start a fresh session of the given game
    pub fn open(&mut self, kind: GameKind) {
        info!(game = kind.id(), date = %self.date, "opening puzzle");
        let game = match kind {
            GameKind::Boggle => Game::Boggle(self.config.boggle_engine(self.date)),
            GameKind::WordLadder => Game::Ladder(self.config.word_ladder_engine(self.date)),
        };
        self.screen = Screen::Playing {
            play: Box::new(Play::new(game)),
        };
    }

    /// Handle menu navigation (up)
    pub fn menu_up(&mut self) {
        if let Screen::Menu { selected } = &mut self.screen {
            if *selected > 0 {
                *selected -= 1;
            }
        }
    }

    /// Handle menu navigation (down)
    pub fn menu_down(&mut self) {
        if let Screen::Menu { selected } = &mut self.screen {
            if *selected < MenuOption::all().len() - 1 {
                *selected += 1;
            }
        }
    }

    /// Handle menu selection (Enter)
    pub fn menu_select(&mut self) {
        let Screen::Menu { selected } = &self.screen else {
            return;
        };
        match MenuOption::all()[*selected] {
            MenuOption::Boggle => self.open(GameKind::Boggle),
            MenuOption::WordLadder => self.open(GameKind::WordLadder),
            MenuOption::Quit => self.quit(),
        }
    }

    /// The running game, if any
    pub fn play_mut(&mut self) -> Option<&mut Play> {
        match &mut self.screen {
            Screen::Playing { play } => Some(&mut **play),
            Screen::Menu { .. } => None,
        }
    }

    /// Once-per-second clock
    pub fn tick(&mut self) {
        if let Some(play) = self.play_mut() {
            play.tick();
        }
    }
}
