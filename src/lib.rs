// Library surface for headless/integration tests and reuse.
// The terminal setup and event loop live in main.rs; everything else,
// including the app model the ui renders, is reachable from here.
pub mod config;
pub mod game;
pub mod runtime;
pub mod ui;
pub mod util;
pub mod wordlist;

use crate::config::Config;
use crate::game::{ConfigError, Game, GuessOutcome, Status, MAX_ATTEMPT_BUDGET};
use crate::wordlist::WordList;
use clap::{Parser, ValueEnum};

pub const TICK_RATE_MS: u64 = 100;

/// How many ticks a flash message stays on screen (~2s at the tick rate).
const FLASH_TICKS: u8 = 20;

/// classic hangman in the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Classic hangman: guess the secret word one letter at a time before the drawing is finished. Word pool and attempt budget are persisted between runs."
)]
pub struct Cli {
    /// number of incorrect guesses allowed (default 6, persisted)
    #[clap(short = 'a', long)]
    pub attempts: Option<usize>,

    /// word pool to draw the secret from (persisted)
    #[clap(short = 'l', long, value_enum)]
    pub word_list: Option<BuiltinWordList>,

    /// fixed secret word instead of a random pick (practice/testing)
    #[clap(short = 'p', long)]
    pub secret: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum BuiltinWordList {
    English,
    Animals,
}

impl BuiltinWordList {
    pub fn as_list(&self) -> WordList {
        WordList::new(&self.to_string().to_lowercase())
    }

    /// Cycle order used by the results-screen toggle.
    pub fn next(&self) -> Self {
        match self {
            BuiltinWordList::English => BuiltinWordList::Animals,
            BuiltinWordList::Animals => BuiltinWordList::English,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "english" => Some(BuiltinWordList::English),
            "animals" => Some(BuiltinWordList::Animals),
            _ => None,
        }
    }
}

/// Effective settings for this run: CLI flags override the stored config.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub word_list: BuiltinWordList,
    pub max_attempts: usize,
}

impl RuntimeSettings {
    pub fn resolve(cli: &Cli, stored: &Config) -> Result<Self, ConfigError> {
        let word_list = cli
            .word_list
            .or_else(|| BuiltinWordList::from_name(&stored.word_list))
            .unwrap_or(BuiltinWordList::English);

        let max_attempts = cli.attempts.unwrap_or(stored.max_attempts);
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        let max_attempts = max_attempts.min(MAX_ATTEMPT_BUDGET);

        Ok(Self {
            word_list,
            max_attempts,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Playing,
    Results,
}

/// Transient one-line feedback ("already guessed 'x'") with a tick ttl.
#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    ticks_left: u8,
}

#[derive(Debug)]
pub struct App {
    pub settings: RuntimeSettings,
    pub practice_secret: Option<String>,
    pub game: Game,
    pub state: AppState,
    pub flash: Option<Flash>,
}

impl App {
    pub fn new(
        settings: RuntimeSettings,
        practice_secret: Option<String>,
    ) -> Result<Self, ConfigError> {
        let game = Self::new_game(&settings, practice_secret.as_deref())?;
        Ok(Self {
            settings,
            practice_secret,
            game,
            state: AppState::Playing,
            flash: None,
        })
    }

    fn new_game(settings: &RuntimeSettings, secret: Option<&str>) -> Result<Game, ConfigError> {
        match secret {
            Some(word) => Game::with_secret(word, settings.max_attempts),
            None => {
                let list = settings.word_list.as_list();
                Game::new(&list.words, settings.max_attempts, &mut rand::thread_rng())
            }
        }
    }

    /// Replace the session wholesale; there is no in-place reuse.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.game = Self::new_game(&self.settings, self.practice_secret.as_deref())?;
        self.state = AppState::Playing;
        self.flash = None;
        Ok(())
    }

    /// Forward one keystroke to the engine and translate the report into
    /// ui state. All validation feedback comes from the engine's outcome;
    /// the app never re-derives game logic.
    pub fn handle_guess(&mut self, raw: char) {
        let report = self.game.guess(raw);
        let letter = raw.to_ascii_lowercase();

        match report.outcome {
            GuessOutcome::Hit => {
                self.flash = None;
            }
            GuessOutcome::Miss => {
                self.set_flash(format!("no '{letter}' in the word"));
            }
            GuessOutcome::Invalid => {
                self.set_flash("please enter a single letter (a-z)".to_string());
            }
            GuessOutcome::Duplicate => {
                self.set_flash(format!("already guessed '{letter}'"));
            }
            GuessOutcome::AlreadyOver => {
                self.set_flash("the game is over — press (n) for a new one".to_string());
            }
        }

        if report.status != Status::InProgress {
            self.state = AppState::Results;
            self.flash = None;
        }
    }

    fn set_flash(&mut self, text: String) {
        self.flash = Some(Flash {
            text,
            ticks_left: FLASH_TICKS,
        });
    }

    pub fn flash_text(&self) -> Option<&str> {
        self.flash.as_ref().map(|f| f.text.as_str())
    }

    /// Advance transient ui state by one tick. Returns true when the screen
    /// needs a redraw (a flash message just expired).
    pub fn on_tick(&mut self) -> bool {
        if let Some(flash) = &mut self.flash {
            flash.ticks_left = flash.ticks_left.saturating_sub(1);
            if flash.ticks_left == 0 {
                self.flash = None;
                return true;
            }
        }
        false
    }

    /// Results-screen toggle; takes effect on the next game.
    pub fn cycle_word_list(&mut self) {
        self.settings.word_list = self.settings.word_list.next();
    }

    /// Results-screen budget adjustment, clamped to a sane range.
    pub fn bump_attempts(&mut self, delta: i64) {
        let next = self.settings.max_attempts as i64 + delta;
        self.settings.max_attempts = next.clamp(1, MAX_ATTEMPT_BUDGET as i64) as usize;
    }
}
