use crate::wordlist::pick_word;
use rand::Rng;
use std::collections::BTreeSet;
use thiserror::Error;

/// Placeholder shown for positions that have not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// Hard ceiling for the attempt budget; anything above this is a config bug.
pub const MAX_ATTEMPT_BUDGET: usize = 99;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("candidate word pool is empty")]
    EmptyWordPool,
    #[error("attempt budget must be positive")]
    ZeroAttempts,
    #[error("secret word must not be empty")]
    EmptySecret,
}

/// Lifecycle of a single session. Transitions are one-directional:
/// `InProgress` is initial, `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// What a single call to [`Game::guess`] did.
///
/// `Invalid`, `Duplicate` and `AlreadyOver` are reported conditions, not
/// errors: the game state is guaranteed untouched for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the secret; matching positions were revealed.
    Hit,
    /// The letter is absent; one attempt was consumed.
    Miss,
    /// Input was not a single ascii letter.
    Invalid,
    /// The letter was guessed before (hit or miss alike).
    Duplicate,
    /// The session already reached a terminal status.
    AlreadyOver,
}

/// Immutable snapshot returned after every guess. Carries everything the
/// presentation layer needs to re-render without re-deriving game logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub status: Status,
    pub attempts_remaining: usize,
    pub revealed: String,
    pub guessed: BTreeSet<char>,
}

impl GuessReport {
    pub fn is_hit(&self) -> bool {
        self.outcome == GuessOutcome::Hit
    }
}

/// A single hangman session: one secret word, one attempt budget.
///
/// A `Game` is created per session and replaced wholesale on "new game";
/// there is no in-place reuse across sessions.
#[derive(Debug, Clone)]
pub struct Game {
    secret: String,
    revealed: Vec<char>,
    guessed: BTreeSet<char>,
    attempts_remaining: usize,
    max_attempts: usize,
    status: Status,
}

impl Game {
    /// Start a session with a word picked uniformly at random from `pool`.
    ///
    /// The random source is injected so callers (and tests) control
    /// determinism; production code passes `rand::thread_rng()`.
    pub fn new<R: Rng + ?Sized>(
        pool: &[String],
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let secret = pick_word(pool, rng).ok_or(ConfigError::EmptyWordPool)?;
        Self::with_secret(&secret, max_attempts)
    }

    /// Start a session with a fixed secret. Used by the practice flag and by
    /// tests that need a known word.
    pub fn with_secret(secret: &str, max_attempts: usize) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        let secret = secret.to_lowercase();
        let revealed = vec![PLACEHOLDER; secret.chars().count()];

        Ok(Self {
            secret,
            revealed,
            guessed: BTreeSet::new(),
            attempts_remaining: max_attempts,
            max_attempts,
            status: Status::InProgress,
        })
    }

    /// Apply a single guess and return the resulting snapshot.
    ///
    /// Normalizes to ascii lowercase first. Malformed input, repeats, and
    /// guesses after a terminal status are all no-ops; the returned outcome
    /// says which condition applied.
    pub fn guess(&mut self, raw: char) -> GuessReport {
        if self.status != Status::InProgress {
            return self.report(GuessOutcome::AlreadyOver);
        }

        let letter = raw.to_ascii_lowercase();
        if !letter.is_ascii_alphabetic() {
            return self.report(GuessOutcome::Invalid);
        }

        if self.guessed.contains(&letter) {
            return self.report(GuessOutcome::Duplicate);
        }
        self.guessed.insert(letter);

        if self.secret.contains(letter) {
            for (i, c) in self.secret.chars().enumerate() {
                if c == letter {
                    self.revealed[i] = c;
                }
            }
            if !self.revealed.contains(&PLACEHOLDER) {
                self.status = Status::Won;
            }
            self.report(GuessOutcome::Hit)
        } else {
            self.attempts_remaining -= 1;
            if self.attempts_remaining == 0 {
                self.status = Status::Lost;
            }
            self.report(GuessOutcome::Miss)
        }
    }

    fn report(&self, outcome: GuessOutcome) -> GuessReport {
        GuessReport {
            outcome,
            status: self.status,
            attempts_remaining: self.attempts_remaining,
            revealed: self.revealed_string(),
            guessed: self.guessed.clone(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn revealed_string(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Guessed letters, ascending. BTreeSet keeps them sorted for display.
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn wrong_guesses(&self) -> usize {
        self.max_attempts - self.attempts_remaining
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Letters guessed so far that occur in the secret.
    pub fn hits(&self) -> BTreeSet<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| self.secret.contains(*c))
            .collect()
    }

    /// Letters guessed so far that do not occur in the secret.
    pub fn misses(&self) -> BTreeSet<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.secret.contains(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_new_picks_from_pool() {
        let candidates = pool(&["alpha", "beta", "gamma"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let game = Game::new(&candidates, 6, &mut rng).unwrap();
            assert!(candidates.contains(&game.secret().to_string()));
            assert_eq!(game.attempts_remaining(), 6);
            assert_eq!(game.status(), Status::InProgress);
        }
    }

    #[test]
    fn test_new_lowercases_secret() {
        let candidates = pool(&["RuSt"]);
        let mut rng = StdRng::seed_from_u64(0);
        let game = Game::new(&candidates, 6, &mut rng).unwrap();
        assert_eq!(game.secret(), "rust");
    }

    #[test]
    fn test_empty_pool_is_config_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Game::new(&[], 6, &mut rng);
        assert_eq!(result.unwrap_err(), ConfigError::EmptyWordPool);
    }

    #[test]
    fn test_zero_attempts_is_config_error() {
        let candidates = pool(&["word"]);
        let mut rng = StdRng::seed_from_u64(0);
        let result = Game::new(&candidates, 0, &mut rng);
        assert_eq!(result.unwrap_err(), ConfigError::ZeroAttempts);
    }

    #[test]
    fn test_empty_secret_is_config_error() {
        assert_eq!(
            Game::with_secret("", 6).unwrap_err(),
            ConfigError::EmptySecret
        );
    }

    #[test]
    fn test_initial_revealed_is_all_placeholders() {
        let game = Game::with_secret("cat", 6).unwrap();
        assert_eq!(game.revealed_string(), "___");
        assert!(game.guessed().is_empty());
    }

    #[test]
    fn test_win_scenario_cat() {
        let mut game = Game::with_secret("cat", 6).unwrap();

        let report = game.guess('c');
        assert_eq!(report.outcome, GuessOutcome::Hit);
        assert_eq!(report.revealed, "c__");
        assert_eq!(report.status, Status::InProgress);

        let report = game.guess('a');
        assert_eq!(report.revealed, "ca_");

        let report = game.guess('t');
        assert_eq!(report.revealed, "cat");
        assert_eq!(report.status, Status::Won);
        assert_eq!(report.attempts_remaining, 6);
    }

    #[test]
    fn test_lose_scenario_two_attempts() {
        let mut game = Game::with_secret("cat", 2).unwrap();

        let report = game.guess('x');
        assert_eq!(report.outcome, GuessOutcome::Miss);
        assert_eq!(report.attempts_remaining, 1);
        assert_eq!(report.status, Status::InProgress);

        let report = game.guess('y');
        assert_eq!(report.attempts_remaining, 0);
        assert_eq!(report.status, Status::Lost);
    }

    #[test]
    fn test_hit_reveals_every_matching_position() {
        let mut game = Game::with_secret("banana", 6).unwrap();
        let report = game.guess('a');
        assert_eq!(report.revealed, "_a_a_a");
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut game = Game::with_secret("cat", 6).unwrap();
        let report = game.guess('C');
        assert_eq!(report.outcome, GuessOutcome::Hit);
        assert_eq!(report.revealed, "c__");
    }

    #[test]
    fn test_non_alphabetic_is_invalid_and_mutates_nothing() {
        let mut game = Game::with_secret("cat", 6).unwrap();

        for raw in ['1', ' ', '!', '\n', 'é'] {
            let report = game.guess(raw);
            assert_eq!(report.outcome, GuessOutcome::Invalid, "input {raw:?}");
            assert_eq!(report.attempts_remaining, 6);
            assert_eq!(report.revealed, "___");
            assert!(game.guessed().is_empty());
        }
    }

    #[test]
    fn test_duplicate_hit_and_miss_are_both_noops() {
        let mut game = Game::with_secret("cat", 6).unwrap();
        game.guess('c');
        game.guess('x');
        let snapshot = (game.revealed_string(), game.attempts_remaining());

        let report = game.guess('c');
        assert_eq!(report.outcome, GuessOutcome::Duplicate);
        let report = game.guess('x');
        assert_eq!(report.outcome, GuessOutcome::Duplicate);

        assert_eq!((game.revealed_string(), game.attempts_remaining()), snapshot);
        assert_eq!(game.guessed().len(), 2);
    }

    #[test]
    fn test_duplicate_of_uppercase_form() {
        let mut game = Game::with_secret("cat", 6).unwrap();
        game.guess('c');
        let report = game.guess('C');
        assert_eq!(report.outcome, GuessOutcome::Duplicate);
    }

    #[test]
    fn test_terminal_state_rejects_further_guesses() {
        let mut game = Game::with_secret("hi", 1).unwrap();
        game.guess('z');
        assert_eq!(game.status(), Status::Lost);

        let report = game.guess('h');
        assert_eq!(report.outcome, GuessOutcome::AlreadyOver);
        assert_eq!(report.status, Status::Lost);
        assert_eq!(game.revealed_string(), "__");
        assert_eq!(game.guessed().len(), 1);
    }

    #[test]
    fn test_won_state_rejects_further_guesses() {
        let mut game = Game::with_secret("hi", 6).unwrap();
        game.guess('h');
        game.guess('i');
        assert_eq!(game.status(), Status::Won);

        let report = game.guess('z');
        assert_eq!(report.outcome, GuessOutcome::AlreadyOver);
        assert_eq!(game.attempts_remaining(), 6);
    }

    #[test]
    fn test_all_distinct_letters_win_in_any_order() {
        let orders = [
            vec!['h', 'a', 'n', 'g', 'm'],
            vec!['m', 'g', 'n', 'a', 'h'],
            vec!['n', 'h', 'm', 'a', 'g'],
        ];
        for order in orders {
            let mut game = Game::with_secret("hangman", 6).unwrap();
            for c in &order {
                game.guess(*c);
            }
            assert_eq!(game.status(), Status::Won, "order {order:?}");
            assert_eq!(game.attempts_remaining(), 6);
        }
    }

    #[test]
    fn test_wrong_guesses_counter() {
        let mut game = Game::with_secret("cat", 6).unwrap();
        assert_eq!(game.wrong_guesses(), 0);
        game.guess('x');
        game.guess('a');
        game.guess('y');
        assert_eq!(game.wrong_guesses(), 2);
    }

    #[test]
    fn test_hits_and_misses_split() {
        let mut game = Game::with_secret("cat", 6).unwrap();
        game.guess('c');
        game.guess('x');
        game.guess('t');

        assert_eq!(game.hits().into_iter().collect::<Vec<_>>(), vec!['c', 't']);
        assert_eq!(game.misses().into_iter().collect::<Vec<_>>(), vec!['x']);
    }

    #[test]
    fn test_report_snapshot_is_detached() {
        let mut game = Game::with_secret("cat", 6).unwrap();
        let report = game.guess('c');
        game.guess('x');

        // The earlier snapshot must not observe later mutation.
        assert_eq!(report.attempts_remaining, 6);
        assert_eq!(report.guessed.len(), 1);
    }
}
