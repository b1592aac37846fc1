//! A single round of the game: the secret, the guesses made so far, and whether the player has won.
//!
//! Everything in here is plain synchronous state. Nothing touches the terminal or the disk; the [`app`][crate::app]
//! layer decides what to do with the [`GuessOutcome`]s this produces.

use std::cmp::Ordering;

use rand::Rng;

/// Why a guess wasn't counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidGuess {
    /// The input didn't parse as an integer. Contains the (trimmed) input.
    NotANumber(String),
    /// The guess was a number, but outside the session's bounds.
    OutOfRange(i64),
    /// The session has already been won; nothing more is accepted until a new one starts.
    AlreadyWon,
}

/// How a single guess compares to the secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    TooLow(i64),
    TooHigh(i64),
    Correct(i64),
    /// The guess was rejected without changing the session.
    Invalid(InvalidGuess),
}

impl Verdict {
    /// Whether this guess counted as a try.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// The number guessed, if there was one.
    pub fn guess(&self) -> Option<i64> {
        match self {
            Self::TooLow(g) | Self::TooHigh(g) | Self::Correct(g) => Some(*g),
            Self::Invalid(InvalidGuess::OutOfRange(g)) => Some(*g),
            Self::Invalid(_) => None,
        }
    }
}

/// The result of [`GameSession::submit_guess`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    pub verdict: Verdict,
    /// The try count after this guess. Unchanged if the guess was invalid.
    pub tries: u32,
}

impl GuessOutcome {
    /// Whether this was the winning guess.
    pub fn won(&self) -> bool {
        matches!(self.verdict, Verdict::Correct(_))
    }
}

/// The classification shown next to a past guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct,
}

impl Hint {
    fn of(guess: i64, secret: i64) -> Self {
        match guess.cmp(&secret) {
            Ordering::Less => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
            Ordering::Equal => Self::Correct,
        }
    }

    /// Short label for the history list.
    pub fn label(self) -> &'static str {
        match self {
            Self::TooLow => "Too Low",
            Self::TooHigh => "Too High",
            Self::Correct => "Correct!",
        }
    }
}

/// One line of the guess history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: i64,
    pub hint: Hint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    /// Terminal: only a new session gets back to [`Status::InProgress`].
    Won,
}

/// The state of one round. Starting a new game means building a new `GameSession`; nothing is carried over.
#[derive(Clone, Debug)]
pub struct GameSession {
    min: i64,
    max: i64,
    secret: i64,
    tries: u32,
    status: Status,
    /// Oldest first; reversed whenever it's shown.
    history: Vec<i64>,
}

impl GameSession {
    /// Start a new round with a secret drawn uniformly from `min..=max`, using the thread-local RNG.
    ///
    /// Panics if `min >= max`; the bounds are expected to be validated long before a session exists.
    pub fn start(min: i64, max: i64) -> Self {
        Self::start_with_rng(min, max, &mut rand::thread_rng())
    }

    /// Identical to [`Self::start`], but draws the secret from the given RNG. Seed it for reproducible games.
    pub fn start_with_rng(min: i64, max: i64, rng: &mut impl Rng) -> Self {
        assert!(min < max, "session bounds must satisfy min < max, got {}..={}", min, max);
        let secret = rng.gen_range(min..=max);
        log::debug!("new game in {}..={}, secret is {}", min, max, secret);
        Self::with_secret(min, max, secret)
    }

    /// Start a round with a known secret.
    pub fn with_secret(min: i64, max: i64, secret: i64) -> Self {
        assert!(min < max, "session bounds must satisfy min < max, got {}..={}", min, max);
        assert!((min..=max).contains(&secret), "secret {} outside {}..={}", secret, min, max);
        Self {
            min,
            max,
            secret,
            tries: 0,
            status: Status::InProgress,
            history: vec![],
        }
    }

    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == Status::Won
    }

    /// Total number of guesses recorded, including the ones too old to be shown.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn invalid(&self, why: InvalidGuess) -> GuessOutcome {
        GuessOutcome {
            verdict: Verdict::Invalid(why),
            tries: self.tries,
        }
    }

    /// Make a guess.
    ///
    /// Rejected (as [`Verdict::Invalid`], changing nothing) if the round is already won or the guess is out of
    /// bounds. Otherwise it counts as a try, goes into the history, and gets compared against the secret.
    pub fn submit_guess(&mut self, value: i64) -> GuessOutcome {
        if self.is_won() {
            return self.invalid(InvalidGuess::AlreadyWon);
        }
        if value < self.min || value > self.max {
            return self.invalid(InvalidGuess::OutOfRange(value));
        }

        self.tries += 1;
        self.history.push(value);
        let verdict = match Hint::of(value, self.secret) {
            Hint::TooLow => Verdict::TooLow(value),
            Hint::TooHigh => Verdict::TooHigh(value),
            Hint::Correct => {
                self.status = Status::Won;
                log::info!("won in {} tries", self.tries);
                Verdict::Correct(value)
            }
        };
        GuessOutcome {
            verdict,
            tries: self.tries,
        }
    }

    /// Make a guess from raw user input. Surrounding whitespace is ignored; anything else that isn't an integer is
    /// rejected as [`InvalidGuess::NotANumber`].
    pub fn submit_text(&mut self, text: &str) -> GuessOutcome {
        if self.is_won() {
            return self.invalid(InvalidGuess::AlreadyWon);
        }
        let text = text.trim();
        match text.parse() {
            Ok(value) => self.submit_guess(value),
            Err(_) => self.invalid(InvalidGuess::NotANumber(text.to_owned())),
        }
    }

    /// Whether submitting `text` should be allowed while it's still being typed.
    ///
    /// Only a number that's definitely out of bounds is refused. Empty or half-typed input is left for
    /// [`Self::submit_text`] to reject.
    pub fn validate_text(&self, text: &str) -> bool {
        match text.trim().parse::<i64>() {
            Ok(value) => (self.min..=self.max).contains(&value),
            Err(_) => true,
        }
    }

    /// The `n` most recent guesses, newest first.
    pub fn recent_history(&self, n: usize) -> Vec<HistoryEntry> {
        self.history
            .iter()
            .rev()
            .take(n)
            .map(|&guess| HistoryEntry {
                guess,
                hint: Hint::of(guess, self.secret),
            })
            .collect()
    }

    #[cfg(test)]
    /// A **test-only** function, so tests can check the secret is drawn correctly.
    pub fn secret(&self) -> i64 {
        self.secret
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn secret_always_in_bounds() {
        for (min, max) in [(1, 100), (-5, 5), (0, 1), (-100, -99), (i64::MAX - 3, i64::MAX)] {
            for seed in 0..200 {
                let mut rng = SmallRng::seed_from_u64(seed);
                let sess = GameSession::start_with_rng(min, max, &mut rng);
                assert!((min..=max).contains(&sess.secret()), "{} not in {}..={}", sess.secret(), min, max);
            }
        }
    }

    #[test]
    fn both_ends_of_two_value_range_get_drawn() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; 2];
        for _ in 0..100 {
            let sess = GameSession::start_with_rng(0, 1, &mut rng);
            seen[sess.secret() as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn same_seed_same_secret() {
        let a = GameSession::start_with_rng(1, 1000, &mut SmallRng::seed_from_u64(42));
        let b = GameSession::start_with_rng(1, 1000, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn fresh_session_is_empty() {
        let sess = GameSession::start(1, 100);
        assert_eq!(sess.tries(), 0);
        assert_eq!(sess.status(), Status::InProgress);
        assert!(!sess.is_won());
        assert_eq!(sess.history_len(), 0);
        assert!(sess.recent_history(5).is_empty());
        assert_eq!(sess.bounds(), (1, 100));
    }

    #[test]
    #[should_panic]
    fn inverted_bounds_panic() {
        GameSession::start(10, 10);
    }

    #[test]
    fn full_game() {
        let mut sess = GameSession::with_secret(1, 100, 50);

        let out = sess.submit_guess(25);
        assert_eq!(out, GuessOutcome { verdict: Verdict::TooLow(25), tries: 1 });

        let out = sess.submit_guess(75);
        assert_eq!(out, GuessOutcome { verdict: Verdict::TooHigh(75), tries: 2 });

        let out = sess.submit_guess(50);
        assert_eq!(out, GuessOutcome { verdict: Verdict::Correct(50), tries: 3 });
        assert!(out.won());
        assert!(sess.is_won());

        let out = sess.submit_guess(10);
        assert_eq!(out, GuessOutcome { verdict: Verdict::Invalid(InvalidGuess::AlreadyWon), tries: 3 });
        assert_eq!(sess.tries(), 3);
        assert_eq!(sess.history_len(), 3);
    }

    #[test]
    fn guessing_secret_wins_immediately() {
        let mut sess = GameSession::with_secret(-10, 10, -3);
        assert!(sess.submit_guess(-3).won());
        assert_eq!(sess.tries(), 1);
        // even the correct answer is rejected afterwards
        assert!(!sess.submit_guess(-3).verdict.is_valid());
    }

    #[test]
    fn unparseable_text_changes_nothing() {
        let mut sess = GameSession::with_secret(1, 100, 50);
        sess.submit_guess(20);
        let out = sess.submit_text("abc");
        assert_eq!(out.verdict, Verdict::Invalid(InvalidGuess::NotANumber("abc".into())));
        assert_eq!(out.tries, 1);
        assert_eq!(sess.tries(), 1);
        assert_eq!(sess.recent_history(5).len(), 1);
    }

    #[test]
    fn text_guesses_are_trimmed() {
        let mut sess = GameSession::with_secret(1, 100, 50);
        assert_eq!(sess.submit_text("  30\n").verdict, Verdict::TooLow(30));
        assert_eq!(sess.submit_text("").verdict, Verdict::Invalid(InvalidGuess::NotANumber(String::new())));
        assert_eq!(sess.submit_text("12.5").verdict, Verdict::Invalid(InvalidGuess::NotANumber("12.5".into())));
    }

    #[test]
    fn out_of_range_changes_nothing() {
        let mut sess = GameSession::with_secret(1, 100, 50);
        for bad in [0, 101, -1, i64::MIN, i64::MAX] {
            let out = sess.submit_guess(bad);
            assert_eq!(out.verdict, Verdict::Invalid(InvalidGuess::OutOfRange(bad)));
            assert_eq!(out.verdict.guess(), Some(bad));
            assert_eq!(out.tries, 0);
        }
        assert_eq!(sess.history_len(), 0);
        // bounds themselves are fine
        assert!(sess.submit_guess(1).verdict.is_valid());
        assert!(sess.submit_guess(100).verdict.is_valid());
        assert_eq!(sess.tries(), 2);
    }

    #[test]
    fn text_after_win_is_already_won() {
        let mut sess = GameSession::with_secret(1, 100, 50);
        sess.submit_text("50");
        assert_eq!(sess.submit_text("abc").verdict, Verdict::Invalid(InvalidGuess::AlreadyWon));
    }

    #[test]
    fn history_is_newest_first_and_capped() {
        let mut sess = GameSession::with_secret(1, 100, 50);
        for g in [10, 90, 20, 80, 30, 70, 50] {
            sess.submit_guess(g);
        }
        assert_eq!(sess.history_len(), 7);
        let recent = sess.recent_history(5);
        let guesses: Vec<_> = recent.iter().map(|e| e.guess).collect();
        assert_eq!(guesses, vec![50, 70, 30, 80, 20]);
        let hints: Vec<_> = recent.iter().map(|e| e.hint).collect();
        assert_eq!(hints, vec![Hint::Correct, Hint::TooHigh, Hint::TooLow, Hint::TooHigh, Hint::TooLow]);
        assert_eq!(sess.recent_history(100).len(), 7);
        assert!(sess.recent_history(0).is_empty());
    }

    #[test]
    fn repeat_guesses_still_count() {
        let mut sess = GameSession::with_secret(1, 100, 50);
        sess.submit_guess(10);
        sess.submit_guess(10);
        assert_eq!(sess.tries(), 2);
        assert_eq!(sess.recent_history(5).len(), 2);
    }

    #[test]
    fn validation_only_refuses_out_of_range_numbers() {
        let sess = GameSession::with_secret(1, 100, 50);
        assert!(sess.validate_text("1"));
        assert!(sess.validate_text("100"));
        assert!(sess.validate_text(""));
        assert!(sess.validate_text("-"));
        assert!(!sess.validate_text("0"));
        assert!(!sess.validate_text("101"));
        assert!(!sess.validate_text("-20"));
    }

    #[test]
    fn hint_labels() {
        assert_eq!(Hint::TooLow.label(), "Too Low");
        assert_eq!(Hint::TooHigh.label(), "Too High");
        assert_eq!(Hint::Correct.label(), "Correct!");
    }
}
