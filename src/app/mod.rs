//! The glue between the player and a [`GameSession`]: turns typed input into guesses, guesses into [`Feedback`], and
//! wins into best-score updates.
//!
//! Apps exclusively handle IO-shaped concerns. They don't draw anything themselves; [`output`][crate::output] does
//! that with whatever they hand back.

mod feedback;

pub use feedback::{Feedback, Tone};

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    constants::gameplay::{DEFAULT_MAX, DEFAULT_MIN, HISTORY_LEN},
    error::{Error, Result},
    saves::{BestScore, ScoreStore},
    session::{GameSession, HistoryEntry, Verdict},
};

/// How a game should be set up. Built from command-line flags by the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub min: i64,
    pub max: i64,
    /// If set, secrets come from a `SmallRng` with this seed, so every run plays the same sequence of games.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

impl Config {
    /// Make sure a session could actually be started with these settings.
    pub fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(Error::Config(
                format!("minimum ({}) must be less than maximum ({})", self.min, self.max).into(),
            ));
        }
        Ok(())
    }
}

/// One player's game: the current session, and the best score across all of them.
pub struct GuessApp<S: ScoreStore> {
    config: Config,
    rng: Option<SmallRng>,
    session: GameSession,
    best: BestScore<S>,
}

impl<S: ScoreStore> GuessApp<S> {
    /// Load the best score from `store` and start the first game.
    pub fn new(config: Config, store: S) -> Result<Self> {
        config.validate()?;
        let best = BestScore::open(store)?;
        let mut rng = config.seed.map(SmallRng::seed_from_u64);
        let session = Self::fresh_session(&config, rng.as_mut());
        Ok(Self {
            config,
            rng,
            session,
            best,
        })
    }

    fn fresh_session(config: &Config, rng: Option<&mut SmallRng>) -> GameSession {
        match rng {
            Some(rng) => GameSession::start_with_rng(config.min, config.max, rng),
            None => GameSession::start(config.min, config.max),
        }
    }

    #[cfg(test)]
    /// A **test-only** function, to play against a known secret.
    pub(crate) fn with_session(config: Config, store: S, session: GameSession) -> Result<Self> {
        let mut app = Self::new(config, store)?;
        app.session = session;
        Ok(app)
    }

    /// Throw away the current game and start another. Re-enables input if the last one was won.
    pub fn new_game(&mut self) {
        self.session = Self::fresh_session(&self.config, self.rng.as_mut());
    }

    /// Handle a line of player input as a guess.
    pub fn input(&mut self, text: &str) -> Feedback {
        let outcome = self.session.submit_text(text);
        let (min, max) = self.session.bounds();
        match outcome.verdict {
            Verdict::TooLow(_) => Feedback::too_low(),
            Verdict::TooHigh(_) => Feedback::too_high(),
            Verdict::Correct(guess) => {
                let new_best = match self.best.record_win(outcome.tries) {
                    Ok(changed) => changed,
                    // already logged; the score still counts for this run
                    Err(_) => true,
                };
                Feedback::won(guess, outcome.tries, new_best)
            }
            Verdict::Invalid(why) => Feedback::invalid(&why, min, max),
        }
    }

    /// Whether guesses are being accepted right now, i.e. the current game isn't won yet.
    pub fn accepting_input(&self) -> bool {
        !self.session.is_won()
    }

    /// Whether `text` is worth submitting; see [`GameSession::validate_text`].
    pub fn validate(&self, text: &str) -> bool {
        self.session.validate_text(text)
    }

    /// The recent guesses to show, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.session.recent_history(HISTORY_LEN)
    }

    pub fn tries(&self) -> u32 {
        self.session.tries()
    }

    pub fn best(&self) -> Option<u32> {
        self.best.get()
    }

    pub fn bounds(&self) -> (i64, i64) {
        self.session.bounds()
    }

    pub fn store(&self) -> &S {
        self.best.store()
    }
}
