use crate::session::InvalidGuess;

/// Rough mood of a piece of feedback; decides how it gets coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Guess was too low.
    Warn,
    /// Guess was too high.
    Caution,
    /// Guess was right.
    Success,
    /// Guess wasn't counted.
    Error,
}

/// What to tell the player after a guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub icon: &'static str,
    pub message: String,
    pub tone: Tone,
    /// Set when this guess won the game *and* beat the best score.
    pub new_best: bool,
}

impl Feedback {
    fn of(icon: &'static str, message: impl Into<String>, tone: Tone) -> Self {
        Self {
            icon,
            message: message.into(),
            tone,
            new_best: false,
        }
    }

    pub fn too_low() -> Self {
        Self::of("📈", "Too low! Try a higher number.", Tone::Warn)
    }

    pub fn too_high() -> Self {
        Self::of("📉", "Too high! Try a lower number.", Tone::Caution)
    }

    pub fn won(secret: i64, tries: u32, new_best: bool) -> Self {
        Self {
            new_best,
            ..Self::of(
                "🎉",
                format!("Congratulations! You guessed {} in {} tries!", secret, tries),
                Tone::Success,
            )
        }
    }

    pub fn invalid(why: &InvalidGuess, min: i64, max: i64) -> Self {
        match why {
            InvalidGuess::AlreadyWon => Self::of(
                "🏁",
                "You already won! Start a new game to play again.",
                Tone::Error,
            ),
            InvalidGuess::NotANumber(_) | InvalidGuess::OutOfRange(_) => Self::of(
                "❌",
                format!("Please enter a number between {} and {}", min, max),
                Tone::Error,
            ),
        }
    }
}
