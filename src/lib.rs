//! numguess is divided into three parts, architecturally:
//!
//! - The [`session`], which is one round of the game: a secret number, the guesses made against it, and whether
//!   it's been found yet. It knows nothing about terminals or files.
//! - [`saves`], which keep the best score around between runs, behind the [`ScoreStore`][saves::ScoreStore] trait.
//! - The [`app`] and [`output`], which turn typed text into guesses and guesses into something to show the player.
//!
//! The binary just wires them together in a read-guess-print loop.

pub mod app;
pub mod constants;
pub mod error;
pub mod output;
pub mod saves;
pub mod session;

pub use crate::{
    app::{Config, Feedback, GuessApp, Tone},
    error::{Error, Result},
    session::{GameSession, GuessOutcome, Hint, HistoryEntry, InvalidGuess, Status, Verdict},
};
