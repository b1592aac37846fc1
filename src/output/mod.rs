//! This module handles all of the output, both abstractions and implementations.
//!
//! Everything the game shows is first built as lines of [`Text`], by the `render_*` functions here, then handed to a
//! [`Screen`] to actually write. If you want to add more implementations, you need to:
//! - Add the relevant implementation of `Screen`, in a new submodule
//! - Modify [`get`] to pick it, with `cfg!` or runtime checks

#[cfg(feature = "sys_cli")]
mod ansi_cli;
mod plain;

use std::io;

#[cfg(feature = "sys_cli")]
pub use ansi_cli::AnsiScreen;
pub use plain::PlainScreen;

use crate::{
    app::{Feedback, Tone},
    session::{Hint, HistoryEntry},
};

/// The color of a piece of formatted text. The numeric values are the ANSI color codes for each color; that's also
/// where the actual colors are from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Color {
    Red = 1,
    Green = 2,
    Yellow = 3,
    Magenta = 5,
    Cyan = 6,
    #[default]
    Default = 9,
    BrightBlack = 60,
    BrightRed = 61,
    BrightYellow = 63,
}

/// A single bit of formatted text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    pub text: String,
    pub fg: Color,
    pub bold: bool,
}

macro_rules! setters {
    ( $(
        $name:ident $( ( $($pname:ident: $ptype:ty),* $(,)? ) )?  => $field:ident = $value:expr
    ),* $(,)? ) => {
        $(
            #[must_use]
            pub fn $name(mut self $( , $( $pname: $ptype ),* )?) -> Self {
                self.$field = $value;
                self
            }
        )*
    };
}

impl Text {
    pub fn of(s: impl Into<String>) -> Text {
        Text {
            text: s.into(),
            fg: Color::Default,
            bold: false,
        }
    }

    setters! {
        fg(c: Color) => fg = c,
        red => fg = Color::Red,
        green => fg = Color::Green,
        yellow => fg = Color::Yellow,
        cyan => fg = Color::Cyan,
        bold => bold = true,
    }
}

/// Somewhere lines of text can be written to.
pub trait Screen {
    /// Write one line made of the given pieces, then a newline.
    fn line(&mut self, parts: &[Text]) -> io::Result<()>;

    /// Write several lines.
    fn lines(&mut self, lines: &[Vec<Text>]) -> io::Result<()> {
        for line in lines {
            self.line(line)?;
        }
        Ok(())
    }

    /// Write a prompt without a newline, flushing so it's actually visible.
    fn prompt(&mut self, text: &str) -> io::Result<()>;
}

/// The best available screen on stdout: coloured when built with `sys_cli`, plain otherwise.
pub fn get() -> Box<dyn Screen> {
    #[cfg(feature = "sys_cli")]
    {
        Box::new(AnsiScreen::new(io::stdout()))
    }
    #[cfg(not(feature = "sys_cli"))]
    {
        Box::new(PlainScreen::new(io::stdout()))
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Warn => Color::Yellow,
        // closest thing to orange
        Tone::Caution => Color::BrightYellow,
        Tone::Success => Color::Green,
        Tone::Error => Color::BrightRed,
    }
}

fn hint_color(hint: Hint) -> Color {
    match hint {
        Hint::TooLow => Color::Yellow,
        Hint::TooHigh => Color::BrightYellow,
        Hint::Correct => Color::Green,
    }
}

pub fn render_banner(min: i64, max: i64) -> Vec<Text> {
    vec![
        Text::of("Guess the number between ").bold(),
        Text::of(min.to_string()).cyan().bold(),
        Text::of(" and ").bold(),
        Text::of(max.to_string()).cyan().bold(),
        Text::of("!").bold(),
    ]
}

pub fn render_feedback(fb: &Feedback) -> Vec<Vec<Text>> {
    let color = tone_color(fb.tone);
    let mut res = vec![vec![
        Text::of(fb.icon),
        Text::of(" "),
        Text::of(fb.message.clone()).fg(color).bold(),
    ]];
    if fb.new_best {
        res.push(vec![Text::of("*** New best score! ***").fg(Color::Magenta).bold()]);
    }
    res
}

pub fn render_status(tries: u32, best: Option<u32>) -> Vec<Text> {
    let best = match best {
        Some(b) => Text::of(b.to_string()).cyan(),
        None => Text::of("-").fg(Color::BrightBlack),
    };
    vec![
        Text::of("Tries: "),
        Text::of(tries.to_string()).cyan(),
        Text::of("   Best: "),
        best,
    ]
}

/// One line per entry, newest first, the way [`GameSession::recent_history`][crate::session::GameSession::recent_history]
/// returns them.
pub fn render_history(entries: &[HistoryEntry]) -> Vec<Vec<Text>> {
    entries
        .iter()
        .map(|e| {
            let mut label = Text::of(e.hint.label()).fg(hint_color(e.hint));
            if e.hint == Hint::Correct {
                label = label.bold();
            }
            vec![Text::of(format!("  {:>6}  ", e.guess)), label]
        })
        .collect()
}

pub fn render_help() -> Vec<Vec<Text>> {
    [
        ("<number>", "make a guess"),
        ("new", "start a new game"),
        ("help", "show this message"),
        ("quit", "leave the game"),
    ]
    .iter()
    .map(|(cmd, what)| vec![Text::of(format!("  {:<10}", cmd)).bold(), Text::of(*what)])
    .collect()
}
