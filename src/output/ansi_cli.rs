use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use super::{Color, Screen, Text};

fn ct4color(c: Color) -> Option<CrosstermColor> {
    let code = c as u8;
    match c {
        Color::Default => None,
        // 60+ are the bright variants, which the 256-color palette puts at 8-15
        _ if code >= 60 => Some(CrosstermColor::AnsiValue(code - 60 + 8)),
        _ => Some(CrosstermColor::AnsiValue(code)),
    }
}

/// Writes coloured text through crossterm. Line-oriented: no alternate screen, no raw mode, so the terminal's own
/// line editing still works for typing guesses.
pub struct AnsiScreen<W: Write> {
    out: W,
}

impl<W: Write> AnsiScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for AnsiScreen<W> {
    fn line(&mut self, parts: &[Text]) -> io::Result<()> {
        for part in parts {
            if let Some(color) = ct4color(part.fg) {
                queue!(self.out, SetForegroundColor(color))?;
            }
            if part.bold {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            queue!(self.out, Print(&part.text), SetAttribute(Attribute::Reset), ResetColor)?;
        }
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        self.out.flush()
    }
}
