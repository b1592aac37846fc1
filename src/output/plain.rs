use std::io::{self, Write};

use super::{Screen, Text};

/// Writes text with all formatting stripped. Used without `sys_cli`, and for anything that isn't a terminal.
pub struct PlainScreen<W: Write> {
    out: W,
}

impl<W: Write> PlainScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for PlainScreen<W> {
    fn line(&mut self, parts: &[Text]) -> io::Result<()> {
        for part in parts {
            self.out.write_all(part.text.as_bytes())?;
        }
        writeln!(self.out)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn formatting_is_dropped() {
        let mut screen = PlainScreen::new(vec![]);
        screen.line(&[Text::of("a").red().bold(), Text::of("b")]).unwrap();
        screen.prompt("> ").unwrap();
        assert_eq!(screen.into_inner(), b"ab\n> ");
    }

    #[test]
    fn lines_each_get_newlines() {
        let mut screen = PlainScreen::new(vec![]);
        screen.lines(&[vec![Text::of("one")], vec![], vec![Text::of("three")]]).unwrap();
        assert_eq!(screen.into_inner(), b"one\n\nthree\n");
    }
}
