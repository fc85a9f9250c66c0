//! Line-based console used by the vending session.

use std::io::{self, BufRead, Write};

const CLEAR_LINES: usize = 100;

/// Blocking line reader and writer over any input/output pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print the `: ` prompt and read one line.
    ///
    /// Surrounding whitespace is trimmed and invalid UTF-8 is replaced
    /// with U+FFFD. Returns `None` at end of input.
    pub fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, ": ")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Scroll previous output out of view.
    pub fn clear(&mut self) -> io::Result<()> {
        write!(self.output, "{}", "\n".repeat(CLEAR_LINES))
    }

    /// Write `text` followed by a newline.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
