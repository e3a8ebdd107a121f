use std::io::{self, BufRead, Write};

use crate::error::SessionError;

/// Line-oriented access to the player, injected wherever the game talks to a human.
pub trait Console {
    /// Read one line without its terminator. `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// A [`Console`] over any buffered reader and writer.
///
/// `IoConsole::stdio()` is the terminal; tests feed a byte slice and collect
/// the output in a `Vec<u8>`.
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        IoConsole { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        IoConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

/// Ask a question and return the raw answer, trimmed.
pub fn ask(console: &mut dyn Console, message: &str) -> Result<String, SessionError> {
    console.write_line(message)?;
    match console.read_line()? {
        Some(line) => Ok(line.trim().to_string()),
        None => Err(SessionError::InputClosed),
    }
}

/// Ask until the answer is one of `valid` (compared trimmed and case-insensitively).
///
/// Returns the answer lowercased. Anything else prints the accepted choices and asks again.
pub fn prompt(
    console: &mut dyn Console,
    message: &str,
    valid: &[&str],
) -> Result<String, SessionError> {
    loop {
        let answer = ask(console, message)?.to_lowercase();
        if valid.iter().any(|v| v.trim().to_lowercase() == answer) {
            return Ok(answer);
        }

        tracing::warn!(answer = %answer, "rejected input");
        console.write_line(&format!(
            "Invalid response. Please choose from {}.",
            valid.join(", ")
        ))?;
    }
}
