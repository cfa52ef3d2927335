//! Line-oriented console input and output.
//!
//! `Console` is generic over `BufRead`/`Write` so the game loops run the
//! same way against the terminal and against in-memory buffers in tests.
//!
//! ```
//! use std::io::Cursor;
//! use parlor_games::core::{Console, Reply};
//!
//! let mut console = Console::new(Cursor::new("  42 \nabc\n"), Vec::new());
//!
//! assert_eq!(console.read_int(Some("Number?")).unwrap(), Reply::Value(42));
//! assert_eq!(console.read_int(None).unwrap(), Reply::Unparsed("abc".to_string()));
//! assert_eq!(console.read_int(None).unwrap(), Reply::Closed);
//!
//! assert_eq!(console.output().as_slice(), b"Number? ");
//! ```

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{Error, Result};

/// Answer to a typed prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply<T> {
    /// The line parsed into a value.
    Value(T),
    /// A line was read but did not parse. Holds the trimmed text.
    Unparsed(String),
    /// Input is exhausted.
    Closed,
}

/// Prompting reader over an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of feedback.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{line}").map_err(|e| Error::io("write output", e))
    }

    /// Print `prompt` (if any) followed by a space, then read one line.
    ///
    /// Returns the trimmed line, or `None` once input is exhausted. Bytes
    /// that aren't valid UTF-8 are replaced rather than treated as an error,
    /// so garbage input is just another unparsable answer.
    pub fn read_line(&mut self, prompt: Option<&str>) -> Result<Option<String>> {
        if let Some(prompt) = prompt {
            write!(self.output, "{prompt} ").map_err(|e| Error::io("write prompt", e))?;
            self.output
                .flush()
                .map_err(|e| Error::io("flush output", e))?;
        }

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io("read input", e))?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Read one line and run it through `parse`.
    pub fn read_parsed<T>(
        &mut self,
        prompt: Option<&str>,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Reply<T>> {
        let Some(text) = self.read_line(prompt)? else {
            return Ok(Reply::Closed);
        };

        Ok(match parse(&text) {
            Some(value) => Reply::Value(value),
            None => Reply::Unparsed(text),
        })
    }

    /// Read one line as a signed integer.
    pub fn read_int(&mut self, prompt: Option<&str>) -> Result<Reply<i64>> {
        self.read_parsed(prompt, |text| text.parse().ok())
    }

    /// Ask a yes/no question.
    ///
    /// Only `y`/`Y` is a yes. Anything else, including end of input, is a no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.read_line(Some(prompt))?;
        Ok(answer.is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
