//! Line-oriented prompting over an async reader.

use std::io::Write;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Errors while reading user input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input required")]
    MissingInput,

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes prompts and reads the answers one line at a time.
pub struct Prompter<R, W> {
    reader: R,
    out: W,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Print `prompt` and read one line without its line ending.
    ///
    /// End of input is [`InputError::MissingInput`].
    pub async fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(InputError::MissingInput);
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Print `prompt` and parse the answer as a number.
    pub async fn read_number<T: FromStr>(
        &mut self,
        prompt: &str,
        field: &'static str,
    ) -> Result<T, InputError> {
        let text = self.read_line(prompt).await?;
        parse_number(field, &text)
    }

    /// Print a line of output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> std::io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

/// Parse a numeric field, ignoring surrounding whitespace.
pub fn parse_number<T: FromStr>(field: &'static str, text: &str) -> Result<T, InputError> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })
}
