//! # Prompter
//!
//! Line-oriented question/answer exchange over any reader and writer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ask_until("Enter the quantity: ", parse_quantity)                      │
//! │                                                                         │
//! │    write prompt, flush ──► read line ──► parse                          │
//! │          ▲                                  │                           │
//! │          │        Err(e): "Invalid input: e"│                           │
//! │          └──────────────────────────────────┤                           │
//! │                                             │ Ok(value)                 │
//! │                                             ▼                           │
//! │                                          return                         │
//! │                                                                         │
//! │  End of input at any read ──► AppError::InputClosed                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{AppError, AppResult};

/// Prompt driver over a buffered reader and a writer.
///
/// Production uses locked stdin/stdout; tests use `Cursor` and `Vec<u8>`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes one full line of text.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `prompt` without a newline and reads one answer.
    ///
    /// The trailing line terminator is stripped; other whitespace is left
    /// for the validators.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Asks until `parse` accepts the answer.
    ///
    /// ## Rules
    /// - Rejections are printed as `Invalid input: <reason>`
    /// - There is no retry limit
    pub fn ask_until<T, E, F>(&mut self, prompt: &str, mut parse: F) -> AppResult<T>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(prompt = prompt.trim_end(), answer = %answer, reason = %e, "Input rejected");
                    self.say(format_args!("Invalid input: {e}"))?;
                }
            }
        }
    }

    /// Consumes the prompter and hands back the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::validation::parse_quantity;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_ask_strips_line_terminator() {
        let mut p = prompter("pizza\r\nnext\n");
        assert_eq!(p.ask("Enter username: ").unwrap(), "pizza");
        assert_eq!(p.ask("Again: ").unwrap(), "next");
        assert_eq!(transcript(p), "Enter username: Again: ");
    }

    #[test]
    fn test_ask_keeps_inner_whitespace() {
        let mut p = prompter("  Bob Smith  \n");
        assert_eq!(p.ask("Name: ").unwrap(), "  Bob Smith  ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Name: "), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("7");
        assert_eq!(p.ask("Qty: ").unwrap(), "7");
    }

    #[test]
    fn test_ask_until_reprompts() {
        let mut p = prompter("abc\n0\n-1\n3\n");
        let qty = p.ask_until("Enter the quantity: ", parse_quantity).unwrap();
        assert_eq!(qty.get(), 3);

        let out = transcript(p);
        assert_eq!(out.matches("Enter the quantity: ").count(), 4);
        assert!(out.contains("Invalid input: quantity must be a whole number"));
        assert!(out.contains("Invalid input: quantity must be a positive number"));
    }

    #[test]
    fn test_ask_until_runs_out_of_input() {
        let mut p = prompter("abc\n");
        let result = p.ask_until("Enter the quantity: ", parse_quantity);
        assert!(matches!(result, Err(AppError::InputClosed)));
    }
}
