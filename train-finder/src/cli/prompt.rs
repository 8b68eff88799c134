//! Interactive prompts.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use colored::{Color, Colorize};

/// Errors while reading answers from the terminal.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading stdin or writing the prompt failed
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// Input ended before the question was answered
    #[error("no {0} given")]
    MissingAnswer(&'static str),
}

/// Asks questions and reads whitespace-separated answers.
///
/// Answers are tokens, not lines: `10 20 price` on one line answers three
/// questions in a row.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print `question` in `color` and return the next answer token.
    ///
    /// `field` names the answer in the error raised at end of input.
    pub fn ask(
        &mut self,
        question: &str,
        color: Color,
        field: &'static str,
    ) -> Result<String, InputError> {
        writeln!(self.output, "{}", question.color(color))?;
        self.output.flush()?;
        self.next_token()?.ok_or(InputError::MissingAnswer(field))
    }

    /// Return the underlying output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
