//! Line-oriented prompting over any reader/writer pair

use std::io::{self, BufRead, Write};

use crate::ui;

/// Answers that count as "yes"
const AFFIRMATIVE: &[&str] = &["yes", "y"];

/// Whether an answer is an explicit yes
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// Input and output of an interactive session
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Print `question` and read one line. Returns `None` at end of input.
    /// The answer is trimmed but keeps its case.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", ui::prompt(question))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question. Anything but an explicit yes, including end
    /// of input, is a no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self
            .ask(question)?
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false))
    }

    /// Where results are written
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}
