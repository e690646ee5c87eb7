//! Console abstraction used by the interactive loop
//!
//! Level sessions and the progression controller only talk to the user
//! through this trait, so the whole state machine can be driven from a
//! script in tests.

use crate::error::Result;

/// What a prompt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// A line of text (without the trailing newline)
    Line(String),
    /// The user pressed Ctrl+C at the prompt
    Interrupted,
    /// Input stream is closed (Ctrl+D, end of pipe)
    Closed,
}

/// Styling hint for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
    Heading,
}

pub trait Console {
    /// Show `prompt` and block until the user answers
    fn read_line(&mut self, prompt: &str) -> Result<ConsoleInput>;

    /// Print one message
    fn say(&mut self, tone: Tone, message: &str);

    /// Clear the screen
    fn clear(&mut self) {}

    fn plain(&mut self, message: &str) {
        self.say(Tone::Plain, message);
    }

    fn info(&mut self, message: &str) {
        self.say(Tone::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.say(Tone::Success, message);
    }

    fn warn(&mut self, message: &str) {
        self.say(Tone::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.say(Tone::Error, message);
    }

    /// Ask a yes/no question. Only the literal answer `yes` confirms.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        match self.read_line(&format!("{} (yes/no): ", question))? {
            ConsoleInput::Line(answer) => Ok(answer.trim() == "yes"),
            ConsoleInput::Interrupted | ConsoleInput::Closed => Ok(false),
        }
    }
}
