//! Scripted console for driving sessions in tests

use std::collections::VecDeque;

use super::console::{Console, ConsoleInput, Tone};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<ConsoleInput>,
    pub prompts: Vec<String>,
    pub output: Vec<(Tone, String)>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(|l| ConsoleInput::Line(l.into())).collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, input: ConsoleInput) {
        self.inputs.push_back(input);
    }

    /// True if any printed message contains `needle`
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|(_, line)| line.contains(needle))
    }

    /// True if a message with `tone` contains `needle`
    pub fn printed_with(&self, tone: Tone, needle: &str) -> bool {
        self.output
            .iter()
            .any(|(t, line)| *t == tone && line.contains(needle))
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<ConsoleInput> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front().unwrap_or(ConsoleInput::Closed))
    }

    fn say(&mut self, tone: Tone, message: &str) {
        self.output.push((tone, message.to_string()));
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_requires_literal_yes() {
        let mut console = ScriptedConsole::new(["yes", " yes ", "YES", "y", "no"]);
        assert!(console.confirm("Sure?").unwrap());
        assert!(console.confirm("Sure?").unwrap());
        assert!(!console.confirm("Sure?").unwrap());
        assert!(!console.confirm("Sure?").unwrap());
        assert!(!console.confirm("Sure?").unwrap());
        // Exhausted input cancels
        assert!(!console.confirm("Sure?").unwrap());
        assert_eq!(console.prompts[0], "Sure? (yes/no): ");
    }
}
