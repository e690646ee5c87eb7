//! Terminal console backed by rustyline

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::console::{Console, ConsoleInput, Tone};
use super::interrupt::InterruptFlag;
use crate::error::{Result, WargameError};

pub struct TerminalConsole {
    editor: DefaultEditor,
    interrupts: InterruptFlag,
}

impl TerminalConsole {
    pub fn new(interrupts: InterruptFlag) -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| WargameError::Terminal(e.to_string()))?;
        Ok(Self { editor, interrupts })
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<ConsoleInput> {
        // Ctrl+C pressed inside an attached shell also reached us; it was
        // meant for the child, not for this prompt.
        if self.interrupts.take() {
            log::debug!("Discarding interrupt delivered while a child process was running");
        }

        let prompt = prompt.bold().magenta().to_string();
        match self.editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(ConsoleInput::Line(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!();
                Ok(ConsoleInput::Interrupted)
            }
            Err(ReadlineError::Eof) => {
                println!();
                Ok(ConsoleInput::Closed)
            }
            Err(err) => Err(WargameError::Terminal(err.to_string())),
        }
    }

    fn say(&mut self, tone: Tone, message: &str) {
        print_styled(tone, message);
    }

    fn clear(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
    }
}

/// Output-only console for non-interactive commands. Every prompt reads as
/// closed input.
#[derive(Debug, Default)]
pub struct PrintConsole;

impl Console for PrintConsole {
    fn read_line(&mut self, _prompt: &str) -> Result<ConsoleInput> {
        Ok(ConsoleInput::Closed)
    }

    fn say(&mut self, tone: Tone, message: &str) {
        print_styled(tone, message);
    }
}

fn print_styled(tone: Tone, message: &str) {
    let styled = match tone {
        Tone::Plain => message.normal(),
        Tone::Info => message.blue(),
        Tone::Success => message.green().bold(),
        Tone::Warning => message.yellow(),
        Tone::Error => message.red().bold(),
        Tone::Heading => message.magenta().bold(),
    };
    println!("{}", styled);
}
