//! Terminal interaction
//!
//! `Console` is the seam between the level state machine and the terminal.
//! `TerminalConsole` is the rustyline implementation used by the binary;
//! `PrintConsole` only prints, for one-shot commands.

pub mod console;
pub mod interactive;
pub mod interrupt;

#[cfg(test)]
pub(crate) mod scripted;

pub use console::{Console, ConsoleInput, Tone};
pub use interactive::{PrintConsole, TerminalConsole};
pub use interrupt::InterruptFlag;
