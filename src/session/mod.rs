//! Level sessions
//!
//! A session is one visit to one level: it makes sure the level's
//! container exists, reads commands from the console, and reports how the
//! visit ended. Persisting the result is left to the progression
//! controller.

mod command;
mod level;

pub use command::SessionCommand;
pub use level::{LevelSession, SessionOutcome};
