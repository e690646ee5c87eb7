//! Persistent progress state
//!
//! Two values survive between runs: the user identity and the current
//! level. `StateStore` abstracts where they live so the controller can be
//! tested against `MemoryStateStore`.

mod file;
mod memory;

pub use file::{FileStateStore, PROGRESS_FILE, USER_FILE};
pub use memory::MemoryStateStore;

use crate::error::{Result, WargameError};
use crate::levels::{is_completion_marker, normalize_level};
use crate::repl::{Console, ConsoleInput};

pub trait StateStore {
    /// Raw persisted level text, if any
    fn raw_level(&self) -> Option<String>;

    /// Overwrite the persisted level
    fn save_level(&mut self, level: u32) -> Result<()>;

    /// Raw persisted identity text, if any
    fn raw_identity(&self) -> Option<String>;

    /// Overwrite the persisted identity
    fn save_identity(&mut self, identity: &str) -> Result<()>;

    /// Remove every persisted record. Succeeds when nothing is stored.
    fn delete_all(&mut self) -> Result<()>;

    /// Current level, always within `[1, TOTAL_LEVELS]`
    fn load_level(&self) -> u32 {
        normalize_level(self.raw_level().as_deref())
    }

    /// Persisted identity with surrounding whitespace removed, if non-empty
    fn load_identity(&self) -> Option<String> {
        self.raw_identity()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Whether every level has been cleared
    fn is_completed(&self) -> bool {
        is_completion_marker(self.raw_level().as_deref())
    }
}

/// Whether the identity was already stored or has just been chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Returning(String),
    Created(String),
}

impl Identity {
    pub fn name(&self) -> &str {
        match self {
            Identity::Returning(name) | Identity::Created(name) => name,
        }
    }
}

/// Return the stored identity or prompt until a non-empty one is entered.
///
/// Ctrl+C and end of input both abandon the prompt without storing anything.
pub fn load_or_create_identity(
    store: &mut dyn StateStore,
    console: &mut dyn Console,
) -> Result<Identity> {
    if let Some(name) = store.load_identity() {
        return Ok(Identity::Returning(name));
    }

    loop {
        match console.read_line("Enter your CTF username: ")? {
            ConsoleInput::Line(line) => {
                let name = line.trim();
                if name.is_empty() {
                    continue;
                }
                store.save_identity(name)?;
                log::info!("Stored new identity '{}'", name);
                return Ok(Identity::Created(name.to_string()));
            }
            ConsoleInput::Interrupted => return Err(WargameError::Interrupted),
            ConsoleInput::Closed => return Err(WargameError::InputClosed),
        }
    }
}
