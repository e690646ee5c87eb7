//! Progression across levels
//!
//! The controller runs one level session after another, starting from the
//! persisted level, and is the only component that writes progress.

use crate::container::{ContainerEngine, ContainerManager};
use crate::error::Result;
use crate::levels::{TokenVerifier, FIRST_LEVEL};
use crate::repl::Console;
use crate::session::{LevelSession, SessionOutcome};
use crate::state::StateStore;

/// How a progression run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every level cleared
    Completed,
    /// User left at `level`; it is resumed next time
    Paused { level: u32 },
    /// Identity and progress were deleted
    Deleted,
}

pub struct ProgressionController<S: StateStore, E: ContainerEngine> {
    store: S,
    containers: ContainerManager<E>,
    verifier: TokenVerifier,
}

impl<S: StateStore, E: ContainerEngine> ProgressionController<S, E> {
    pub fn new(store: S, containers: ContainerManager<E>) -> Self {
        Self::with_verifier(store, containers, TokenVerifier::default())
    }

    pub fn with_verifier(store: S, containers: ContainerManager<E>, verifier: TokenVerifier) -> Self {
        Self {
            store,
            containers,
            verifier,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn containers(&self) -> &ContainerManager<E> {
        &self.containers
    }

    pub fn total_levels(&self) -> u32 {
        self.verifier.level_count()
    }

    /// Play from the persisted level until the user stops, resets away
    /// everything, or clears the last level.
    pub fn run(&mut self, user: &str, console: &mut dyn Console) -> Result<RunOutcome> {
        let total = self.total_levels();
        let mut current = self.store.load_level();

        while current <= total {
            console.clear();
            let outcome = LevelSession::new(current, user, &self.containers, &self.verifier)
                .run(console)?;
            log::info!("Level {} session ended with {:?}", current, outcome);

            match outcome {
                SessionOutcome::Advance(next) => {
                    self.persist_level(next, console);
                    current = next;
                }
                SessionOutcome::Stay => return Ok(RunOutcome::Paused { level: current }),
                SessionOutcome::Restart => {
                    self.restart(console);
                    current = FIRST_LEVEL;
                }
                SessionOutcome::Delete => {
                    if self.delete(console) {
                        return Ok(RunOutcome::Deleted);
                    }
                    return Ok(RunOutcome::Paused { level: current });
                }
            }
        }

        Ok(RunOutcome::Completed)
    }

    /// Reset progress to the first level and remove every level container
    pub fn restart(&mut self, console: &mut dyn Console) {
        if self.persist_level(FIRST_LEVEL, console) {
            console.warn("Progress reset to level 1!");
        }
        let removed = self.containers.remove_all(self.total_levels());
        log::info!("Removed {} level containers on reset", removed);
    }

    /// Reset progress for an existing identity. Returns false when no
    /// identity is stored.
    pub fn reset_existing(&mut self, console: &mut dyn Console) -> bool {
        if self.store.load_identity().is_none() {
            return false;
        }
        self.restart(console);
        true
    }

    /// Forget the identity and progress, and remove every level container.
    /// Returns false when the stored records could not be removed.
    pub fn delete(&mut self, console: &mut dyn Console) -> bool {
        self.containers.remove_all(self.total_levels());
        match self.store.delete_all() {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to delete user data: {}", e);
                console.error(&format!("Could not delete user data: {}", e));
                false
            }
        }
    }

    fn persist_level(&mut self, level: u32, console: &mut dyn Console) -> bool {
        match self.store.save_level(level) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to save level {}: {}", level, e);
                console.warn(&format!("Could not save progress: {}", e));
                false
            }
        }
    }
}
