//! Per-level command loop

use super::command::SessionCommand;
use crate::container::{ContainerEngine, ContainerManager};
use crate::error::Result;
use crate::levels::TokenVerifier;
use crate::output::section_header;
use crate::repl::{Console, ConsoleInput, Tone};

/// How a level visit ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Correct token submitted; carries the next level number
    Advance(u32),
    /// User left the level; progress is unchanged
    Stay,
    /// User confirmed a full progress reset
    Restart,
    /// User confirmed account deletion
    Delete,
}

/// One visit to one level
pub struct LevelSession<'a, E: ContainerEngine> {
    level: u32,
    user: &'a str,
    containers: &'a ContainerManager<E>,
    verifier: &'a TokenVerifier,
}

impl<'a, E: ContainerEngine> LevelSession<'a, E> {
    pub fn new(
        level: u32,
        user: &'a str,
        containers: &'a ContainerManager<E>,
        verifier: &'a TokenVerifier,
    ) -> Self {
        Self {
            level,
            user,
            containers,
            verifier,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    fn prompt(&self) -> String {
        format!("ctf-{}> ", self.level)
    }

    /// Make sure the level container is there, then read commands until
    /// one of them ends the visit.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<SessionOutcome> {
        self.enter(console);

        loop {
            let line = match console.read_line(&self.prompt())? {
                ConsoleInput::Line(line) => line,
                ConsoleInput::Interrupted | ConsoleInput::Closed => {
                    log::info!("Input ended at level {}", self.level);
                    return Ok(SessionOutcome::Stay);
                }
            };

            if let Some(outcome) = self.dispatch(SessionCommand::parse(&line), console)? {
                return Ok(outcome);
            }
        }
    }

    fn enter(&mut self, console: &mut dyn Console) {
        let provisioning = self.containers.ensure_exists(self.level, self.user);
        if provisioning.attempted() {
            if provisioning.started() {
                console.info(&format!("Started container for level {}.", self.level));
            } else {
                console.error("Failed to start container.");
                console.warn("You can still submit the flag if you know it!");
            }
        }

        for line in section_header(&format!("Level {} - {}", self.level, self.user)) {
            console.say(Tone::Heading, &line);
        }
        print_commands(console);
    }

    /// Apply one command. `Some` ends the visit.
    pub fn dispatch(
        &mut self,
        command: SessionCommand,
        console: &mut dyn Console,
    ) -> Result<Option<SessionOutcome>> {
        match command {
            SessionCommand::Empty => Ok(None),
            SessionCommand::Submit(token) => Ok(self.submit(&token, console)),
            SessionCommand::SubmitMissingToken => {
                console.warn("Usage: submit FLAG{...}");
                Ok(None)
            }
            SessionCommand::Play => {
                self.play(console);
                Ok(None)
            }
            SessionCommand::Restart => {
                if console.confirm("Are you sure you want to reset?")? {
                    Ok(Some(SessionOutcome::Restart))
                } else {
                    console.info("Reset cancelled.");
                    Ok(None)
                }
            }
            SessionCommand::Delete => {
                if console.confirm("Are you sure you want to delete your account?")? {
                    Ok(Some(SessionOutcome::Delete))
                } else {
                    console.info("Deletion cancelled.");
                    Ok(None)
                }
            }
            SessionCommand::Exit => {
                console.warn(&format!("Exiting level {}...", self.level));
                Ok(Some(SessionOutcome::Stay))
            }
            SessionCommand::Unknown(input) => {
                log::debug!("Unknown command at level {}: {}", self.level, input);
                console.warn("Unknown command. Type 'submit', 'play', 'restart', 'delete', or 'exit'.");
                Ok(None)
            }
        }
    }

    fn submit(&mut self, token: &str, console: &mut dyn Console) -> Option<SessionOutcome> {
        if !self.verifier.verify(token, self.level) {
            console.error("✗ Incorrect flag. Try again!");
            return None;
        }

        console.success("✓ Correct flag! Level complete!");
        self.containers.remove(self.level);
        Some(SessionOutcome::Advance(self.level + 1))
    }

    fn play(&mut self, console: &mut dyn Console) {
        if let Err(e) = self.containers.attach(self.level) {
            log::warn!("Attach failed for level {}: {}", self.level, e);
            console.warn(&format!("Could not open a shell for level {}: {}", self.level, e));
        }
    }
}

fn print_commands(console: &mut dyn Console) {
    console.success("Commands:");
    console.info("  submit FLAG{...} - Submit your flag");
    console.info("  play             - Enter Docker shell");
    console.info("  restart          - Reset progress to level 1");
    console.info("  delete           - Delete account");
    console.info("  exit             - Exit current level");
    console.plain("");
}
