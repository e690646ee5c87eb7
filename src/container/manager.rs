//! Container manager for level containers
//!
//! The ContainerManager owns the lifecycle of every level container:
//! lazily creating it on first entry, attaching shells, and removing it
//! when the level is cleared or progress is reset. Engine failures are
//! soft; they are logged and reported back, never raised past the manager
//! except where the caller must tell the user.

use super::engine::{ContainerEngine, RunRequest};
use crate::error::{Result, WargameError};
use crate::levels::{container_name, image_reference};
use crate::repl::InterruptFlag;

/// Default image repository holding one tag per level
pub const DEFAULT_IMAGE_REPOSITORY: &str =
    "ghcr.io/walchand-linux-users-group/wildwarrior44/wargame_finals";

/// Shell opened by `attach`
pub const DEFAULT_SHELL: &str = "bash";

/// User the container runs as
const CONTAINER_USER: &str = "root";

/// Command kept alive as the container's main process
const CONTAINER_COMMAND: &str = "/bin/bash";

/// Result of making sure a level container exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioning {
    /// The container was already there
    Existing,
    /// The container was absent and has been created and started
    Created,
    /// Creation was needed but did not succeed
    Failed { reason: String },
}

impl Provisioning {
    /// Whether a new container had to be created
    pub fn attempted(&self) -> bool {
        !matches!(self, Provisioning::Existing)
    }

    /// Whether a container is available after the call
    pub fn started(&self) -> bool {
        !matches!(self, Provisioning::Failed { .. })
    }
}

/// Outcome of pulling every level image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullSummary {
    pub pulled: Vec<u32>,
    pub failed: Vec<u32>,
}

/// Manages the per-level containers through a container engine
#[derive(Debug)]
pub struct ContainerManager<E: ContainerEngine> {
    engine: E,
    image_repository: String,
    shell: String,
}

impl<E: ContainerEngine> ContainerManager<E> {
    /// Create a manager using the default image repository
    pub fn new(engine: E) -> Self {
        Self::with_repository(engine, DEFAULT_IMAGE_REPOSITORY)
    }

    /// Create a manager pulling level images from `repository`
    pub fn with_repository(engine: E, repository: &str) -> Self {
        Self {
            engine,
            image_repository: repository.to_string(),
            shell: DEFAULT_SHELL.to_string(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn image_for(&self, level: u32) -> String {
        image_reference(&self.image_repository, level)
    }

    /// Version of the underlying engine, failing when it is not installed
    pub fn check_engine(&self) -> Result<String> {
        self.engine.version()
    }

    /// Create and start the container for `level` unless it already exists.
    ///
    /// Failures are reported as `Provisioning::Failed`, never as errors:
    /// a level stays playable for token submission without a container.
    pub fn ensure_exists(&self, level: u32, user: &str) -> Provisioning {
        let name = container_name(level);

        match self.engine.exists(&name) {
            Ok(true) => {
                log::debug!("Container {} already exists", name);
                return Provisioning::Existing;
            }
            Ok(false) => {}
            Err(e) => {
                log::warn!("Could not look up container {}: {}", name, e);
                return Provisioning::Failed {
                    reason: e.to_string(),
                };
            }
        }

        let request = RunRequest {
            name: name.clone(),
            image: self.image_for(level),
            hostname: user.to_string(),
            user: CONTAINER_USER.to_string(),
            command: CONTAINER_COMMAND.to_string(),
        };

        match self.engine.run(&request) {
            Ok(()) => {
                log::info!("Started container {} from {}", name, request.image);
                Provisioning::Created
            }
            Err(e) => {
                log::warn!("Failed to start container {}: {}", name, e);
                Provisioning::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Start the level container and attach an interactive shell.
    ///
    /// Blocks until the user leaves the shell.
    pub fn attach(&self, level: u32) -> Result<()> {
        let name = container_name(level);
        self.engine.start(&name)?;
        self.engine.exec_shell(&name, &self.shell)
    }

    /// Force-remove the container for `level`.
    ///
    /// Returns whether something was removed; absence and engine errors are
    /// swallowed.
    pub fn remove(&self, level: u32) -> bool {
        let name = container_name(level);
        match self.engine.remove(&name) {
            Ok(()) => {
                log::info!("Removed container {}", name);
                true
            }
            Err(e) => {
                log::debug!("Ignoring removal failure for {}: {}", name, e);
                false
            }
        }
    }

    /// Remove the containers of levels `1..=count`
    pub fn remove_all(&self, count: u32) -> usize {
        (1..=count).filter(|level| self.remove(*level)).count()
    }

    /// Pull the image of a single level
    pub fn pull(&self, level: u32) -> Result<()> {
        self.engine.pull(&self.image_for(level))
    }

    /// Pull the images of levels `1..=count`, one after another.
    ///
    /// `report` sees every level's result as it completes. A raised
    /// interrupt stops the sequence before the next pull.
    pub fn pull_all<F>(&self, count: u32, interrupts: &InterruptFlag, mut report: F) -> Result<PullSummary>
    where
        F: FnMut(u32, &Result<()>),
    {
        let mut summary = PullSummary::default();

        for level in 1..=count {
            if interrupts.take() {
                return Err(WargameError::Interrupted);
            }

            let result = self.pull(level);
            report(level, &result);
            match result {
                Ok(()) => summary.pulled.push(level),
                Err(e) => {
                    log::warn!("Pull failed for level {}: {}", level, e);
                    summary.failed.push(level);
                }
            }
        }

        Ok(summary)
    }
}
