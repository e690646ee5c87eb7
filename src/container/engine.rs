//! Container engine capability
//!
//! The primitive operations the manager needs from a container engine.
//! Every call blocks until the engine finishes.

use crate::error::Result;

/// Parameters for creating and starting a level container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub name: String,
    pub image: String,
    pub hostname: String,
    pub user: String,
    pub command: String,
}

pub trait ContainerEngine {
    /// Engine version string; fails when the engine is not installed
    fn version(&self) -> Result<String>;

    /// Fetch an image by reference
    fn pull(&self, image: &str) -> Result<()>;

    /// Whether a container with exactly this name exists (running or not)
    fn exists(&self, name: &str) -> Result<bool>;

    /// Create and start a detached, interactive-capable container
    fn run(&self, request: &RunRequest) -> Result<()>;

    /// Start a stopped container
    fn start(&self, name: &str) -> Result<()>;

    /// Attach an interactive shell; returns when the shell exits
    fn exec_shell(&self, name: &str, shell: &str) -> Result<()>;

    /// Force-remove a container
    fn remove(&self, name: &str) -> Result<()>;
}
