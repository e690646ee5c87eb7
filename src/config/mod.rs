//! Runtime configuration
//!
//! Resolved once from the command line (with environment fallbacks handled
//! by clap) and passed down explicitly.

use std::path::PathBuf;

use crate::cli::Args;
use crate::container::DockerCli;
use crate::error::{Result, WargameError};
use crate::state::FileStateStore;

/// Host pinged to decide whether the machine is online
pub const CONNECTIVITY_HOST: &str = "google.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the identity and progress files
    pub state_dir: PathBuf,
    /// Container engine program
    pub engine: String,
    /// Repository holding one image tag per level
    pub image_repository: String,
    /// Skip first-run checks and image pulls
    pub skip_setup: bool,
    pub connectivity_host: String,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let state_dir = match &args.home {
            Some(dir) => dir.clone(),
            None => dirs::home_dir().ok_or_else(|| {
                WargameError::Config("could not determine the home directory; pass --home".to_string())
            })?,
        };

        Ok(Self {
            state_dir,
            engine: args.engine.clone(),
            image_repository: args.image_repository.clone(),
            skip_setup: args.skip_setup,
            connectivity_host: CONNECTIVITY_HOST.to_string(),
        })
    }

    pub fn state_store(&self) -> FileStateStore {
        FileStateStore::new(&self.state_dir)
    }

    pub fn engine(&self) -> DockerCli {
        DockerCli::new(self.engine.clone())
    }
}
