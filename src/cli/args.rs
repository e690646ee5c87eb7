//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::container::DEFAULT_IMAGE_REPOSITORY;

#[derive(Parser, Debug)]
#[command(name = "wargame")]
#[command(author, version, about = "Play container-backed wargame levels one after another", long_about = None)]
pub struct Args {
    /// Reset progress of the existing user to level 1 and exit
    #[arg(short = 'r', long = "reset")]
    pub reset: bool,

    /// Print the stored progress and exit
    #[arg(long)]
    pub status: bool,

    /// Print the status as JSON
    #[arg(long, requires = "status")]
    pub json: bool,

    /// Skip the first-run checks and image pulls
    #[arg(long)]
    pub skip_setup: bool,

    /// Directory holding the user and progress files (default: home directory)
    #[arg(long, env = "WARGAME_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Container engine program
    #[arg(long, env = "WARGAME_ENGINE", default_value = "docker")]
    pub engine: String,

    /// Image repository holding one tag per level
    #[arg(long, env = "WARGAME_IMAGE_REPOSITORY", default_value = DEFAULT_IMAGE_REPOSITORY)]
    pub image_repository: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
