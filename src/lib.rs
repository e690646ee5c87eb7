//! Wargame - a local progress shell for container-backed challenge levels
//!
//! Each level lives in its own container. The player opens a shell in it,
//! finds the level's flag, and submits it to move on. Progress and the
//! player's name are kept in two small files in the home directory.
//!
//! # Example
//!
//! ```no_run
//! use wargame::{ContainerManager, DockerCli, FileStateStore, ProgressionController, TerminalConsole, InterruptFlag};
//!
//! let store = FileStateStore::new(std::path::Path::new("/home/neo"));
//! let containers = ContainerManager::new(DockerCli::default());
//! let mut console = TerminalConsole::new(InterruptFlag::install().unwrap()).unwrap();
//! let mut controller = ProgressionController::new(store, containers);
//! let outcome = controller.run("neo", &mut console).unwrap();
//! println!("{:?}", outcome);
//! ```

pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod levels;
pub mod output;
pub mod progress;
pub mod repl;
pub mod session;
pub mod setup;
pub mod state;

pub use config::Config;
pub use container::{ContainerEngine, ContainerManager, DockerCli, Provisioning};
pub use error::{Result, WargameError};
pub use levels::{TokenVerifier, TOTAL_LEVELS};
pub use output::{format_output, OutputFormat, StatusReport};
pub use progress::{ProgressionController, RunOutcome};
pub use repl::{Console, InterruptFlag, PrintConsole, TerminalConsole};
pub use session::{LevelSession, SessionCommand, SessionOutcome};
pub use state::{load_or_create_identity, FileStateStore, Identity, MemoryStateStore, StateStore};
