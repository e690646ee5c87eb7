//! First-run setup
//!
//! Before a user exists we check privileges, connectivity and the
//! container engine, then pull the image of every level so later levels
//! start without a download.

mod system;

pub use system::{check_internet, detect_os, is_privileged};

use crate::container::{ContainerEngine, ContainerManager, PullSummary};
use crate::error::{Result, WargameError};
use crate::repl::{Console, InterruptFlag, Tone};
use crate::state::StateStore;

/// Facts about the host gathered before setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    pub privileged: bool,
    pub online: bool,
    pub os: String,
}

impl Preflight {
    /// Probe the current host
    pub fn probe(connectivity_host: &str) -> Self {
        Self {
            privileged: is_privileged(),
            online: check_internet(connectivity_host),
            os: detect_os(),
        }
    }
}

/// Setup is needed until an identity has been stored
pub fn needs_setup(store: &dyn StateStore) -> bool {
    store.load_identity().is_none()
}

/// Check the host and pull every level image.
///
/// Missing privileges or a missing engine abort setup. Failed pulls are
/// reported per level but do not.
pub fn run_setup<E: ContainerEngine>(
    preflight: &Preflight,
    containers: &ContainerManager<E>,
    total_levels: u32,
    console: &mut dyn Console,
    interrupts: &InterruptFlag,
) -> Result<PullSummary> {
    if !preflight.privileged {
        console.error("Run the script with sudo!");
        return Err(WargameError::NotPrivileged);
    }

    console.clear();
    if preflight.online {
        console.success("Internet is working!");
    } else {
        console.warn("No internet connection. Continuing offline...");
    }
    console.info(&format!("Detected OS: {}", preflight.os));

    match containers.check_engine() {
        Ok(version) => {
            log::info!("Container engine: {}", version);
            console.info("Docker is installed!");
        }
        Err(e) => {
            console.warn("Docker not found. Some features may not work.");
            console.error("Please install Docker manually.");
            return Err(e);
        }
    }

    console.say(Tone::Heading, "Pulling level images...");
    let summary = containers.pull_all(total_levels, interrupts, |level, result| {
        let mark = if result.is_ok() { "✓" } else { "✗" };
        console.plain(&format!("Pulling level {}... {}", level, mark));
    })?;

    if !summary.failed.is_empty() {
        console.warn(&format!(
            "{} level image(s) could not be pulled; those levels start once the image is available.",
            summary.failed.len()
        ));
    }
    console.success("Setup complete!");
    Ok(summary)
}
