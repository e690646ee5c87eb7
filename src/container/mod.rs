//! Level containers
//!
//! Every level runs inside its own named container:
//! - `engine` defines the primitive operations of a container engine
//! - `docker` implements them with the docker command line
//! - `manager` coordinates the lifecycle of level containers

pub mod docker;
pub mod engine;
mod manager;

#[cfg(test)]
pub(crate) mod fake;

pub use docker::DockerCli;
pub use engine::{ContainerEngine, RunRequest};
pub use manager::{ContainerManager, Provisioning, PullSummary, DEFAULT_IMAGE_REPOSITORY, DEFAULT_SHELL};
