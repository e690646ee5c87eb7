//! Recording engine used by unit tests

use std::cell::RefCell;
use std::collections::BTreeSet;

use super::engine::{ContainerEngine, RunRequest};
use crate::error::{Result, WargameError};

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub calls: RefCell<Vec<String>>,
    pub containers: RefCell<BTreeSet<String>>,
    pub runs: RefCell<Vec<RunRequest>>,
    /// Behave as if the engine binary were missing
    pub unavailable: bool,
    /// Make `run` fail with a non-zero exit
    pub fail_run: bool,
    /// Make `pull` fail for these images
    pub failing_pulls: Vec<String>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_containers(names: &[&str]) -> Self {
        let engine = Self::default();
        engine
            .containers
            .borrow_mut()
            .extend(names.iter().map(|n| n.to_string()));
        engine
    }

    pub fn has(&self, name: &str) -> bool {
        self.containers.borrow().contains(name)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, call: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == call)
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.unavailable {
            return Err(WargameError::EngineUnavailable("fake".to_string()));
        }
        Ok(())
    }

    fn failed(command: String) -> WargameError {
        WargameError::EngineCommand {
            command,
            code: "1".to_string(),
        }
    }
}

impl ContainerEngine for FakeEngine {
    fn version(&self) -> Result<String> {
        self.record("version".to_string())?;
        Ok("Fake version 1.0".to_string())
    }

    fn pull(&self, image: &str) -> Result<()> {
        self.record(format!("pull {}", image))?;
        if self.failing_pulls.iter().any(|i| i == image) {
            return Err(Self::failed(format!("pull {}", image)));
        }
        Ok(())
    }

    fn exists(&self, name: &str) -> Result<bool> {
        self.record(format!("exists {}", name))?;
        Ok(self.has(name))
    }

    fn run(&self, request: &RunRequest) -> Result<()> {
        self.record(format!("run {}", request.name))?;
        if self.fail_run {
            return Err(Self::failed(format!("run {}", request.name)));
        }
        self.runs.borrow_mut().push(request.clone());
        self.containers.borrow_mut().insert(request.name.clone());
        Ok(())
    }

    fn start(&self, name: &str) -> Result<()> {
        self.record(format!("start {}", name))?;
        if !self.has(name) {
            return Err(Self::failed(format!("start {}", name)));
        }
        Ok(())
    }

    fn exec_shell(&self, name: &str, shell: &str) -> Result<()> {
        self.record(format!("exec {} {}", name, shell))?;
        if !self.has(name) {
            return Err(Self::failed(format!("exec {}", name)));
        }
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.record(format!("rm {}", name))?;
        if !self.containers.borrow_mut().remove(name) {
            return Err(Self::failed(format!("rm {}", name)));
        }
        Ok(())
    }
}
