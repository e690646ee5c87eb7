//! Docker-compatible engine driven through its command line

use std::process::{Command, Stdio};

use super::engine::{ContainerEngine, RunRequest};
use crate::error::{Result, WargameError};

/// Engine that shells out to `docker` (or any CLI-compatible program)
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl DockerCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    /// Run quietly and map a non-zero exit to an error
    fn run_quiet(&self, args: &[&str]) -> Result<()> {
        log::debug!("Running: {}", self.describe(args));
        let status = self
            .command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|_| WargameError::EngineUnavailable(self.program.clone()))?;
        self.check(args, status)
    }

    /// Run with the terminal handed over to the child
    fn run_attached(&self, args: &[&str]) -> Result<()> {
        log::debug!("Running attached: {}", self.describe(args));
        let status = self
            .command(args)
            .status()
            .map_err(|_| WargameError::EngineUnavailable(self.program.clone()))?;
        self.check(args, status)
    }

    fn capture(&self, args: &[&str]) -> Result<String> {
        log::debug!("Capturing: {}", self.describe(args));
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|_| WargameError::EngineUnavailable(self.program.clone()))?;
        self.check(args, output.status)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn check(&self, args: &[&str], status: std::process::ExitStatus) -> Result<()> {
        if status.success() {
            return Ok(());
        }
        Err(WargameError::EngineCommand {
            command: self.describe(args),
            code: status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string()),
        })
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new("docker")
    }
}

/// Whether `listing` (one container name per line) contains exactly `name`
pub(crate) fn listing_contains(listing: &str, name: &str) -> bool {
    listing.lines().any(|line| line.trim() == name)
}

impl ContainerEngine for DockerCli {
    fn version(&self) -> Result<String> {
        self.capture(&["--version"]).map(|v| v.trim().to_string())
    }

    fn pull(&self, image: &str) -> Result<()> {
        self.run_quiet(&["pull", image])
    }

    fn exists(&self, name: &str) -> Result<bool> {
        let listing = self.capture(&["ps", "-a", "--format", "{{.Names}}"])?;
        Ok(listing_contains(&listing, name))
    }

    fn run(&self, request: &RunRequest) -> Result<()> {
        self.run_quiet(&[
            "run",
            "-dit",
            "--hostname",
            request.hostname.as_str(),
            "--user",
            request.user.as_str(),
            "--name",
            request.name.as_str(),
            request.image.as_str(),
            request.command.as_str(),
        ])
    }

    fn start(&self, name: &str) -> Result<()> {
        self.run_quiet(&["start", name])
    }

    fn exec_shell(&self, name: &str, shell: &str) -> Result<()> {
        self.run_attached(&["exec", "-it", name, shell])
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.run_quiet(&["rm", "-f", name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_contains_exact_names() {
        let listing = "ctf1\nctf10\nother\n";
        assert!(listing_contains(listing, "ctf1"));
        assert!(listing_contains(listing, "ctf10"));
        assert!(!listing_contains(listing, "ctf2"));
        assert!(!listing_contains("ctf10\n", "ctf1"));
        assert!(!listing_contains("", "ctf1"));
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let engine = DockerCli::new("wargame-test-no-such-engine");
        assert!(matches!(engine.version(), Err(WargameError::EngineUnavailable(_))));
        assert!(matches!(engine.remove("ctf1"), Err(WargameError::EngineUnavailable(_))));
    }

    #[test]
    fn test_default_program() {
        assert_eq!(DockerCli::default().program(), "docker");
    }
}
