//! File-backed state store
//!
//! Identity and level live in two plain-text files inside the state
//! directory (the user's home by default).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StateStore;
use crate::error::{Result, WargameError};

/// File holding the identity verbatim
pub const USER_FILE: &str = ".ctf_user";

/// File holding the decimal level number
pub const PROGRESS_FILE: &str = ".ctf_progress";

#[derive(Debug, Clone)]
pub struct FileStateStore {
    user_path: PathBuf,
    progress_path: PathBuf,
}

impl FileStateStore {
    /// Store rooted at `dir`
    pub fn new(dir: &Path) -> Self {
        Self {
            user_path: dir.join(USER_FILE),
            progress_path: dir.join(PROGRESS_FILE),
        }
    }

    pub fn user_path(&self) -> &Path {
        &self.user_path
    }

    pub fn progress_path(&self) -> &Path {
        &self.progress_path
    }
}

fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(WargameError::State(format!(
            "Failed to remove {}: {}",
            path.display(),
            e
        ))),
    }
}

fn write_value(path: &Path, value: &str) -> Result<()> {
    fs::write(path, value).map_err(|e| {
        WargameError::State(format!("Failed to write {}: {}", path.display(), e))
    })
}

impl StateStore for FileStateStore {
    fn raw_level(&self) -> Option<String> {
        read_optional(&self.progress_path)
    }

    fn save_level(&mut self, level: u32) -> Result<()> {
        write_value(&self.progress_path, &level.to_string())
    }

    fn raw_identity(&self) -> Option<String> {
        read_optional(&self.user_path)
    }

    fn save_identity(&mut self, identity: &str) -> Result<()> {
        write_value(&self.user_path, identity)
    }

    fn delete_all(&mut self) -> Result<()> {
        let user = remove_if_present(&self.user_path);
        let progress = remove_if_present(&self.progress_path);
        user.and(progress)
    }
}
