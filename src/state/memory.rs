//! In-memory state store

use super::StateStore;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    identity: Option<String>,
    level: Option<String>,
    writes: usize,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: &str) -> Self {
        Self {
            identity: Some(identity.to_string()),
            ..Self::default()
        }
    }

    /// Store arbitrary level text, as a corrupted file would
    pub fn set_raw_level(&mut self, raw: &str) {
        self.level = Some(raw.to_string());
    }

    /// Number of level writes so far
    pub fn level_writes(&self) -> usize {
        self.writes
    }
}

impl StateStore for MemoryStateStore {
    fn raw_level(&self) -> Option<String> {
        self.level.clone()
    }

    fn save_level(&mut self, level: u32) -> Result<()> {
        self.level = Some(level.to_string());
        self.writes += 1;
        Ok(())
    }

    fn raw_identity(&self) -> Option<String> {
        self.identity.clone()
    }

    fn save_identity(&mut self, identity: &str) -> Result<()> {
        self.identity = Some(identity.to_string());
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        self.identity = None;
        self.level = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_levels() {
        let mut store = MemoryStateStore::new();
        assert_eq!(store.load_level(), 1);
        store.save_level(4).unwrap();
        assert_eq!(store.load_level(), 4);
        assert_eq!(store.level_writes(), 1);

        store.set_raw_level("-1");
        assert_eq!(store.load_level(), 1);
    }

    #[test]
    fn test_memory_store_completion() {
        let mut store = MemoryStateStore::new();
        store.save_level(11).unwrap();
        assert!(store.is_completed());
        assert_eq!(store.load_level(), 1);
    }
}
