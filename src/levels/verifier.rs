//! Completion token verification

use super::table::{LevelDefinition, LEVELS};

/// Checks submitted tokens against a level table
#[derive(Debug, Clone, Copy)]
pub struct TokenVerifier {
    levels: &'static [LevelDefinition],
}

impl TokenVerifier {
    /// Create a verifier over a custom level table
    pub fn new(levels: &'static [LevelDefinition]) -> Self {
        Self { levels }
    }

    /// Expected token for `level`, if the level exists
    pub fn expected_token(&self, level: u32) -> Option<&'static str> {
        self.levels
            .iter()
            .find(|def| def.number == level)
            .map(|def| def.token)
    }

    /// Exact, case-sensitive match after trimming surrounding whitespace.
    /// Unknown levels never verify.
    pub fn verify(&self, submitted: &str, level: u32) -> bool {
        match self.expected_token(level) {
            Some(expected) => submitted.trim() == expected,
            None => false,
        }
    }

    /// Number of levels known to this verifier
    pub fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }
}

impl Default for TokenVerifier {
    fn default() -> Self {
        Self::new(&LEVELS)
    }
}
