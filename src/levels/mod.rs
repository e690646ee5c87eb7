//! Level definitions
//!
//! Levels are numbered from 1 and each one owns a fixed completion token,
//! a container name and an image tag. All three are derived from the level
//! number alone so lookups are repeatable across sessions.

mod table;
pub mod verifier;

pub use table::{LevelDefinition, LEVELS, LEVEL_COUNT};
pub use verifier::TokenVerifier;

/// First playable level
pub const FIRST_LEVEL: u32 = 1;

/// Number of levels in the game
pub const TOTAL_LEVELS: u32 = LEVEL_COUNT as u32;

/// Prefix shared by every level container name
pub const CONTAINER_PREFIX: &str = "ctf";

/// Name of the container backing `level`
pub fn container_name(level: u32) -> String {
    format!("{}{}", CONTAINER_PREFIX, level)
}

/// Image tag for `level` inside the configured repository
pub fn image_tag(level: u32) -> String {
    format!("warg{}", level)
}

/// Full image reference (`repository:tag`) for `level`
pub fn image_reference(repository: &str, level: u32) -> String {
    format!("{}:{}", repository, image_tag(level))
}

/// Clamp a raw persisted level into the playable range.
///
/// Anything missing, unparseable or outside `[1, TOTAL_LEVELS]` becomes the
/// first level.
pub fn normalize_level(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= FIRST_LEVEL as i64 && *n <= TOTAL_LEVELS as i64)
        .map(|n| n as u32)
        .unwrap_or(FIRST_LEVEL)
}

/// Whether a raw persisted level marks the whole game as finished
pub fn is_completion_marker(raw: Option<&str>) -> bool {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .map_or(false, |n| n > TOTAL_LEVELS)
}
