//! Static level table

/// A single challenge level and the token that completes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDefinition {
    pub number: u32,
    pub token: &'static str,
}

/// Number of entries in the level table
pub const LEVEL_COUNT: usize = 10;

/// Every level, ordered by number starting at 1
pub static LEVELS: [LevelDefinition; LEVEL_COUNT] = [
    LevelDefinition { number: 1, token: "FLAG{welcome_to_ctf}" },
    LevelDefinition { number: 2, token: "FLAG{basic_linux_commands}" },
    LevelDefinition { number: 3, token: "FLAG{file_permissions_master}" },
    LevelDefinition { number: 4, token: "FLAG{process_management_pro}" },
    LevelDefinition { number: 5, token: "FLAG{network_ninja}" },
    LevelDefinition { number: 6, token: "FLAG{script_wizard}" },
    LevelDefinition { number: 7, token: "FLAG{security_expert}" },
    LevelDefinition { number: 8, token: "FLAG{docker_master}" },
    LevelDefinition { number: 9, token: "FLAG{advanced_exploitation}" },
    LevelDefinition { number: 10, token: "FLAG{ultimate_hacker}" },
];
