//! Output formatting

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::levels::TOTAL_LEVELS;
use crate::output::human::format_human;
use crate::output::json::format_json;
use crate::state::StateStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Snapshot of persisted progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub user: Option<String>,
    pub level: u32,
    pub total_levels: u32,
    pub completed: bool,
    pub state_dir: String,
}

impl StatusReport {
    pub fn from_store(store: &dyn StateStore, state_dir: &Path) -> Self {
        let completed = store.is_completed();
        Self {
            user: store.load_identity(),
            level: if completed { TOTAL_LEVELS } else { store.load_level() },
            total_levels: TOTAL_LEVELS,
            completed,
            state_dir: state_dir.display().to_string(),
        }
    }
}

pub fn format_output(report: &StatusReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}
