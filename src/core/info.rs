// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;

/// Snapshot returned from the daemon/manager for `studytimer info`.
///
/// - the serialized fields are the stable JSON contract (`info --json`).
/// - `pretty_text` is CLI-facing output for plain `studytimer info`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoSnapshot {
    pub course_title: String,
    pub elapsed: String,
    pub elapsed_seconds: u64,
    pub running: bool,
    pub last_session: Option<String>,
    pub lesson_link: Option<String>,
    pub pending_saves: usize,

    #[serde(skip_serializing)]
    pub pretty_text: String,
}

impl InfoSnapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
