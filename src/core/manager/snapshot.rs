// Author: Dustin Pilgrim
// License: MIT

use std::fmt::Write;

use crate::core::{info::InfoSnapshot, state::State, timefmt::format_hms};

use super::Manager;

impl Manager {
    pub fn snapshot(&self, state: &State) -> InfoSnapshot {
        let elapsed = format_hms(state.elapsed_seconds());

        // Writing into a String cannot fail.
        let mut pretty = String::new();
        let _ = writeln!(pretty, "◆ {}", state.course_title());
        let _ = writeln!(pretty, "Timer: {elapsed}");
        let _ = writeln!(
            pretty,
            "State: {}",
            if state.is_running() { "running" } else { "paused" }
        );
        let _ = writeln!(
            pretty,
            "Last Session: {}",
            state.last_session().unwrap_or("No sessions recorded yet")
        );
        if let Some(link) = state.lesson_link() {
            let _ = writeln!(pretty, "Last Lesson: {link}");
        }
        if state.pending_saves() > 0 {
            let _ = writeln!(pretty, "Saves In Flight: {}", state.pending_saves());
        }

        InfoSnapshot {
            course_title: state.course_title().to_string(),
            elapsed,
            elapsed_seconds: state.elapsed_seconds(),
            running: state.is_running(),
            last_session: state.last_session().map(str::to_string),
            lesson_link: state.lesson_link().map(str::to_string),
            pending_saves: state.pending_saves(),
            pretty_text: pretty.trim_end().to_string(),
        }
    }
}
