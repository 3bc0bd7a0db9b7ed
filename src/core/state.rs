// Author: Dustin Pilgrim
// License: MIT

pub const DEFAULT_COURSE_TITLE: &str = "Course Title";

#[derive(Debug, Clone)]
pub struct State {
    // Tracker
    elapsed_seconds: u64,
    running: bool,

    // Bumped on every transition into running; ticks carry the epoch of the
    // ticker that produced them.
    run_epoch: u64,

    // Session / display
    course_title: String,
    last_session: Option<String>,
    lesson_link: Option<String>,

    // Webhook calls in flight
    pending_saves: usize,
}

impl State {
    pub fn new(course_title: impl Into<String>) -> Self {
        Self {
            elapsed_seconds: 0,
            running: false,
            run_epoch: 0,
            course_title: course_title.into(),
            last_session: None,
            lesson_link: None,
            pending_saves: 0,
        }
    }

    // ---------------- tracker ----------------

    /// Returns false when already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.run_epoch = self.run_epoch.wrapping_add(1);
        true
    }

    /// Returns false when already paused.
    pub fn pause(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    /// Counts one second if the tick belongs to the current run.
    pub fn tick(&mut self, epoch: u64) -> bool {
        if !self.running || epoch != self.run_epoch {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run_epoch(&self) -> u64 {
        self.run_epoch
    }

    // ---------------- session ----------------

    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    pub fn set_course_title(&mut self, title: impl Into<String>) {
        self.course_title = title.into();
    }

    pub fn last_session(&self) -> Option<&str> {
        self.last_session.as_deref()
    }

    pub fn set_last_session(&mut self, at: impl Into<String>) {
        self.last_session = Some(at.into());
    }

    pub fn lesson_link(&self) -> Option<&str> {
        self.lesson_link.as_deref()
    }

    pub fn set_lesson_link(&mut self, link: impl Into<String>) {
        self.lesson_link = Some(link.into());
    }

    // ---------------- saves ----------------

    pub fn pending_saves(&self) -> usize {
        self.pending_saves
    }

    pub fn save_started(&mut self) {
        self.pending_saves += 1;
    }

    pub fn save_finished(&mut self) {
        self.pending_saves = self.pending_saves.saturating_sub(1);
    }
}
