// Author: Dustin Pilgrim
// License: MIT

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One-second tick from the ticker started for run `epoch`.
    Tick {
        epoch: u64,
    },

    Start,
    Pause,
    Toggle,

    /// Stop the timer and record the elapsed time. `at` becomes the
    /// last-session timestamp.
    StopAndSave {
        at: String,
    },

    AddTime {
        text: String,
    },

    SubmitLessonLink {
        link: String,
    },

    /// `None` goes back to the configured course title.
    SetCourse {
        title: Option<String>,
    },

    /// A webhook call finished. `result` carries the response body or the
    /// failure description.
    SaveFinished {
        time: String,
        result: Result<String, String>,
    },
}
