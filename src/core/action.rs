// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;

/// Body of one webhook save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    pub course_name: String,
    pub time_recorded: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Post a time record to the webhook. The daemon runs this off the event
    /// loop and feeds the outcome back as `Event::SaveFinished`.
    SaveTime {
        record: TimeRecord,
    },

    /// Tell the user something (runtime decides how: IPC reply, notify-send).
    Notify {
        message: String,
        failure: bool,
    },
}

impl Action {
    pub fn notify(message: impl Into<String>) -> Self {
        Action::Notify {
            message: message.into(),
            failure: false,
        }
    }

    pub fn notify_failure(message: impl Into<String>) -> Self {
        Action::Notify {
            message: message.into(),
            failure: true,
        }
    }
}
