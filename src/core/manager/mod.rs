// Author: Dustin Pilgrim
// License: MIT

mod engine;
mod snapshot;

pub struct Manager {
    default_course: String,
}

impl Manager {
    pub fn new(default_course: impl Into<String>) -> Self {
        Self {
            default_course: default_course.into(),
        }
    }
}
