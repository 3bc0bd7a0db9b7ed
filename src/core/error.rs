// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// User input was rejected before anything was sent anywhere.
    ///
    /// Examples:
    /// - manual time left empty
    /// - blank course title
    InvalidInput(InputError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyManualTime,
    EmptyCourseTitle,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyManualTime => {
                write!(f, "Please enter a valid time in hh:mm:ss format.")
            }
            InputError::EmptyCourseTitle => write!(f, "Course title must not be empty."),
        }
    }
}

impl std::error::Error for Error {}
