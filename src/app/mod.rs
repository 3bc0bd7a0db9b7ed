// Author: Dustin Pilgrim
// License: MIT

pub mod command;
pub mod daemon_mode;

pub type AnyError = Box<dyn std::error::Error + Send + Sync>;
