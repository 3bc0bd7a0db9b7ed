// Author: Dustin Pilgrim
// License: MIT

pub mod notify;
pub mod ticker;
pub mod webhook;
