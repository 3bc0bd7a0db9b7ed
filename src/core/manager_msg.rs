// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::oneshot;

use crate::core::{events::Event, info::InfoSnapshot};

pub type Reply = oneshot::Sender<Result<String, String>>;

#[derive(Debug)]
pub enum ManagerMsg {
    /// Fire-and-forget event (ticks).
    Event(Event),

    /// User command; answered once every action it caused has finished.
    Request {
        event: Event,
        reply: Reply,
    },

    /// A webhook call started by a request finished.
    SaveFinished {
        time: String,
        result: Result<String, String>,
        reply: Option<Reply>,
    },

    GetInfo { reply: oneshot::Sender<InfoSnapshot> },

    StopDaemon {
        reply: Reply,
    },
}
