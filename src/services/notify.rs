// Author: Dustin Pilgrim
// License: MIT

use std::process::Stdio;

use tokio::process::Command;

use crate::{sinfo, swarn};

/// Surfaces messages to the user. The IPC reply always carries the message;
/// desktop notifications are opt-in.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    desktop: bool,
}

impl Notifier {
    pub fn new(desktop: bool) -> Self {
        Self { desktop }
    }

    pub fn notify(&self, message: &str, failure: bool) {
        if failure {
            swarn!("Notify", "{}", message);
        } else {
            sinfo!("Notify", "{}", message);
        }

        if self.desktop {
            send_desktop_notification(message, failure);
        }
    }
}

fn send_desktop_notification(body: &str, failure: bool) {
    let urgency = if failure { "critical" } else { "normal" };

    if let Err(e) = Command::new("notify-send")
        .arg("-a")
        .arg("studytimer")
        .arg("-u")
        .arg(urgency)
        .arg("Study Timer")
        .arg(body)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        swarn!("Notify", "failed to send desktop notification: {}", e);
    }
}
