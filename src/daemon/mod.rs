// Author: Dustin Pilgrim
// License: MIT

mod actions;
mod run;


use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::StudyConfig;
use crate::core::{
    action::Action,
    error::Error,
    events::Event,
    manager::Manager,
    manager_msg::ManagerMsg,
    state::State,
};
use crate::services::{notify::Notifier, webhook::WebhookClient};
use crate::{sdebug, swarn};

pub struct Daemon {
    manager: Manager,
    state: State,

    webhook: WebhookClient,
    notifier: Notifier,

    // Present exactly while the session is running.
    ticker: Option<JoinHandle<()>>,
}

impl Daemon {
    pub fn new(cfg: &StudyConfig) -> Self {
        sdebug!(
            "Daemon",
            "course={:?}, webhook={}, desktop_notifications={}",
            cfg.course_title,
            cfg.webhook_url,
            cfg.desktop_notifications,
        );

        Self {
            manager: Manager::new(cfg.course_title.clone()),
            state: State::new(cfg.course_title.clone()),
            webhook: WebhookClient::new(cfg.webhook_url.clone()),
            notifier: Notifier::new(cfg.desktop_notifications),
            ticker: None,
        }
    }

    fn handle_event(&mut self, event: Event) -> Result<Vec<Action>, Error> {
        let res = self.manager.handle_event(&mut self.state, event);
        if let Err(e) = &res {
            swarn!("Daemon", "rejected: {}", e);
        }
        res
    }

    /// Start or stop the one-second ticker to match the running flag.
    fn sync_ticker(&mut self, tx: &mpsc::Sender<ManagerMsg>) {
        match (self.state.is_running(), self.ticker.is_some()) {
            (true, false) => {
                let epoch = self.state.run_epoch();
                self.ticker = Some(tokio::spawn(crate::services::ticker::run_ticker(
                    tx.clone(),
                    epoch,
                )));
            }
            (false, true) => {
                if let Some(handle) = self.ticker.take() {
                    handle.abort();
                }
            }
            _ => {}
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}
