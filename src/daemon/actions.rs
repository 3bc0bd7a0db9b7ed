// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc;

use crate::core::{
    action::{Action, TimeRecord},
    manager_msg::{ManagerMsg, Reply},
};
use crate::{serror, sinfo, swarn};

use super::Daemon;

impl Daemon {
    /// Runs the manager's actions. `reply` is answered here with the collected
    /// notifications unless a save takes it over.
    pub(super) fn exec_actions(
        &mut self,
        actions: Vec<Action>,
        mut reply: Option<Reply>,
        tx: &mpsc::Sender<ManagerMsg>,
    ) {
        let mut messages = Vec::new();
        let mut failed = false;

        for action in actions {
            match action {
                Action::Notify { message, failure } => {
                    self.notifier.notify(&message, failure);
                    failed |= failure;
                    messages.push(message);
                }

                Action::SaveTime { record } => {
                    self.spawn_save(record, reply.take(), tx.clone());
                }
            }
        }

        if let Some(reply) = reply {
            let text = messages.join("\n");
            let _ = reply.send(if failed { Err(text) } else { Ok(text) });
        }
    }

    /// Posts off the event loop; ticks keep flowing while the request is out.
    fn spawn_save(&self, record: TimeRecord, reply: Option<Reply>, tx: mpsc::Sender<ManagerMsg>) {
        let webhook = self.webhook.clone();

        tokio::spawn(async move {
            let result = match webhook.post_time(&record).await {
                Ok(body) => {
                    sinfo!("Webhook", "Time saved successfully: {}", body);
                    Ok(body)
                }
                Err(e) => {
                    serror!("Webhook", "Error saving time: {}", e);
                    Err(e.to_string())
                }
            };

            let msg = ManagerMsg::SaveFinished {
                time: record.time_recorded,
                result,
                reply,
            };

            if tx.send(msg).await.is_err() {
                swarn!("Webhook", "daemon gone before save result could be reported");
            }
        });
    }
}
