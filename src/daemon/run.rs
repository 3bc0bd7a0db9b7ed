// Author: Dustin Pilgrim
// License: MIT

use std::ops::ControlFlow;

use tokio::sync::{mpsc, watch};

use crate::app::AnyError;
use crate::core::{events::Event, manager_msg::ManagerMsg, timefmt::parse_hms};
use crate::{sdebug, sinfo, swarn};

use super::Daemon;

impl Daemon {
    pub async fn run(
        &mut self,
        tx: mpsc::Sender<ManagerMsg>,
        mut rx: mpsc::Receiver<ManagerMsg>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), AnyError> {
        sinfo!("Daemon", "daemon starting (course: {})", self.state.course_title());

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        sinfo!("Daemon", "daemon stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = rx.recv() => {
                    let Some(msg) = maybe else {
                        sinfo!("Daemon", "daemon stopping (event channel closed)");
                        break;
                    };

                    if self.handle_msg(msg, &tx).is_break() {
                        break;
                    }
                }
            }
        }

        self.stop_ticker();

        if self.state.pending_saves() > 0 {
            swarn!(
                "Daemon",
                "exiting with {} save(s) still in flight",
                self.state.pending_saves()
            );
        }

        Ok(())
    }

    pub(super) fn handle_msg(
        &mut self,
        msg: ManagerMsg,
        tx: &mpsc::Sender<ManagerMsg>,
    ) -> ControlFlow<()> {
        match msg {
            ManagerMsg::Event(event) => {
                if let Ok(actions) = self.handle_event(event) {
                    self.exec_actions(actions, None, tx);
                }
            }

            ManagerMsg::Request { event, reply } => {
                if let Event::AddTime { text } = &event {
                    match parse_hms(text) {
                        Ok(secs) => sdebug!("Daemon", "manual time {:?} = {}s", text, secs),
                        Err(e) if !text.trim().is_empty() => {
                            swarn!("Daemon", "manual time {:?} is not hh:mm:ss ({}); sending as entered", text, e)
                        }
                        Err(_) => {}
                    }
                }

                match self.handle_event(event) {
                    Ok(actions) => self.exec_actions(actions, Some(reply), tx),
                    Err(e) => {
                        let message = e.to_string();
                        self.notifier.notify(&message, true);
                        let _ = reply.send(Err(message));
                    }
                }
            }

            ManagerMsg::SaveFinished { time, result, reply } => {
                match self.handle_event(Event::SaveFinished { time, result }) {
                    Ok(actions) => self.exec_actions(actions, reply, tx),
                    Err(e) => {
                        if let Some(reply) = reply {
                            let _ = reply.send(Err(e.to_string()));
                        }
                    }
                }
            }

            ManagerMsg::GetInfo { reply } => {
                let _ = reply.send(self.manager.snapshot(&self.state));
            }

            ManagerMsg::StopDaemon { reply } => {
                sinfo!("Daemon", "daemon stopping (stop requested via IPC)");
                let _ = reply.send(Ok("Stopping studytimer daemon".to_string()));
                return ControlFlow::Break(());
            }
        }

        self.sync_ticker(tx);
        ControlFlow::Continue(())
    }
}
