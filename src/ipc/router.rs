// Author: Dustin Pilgrim
// License: MIT

use chrono::Local;
use tokio::sync::{mpsc, oneshot};

use crate::core::{events::Event, manager_msg::ManagerMsg};
use crate::{sdebug, swarn};

use super::commands::IpcCommand;

const NOT_RUNNING: &str = "ERROR: studytimer daemon not running";
const NO_RESPONSE: &str = "ERROR: No response from daemon";

/// Routes one raw command line to the daemon and renders the response.
pub async fn route_command(raw: &str, tx: &mpsc::Sender<ManagerMsg>) -> String {
    let cmd = match IpcCommand::parse(raw) {
        Ok(c) => c,
        Err(e) => {
            swarn!("Router", "rejected IPC command {:?}: {}", raw, e);
            return format!("ERROR: {e}");
        }
    };

    if !matches!(cmd, IpcCommand::Info { json: true }) {
        sdebug!("Router", "IPC command: {:?}", cmd);
    }

    match cmd {
        IpcCommand::Start => request(tx, Event::Start).await,
        IpcCommand::Pause => request(tx, Event::Pause).await,
        IpcCommand::Toggle => request(tx, Event::Toggle).await,
        IpcCommand::StopAndSave => {
            let at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            request(tx, Event::StopAndSave { at }).await
        }
        IpcCommand::AddTime(text) => request(tx, Event::AddTime { text }).await,
        IpcCommand::Link(link) => request(tx, Event::SubmitLessonLink { link }).await,
        IpcCommand::Course(title) => request(tx, Event::SetCourse { title }).await,
        IpcCommand::Info { json } => info(tx, json).await,
        IpcCommand::Quit => quit(tx).await,
    }
}

async fn request(tx: &mpsc::Sender<ManagerMsg>, event: Event) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::Request { event, reply: reply_tx })
        .await
        .is_err()
    {
        return NOT_RUNNING.to_string();
    }

    render_reply(reply_rx.await)
}

async fn info(tx: &mpsc::Sender<ManagerMsg>, json: bool) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx.send(ManagerMsg::GetInfo { reply: reply_tx }).await.is_err() {
        return NOT_RUNNING.to_string();
    }

    match reply_rx.await {
        Ok(snap) if json => snap.to_json(),
        Ok(snap) => snap.pretty_text,
        Err(_) => NO_RESPONSE.to_string(),
    }
}

async fn quit(tx: &mpsc::Sender<ManagerMsg>) -> String {
    let (reply_tx, reply_rx) = oneshot::channel();

    if tx
        .send(ManagerMsg::StopDaemon { reply: reply_tx })
        .await
        .is_err()
    {
        return NOT_RUNNING.to_string();
    }

    render_reply(reply_rx.await)
}

fn render_reply(res: Result<Result<String, String>, oneshot::error::RecvError>) -> String {
    match res {
        Ok(Ok(msg)) => msg.trim_end().to_string(),
        Ok(Err(e)) => {
            let out = e.trim_end();
            if out.is_empty() {
                "ERROR: request failed".to_string()
            } else {
                format!("ERROR: {out}")
            }
        }
        Err(_) => NO_RESPONSE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn closed_daemon_channel_reports_not_running() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        assert_eq!(route_command("start", &tx).await, NOT_RUNNING);
        assert_eq!(route_command("info --json", &tx).await, NOT_RUNNING);
    }

    #[tokio::test]
    async fn requests_carry_the_matching_event() {
        let (tx, mut rx) = mpsc::channel(1);

        let daemon = tokio::spawn(async move {
            match rx.recv().await {
                Some(ManagerMsg::Request { event, reply }) => {
                    assert_eq!(event, Event::AddTime { text: "00:30:00".into() });
                    let _ = reply.send(Err("Failed to save time!".into()));
                }
                other => panic!("unexpected message: {other:?}"),
            }
        });

        let out = route_command("add 00:30:00", &tx).await;
        daemon.await.unwrap();
        assert_eq!(out, "ERROR: Failed to save time!");
    }

    #[tokio::test]
    async fn blank_course_title_reaches_the_manager_as_a_title() {
        let (tx, mut rx) = mpsc::channel(1);

        let daemon = tokio::spawn(async move {
            match rx.recv().await {
                Some(ManagerMsg::Request { event, reply }) => {
                    assert_eq!(event, Event::SetCourse { title: Some(String::new()) });
                    let _ = reply.send(Err("Course title must not be empty.".into()));
                }
                other => panic!("unexpected message: {other:?}"),
            }
        });

        let wire = IpcCommand::Course(Some("   ".into())).encode();
        let out = route_command(&wire, &tx).await;
        daemon.await.unwrap();
        assert_eq!(out, "ERROR: Course title must not be empty.");
    }

    #[tokio::test]
    async fn unknown_command_is_answered_locally() {
        let (tx, _rx) = mpsc::channel(1);
        assert_eq!(route_command("dance", &tx).await, "ERROR: Unknown command 'dance'");
    }
}
