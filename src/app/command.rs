// Author: Dustin Pilgrim
// License: MIT

use tokio::time::Duration;

use crate::cli::{Args, Command};

use super::AnyError;

const REPLY_TIMEOUT: Duration = Duration::from_secs(2);

pub async fn run(args: Args) -> Result<(), AnyError> {
    let Some(cmd) = args.command.as_ref() else {
        return Err("no command given".into());
    };

    let msg = cmd.to_ipc().encode();
    let reply_timeout = if cmd.waits_on_save() { None } else { Some(REPLY_TIMEOUT) };

    match crate::ipc::client::send_raw(&msg, reply_timeout).await {
        Ok(resp) => {
            match render_reply(cmd, &resp) {
                Ok(out) => println!("{out}"),
                Err(e) => eprintln!("studytimer: {e}"),
            }
            Ok(())
        }
        Err(e) => {
            if let Command::Info { json: true } = cmd {
                // Status bars need valid JSON on stdout even when the daemon isn't running.
                println!("{}", r#"{"running":false,"elapsed":"00:00:00","not_running":true}"#);
            } else {
                eprintln!("studytimer: {e}");
            }
            Ok(())
        }
    }
}

/// An empty reply means the daemon closed the connection without answering.
/// For saves that leaves the outcome unknown, so it is never shown as success.
fn render_reply(cmd: &Command, resp: &str) -> Result<String, String> {
    let out = resp.trim_end();
    if !out.is_empty() {
        return Ok(out.to_string());
    }
    if cmd.waits_on_save() {
        return Err("no response from daemon; save outcome unknown".to_string());
    }
    Ok(fallback_message(cmd).to_string())
}

fn fallback_message(cmd: &Command) -> &'static str {
    match cmd {
        Command::Start => "Timer started",
        Command::Pause => "Timer paused",
        Command::Toggle => "Timer toggled",
        Command::Stop | Command::Add { .. } => "",
        Command::Link { .. } => "Lesson link submitted",
        Command::Course { .. } => "Course updated",
        Command::Info { .. } => "",
        Command::Quit => "Stopping studytimer daemon",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daemon_reply_is_printed_as_is() {
        assert_eq!(
            render_reply(&Command::Stop, "Time \"00:10:00\" saved successfully!\n"),
            Ok("Time \"00:10:00\" saved successfully!".to_string())
        );
        assert_eq!(
            render_reply(&Command::Start, "ERROR: Failed to save time!"),
            Ok("ERROR: Failed to save time!".to_string())
        );
    }

    #[test]
    fn empty_reply_to_a_save_is_not_a_success() {
        let add = Command::Add { time: "00:45:00".to_string() };
        for cmd in [Command::Stop, add] {
            let err = render_reply(&cmd, "").unwrap_err();
            assert!(err.contains("save outcome unknown"), "{err}");
        }
    }

    #[test]
    fn empty_reply_falls_back_for_other_commands() {
        assert_eq!(render_reply(&Command::Pause, ""), Ok("Timer paused".to_string()));
        assert_eq!(render_reply(&Command::Quit, "  \n"), Ok("Stopping studytimer daemon".to_string()));
    }
}
