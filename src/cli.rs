// Author: Dustin Pilgrim
// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ipc::commands::IpcCommand;

#[derive(Parser, Debug)]
#[command(
    name = "studytimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Study session stopwatch"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[arg(long, action)]
    pub no_console: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Start the study timer")]
    Start,

    #[command(about = "Pause the study timer")]
    Pause,

    #[command(about = "Start the timer if paused, pause it if running")]
    Toggle,

    #[command(about = "Stop the timer and save the elapsed time")]
    Stop,

    #[command(about = "Save a manually entered time (hh:mm:ss)")]
    Add {
        #[arg(value_name = "HH:MM:SS", default_value = "")]
        time: String,
    },

    #[command(about = "Submit the link of the last lesson")]
    Link {
        url: String,
    },

    #[command(about = "Set the course title, or reset it to the configured one")]
    Course {
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    #[command(about = "Display the current session")]
    Info {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Stop the running studytimer daemon")]
    Quit,
}

impl Command {
    pub fn to_ipc(&self) -> IpcCommand {
        match self {
            Command::Start => IpcCommand::Start,
            Command::Pause => IpcCommand::Pause,
            Command::Toggle => IpcCommand::Toggle,
            Command::Stop => IpcCommand::StopAndSave,
            Command::Add { time } => IpcCommand::AddTime(time.clone()),
            Command::Link { url } => IpcCommand::Link(url.clone()),
            Command::Course { title } if title.is_empty() => IpcCommand::Course(None),
            Command::Course { title } => IpcCommand::Course(Some(title.join(" "))),
            Command::Info { json } => IpcCommand::Info { json: *json },
            Command::Quit => IpcCommand::Quit,
        }
    }

    /// Commands that wait on the webhook get no reply deadline.
    pub fn waits_on_save(&self) -> bool {
        matches!(self, Command::Stop | Command::Add { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("studytimer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_runs_the_daemon() {
        let args = parse(&["-v", "--config", "/tmp/st.rune"]);
        assert!(args.command.is_none());
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/st.rune")));
    }

    fn ipc(args: &[&str]) -> IpcCommand {
        parse(args).command.unwrap().to_ipc()
    }

    #[test]
    fn subcommands_map_to_ipc() {
        assert_eq!(ipc(&["stop"]), IpcCommand::StopAndSave);
        assert_eq!(ipc(&["add", "01:00:00"]), IpcCommand::AddTime("01:00:00".into()));
        assert_eq!(ipc(&["add"]), IpcCommand::AddTime(String::new()));
        assert_eq!(
            ipc(&["course", "Organic", "Chemistry"]),
            IpcCommand::Course(Some("Organic Chemistry".into()))
        );
        assert_eq!(ipc(&["course"]), IpcCommand::Course(None));
        assert_eq!(ipc(&["info", "--json"]), IpcCommand::Info { json: true });
    }

    #[test]
    fn only_saves_wait_without_deadline() {
        assert!(parse(&["stop"]).command.unwrap().waits_on_save());
        assert!(parse(&["add", "00:01:00"]).command.unwrap().waits_on_save());
        assert!(!parse(&["start"]).command.unwrap().waits_on_save());
    }
}
