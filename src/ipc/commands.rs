// Author: Dustin Pilgrim
// License: MIT

/// Text commands understood by the daemon socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcCommand {
    Start,
    Pause,
    Toggle,
    StopAndSave,
    AddTime(String),
    Link(String),
    Course(Option<String>),
    Info { json: bool },
    Quit,
}

impl IpcCommand {
    /// Wire form sent by the client.
    pub fn encode(&self) -> String {
        match self {
            IpcCommand::Start => "start".to_string(),
            IpcCommand::Pause => "pause".to_string(),
            IpcCommand::Toggle => "toggle".to_string(),
            IpcCommand::StopAndSave => "stop".to_string(),
            IpcCommand::AddTime(t) => format!("add {t}"),
            IpcCommand::Link(l) => format!("link {l}"),
            IpcCommand::Course(Some(t)) => format!("course {t}"),
            IpcCommand::Course(None) => "course-reset".to_string(),
            IpcCommand::Info { json: true } => "info --json".to_string(),
            IpcCommand::Info { json: false } => "info".to_string(),
            IpcCommand::Quit => "quit".to_string(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        let (head, rest) = match raw.split_once(char::is_whitespace) {
            Some((h, r)) => (h, r.trim()),
            None => (raw, ""),
        };

        let cmd = match head {
            "start" => IpcCommand::Start,
            "pause" => IpcCommand::Pause,
            "toggle" => IpcCommand::Toggle,
            "stop" => IpcCommand::StopAndSave,
            // Presence is checked by the manager so the user gets the same
            // message whether the client or the socket sent an empty time.
            "add" => IpcCommand::AddTime(rest.to_string()),
            "link" => IpcCommand::Link(rest.to_string()),
            // A blank title stays `Some` so the manager rejects it instead of
            // falling back to the configured course.
            "course" => IpcCommand::Course(Some(rest.to_string())),
            "course-reset" => IpcCommand::Course(None),
            "info" => IpcCommand::Info {
                json: rest.split_whitespace().any(|a| a == "--json"),
            },
            "quit" => IpcCommand::Quit,
            "" => return Err("empty command".to_string()),
            other => return Err(format!("Unknown command '{other}'")),
        };

        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_cli_command() {
        let all = [
            IpcCommand::Start,
            IpcCommand::Pause,
            IpcCommand::Toggle,
            IpcCommand::StopAndSave,
            IpcCommand::AddTime("01:02:03".into()),
            IpcCommand::Link("https://example.com/l/1".into()),
            IpcCommand::Course(Some("Linear Algebra".into())),
            IpcCommand::Course(None),
            IpcCommand::Info { json: true },
            IpcCommand::Info { json: false },
            IpcCommand::Quit,
        ];

        for cmd in all {
            assert_eq!(IpcCommand::parse(&cmd.encode()).unwrap(), cmd);
        }
    }

    #[test]
    fn empty_add_reaches_the_manager() {
        assert_eq!(IpcCommand::parse("add").unwrap(), IpcCommand::AddTime(String::new()));
        assert_eq!(IpcCommand::parse("add   ").unwrap(), IpcCommand::AddTime(String::new()));
    }

    #[test]
    fn blank_course_title_is_not_a_reset() {
        let blank = IpcCommand::Course(Some(" ".into()));
        assert_eq!(blank.encode(), "course  ");
        assert_eq!(
            IpcCommand::parse(&blank.encode()).unwrap(),
            IpcCommand::Course(Some(String::new()))
        );
        assert_eq!(IpcCommand::parse("course").unwrap(), IpcCommand::Course(Some(String::new())));
        assert_eq!(IpcCommand::parse("course-reset").unwrap(), IpcCommand::Course(None));
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert!(IpcCommand::parse("").is_err());
        assert_eq!(
            IpcCommand::parse("reset").unwrap_err(),
            "Unknown command 'reset'"
        );
    }
}
