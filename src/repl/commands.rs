/// REPL command parsing and representation
///
/// Parses user input into structured REPL commands.
use crate::{Result, SyncError};

/// Which of the two synchronized views a command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Ir,
    Source,
}

/// Represents a REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Move the IR cursor and sync: ir <line>
    Ir(u32),
    /// Move the source cursor and sync: src <line>
    Src(u32),
    /// Move the cursor in the focused view and sync: goto <line>
    Goto(u32),
    /// Switch focus: focus ir|src
    Focus(View),
    /// Open the source split: open
    Open,
    /// Re-sync from the focused view: sync
    Sync,
    /// Print the mapping: map
    Map,
    /// Render the focused view: show
    Show,
    /// List buffers: buffers
    Buffers,
    /// Show command history: history
    History,
    /// Show help: help
    Help,
    /// Exit REPL: exit
    Exit,
}

impl ReplCommand {
    /// Parse a command string into a ReplCommand
    pub fn parse(input: &str) -> Result<Self> {
        let parts = shlex::split(input.trim()).ok_or_else(|| {
            SyncError::InvalidCommand(format!("unbalanced quotes in '{}'", input.trim()))
        })?;

        let Some(name) = parts.first() else {
            return Err(SyncError::InvalidCommand("empty command".to_string()).into());
        };

        match name.as_str() {
            "ir" => Ok(ReplCommand::Ir(parse_line_arg(name, &parts)?)),
            "src" | "source" => Ok(ReplCommand::Src(parse_line_arg(name, &parts)?)),
            "goto" | "g" => Ok(ReplCommand::Goto(parse_line_arg(name, &parts)?)),
            "focus" | "f" => match parts.get(1).map(String::as_str) {
                Some("ir") => Ok(ReplCommand::Focus(View::Ir)),
                Some("src") | Some("source") => Ok(ReplCommand::Focus(View::Source)),
                _ => Err(SyncError::InvalidCommand("focus requires 'ir' or 'src'".to_string()).into()),
            },
            "open" => Ok(ReplCommand::Open),
            "sync" => Ok(ReplCommand::Sync),
            "map" => Ok(ReplCommand::Map),
            "show" => Ok(ReplCommand::Show),
            "buffers" | "ls" => Ok(ReplCommand::Buffers),
            "history" => Ok(ReplCommand::History),
            "help" | "h" => Ok(ReplCommand::Help),
            "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
            other => Err(SyncError::InvalidCommand(format!("unknown command '{}'", other)).into()),
        }
    }
}

fn parse_line_arg(name: &str, parts: &[String]) -> Result<u32> {
    let raw = parts
        .get(1)
        .ok_or_else(|| SyncError::InvalidCommand(format!("{} requires a line number", name)))?;
    match raw.parse::<u32>() {
        Ok(line) if line > 0 => Ok(line),
        _ => Err(SyncError::InvalidLine(raw.clone()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_commands() {
        assert_eq!(ReplCommand::parse("ir 12").unwrap(), ReplCommand::Ir(12));
        assert_eq!(ReplCommand::parse("  src 4 ").unwrap(), ReplCommand::Src(4));
        assert_eq!(ReplCommand::parse("goto 7").unwrap(), ReplCommand::Goto(7));
    }

    #[test]
    fn test_parse_focus_command() {
        assert_eq!(ReplCommand::parse("focus ir").unwrap(), ReplCommand::Focus(View::Ir));
        assert_eq!(ReplCommand::parse("focus src").unwrap(), ReplCommand::Focus(View::Source));
        assert!(ReplCommand::parse("focus").is_err());
    }

    #[test]
    fn test_parse_exit_command() {
        assert_eq!(ReplCommand::parse("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse("quit").unwrap(), ReplCommand::Exit);
    }

    #[test]
    fn test_line_argument_is_validated() {
        assert!(ReplCommand::parse("ir").is_err());
        assert!(ReplCommand::parse("ir 0").is_err());
        assert!(ReplCommand::parse("ir twelve").is_err());
    }

    #[test]
    fn test_empty_and_unknown_commands_fail() {
        assert!(ReplCommand::parse("").is_err());
        assert!(ReplCommand::parse("unknown").is_err());
        assert!(ReplCommand::parse("ir \"12").is_err());
    }
}
