use common::games::tictactoe::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { cell: usize },
    Restart,
    SwitchMode { difficulty: Difficulty },
    /// Fired by the reply timer, never typed by the player.
    ComputerReply,
    Help,
    Quit,
}

impl ClientCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Empty command".to_string());
        };
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(format!("Too many arguments in '{}'", line.trim()));
        }

        match (head.to_ascii_lowercase().as_str(), argument) {
            ("restart" | "r", None) => Ok(ClientCommand::Restart),
            ("mode" | "m", Some(value)) => Ok(ClientCommand::SwitchMode {
                difficulty: value.parse()?,
            }),
            ("mode" | "m", None) => Err("Usage: mode random|optimal".to_string()),
            ("help" | "h" | "?", None) => Ok(ClientCommand::Help),
            ("quit" | "q" | "exit", None) => Ok(ClientCommand::Quit),
            (cell, None) => cell
                .parse::<usize>()
                .map(|cell| ClientCommand::PlaceMark { cell })
                .map_err(|_| format!("Unknown command '{}', type 'help'", line.trim())),
            _ => Err(format!("Unknown command '{}', type 'help'", line.trim())),
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8                    place your mark (cells are numbered row by row)
  restart                start a new game, scores are kept
  mode random|optimal    switch difficulty and start a new game
  help                   show this text
  quit                   leave";
