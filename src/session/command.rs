//! Level prompt commands

/// One line typed at the level prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `submit <token>`; the token keeps its case
    Submit(String),
    /// `submit` with nothing after it
    SubmitMissingToken,
    Play,
    Restart,
    Delete,
    Exit,
    /// Blank line
    Empty,
    Unknown(String),
}

impl SessionCommand {
    /// Parse a prompt line. Command words are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return SessionCommand::Empty;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "submit" if rest.is_empty() => SessionCommand::SubmitMissingToken,
            "submit" => SessionCommand::Submit(rest.to_string()),
            "play" if rest.is_empty() => SessionCommand::Play,
            "restart" if rest.is_empty() => SessionCommand::Restart,
            "delete" if rest.is_empty() => SessionCommand::Delete,
            "exit" if rest.is_empty() => SessionCommand::Exit,
            _ => SessionCommand::Unknown(line.to_string()),
        }
    }
}
