//! Statement parsing for shell input lines.
//!
//! A statement is the immutable result of splitting one raw line into a
//! command token and its argument text.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statement {
    raw: String,
    command: String,
    args: String,
}

impl Statement {
    /// Parses a raw line into a statement.
    ///
    /// The command is the first whitespace-delimited word and the arguments are
    /// the trimmed remainder. Blank lines and `#` comments parse to an empty
    /// command with empty arguments; `raw` always keeps the original text.
    pub fn parse(raw: &str) -> Self {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            return Self {
                raw: raw.to_string(),
                ..Self::default()
            };
        }

        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        Self {
            raw: raw.to_string(),
            command: command.to_string(),
            args: args.to_string(),
        }
    }

    /// The exact text the statement was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The command token, empty for blank and comment lines.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The argument text following the command.
    pub fn args(&self) -> &str {
        &self.args
    }

    /// Returns true if the statement carries no command.
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
