//! Command-line argument parsing for shellrec.

use clap::Parser;
use std::path::PathBuf;

/// A line-oriented command shell with statement recording and replay.
#[derive(Parser, Debug)]
#[command(name = "shellrec")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "SHELLREC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Session name shown in the prompt (overrides config)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Start with debug diagnostics enabled
    #[arg(long)]
    pub debug: bool,

    /// Write diagnostics to the log file instead of stderr
    #[arg(long)]
    pub log_file: bool,

    /// Read commands from a script file (use "-" for stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "command")]
    pub script: Option<String>,

    /// Run a command line, then exit (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Vec<String>,
}

/// Where the dispatch loop reads its lines from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Interactive line editor (stdin is a terminal).
    Interactive,
    /// Plain reader over stdin (piped input or `--script -`).
    Stdin,
    /// Script file.
    Script(PathBuf),
    /// Lines given with `-c`.
    Commands(Vec<String>),
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Chooses the input mode. `stdin_is_tty` decides between the line editor
    /// and a plain reader when no script or commands were given.
    pub fn input_mode(&self, stdin_is_tty: bool) -> InputMode {
        if !self.command.is_empty() {
            return InputMode::Commands(self.command.clone());
        }
        match self.script.as_deref() {
            Some("-") => InputMode::Stdin,
            Some(path) => InputMode::Script(PathBuf::from(path)),
            None if stdin_is_tty => InputMode::Interactive,
            None => InputMode::Stdin,
        }
    }
}
