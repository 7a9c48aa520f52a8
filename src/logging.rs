//! Logging configuration for shellrec.
//!
//! Diagnostics are emitted through `tracing`. The active threshold sits behind
//! a reload layer so the `debug` command can change it while the shell runs.
//! Logs go to stderr by default, or to a file under the platform state
//! directory so they do not interleave with command output.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::error::{Result, ShellError};

/// Threshold used when debug diagnostics are off and nothing else is configured.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Threshold used while debug diagnostics are on.
pub const VERBOSE_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Handle over the live diagnostic threshold.
///
/// A detached handle tracks the level without a subscriber behind it, which
/// is what tests and embedders that install their own subscriber use.
#[derive(Debug)]
pub struct Diagnostics {
    quiet: LevelFilter,
    current: LevelFilter,
    handle: Option<reload::Handle<LevelFilter, Registry>>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::detached(DEFAULT_LEVEL)
    }
}

impl Diagnostics {
    /// Creates a handle that is not connected to any subscriber.
    pub fn detached(quiet: LevelFilter) -> Self {
        Self {
            quiet,
            current: quiet,
            handle: None,
        }
    }

    /// Returns the threshold currently in effect.
    pub fn level(&self) -> LevelFilter {
        self.current
    }

    /// Returns the threshold used when verbose output is off.
    pub fn quiet_level(&self) -> LevelFilter {
        self.quiet
    }

    /// Switches between the verbose and the quiet threshold. Verbose never
    /// shows less than the quiet threshold does.
    pub fn set_verbose(&mut self, verbose: bool) -> Result<()> {
        let level = if verbose {
            VERBOSE_LEVEL.max(self.quiet)
        } else {
            self.quiet
        };
        self.set_level(level)
    }

    /// Sets the threshold. Takes effect on the next emitted event.
    pub fn set_level(&mut self, level: LevelFilter) -> Result<()> {
        if let Some(handle) = &self.handle {
            handle
                .reload(level)
                .map_err(|e| ShellError::internal(format!("Could not change log level: {e}")))?;
        }
        self.current = level;
        Ok(())
    }
}

/// Parses a level name such as `warn` or `debug`.
pub fn parse_level(name: &str) -> Result<LevelFilter> {
    name.parse::<LevelFilter>()
        .map_err(|_| ShellError::config(format!("Invalid log level: {name}")))
}

/// Picks the quiet threshold: the level implied by `RUST_LOG`-style
/// directives when given, otherwise the configured level.
///
/// The configured level is validated either way. The result only seeds the
/// quiet threshold, so the `debug` command can still raise it to DEBUG.
pub fn resolve_quiet_level(configured: &str, env_directives: Option<&str>) -> Result<LevelFilter> {
    let configured = parse_level(configured)?;
    let from_env = env_directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .and_then(|filter| filter.max_level_hint());
    Ok(from_env.unwrap_or(configured))
}

/// Initializes logging to stderr.
pub fn init_stderr_logging(quiet: LevelFilter) -> Diagnostics {
    install(quiet, BoxMakeWriter::new(std::io::stderr), true)
}

/// Initializes logging to the log file.
///
/// Falls back to stderr if the file cannot be created.
/// Location: `~/.local/state/shellrec/shellrec.log` on Linux (XDG state
/// directory), or the platform-appropriate state/config directory elsewhere.
pub fn init_file_logging(quiet: LevelFilter) -> Diagnostics {
    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return init_stderr_logging(quiet);
        }
    }

    // Truncate on each run to avoid unbounded growth
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return init_stderr_logging(quiet);
        }
    };

    install(quiet, BoxMakeWriter::new(Mutex::new(log_file)), false)
}

fn install(quiet: LevelFilter, writer: BoxMakeWriter, ansi: bool) -> Diagnostics {
    let (filter, handle) = reload::Layer::new(quiet);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi))
        .try_init();

    match installed {
        Ok(()) => Diagnostics {
            quiet,
            current: quiet,
            handle: Some(handle),
        },
        Err(e) => {
            eprintln!("Warning: Could not install logger: {e}");
            Diagnostics::detached(quiet)
        }
    }
}

/// Returns the path for the log file.
///
/// Uses the XDG state directory on Linux, or falls back to the config
/// directory on other platforms.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("shellrec").join("shellrec.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("shellrec").join("shellrec.log");
    }

    std::env::temp_dir().join("shellrec.log")
}
