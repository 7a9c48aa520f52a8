//! Application wiring for shellrec.
//!
//! Loads configuration, installs logging, builds the session and runs the
//! dispatch loop over the input source selected on the command line.

use std::fs::File;
use std::io::{self, BufReader, Cursor, IsTerminal};
use std::panic;

use tracing::{debug, error, info, warn};

use crate::cli::{Cli, InputMode};
use crate::config::Config;
use crate::error::{Result, ShellError};
use crate::input::{EditorSource, LineSource, ReaderSource};
use crate::logging::{init_file_logging, init_stderr_logging, resolve_quiet_level, Diagnostics};
use crate::session::Session;
use crate::shell::{Shell, Termination};
use crate::signal::install_interrupt_handler;

/// Runs the shell and returns the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path)?;
    let env_directives = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let quiet = resolve_quiet_level(&config.logging.level, env_directives.as_deref())?;

    let diagnostics = if cli.log_file {
        init_file_logging(quiet)
    } else {
        init_stderr_logging(quiet)
    };
    info!("Loaded config from: {}", config_path.display());
    install_panic_hook();

    let session = build_session(cli, &config, diagnostics)?;
    let mut shell = Shell::stdout(session);
    shell.on_teardown(clean_up);
    if let Err(e) = install_interrupt_handler(shell.interrupt_flag()) {
        warn!(error = %e, "interrupts will end the process immediately");
    }

    let mode = cli.input_mode(io::stdin().is_terminal());
    debug!(?mode, "selected input mode");
    let mut source = open_source(mode)?;
    let termination = shell.run(source.as_mut());

    Ok(exit_code(&termination))
}

/// Builds the session from config, applying command-line overrides.
pub fn build_session(cli: &Cli, config: &Config, diagnostics: Diagnostics) -> Result<Session> {
    let mut config = config.clone();
    if let Some(name) = &cli.name {
        config.shell.name = name.clone();
    }

    let mut session = Session::from_config(&config, diagnostics);
    if cli.debug {
        session.set_debug(true)?;
    }
    Ok(session)
}

fn open_source(mode: InputMode) -> Result<Box<dyn LineSource>> {
    let source: Box<dyn LineSource> = match mode {
        InputMode::Interactive => Box::new(EditorSource::new()?),
        InputMode::Stdin => Box::new(ReaderSource::new(io::stdin().lock())),
        InputMode::Script(path) => {
            let file = File::open(&path)
                .map_err(|e| ShellError::input(format!("{}: {e}", path.display())))?;
            Box::new(ReaderSource::new(BufReader::new(file)))
        }
        InputMode::Commands(lines) => Box::new(ReaderSource::new(Cursor::new(lines.join("\n")))),
    };
    Ok(source)
}

/// Maps how the loop ended to a process exit code.
pub fn exit_code(termination: &Termination) -> i32 {
    match termination {
        Termination::Exit | Termination::EndOfInput | Termination::Interrupted => 0,
        Termination::InputError(_) => 1,
    }
}

/// Sends panic reports through the logger. Handler panics are already caught
/// and reported by the shell, so the default stderr message is not printed.
fn install_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        error!(panic = %panic_info, "panic");
    }));
}

fn clean_up(session: &Session) {
    debug!(
        stage = "teardown",
        recorded = session.recorder().len(),
        "shell session closed"
    );
}
