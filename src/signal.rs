//! Interrupt delivery while a command is running.
//!
//! The line editor reports Ctrl-C itself while a line is being read. Outside
//! of that, SIGINT only raises the shell's interrupt flag; the dispatch loop
//! checks it once the running command has finished its post-hooks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use crate::error::{Result, ShellError};

/// Routes SIGINT to `flag` for the rest of the process.
///
/// The signal is awaited on a dedicated thread with its own single-threaded
/// runtime, so the dispatch loop itself stays synchronous.
pub fn install_interrupt_handler(flag: Arc<AtomicBool>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ShellError::internal(format!("Failed to start signal runtime: {e}")))?;

    thread::Builder::new()
        .name("shellrec-interrupt".to_string())
        .spawn(move || {
            runtime.block_on(async move {
                loop {
                    match tokio::signal::ctrl_c().await {
                        Ok(()) => {
                            debug!("interrupt received");
                            flag.store(true, Ordering::SeqCst);
                        }
                        Err(e) => {
                            warn!(error = %e, "could not listen for interrupts");
                            break;
                        }
                    }
                }
            });
        })
        .map_err(|e| ShellError::internal(format!("Failed to spawn signal thread: {e}")))?;

    Ok(())
}
