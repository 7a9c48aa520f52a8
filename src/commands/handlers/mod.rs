//! Built-in command handlers.
//!
//! Each handler is a plain function over the session and the parsed
//! statement, returning a [`CommandResult`] for the dispatch loop to apply.

pub mod leaf;
pub mod record;
pub mod repeat;
pub mod system;

use super::output::CommandResult;
use super::registry::CommandRegistry;
use super::statement::Statement;
use crate::error::Result;
use crate::session::Session;

/// Signature shared by all built-in handlers.
pub type HandlerFn = fn(&mut Session, &Statement) -> Result<CommandResult>;

/// Built-in commands as `(name, handler)`.
pub const BUILTINS: &[(&str, HandlerFn)] = &[
    (crate::repeat::REPEAT_COMMAND, repeat::handle_repeat),
    ("cmd_a", leaf::handle_cmd_a),
    ("cmd_b", leaf::handle_cmd_b),
    ("record_start", record::handle_record_start),
    ("record_stop", record::handle_record_stop),
    ("record_clear", record::handle_record_clear),
    ("record_play", record::handle_record_play),
    ("record_print", record::handle_record_print),
    ("debug", system::handle_debug),
    ("prompt", system::handle_prompt),
    ("exit", system::handle_exit),
];

/// Registers every built-in command.
pub fn register_builtins(registry: &mut CommandRegistry) {
    for (name, handler) in BUILTINS {
        registry.register(*name, *handler);
    }
}
