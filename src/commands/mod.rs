//! Command parsing, registration and built-in handlers.
//!
//! Parsing and handler lookup are kept apart from the dispatch loop so both
//! can be unit tested without a running shell.

pub mod handlers;
pub mod output;
pub mod registry;
pub mod statement;

pub use output::{CommandOutput, CommandResult};
pub use registry::{CommandHandler, CommandRegistry};
pub use statement::Statement;
