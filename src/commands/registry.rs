//! Command registry mapping command names to handlers.

use std::collections::BTreeMap;

use super::handlers::system;
use super::output::CommandResult;
use super::statement::Statement;
use crate::error::Result;
use crate::session::Session;

/// A command implementation.
///
/// Handlers receive the session and the parsed statement. Plain functions and
/// closures with the matching signature implement this trait.
pub trait CommandHandler {
    /// Executes the command.
    fn execute(&self, session: &mut Session, statement: &Statement) -> Result<CommandResult>;
}

impl<F> CommandHandler for F
where
    F: Fn(&mut Session, &Statement) -> Result<CommandResult>,
{
    fn execute(&self, session: &mut Session, statement: &Statement) -> Result<CommandResult> {
        self(session, statement)
    }
}

/// Maps command names to handlers, with a fallback for unknown names.
pub struct CommandRegistry {
    handlers: BTreeMap<String, Box<dyn CommandHandler>>,
    default: Box<dyn CommandHandler>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates an empty registry whose default handler reports unknown syntax.
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
            default: Box::new(system::handle_unknown),
        }
    }

    /// Registers a handler under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, handler: impl CommandHandler + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Replaces the handler used for unknown command names.
    pub fn set_default(&mut self, handler: impl CommandHandler + 'static) {
        self.default = Box::new(handler);
    }

    /// Looks up a handler by exact name.
    pub fn lookup(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.handlers.get(name).map(|handler| handler.as_ref())
    }

    /// Returns the handler for `name`, or the default handler on a miss.
    pub fn resolve(&self, name: &str) -> &dyn CommandHandler {
        self.lookup(name).unwrap_or(self.default.as_ref())
    }

    /// Returns true if a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}
