//! Per-session shell state.
//!
//! The session owns everything commands are allowed to change: the debug
//! toggle and the diagnostics threshold behind it, the prompt, the recorder
//! and the repeat tracker. It lives as long as the shell and is never
//! persisted.

use std::collections::BTreeMap;

use crate::config::{
    Config, DEFAULT_MAX_REPLAY_DEPTH, DEFAULT_PROMPT_TEMPLATE, DEFAULT_SESSION_NAME,
};
use crate::error::{Result, ShellError};
use crate::logging::Diagnostics;
use crate::recorder::Recorder;
use crate::repeat::{RepeatTracker, REPEAT_COMMAND};

/// Shortcut tokens rewritten before parsing, as `(token, canonical command)`.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    (".", REPEAT_COMMAND),
    ("dot", REPEAT_COMMAND),
    ("quit", "exit"),
];

/// Mutable state shared by all commands of one shell session.
#[derive(Debug)]
pub struct Session {
    name: String,
    prompt_template: String,
    prompt: String,
    debug: bool,
    aliases: BTreeMap<String, String>,
    max_replay_depth: usize,
    replay_depth: usize,
    recorder: Recorder,
    repeat: RepeatTracker,
    diagnostics: Diagnostics,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_NAME, Diagnostics::default())
    }
}

impl Session {
    /// Creates a session with default settings.
    pub fn new(name: impl Into<String>, diagnostics: Diagnostics) -> Self {
        let name = name.into();
        let prompt_template = DEFAULT_PROMPT_TEMPLATE.to_string();
        let prompt = render_prompt(&prompt_template, &name);

        Self {
            name,
            prompt_template,
            prompt,
            debug: false,
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(alias, command)| (alias.to_string(), command.to_string()))
                .collect(),
            max_replay_depth: DEFAULT_MAX_REPLAY_DEPTH,
            replay_depth: 0,
            recorder: Recorder::new(),
            repeat: RepeatTracker::new(),
            diagnostics,
        }
    }

    /// Creates a session from configuration.
    ///
    /// Configured aliases are merged over the built-in ones.
    pub fn from_config(config: &Config, diagnostics: Diagnostics) -> Self {
        let mut session = Self::new(config.shell.name.clone(), diagnostics);
        session.prompt_template = config.shell.prompt_template.clone();
        session.prompt = render_prompt(&session.prompt_template, &session.name);
        session.max_replay_depth = config.shell.max_replay_depth;
        session.aliases.extend(
            config
                .aliases
                .iter()
                .map(|(alias, command)| (alias.clone(), command.clone())),
        );
        session
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The prompt shown before reading the next line.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Replaces the prompt with the template rendered for `text`.
    pub fn set_prompt(&mut self, text: &str) {
        self.prompt = render_prompt(&self.prompt_template, text);
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Flips the debug flag and applies the matching diagnostics threshold.
    ///
    /// Returns the new flag value.
    pub fn toggle_debug(&mut self) -> Result<bool> {
        self.set_debug(!self.debug)?;
        Ok(self.debug)
    }

    /// Sets the debug flag and applies the matching diagnostics threshold.
    pub fn set_debug(&mut self, enabled: bool) -> Result<()> {
        self.diagnostics.set_verbose(enabled)?;
        self.debug = enabled;
        Ok(())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns the canonical command for a shortcut token, if any.
    pub fn alias(&self, token: &str) -> Option<&str> {
        self.aliases.get(token).map(String::as_str)
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    pub fn recorder_mut(&mut self) -> &mut Recorder {
        &mut self.recorder
    }

    pub fn repeat_tracker(&self) -> &RepeatTracker {
        &self.repeat
    }

    pub fn repeat_tracker_mut(&mut self) -> &mut RepeatTracker {
        &mut self.repeat
    }

    /// Current nesting depth of re-entrant dispatch.
    pub fn replay_depth(&self) -> usize {
        self.replay_depth
    }

    pub fn max_replay_depth(&self) -> usize {
        self.max_replay_depth
    }

    /// Enters one level of re-entrant dispatch.
    ///
    /// Fails without changing the depth if the limit would be exceeded.
    pub fn enter_replay(&mut self) -> Result<()> {
        if self.replay_depth >= self.max_replay_depth {
            return Err(ShellError::ReplayDepth {
                limit: self.max_replay_depth,
            });
        }
        self.replay_depth += 1;
        Ok(())
    }

    /// Leaves one level of re-entrant dispatch.
    pub fn exit_replay(&mut self) {
        self.replay_depth = self.replay_depth.saturating_sub(1);
    }
}

/// Renders a prompt template, substituting `{name}` with `text`.
pub fn render_prompt(template: &str, text: &str) -> String {
    template.replace("{name}", text)
}
