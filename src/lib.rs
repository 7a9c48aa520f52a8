//! shellrec - a line-oriented command shell with statement recording and replay.
//!
//! This library exposes the shell core for embedding and integration tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod recorder;
pub mod repeat;
pub mod session;
pub mod shell;
pub mod signal;
