//! Integration tests for the dispatch loop, repeat tracking and recording.

pub mod common;
pub mod dispatch_test;
pub mod record_test;
pub mod repeat_test;
