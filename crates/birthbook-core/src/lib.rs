//! Shared building blocks for the birthbook workspace.
//!
//! Holds the error type every other crate wraps, the settings loader and
//! the tracing bootstrap used by binaries and test harnesses.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
