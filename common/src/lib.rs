//! Shared pieces of the `hello` tool.
//!
//! Nothing in this crate touches the process streams on its own. Callers hand
//! a writer to [`greeting::run`], so the crate can be pulled into other
//! programs without side effects.

pub mod config;
pub mod error;
pub mod greeting;
