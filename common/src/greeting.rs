//! # Greeting
//!
//! The whole job of the tool: put [`GREETING`] on a writer.
//!
//! [`greet`] is the raw operation and reports failures to its caller.
//! [`run`] wraps it in a trap that turns a failed write into a
//! diagnostic line on the same writer.

use std::io::Write;

use tracing::{debug, error};

use crate::error::GreetError;

pub const GREETING: &str = "Hello, World!";
pub const DIAGNOSTIC_PREFIX: &str = "An unexpected error occurred while printing";

/// Writes the greeting and a line terminator, then flushes.
pub fn greet<W: Write>(out: &mut W) -> Result<(), GreetError> {
    writeln!(out, "{}", GREETING)?;
    out.flush()?;
    debug!(bytes = GREETING.len() + 1, "greeting written");
    Ok(())
}

/// Runs [`greet`] and traps any failure.
///
/// A trapped failure is reported as `"<prefix>: <details>"` on `out` and the
/// call still succeeds. The only error that escapes is the diagnostic
/// itself failing to write.
pub fn run<W: Write>(out: &mut W) -> Result<(), GreetError> {
    if let Err(e) = greet(out) {
        error!(error = %e, "greeting could not be written");
        writeln!(out, "{}: {}", DIAGNOSTIC_PREFIX, e)?;
        out.flush()?;
    }
    Ok(())
}
