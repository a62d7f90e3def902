//! Shared library modules providing error types, process helpers, prompts, and telemetry initialization.

pub mod errors;
pub mod prompt;
pub mod shell;
pub mod style;
pub mod telemetry;
