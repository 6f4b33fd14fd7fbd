//! Session error types.
//!
//! Typed preconditions the interactive layer checks before a session runs.
//! I/O failures (bank files, attempt files) are reported through `anyhow`
//! with path context at the call site instead.

use thiserror::Error;

/// Errors raised when setting up an exam session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A session needs at least one question to present.
    #[error("cannot start a session with no questions")]
    NoQuestions,

    /// The pass condition string was neither a percentage nor a count.
    #[error("invalid pass condition {0:?}: expected a percentage like \"70%\" or a question count like \"7\"")]
    InvalidPassCondition(String),
}
