//! Error classification shared by every layer of the game.
//!
//! Errors are defined next to the code that raises them; [`GameError`] only
//! tags them with a severity and a stable code for logs.

/// How a caller should react to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Transient; the same call may succeed later.
    Recoverable,
    /// The call was made at the wrong time or with bad input.
    Validation,
    /// Plumbing between tasks broke down.
    Internal,
    /// The session state is inconsistent and cannot continue.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Severity and log code of an error.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable upper-snake identifier, e.g. `ENGINE_EMPTY_HIVE`.
    fn error_code(&self) -> &'static str;
}
