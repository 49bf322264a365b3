// ── Core error types ──
//
// User-facing errors from cocktail-core. The Display text is exactly what
// the error region shows; transport detail is kept in `reason` for logs
// and never rendered.

use thiserror::Error;

use crate::model::ValidationError;

/// Every error the lookup pipeline can surface to the user. None is fatal:
/// the controller stays interactive and waits for the next command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Submitted name was empty after trimming.
    #[error("Please enter a drink name.")]
    EmptyName,

    /// The search succeeded but matched nothing.
    #[error("No drinks found with that name.")]
    NoMatch,

    /// Network failure, non-success status, or an undecodable payload.
    #[error("An error occurred. Please try again.")]
    Transport { reason: String },
}

impl CoreError {
    /// Whether the name field should take focus when this error is shown.
    pub fn refocuses_input(&self) -> bool {
        matches!(self, Self::EmptyName | Self::NoMatch)
    }
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::EmptyName,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<cocktail_api::Error> for CoreError {
    fn from(err: cocktail_api::Error) -> Self {
        Self::Transport {
            reason: err.to_string(),
        }
    }
}
