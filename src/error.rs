use thiserror::Error;

use crate::release::ReleaseStep;

/// Unified error type for release-package operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("incorrect package name '{0}': only letters, digits and dashes are allowed")]
    InvalidPackageName(String),

    #[error("incorrect tag name '{0}': only digits and dots are allowed")]
    InvalidTagVersion(String),

    #[error("{} (`{command}` {detail})", .step.failure_message())]
    StepFailed {
        step: ReleaseStep,
        command: String,
        detail: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-package
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a step failure for a command that ran and reported a non-zero status
    pub fn step_failed(
        step: ReleaseStep,
        command: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        ReleaseError::StepFailed {
            step,
            command: command.into(),
            detail: detail.into(),
        }
    }

    /// The step that failed, if this error came from the command sequence
    pub fn failed_step(&self) -> Option<ReleaseStep> {
        match self {
            ReleaseError::StepFailed { step, .. } => Some(*step),
            _ => None,
        }
    }
}
