/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error classification
///
/// Every failure the simulator can produce is an input problem detected
/// before any process runs; the engine itself has no runtime error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
}

impl ErrorKind {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
        }
    }
}

/// Simulator errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("No burst values supplied")]
    #[diagnostic(
        code(sim::invalid_input::empty_bursts),
        help("Supply at least one positive burst length.")
    )]
    EmptyBurstList,

    #[error("Burst for P{pid} must be positive, got {value}")]
    #[diagnostic(
        code(sim::invalid_input::non_positive_burst),
        help("Burst lengths are whole time units of 1 or more.")
    )]
    NonPositiveBurst { pid: Pid, value: i64 },

    #[error("Time quantum must be positive, got {0}")]
    #[diagnostic(
        code(sim::invalid_input::non_positive_quantum),
        help("A round-robin quantum of 0 or less never makes progress.")
    )]
    NonPositiveQuantum(i64),

    #[error("Total burst or wait time exceeds the simulated clock range")]
    #[diagnostic(
        code(sim::invalid_input::work_overflow),
        help("Use smaller burst values or fewer processes.")
    )]
    WorkOverflow,

    #[error("Unknown scheduling algorithm '{0}'")]
    #[diagnostic(
        code(sim::invalid_input::unknown_policy),
        help("Valid algorithms: fcfs, rr.")
    )]
    UnknownPolicy(String),

    #[error("Missing arguments for {policy}: expected {usage}")]
    #[diagnostic(
        code(sim::invalid_input::missing_arguments),
        help("Run with --help for usage.")
    )]
    MissingArguments {
        policy: String,
        usage: String,
    },
}

impl SimError {
    /// Classify this error
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyBurstList
            | Self::NonPositiveBurst { .. }
            | Self::NonPositiveQuantum(_)
            | Self::WorkOverflow
            | Self::UnknownPolicy(_)
            | Self::MissingArguments { .. } => ErrorKind::InvalidInput,
        }
    }
}

/// Serializable error representation for machine-readable output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SerializableError {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SerializableError {
    /// Create a new serializable error
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a new serializable error with details
    pub fn with_details(
        error_type: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl From<SimError> for SerializableError {
    fn from(err: SimError) -> Self {
        let details = err.help().map(|h| h.to_string());
        let message = err.to_string();
        match details {
            Some(details) => Self::with_details(err.kind().as_str(), message, details),
            None => Self::new(err.kind().as_str(), message),
        }
    }
}
