//! Recovery strategies that turn failed requests into renderable outcomes.
//!
//! Nothing here retries. A failure either degrades to a fallback value
//! (an empty list, a placeholder profile), is skipped because the request
//! was never valid, or fails with a notice for the user.

use crate::{CoreError, ErrorReporter, Notice};

/// Recovery strategy for handling errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStrategy {
    /// Use the caller's fallback value
    Fallback,
    /// The request was never issued; report and move on
    Skip,
    /// Surface the failure
    Fail,
}

/// Result of an error recovery attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryResult<T> {
    /// The operation succeeded
    Recovered(T),
    /// The operation failed, the fallback value stands in
    Degraded { value: T, notice: Notice },
    /// The operation was rejected before any request went out
    Skipped { notice: Notice },
    /// The operation failed with nothing to show
    Failed { notice: Notice },
}

impl<T> RecoveryResult<T> {
    /// Returns true if the operation succeeded
    pub fn is_recovered(&self) -> bool {
        matches!(self, RecoveryResult::Recovered(_))
    }

    /// Returns true if a fallback value stands in for the result
    pub fn is_degraded(&self) -> bool {
        matches!(self, RecoveryResult::Degraded { .. })
    }

    /// Returns true if the operation was rejected before any request
    pub fn is_skipped(&self) -> bool {
        matches!(self, RecoveryResult::Skipped { .. })
    }

    /// Returns true if the operation failed without a fallback
    pub fn is_failed(&self) -> bool {
        matches!(self, RecoveryResult::Failed { .. })
    }

    /// The value to render, if there is one.
    pub fn value(&self) -> Option<&T> {
        match self {
            RecoveryResult::Recovered(value) | RecoveryResult::Degraded { value, .. } => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            RecoveryResult::Recovered(_) => None,
            RecoveryResult::Degraded { notice, .. }
            | RecoveryResult::Skipped { notice }
            | RecoveryResult::Failed { notice } => Some(notice),
        }
    }

    /// Splits into the renderable value and the notice to show alongside it.
    pub fn into_parts(self) -> (Option<T>, Option<Notice>) {
        match self {
            RecoveryResult::Recovered(value) => (Some(value), None),
            RecoveryResult::Degraded { value, notice } => (Some(value), Some(notice)),
            RecoveryResult::Skipped { notice } | RecoveryResult::Failed { notice } => {
                (None, Some(notice))
            }
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> RecoveryResult<U> {
        match self {
            RecoveryResult::Recovered(value) => RecoveryResult::Recovered(f(value)),
            RecoveryResult::Degraded { value, notice } => RecoveryResult::Degraded {
                value: f(value),
                notice,
            },
            RecoveryResult::Skipped { notice } => RecoveryResult::Skipped { notice },
            RecoveryResult::Failed { notice } => RecoveryResult::Failed { notice },
        }
    }
}

/// Error recovery handler that provides strategies for different error types
pub struct ErrorRecovery;

impl ErrorRecovery {
    /// Determine the appropriate recovery strategy for a given error
    pub fn determine_strategy(error: &CoreError, has_fallback: bool) -> RecoveryStrategy {
        match error {
            // Precondition failures never reached the network
            CoreError::InvalidInput { .. } => RecoveryStrategy::Skip,

            // Configuration problems need the user, not a fallback
            CoreError::Config(_) => RecoveryStrategy::Fail,

            _ if has_fallback => RecoveryStrategy::Fallback,
            _ => RecoveryStrategy::Fail,
        }
    }

    /// Apply the recovery strategy to a finished operation
    pub fn recover<T>(
        result: Result<T, CoreError>,
        fallback: Option<T>,
        reporter: &ErrorReporter,
    ) -> RecoveryResult<T> {
        let error = match result {
            Ok(value) => return RecoveryResult::Recovered(value),
            Err(error) => error,
        };

        match (
            Self::determine_strategy(&error, fallback.is_some()),
            fallback,
        ) {
            (RecoveryStrategy::Skip, _) => RecoveryResult::Skipped {
                notice: reporter.report_warning(&error),
            },
            (RecoveryStrategy::Fallback, Some(value)) => RecoveryResult::Degraded {
                value,
                notice: reporter.report_error(&error),
            },
            _ => RecoveryResult::Failed {
                notice: reporter.report_error(&error),
            },
        }
    }
}
