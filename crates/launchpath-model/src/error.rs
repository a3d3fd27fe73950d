//! Error types for the answer model

use crate::quiz::QuizStep;

/// Validation failures raised while finalizing questionnaire input
///
/// Surfaced to the user as field-level messages; never propagated past the
/// questionnaire boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A step was finalized without a selection
    #[error("no answer selected for step: {0:?}")]
    MissingField(QuizStep),

    /// The selected value is outside the step's option set
    #[error("unknown option for step {step:?}: {value:?}")]
    UnknownOption {
        /// The step being answered
        step: QuizStep,
        /// The rejected value
        value: String,
    },

    /// A check-in score outside the valid credit score range
    #[error("credit score {0} outside valid range 300-900")]
    ScoreOutOfRange(u16),
}
