//! Error types for the roadmap engine

use launchpath_model::ActionId;

/// Unlock gate failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// The action id does not belong to this roadmap
    #[error("action {0} is not part of this roadmap")]
    UnknownAction(ActionId),
}
