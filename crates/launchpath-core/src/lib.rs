//! Launch Path Core - the roadmap session facade
//!
//! Wires the pure derivation and gating engine to the persistence
//! reconciler behind a single session type:
//! - [`RoadmapSession::open`] derives the plan and loads reconciled state
//! - [`RoadmapSession::toggle`] applies the gate optimistically and commits
//!   in the background
//! - month transitions arrive on a [`MonthEventReceiver`]

#![warn(unreachable_pub)]

pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use session::{MonthEventReceiver, RoadmapSession, SessionToggle};

// The facade's vocabulary, re-exported for callers that only link this crate
pub use launchpath_model::{ActionId, Answers, AnswersDraft, QuizStep, Roadmap};
pub use launchpath_roadmap::{
    derive_plan, GateError, MonthEvent, MonthState, Plan, PlanKind, PlanSummary, RoadmapProgress,
    ToggleOutcome,
};
pub use launchpath_sync::{
    AccountId, Identity, LocalStore, ProgressReconciler, RemoteOutcome, RowStore, SyncReport,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
