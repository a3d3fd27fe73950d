//! Launch Path Roadmap - derivation engine and checklist state machine
//!
//! The decision core of the application:
//! - Derives a fixed month-by-month task plan from questionnaire answers
//! - Tracks per-item completion in a pure, persistable ledger
//! - Gates month-over-month progress: a month stays locked until every
//!   month before it is fully complete
//!
//! # Example
//!
//! ```rust
//! use launchpath_model::ActionId;
//! use launchpath_roadmap::{derive_plan, CompletionLedger, MonthState, UnlockGate};
//! # use launchpath_model::{Answers, BankAccountStatus, CreditGoal, IncomeBracket, Province, Status};
//!
//! # let answers = Answers {
//! #     status: Status::StudyPermit,
//! #     province: Province::Ontario,
//! #     income: IncomeBracket::Under1000,
//! #     bank_account: BankAccountStatus::NoAccount,
//! #     goal: CreditGoal::RentApartment,
//! # };
//! let plan = derive_plan(&answers);
//! let ledger = CompletionLedger::new();
//!
//! let progress = UnlockGate::progress(&plan.roadmap, &ledger);
//! assert_eq!(progress.months[0].state, MonthState::Active);
//! assert_eq!(progress.months[1].state, MonthState::Locked);
//! ```

#![warn(unreachable_pub)]

pub mod derive;
pub mod error;
pub mod gate;
pub mod ledger;
pub mod summary;
mod tables;

pub use derive::{derive_plan, derive_roadmap, Plan, PlanKind};
pub use error::GateError;
pub use gate::{
    ActionProgress, LedgerChange, MonthEvent, MonthProgress, MonthState, RoadmapProgress,
    ToggleOutcome, UnlockGate,
};
pub use ledger::CompletionLedger;
pub use summary::PlanSummary;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
