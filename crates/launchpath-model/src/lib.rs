//! Launch Path Model - Answer model and roadmap types
//!
//! The data foundation for the roadmap engine:
//! - Validated questionnaire answers (the sole input to derivation)
//! - The five-step questionnaire flow
//! - Roadmap structure with stable, deterministic action ids
//!
//! # Example
//!
//! ```rust
//! use launchpath_model::{AnswersDraft, QuizStep};
//!
//! let mut draft = AnswersDraft::new();
//! draft.select(QuizStep::Status, "Study Permit").unwrap();
//! draft.select(QuizStep::Province, "Ontario").unwrap();
//! draft.select(QuizStep::Income, "Under $1,000").unwrap();
//! draft.select(QuizStep::BankAccount, "No, not yet").unwrap();
//! draft.select(QuizStep::Goal, "Renting an apartment").unwrap();
//!
//! let answers = draft.finish().unwrap();
//! assert_eq!(answers.status.label(), "Study Permit");
//! ```

#![warn(unreachable_pub)]

pub mod answers;
pub mod error;
pub mod quiz;
pub mod roadmap;

pub use answers::{Answers, BankAccountStatus, CreditGoal, IncomeBracket, Province, Status};
pub use error::ValidationError;
pub use quiz::{AnswersDraft, QuizStep};
pub use roadmap::{ActionId, ParseActionIdError, Roadmap, RoadmapAction, RoadmapMonth};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
