//! Collaborator store interfaces
//!
//! The engine owns no storage of its own; it consumes an abstract remote
//! row store (one row per completed checklist item, plus profile and
//! check-in rows) and a string key-value local store.

use crate::error::StoreError;
use crate::identity::AccountId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use launchpath_model::{Answers, ValidationError};
use serde::{Deserialize, Serialize};

/// Local-store key holding the raw answer record
pub const ANSWERS_KEY: &str = "quiz_answers";
/// Local-store key holding the serialized completion ledger
pub const PROGRESS_KEY: &str = "roadmap_progress";

/// One remote checklist row
///
/// Keyed remotely by `(account, month_number, item_index)`; the pair maps
/// to an action id through the canonical `m{m}-a{i+1}` scheme, which the
/// row encoding and the derivation engine must always agree on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRow {
    /// 1-based month number
    pub month_number: u32,
    /// 0-based index within the month
    pub item_index: u32,
    /// Completion flag
    pub completed: bool,
    /// When the item was completed
    pub completed_at: Option<DateTime<Utc>>,
}

/// The remote profile record written when the questionnaire finalizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Status label
    pub visa_type: String,
    /// Province label
    pub province: String,
    /// Income bracket label
    pub income_bracket: String,
    /// Bank account status label
    pub bank_account_status: String,
    /// Credit goal label
    pub credit_goal: String,
    /// Last profile write
    pub updated_at: DateTime<Utc>,
    /// When the user most recently unlocked a month (ISO-8601)
    ///
    /// Written exactly once per month-completion event; consumed only by
    /// the external reminder job.
    pub next_month_unlocked_at: Option<DateTime<Utc>>,
}

impl ProfileRecord {
    /// Build a profile record from validated answers
    #[must_use]
    pub fn from_answers(answers: &Answers, updated_at: DateTime<Utc>) -> Self {
        Self {
            visa_type: answers.status.label().to_string(),
            province: answers.province.label().to_string(),
            income_bracket: answers.income.label().to_string(),
            bank_account_status: answers.bank_account.label().to_string(),
            credit_goal: answers.goal.label().to_string(),
            updated_at,
            next_month_unlocked_at: None,
        }
    }
}

/// One credit score check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Credit score, 300 to 900
    pub score: u16,
    /// Date of the reading
    pub checkin_date: NaiveDate,
    /// Optional free-form note
    pub notes: Option<String>,
}

impl CheckIn {
    /// Create a validated check-in
    ///
    /// # Errors
    /// `ValidationError::ScoreOutOfRange` for scores outside 300..=900.
    pub fn new(score: u16, checkin_date: NaiveDate) -> Result<Self, ValidationError> {
        if !(300..=900).contains(&score) {
            return Err(ValidationError::ScoreOutOfRange(score));
        }
        Ok(Self {
            score,
            checkin_date,
            notes: None,
        })
    }

    /// Attach a note
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Remote row-per-item store
///
/// The only suspension points in the engine live behind this trait. No
/// locking is provided; concurrent sessions race with last-write-wins
/// semantics.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// All checklist rows for an account
    async fn list_checklist_rows(
        &self,
        account: &AccountId,
    ) -> Result<Vec<ChecklistRow>, StoreError>;

    /// Insert or replace one checklist row
    async fn upsert_checklist_row(
        &self,
        account: &AccountId,
        row: ChecklistRow,
    ) -> Result<(), StoreError>;

    /// Delete one checklist row by its key
    async fn delete_checklist_row(
        &self,
        account: &AccountId,
        month_number: u32,
        item_index: u32,
    ) -> Result<(), StoreError>;

    /// Insert or replace the account's profile record
    ///
    /// Preserves any existing `next_month_unlocked_at` stamp.
    async fn upsert_profile(
        &self,
        account: &AccountId,
        profile: ProfileRecord,
    ) -> Result<(), StoreError>;

    /// The account's profile record, if one exists
    async fn fetch_profile(&self, account: &AccountId)
        -> Result<Option<ProfileRecord>, StoreError>;

    /// Stamp the profile's `next_month_unlocked_at` field
    async fn stamp_next_month_unlocked(
        &self,
        account: &AccountId,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Append a check-in row
    async fn insert_checkin(&self, account: &AccountId, checkin: CheckIn)
        -> Result<(), StoreError>;

    /// All check-ins for an account, ascending by date
    async fn list_checkins(&self, account: &AccountId) -> Result<Vec<CheckIn>, StoreError>;
}

/// Local string key-value store
///
/// Models browser-local storage: synchronous, infallible, last write wins.
pub trait LocalStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value
    fn set(&self, key: &str, value: String);
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpath_model::{BankAccountStatus, CreditGoal, IncomeBracket, Province, Status};

    #[test]
    fn checkin_validates_score_range() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(CheckIn::new(300, date).is_ok());
        assert!(CheckIn::new(900, date).is_ok());
        assert_eq!(
            CheckIn::new(299, date).unwrap_err(),
            ValidationError::ScoreOutOfRange(299)
        );
        assert_eq!(
            CheckIn::new(901, date).unwrap_err(),
            ValidationError::ScoreOutOfRange(901)
        );
    }

    #[test]
    fn profile_record_carries_answer_labels() {
        let answers = Answers {
            status: Status::WorkPermit,
            province: Province::BritishColumbia,
            income: IncomeBracket::Over5000,
            bank_account: BankAccountStatus::HasAccount,
            goal: CreditGoal::RewardsCard,
        };
        let record = ProfileRecord::from_answers(&answers, Utc::now());
        assert_eq!(record.visa_type, "Work Permit (PGWP or Employer-Sponsored)");
        assert_eq!(record.province, "British Columbia");
        assert_eq!(record.income_bracket, "$5,000+");
        assert_eq!(record.next_month_unlocked_at, None);
    }
}
