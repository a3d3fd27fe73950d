//! Testing utilities for the Launch Path workspace
//!
//! In-memory store doubles with failure injection, plus answer fixtures
//! for each derivation branch.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use launchpath_model::{
    Answers, BankAccountStatus, CreditGoal, IncomeBracket, Province, Status,
};
use launchpath_sync::{
    AccountId, CheckIn, ChecklistRow, LocalStore, ProfileRecord, RowStore, StoreError,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory [`RowStore`] with failure injection
///
/// `set_offline(true)` makes every call fail until switched back;
/// `fail_next()` fails exactly one call. `call_count` counts every trait
/// method invocation, so tests can assert a path never touched the remote.
#[derive(Debug, Default)]
pub struct MemoryRowStore {
    rows: DashMap<(AccountId, u32, u32), ChecklistRow>,
    profiles: DashMap<AccountId, ProfileRecord>,
    checkins: DashMap<AccountId, Vec<CheckIn>>,
    offline: AtomicBool,
    fail_next: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryRowStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail until turned off again
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Make exactly the next call fail
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Number of trait method invocations so far
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn gate(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected failure".to_string()));
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        Ok(())
    }

    fn blank_profile(at: DateTime<Utc>) -> ProfileRecord {
        ProfileRecord {
            visa_type: String::new(),
            province: String::new(),
            income_bracket: String::new(),
            bank_account_status: String::new(),
            credit_goal: String::new(),
            updated_at: at,
            next_month_unlocked_at: None,
        }
    }
}

#[async_trait]
impl RowStore for MemoryRowStore {
    async fn list_checklist_rows(
        &self,
        account: &AccountId,
    ) -> Result<Vec<ChecklistRow>, StoreError> {
        self.gate()?;
        let mut rows: Vec<ChecklistRow> = self
            .rows
            .iter()
            .filter(|entry| entry.key().0 == *account)
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by_key(|r| (r.month_number, r.item_index));
        Ok(rows)
    }

    async fn upsert_checklist_row(
        &self,
        account: &AccountId,
        row: ChecklistRow,
    ) -> Result<(), StoreError> {
        self.gate()?;
        self.rows
            .insert((*account, row.month_number, row.item_index), row);
        Ok(())
    }

    async fn delete_checklist_row(
        &self,
        account: &AccountId,
        month_number: u32,
        item_index: u32,
    ) -> Result<(), StoreError> {
        self.gate()?;
        self.rows.remove(&(*account, month_number, item_index));
        Ok(())
    }

    async fn upsert_profile(
        &self,
        account: &AccountId,
        mut profile: ProfileRecord,
    ) -> Result<(), StoreError> {
        self.gate()?;
        if let Some(existing) = self.profiles.get(account) {
            profile.next_month_unlocked_at =
                profile.next_month_unlocked_at.or(existing.next_month_unlocked_at);
        }
        self.profiles.insert(*account, profile);
        Ok(())
    }

    async fn fetch_profile(
        &self,
        account: &AccountId,
    ) -> Result<Option<ProfileRecord>, StoreError> {
        self.gate()?;
        Ok(self.profiles.get(account).map(|p| p.value().clone()))
    }

    async fn stamp_next_month_unlocked(
        &self,
        account: &AccountId,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.gate()?;
        self.profiles
            .entry(*account)
            .or_insert_with(|| Self::blank_profile(at))
            .next_month_unlocked_at = Some(at);
        Ok(())
    }

    async fn insert_checkin(
        &self,
        account: &AccountId,
        checkin: CheckIn,
    ) -> Result<(), StoreError> {
        self.gate()?;
        self.checkins.entry(*account).or_default().push(checkin);
        Ok(())
    }

    async fn list_checkins(&self, account: &AccountId) -> Result<Vec<CheckIn>, StoreError> {
        self.gate()?;
        let mut checkins = self
            .checkins
            .get(account)
            .map(|c| c.value().clone())
            .unwrap_or_default();
        checkins.sort_by_key(|c| c.checkin_date);
        Ok(checkins)
    }
}

/// In-memory [`LocalStore`] modelling browser-local storage
#[derive(Debug, Default)]
pub struct MemoryLocalStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryLocalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.lock().insert(key.to_string(), value);
    }
}

/// Answers hitting the low-income student branch
#[must_use]
pub fn student_answers() -> Answers {
    Answers {
        status: Status::StudyPermit,
        province: Province::Ontario,
        income: IncomeBracket::Under1000,
        bank_account: BankAccountStatus::NoAccount,
        goal: CreditGoal::RentApartment,
    }
}

/// Answers hitting the work-permit branch
#[must_use]
pub fn work_permit_answers() -> Answers {
    Answers {
        status: Status::WorkPermit,
        province: Province::BritishColumbia,
        income: IncomeBracket::From3000To5000,
        bank_account: BankAccountStatus::HasAccount,
        goal: CreditGoal::FinanceCar,
    }
}

/// Answers hitting the established high-income branch
#[must_use]
pub fn established_answers() -> Answers {
    Answers {
        status: Status::PermanentResident,
        province: Province::Alberta,
        income: IncomeBracket::Over5000,
        bank_account: BankAccountStatus::HasAccount,
        goal: CreditGoal::FutureMortgage,
    }
}

/// Answers falling through to the general fallback branch
#[must_use]
pub fn fallback_answers() -> Answers {
    Answers {
        status: Status::Other("Visitor Visa".to_string()),
        province: Province::Quebec,
        income: IncomeBracket::From1000To3000,
        bank_account: BankAccountStatus::OpeningSoon,
        goal: CreditGoal::RewardsCard,
    }
}
