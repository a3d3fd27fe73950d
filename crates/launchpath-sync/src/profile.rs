//! Profile, answers, and dashboard persistence
//!
//! Unlike the ledger paths, these are the places where remote failure is
//! fatal: a dashboard without its profile and check-ins has nothing to
//! show, and a finalized questionnaire that never reached the remote store
//! would leave the reminder job blind. Errors surface to the caller for a
//! retry prompt instead of degrading.

use crate::error::SyncError;
use crate::identity::{AccountId, Identity};
use crate::reconciler::ProgressReconciler;
use crate::store::{CheckIn, LocalStore, ProfileRecord, RowStore, ANSWERS_KEY};
use chrono::Utc;
use launchpath_model::Answers;
use tracing::{debug, warn};

/// Everything the dashboard needs in one load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    /// The account's profile, if the questionnaire ever finalized
    pub profile: Option<ProfileRecord>,
    /// All recorded check-ins, ascending by date
    pub checkins: Vec<CheckIn>,
}

impl DashboardData {
    /// Most recent recorded score, if any
    #[must_use]
    pub fn latest_score(&self) -> Option<u16> {
        self.checkins.last().map(|c| c.score)
    }
}

impl<R: RowStore, L: LocalStore> ProgressReconciler<R, L> {
    /// Persist finalized questionnaire answers
    ///
    /// For signed-in users the remote profile upsert happens first and its
    /// failure aborts the whole save, so local state never claims a
    /// finalization the remote store missed. Anonymous saves are local-only.
    ///
    /// # Errors
    /// `SyncError::RemoteUnavailable` when the profile upsert fails.
    pub async fn save_answers(
        &self,
        identity: &Identity,
        answers: &Answers,
    ) -> Result<(), SyncError> {
        if let Identity::Authenticated(account) = identity {
            let record = ProfileRecord::from_answers(answers, Utc::now());
            self.remote().upsert_profile(account, record).await?;
            debug!(account = %account, "profile upserted");
        }
        match serde_json::to_string(answers) {
            Ok(raw) => self.local().set(ANSWERS_KEY, raw),
            Err(err) => warn!(%err, "failed to serialize answers for local store"),
        }
        Ok(())
    }

    /// Load locally stored answers, if any
    ///
    /// A corrupt record is treated as absent; the caller re-runs the
    /// questionnaire.
    #[must_use]
    pub fn load_answers(&self) -> Option<Answers> {
        let raw = self.local().get(ANSWERS_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(answers) => Some(answers),
            Err(err) => {
                warn!(%err, "stored answers unparseable, ignoring");
                None
            }
        }
    }

    /// Load the dashboard's profile and check-in history
    ///
    /// # Errors
    /// `SyncError::RemoteUnavailable` when either fetch fails; the caller
    /// should offer a retry rather than render a partial dashboard.
    pub async fn load_dashboard(&self, account: &AccountId) -> Result<DashboardData, SyncError> {
        let profile = self.remote().fetch_profile(account).await?;
        let checkins = self.remote().list_checkins(account).await?;
        Ok(DashboardData { profile, checkins })
    }

    /// Record a credit score check-in
    ///
    /// # Errors
    /// `SyncError::SignedOut` for anonymous users;
    /// `SyncError::RemoteUnavailable` when the insert fails.
    pub async fn record_checkin(
        &self,
        identity: &Identity,
        checkin: CheckIn,
    ) -> Result<(), SyncError> {
        let account = identity.account().ok_or(SyncError::SignedOut)?;
        self.remote().insert_checkin(account, checkin).await?;
        Ok(())
    }
}
