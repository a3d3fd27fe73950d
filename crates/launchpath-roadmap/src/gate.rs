//! The unlock gate
//!
//! Derives, from the roadmap and the completion ledger, which months are
//! locked, active, or complete, and enforces that toggles against locked
//! months never change the ledger.
//!
//! Month state is never stored; it is a pure function of
//! `(Roadmap, CompletionLedger)` recomputed on every ledger change.

use crate::error::GateError;
use crate::ledger::CompletionLedger;
use launchpath_model::{ActionId, Roadmap};

/// Per-month checklist state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthState {
    /// Gated: the preceding month is not yet fully complete
    Locked,
    /// Unlocked and in progress
    Active,
    /// Every action completed; reverts to Active if one is un-checked
    Complete,
}

/// One action with its checked flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionProgress {
    /// Stable action id
    pub id: ActionId,
    /// Whether the ledger marks it completed
    pub completed: bool,
}

/// Render-ready state of one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthProgress {
    /// 1-based month number
    pub month_number: u32,
    /// Computed state
    pub state: MonthState,
    /// Completed action count
    pub completed: usize,
    /// Total action count
    pub total: usize,
    /// Per-action checked flags, in month order
    pub actions: Vec<ActionProgress>,
}

/// Render-ready state of the whole roadmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapProgress {
    /// Per-month progress, ordered by month number
    pub months: Vec<MonthProgress>,
}

impl RoadmapProgress {
    /// State of a month by its 1-based number
    #[must_use]
    pub fn month_state(&self, month_number: u32) -> Option<MonthState> {
        self.months
            .iter()
            .find(|m| m.month_number == month_number)
            .map(|m| m.state)
    }

    /// Whether every month is complete
    #[must_use]
    pub fn is_fully_complete(&self) -> bool {
        self.months.iter().all(|m| m.state == MonthState::Complete)
    }
}

/// Notification emitted when a toggle changes a month's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthEvent {
    /// A month transitioned Active to Complete
    ///
    /// `next_month` is the month unlocked by this completion, or `None` for
    /// the final month so callers can route the celebration differently.
    Completed {
        /// The month that completed
        month_number: u32,
        /// The newly unlocked month, if one exists
        next_month: Option<u32>,
    },
    /// Un-checking dropped a previously complete month back to Active
    Reopened {
        /// The month that reopened
        month_number: u32,
    },
}

/// The persistable unit of one toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerChange {
    /// The toggled action
    pub id: ActionId,
    /// Its completion value after the toggle
    pub completed: bool,
}

/// Result of a toggle attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The toggle passed the gate and produced a new ledger
    Applied {
        /// The ledger after the toggle
        ledger: CompletionLedger,
        /// What changed, for persistence
        change: LedgerChange,
        /// State transition caused by the toggle, if any
        event: Option<MonthEvent>,
    },
    /// The owning month is locked; the ledger is unchanged
    RejectedLocked {
        /// The locked month
        month_number: u32,
    },
}

impl ToggleOutcome {
    /// The new ledger, if the toggle was applied
    #[inline]
    #[must_use]
    pub fn ledger(&self) -> Option<&CompletionLedger> {
        match self {
            ToggleOutcome::Applied { ledger, .. } => Some(ledger),
            ToggleOutcome::RejectedLocked { .. } => None,
        }
    }

    /// Whether the toggle was applied
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ToggleOutcome::Applied { .. })
    }
}

/// Lock/unlock gating over the roadmap
///
/// Stateless; every operation is a pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct UnlockGate;

impl UnlockGate {
    /// Compute the render-ready progress view
    ///
    /// The first month is never locked; a later month is locked unless
    /// every month before it is fully completed. Ledgers seeded from remote
    /// rows can mark a later month's actions complete while an earlier
    /// month has a gap; the gap keeps every month after it locked.
    #[must_use]
    pub fn progress(roadmap: &Roadmap, ledger: &CompletionLedger) -> RoadmapProgress {
        let mut months = Vec::with_capacity(roadmap.len());
        let mut previous_complete = true;

        for month in roadmap.months() {
            let actions: Vec<ActionProgress> = month
                .actions
                .iter()
                .map(|a| ActionProgress {
                    id: a.id,
                    completed: ledger.is_completed(&a.id),
                })
                .collect();
            let completed = actions.iter().filter(|a| a.completed).count();
            let total = actions.len();
            let all_done = completed == total && total > 0;

            let state = if !previous_complete {
                MonthState::Locked
            } else if all_done {
                MonthState::Complete
            } else {
                MonthState::Active
            };

            months.push(MonthProgress {
                month_number: month.month_number,
                state,
                completed,
                total,
                actions,
            });
            previous_complete = previous_complete && all_done;
        }

        RoadmapProgress { months }
    }

    /// State of one month under the current ledger
    #[must_use]
    pub fn month_state(
        roadmap: &Roadmap,
        ledger: &CompletionLedger,
        month_number: u32,
    ) -> Option<MonthState> {
        Self::progress(roadmap, ledger).month_state(month_number)
    }

    /// Attempt to toggle an action
    ///
    /// Toggles against a locked month are rejected without touching the
    /// ledger, mirroring the disabled checkbox in the original flow. A
    /// successful toggle that completes its month emits
    /// [`MonthEvent::Completed`]; un-checking an action of a complete month
    /// emits [`MonthEvent::Reopened`] (successor months re-lock implicitly
    /// on the next progress computation).
    ///
    /// # Errors
    /// `GateError::UnknownAction` if the id is not part of this roadmap.
    pub fn toggle(
        roadmap: &Roadmap,
        ledger: &CompletionLedger,
        id: &ActionId,
    ) -> Result<ToggleOutcome, GateError> {
        let (month, _) = roadmap
            .find_action(id)
            .ok_or(GateError::UnknownAction(*id))?;
        let month_number = month.month_number;

        let before = Self::progress(roadmap, ledger);
        match before.month_state(month_number) {
            Some(MonthState::Locked) => {
                return Ok(ToggleOutcome::RejectedLocked { month_number });
            }
            Some(_) => {}
            None => return Err(GateError::UnknownAction(*id)),
        }

        let next_ledger = ledger.with_toggled(id);
        let after = Self::progress(roadmap, &next_ledger);

        let was_complete = before.month_state(month_number) == Some(MonthState::Complete);
        let now_complete = after.month_state(month_number) == Some(MonthState::Complete);

        let event = if !was_complete && now_complete {
            let next_month = roadmap
                .months()
                .iter()
                .find(|m| m.month_number > month_number)
                .map(|m| m.month_number);
            Some(MonthEvent::Completed {
                month_number,
                next_month,
            })
        } else if was_complete && !now_complete {
            Some(MonthEvent::Reopened { month_number })
        } else {
            None
        };

        let change = LedgerChange {
            id: *id,
            completed: next_ledger.is_completed(id),
        };

        Ok(ToggleOutcome::Applied {
            ledger: next_ledger,
            change,
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;
    use pretty_assertions::assert_eq;

    fn roadmap() -> Roadmap {
        tables::student_table()
    }

    fn complete_month(roadmap: &Roadmap, ledger: CompletionLedger, month_number: u32) -> CompletionLedger {
        let mut ledger = ledger;
        let month = roadmap.month(month_number).unwrap().clone();
        for action in &month.actions {
            match UnlockGate::toggle(roadmap, &ledger, &action.id).unwrap() {
                ToggleOutcome::Applied { ledger: next, .. } => ledger = next,
                ToggleOutcome::RejectedLocked { .. } => panic!("month {month_number} locked"),
            }
        }
        ledger
    }

    #[test]
    fn first_month_is_never_locked() {
        let progress = UnlockGate::progress(&roadmap(), &CompletionLedger::new());
        assert_eq!(progress.months[0].state, MonthState::Active);
        for later in &progress.months[1..] {
            assert_eq!(later.state, MonthState::Locked);
        }
    }

    #[test]
    fn completing_a_month_unlocks_the_next_in_the_same_update() {
        let roadmap = roadmap();
        let ledger = complete_month(&roadmap, CompletionLedger::new(), 1);

        let progress = UnlockGate::progress(&roadmap, &ledger);
        assert_eq!(progress.month_state(1), Some(MonthState::Complete));
        assert_eq!(progress.month_state(2), Some(MonthState::Active));
        assert_eq!(progress.month_state(3), Some(MonthState::Locked));
    }

    #[test]
    fn locked_toggle_is_a_no_op() {
        let roadmap = roadmap();
        let ledger = CompletionLedger::new();
        let locked_action = roadmap.month(2).unwrap().actions[0].id;

        let outcome = UnlockGate::toggle(&roadmap, &ledger, &locked_action).unwrap();
        assert_eq!(outcome, ToggleOutcome::RejectedLocked { month_number: 2 });
        assert!(outcome.ledger().is_none());
        // Caller keeps the original ledger, byte-for-byte
        assert_eq!(serde_json::to_string(&ledger).unwrap(), "{}");
    }

    #[test]
    fn completing_final_action_emits_event_with_next_month() {
        let roadmap = roadmap();
        let mut ledger = CompletionLedger::new();
        let month1 = roadmap.month(1).unwrap().clone();

        for action in &month1.actions[..2] {
            let outcome = UnlockGate::toggle(&roadmap, &ledger, &action.id).unwrap();
            match outcome {
                ToggleOutcome::Applied { ledger: next, event, .. } => {
                    assert_eq!(event, None);
                    ledger = next;
                }
                other => panic!("unexpected outcome: {other:?}"),
            }
        }

        let outcome = UnlockGate::toggle(&roadmap, &ledger, &month1.actions[2].id).unwrap();
        match outcome {
            ToggleOutcome::Applied { event, change, .. } => {
                assert_eq!(
                    event,
                    Some(MonthEvent::Completed { month_number: 1, next_month: Some(2) })
                );
                assert!(change.completed);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn final_month_completion_has_no_next_month() {
        let roadmap = roadmap();
        let mut ledger = CompletionLedger::new();
        for month_number in 1..=5 {
            ledger = complete_month(&roadmap, ledger, month_number);
        }

        let month6 = roadmap.month(6).unwrap().clone();
        for action in &month6.actions[..2] {
            ledger = UnlockGate::toggle(&roadmap, &ledger, &action.id)
                .unwrap()
                .ledger()
                .unwrap()
                .clone();
        }

        let outcome = UnlockGate::toggle(&roadmap, &ledger, &month6.actions[2].id).unwrap();
        match outcome {
            ToggleOutcome::Applied { ledger, event, .. } => {
                assert_eq!(
                    event,
                    Some(MonthEvent::Completed { month_number: 6, next_month: None })
                );
                assert!(UnlockGate::progress(&roadmap, &ledger).is_fully_complete());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn unchecking_reopens_the_month_and_relocks_successors() {
        let roadmap = roadmap();
        let mut ledger = complete_month(&roadmap, CompletionLedger::new(), 1);
        ledger = complete_month(&roadmap, ledger, 2);

        let first = roadmap.month(1).unwrap().actions[0].id;
        let outcome = UnlockGate::toggle(&roadmap, &ledger, &first).unwrap();
        match outcome {
            ToggleOutcome::Applied { ledger, event, change } => {
                assert_eq!(event, Some(MonthEvent::Reopened { month_number: 1 }));
                assert!(!change.completed);

                let progress = UnlockGate::progress(&roadmap, &ledger);
                assert_eq!(progress.month_state(1), Some(MonthState::Active));
                // Month 2 keeps its checkmarks but is gated again
                assert_eq!(progress.month_state(2), Some(MonthState::Locked));
                assert_eq!(progress.month_state(3), Some(MonthState::Locked));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn seeded_gap_keeps_later_months_locked() {
        // The remote row encoding predates gating, so stored state can mark
        // month 2 done while month 1 is untouched
        let roadmap = roadmap();
        let ledger =
            CompletionLedger::from_rows(vec![(2, 0, true), (2, 1, true), (2, 2, true)]);

        let progress = UnlockGate::progress(&roadmap, &ledger);
        assert_eq!(progress.month_state(1), Some(MonthState::Active));
        assert_eq!(progress.month_state(2), Some(MonthState::Locked));
        assert_eq!(progress.month_state(3), Some(MonthState::Locked));

        // The gap also blocks un-checking the stranded month
        let outcome = UnlockGate::toggle(&roadmap, &ledger, &ActionId::new(2, 0)).unwrap();
        assert_eq!(outcome, ToggleOutcome::RejectedLocked { month_number: 2 });
    }

    #[test]
    fn unknown_action_is_an_error() {
        let roadmap = roadmap();
        let ledger = CompletionLedger::new();
        let bogus = ActionId::new(9, 0);
        assert_eq!(
            UnlockGate::toggle(&roadmap, &ledger, &bogus),
            Err(GateError::UnknownAction(bogus))
        );
    }

    #[test]
    fn progress_counts_match_ledger() {
        let roadmap = roadmap();
        let first = roadmap.month(1).unwrap().actions[0].id;
        let ledger = CompletionLedger::new().with_toggled(&first);

        let progress = UnlockGate::progress(&roadmap, &ledger);
        assert_eq!(progress.months[0].completed, 1);
        assert_eq!(progress.months[0].total, 3);
        assert!(progress.months[0].actions[0].completed);
        assert!(!progress.months[0].actions[1].completed);
    }
}
