//! The completion ledger
//!
//! A pure mapping from action id to completed, independent of how the
//! roadmap was derived. Absence means not completed; entries toggled off are
//! removed, so an empty ledger and a ledger of explicit falses are the same
//! state. Persistence happens elsewhere; every operation here is pure.

use launchpath_model::ActionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Set of completed action ids
///
/// Serializes as the flat `{"m1-a1": true}` map layout the local store uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLedger {
    completed: BTreeMap<ActionId, bool>,
}

impl CompletionLedger {
    /// Create an empty ledger (fresh start)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an action is completed; absent defaults to false
    #[inline]
    #[must_use]
    pub fn is_completed(&self, id: &ActionId) -> bool {
        self.completed.get(id).copied().unwrap_or(false)
    }

    /// Return a new ledger with the entry for `id` flipped
    ///
    /// Toggling the same id twice restores the original ledger.
    #[must_use]
    pub fn with_toggled(&self, id: &ActionId) -> Self {
        let mut next = self.clone();
        if next.is_completed(id) {
            next.completed.remove(id);
        } else {
            next.completed.insert(*id, true);
        }
        next
    }

    /// Ids currently marked completed, in id order
    pub fn completed_ids(&self) -> impl Iterator<Item = &ActionId> {
        self.completed
            .iter()
            .filter(|(_, done)| **done)
            .map(|(id, _)| id)
    }

    /// Number of completed entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.values().filter(|done| **done).count()
    }

    /// Whether nothing is completed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rebuild a ledger from remote rows
    ///
    /// Each row carries `(month_number, item_index, completed)`; ids are
    /// reconstructed through the canonical scheme, and only rows with
    /// `completed == true` produce entries.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = (u32, u32, bool)>) -> Self {
        let completed = rows
            .into_iter()
            .filter(|(_, _, completed)| *completed)
            .map(|(month, index, _)| (ActionId::new(month, index), true))
            .collect();
        Self { completed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn absent_entries_default_to_false() {
        let ledger = CompletionLedger::new();
        assert!(!ledger.is_completed(&ActionId::new(1, 0)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn toggle_marks_and_unmarks() {
        let id = ActionId::new(1, 0);
        let ledger = CompletionLedger::new();

        let marked = ledger.with_toggled(&id);
        assert!(marked.is_completed(&id));
        assert_eq!(marked.len(), 1);

        let unmarked = marked.with_toggled(&id);
        assert!(!unmarked.is_completed(&id));
        assert_eq!(unmarked, ledger);
    }

    #[test]
    fn toggle_off_removes_the_entry() {
        let id = ActionId::new(2, 1);
        let round_trip = CompletionLedger::new().with_toggled(&id).with_toggled(&id);
        assert_eq!(serde_json::to_string(&round_trip).unwrap(), "{}");
    }

    #[test]
    fn serializes_as_flat_map() {
        let ledger = CompletionLedger::new()
            .with_toggled(&ActionId::new(1, 0))
            .with_toggled(&ActionId::new(1, 2));
        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(json, serde_json::json!({"m1-a1": true, "m1-a3": true}));

        let back: CompletionLedger = serde_json::from_value(json).unwrap();
        assert_eq!(back, ledger);
    }

    #[test]
    fn tolerates_explicit_false_entries_in_stored_state() {
        let ledger: CompletionLedger =
            serde_json::from_str(r#"{"m1-a1": true, "m1-a2": false}"#).unwrap();
        assert!(ledger.is_completed(&ActionId::new(1, 0)));
        assert!(!ledger.is_completed(&ActionId::new(1, 1)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn from_rows_reconstructs_ids() {
        let ledger = CompletionLedger::from_rows(vec![(1, 0, true), (2, 2, true), (3, 1, false)]);
        assert!(ledger.is_completed(&ActionId::new(1, 0)));
        assert!(ledger.is_completed(&ActionId::new(2, 2)));
        assert!(!ledger.is_completed(&ActionId::new(3, 1)));
        assert_eq!(ledger.len(), 2);
    }

    proptest! {
        #[test]
        fn double_toggle_restores_any_ledger(
            seed in proptest::collection::vec((1u32..=6, 0u32..3), 0..12),
            month in 1u32..=6,
            index in 0u32..3,
        ) {
            let mut ledger = CompletionLedger::new();
            for (m, i) in seed {
                ledger = ledger.with_toggled(&ActionId::new(m, i));
            }
            let id = ActionId::new(month, index);
            prop_assert_eq!(ledger.with_toggled(&id).with_toggled(&id), ledger);
        }
    }
}
