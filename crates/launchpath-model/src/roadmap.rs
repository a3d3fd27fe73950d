//! Roadmap structure with stable action identifiers
//!
//! Provides [`ActionId`] for addressing checklist items across re-derivations
//! and across the remote row encoding.
//!
//! The id scheme is a documented invariant shared with the remote store:
//! month `m`, zero-based item index `i` is always `m{m}-a{i+1}`, so remote
//! rows keyed by `(month_number, item_index)` recover the same id.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Stable identifier of one checklist action
///
/// Derivable purely from `(month_number, item_index)`, so ledger entries
/// keyed by id stay valid across re-derivations of the same rule branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId {
    month_number: u32,
    item_index: u32,
}

impl ActionId {
    /// Create an id from month number (1-based) and item index (0-based)
    #[inline]
    #[must_use]
    pub fn new(month_number: u32, item_index: u32) -> Self {
        Self {
            month_number,
            item_index,
        }
    }

    /// 1-based month number
    #[inline]
    #[must_use]
    pub fn month_number(&self) -> u32 {
        self.month_number
    }

    /// 0-based index within the month (the remote row key)
    #[inline]
    #[must_use]
    pub fn item_index(&self) -> u32 {
        self.item_index
    }
}

impl Display for ActionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "m{}-a{}", self.month_number, self.item_index + 1)
    }
}

/// Malformed action id string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed action id: {0:?}")]
pub struct ParseActionIdError(pub String);

impl FromStr for ActionId {
    type Err = ParseActionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseActionIdError(s.to_string());
        let rest = s.strip_prefix('m').ok_or_else(malformed)?;
        let (month, action) = rest.split_once("-a").ok_or_else(malformed)?;
        let month_number: u32 = month.parse().map_err(|_| malformed())?;
        let ordinal: u32 = action.parse().map_err(|_| malformed())?;
        if month_number == 0 || ordinal == 0 {
            return Err(malformed());
        }
        Ok(ActionId::new(month_number, ordinal - 1))
    }
}

impl Serialize for ActionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ActionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// A single checklist line within a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapAction {
    /// Stable identifier
    pub id: ActionId,
    /// Display text
    pub text: String,
}

/// One month of the roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapMonth {
    /// 1-based month number
    #[serde(rename = "monthNumber")]
    pub month_number: u32,
    /// Display title
    pub title: String,
    /// Ordered checklist actions
    pub actions: Vec<RoadmapAction>,
}

impl RoadmapMonth {
    /// Build a month, assigning action ids from the canonical scheme
    #[must_use]
    pub fn new(month_number: u32, title: impl Into<String>, action_texts: &[&str]) -> Self {
        let actions = action_texts
            .iter()
            .enumerate()
            .map(|(i, text)| RoadmapAction {
                id: ActionId::new(month_number, i as u32),
                text: (*text).to_string(),
            })
            .collect();
        Self {
            month_number,
            title: title.into(),
            actions,
        }
    }

    /// Number of actions in this month
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the month has no actions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// The derived, immutable sequence of month plans
///
/// Ordered by month number ascending, strictly increasing from 1 with no
/// gaps. Treated as read-only configuration data, not user state. The month
/// count is data-driven; nothing downstream may assume six.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap(Vec<RoadmapMonth>);

impl Roadmap {
    /// Create a roadmap from ordered months
    ///
    /// Callers must supply months numbered 1..=N with no gaps; the rule
    /// tables are authored that way and the builder test enforces it.
    #[must_use]
    pub fn new(months: Vec<RoadmapMonth>) -> Self {
        debug_assert!(
            months
                .iter()
                .enumerate()
                .all(|(i, m)| m.month_number == i as u32 + 1),
            "month numbers must be 1..=N with no gaps"
        );
        Self(months)
    }

    /// All months in order
    #[inline]
    #[must_use]
    pub fn months(&self) -> &[RoadmapMonth] {
        &self.0
    }

    /// Number of months
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the roadmap has no months
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a month by its 1-based number
    #[must_use]
    pub fn month(&self, month_number: u32) -> Option<&RoadmapMonth> {
        self.0.iter().find(|m| m.month_number == month_number)
    }

    /// Look up the action carrying an id, together with its month
    #[must_use]
    pub fn find_action(&self, id: &ActionId) -> Option<(&RoadmapMonth, &RoadmapAction)> {
        let month = self.month(id.month_number())?;
        let action = month.actions.iter().find(|a| a.id == *id)?;
        Some((month, action))
    }

    /// 1-based number of the last month, if any
    #[must_use]
    pub fn final_month_number(&self) -> Option<u32> {
        self.0.last().map(|m| m.month_number)
    }
}
