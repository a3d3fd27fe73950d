//! The validated answer model
//!
//! Five enumerated fields captured by the questionnaire. Immutable once
//! constructed; the sole input to roadmap derivation. Serializes as the flat
//! label record the local store and remote profile both use.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immigration/residency status
///
/// Closed set of known statuses with a free-form fallback for anything the
/// questionnaire did not anticipate. Unknown statuses still derive a plan
/// (the general fallback table).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// "Study Permit"
    StudyPermit,
    /// "Work Permit (PGWP or Employer-Sponsored)"
    WorkPermit,
    /// "Permanent Resident"
    PermanentResident,
    /// "Canadian Citizen"
    CanadianCitizen,
    /// Free-form status outside the known set
    Other(String),
}

impl Status {
    /// Display label (matches the questionnaire option text)
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Status::StudyPermit => "Study Permit",
            Status::WorkPermit => "Work Permit (PGWP or Employer-Sponsored)",
            Status::PermanentResident => "Permanent Resident",
            Status::CanadianCitizen => "Canadian Citizen",
            Status::Other(s) => s,
        }
    }

    /// Parse a label back into a status
    ///
    /// Returns `None` only for the empty string; any other unknown value is
    /// accepted as [`Status::Other`].
    #[must_use]
    pub fn parse_label(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "Study Permit" => Some(Status::StudyPermit),
            "Work Permit (PGWP or Employer-Sponsored)" => Some(Status::WorkPermit),
            "Permanent Resident" => Some(Status::PermanentResident),
            "Canadian Citizen" => Some(Status::CanadianCitizen),
            other => Some(Status::Other(other.to_string())),
        }
    }
}

/// Province or territory of residence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Province {
    Ontario,
    BritishColumbia,
    Alberta,
    Quebec,
    Manitoba,
    Saskatchewan,
    NovaScotia,
    NewBrunswick,
    Newfoundland,
    PrinceEdwardIsland,
    Yukon,
    NorthwestTerritories,
    Nunavut,
}

impl Province {
    /// All provinces in questionnaire order
    pub const ALL: [Province; 13] = [
        Province::Ontario,
        Province::BritishColumbia,
        Province::Alberta,
        Province::Quebec,
        Province::Manitoba,
        Province::Saskatchewan,
        Province::NovaScotia,
        Province::NewBrunswick,
        Province::Newfoundland,
        Province::PrinceEdwardIsland,
        Province::Yukon,
        Province::NorthwestTerritories,
        Province::Nunavut,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Province::Ontario => "Ontario",
            Province::BritishColumbia => "British Columbia",
            Province::Alberta => "Alberta",
            Province::Quebec => "Quebec",
            Province::Manitoba => "Manitoba",
            Province::Saskatchewan => "Saskatchewan",
            Province::NovaScotia => "Nova Scotia",
            Province::NewBrunswick => "New Brunswick",
            Province::Newfoundland => "Newfoundland",
            Province::PrinceEdwardIsland => "PEI",
            Province::Yukon => "Yukon",
            Province::NorthwestTerritories => "NWT",
            Province::Nunavut => "Nunavut",
        }
    }

    /// Parse a label back into a province
    #[must_use]
    pub fn parse_label(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.label() == value)
    }
}

/// Monthly income bracket, ordered low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncomeBracket {
    /// "Under $1,000"
    Under1000,
    /// "$1,000 – $3,000"
    From1000To3000,
    /// "$3,000 – $5,000"
    From3000To5000,
    /// "$5,000+"
    Over5000,
}

impl IncomeBracket {
    /// All brackets in ascending order
    pub const ALL: [IncomeBracket; 4] = [
        IncomeBracket::Under1000,
        IncomeBracket::From1000To3000,
        IncomeBracket::From3000To5000,
        IncomeBracket::Over5000,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            IncomeBracket::Under1000 => "Under $1,000",
            IncomeBracket::From1000To3000 => "$1,000 – $3,000",
            IncomeBracket::From3000To5000 => "$3,000 – $5,000",
            IncomeBracket::Over5000 => "$5,000+",
        }
    }

    /// Parse a label back into a bracket
    #[must_use]
    pub fn parse_label(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.label() == value)
    }
}

/// Canadian bank account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankAccountStatus {
    /// "Yes, I already have one"
    HasAccount,
    /// "No, not yet"
    NoAccount,
    /// "I'm opening one soon"
    OpeningSoon,
}

impl BankAccountStatus {
    /// All states in questionnaire order
    pub const ALL: [BankAccountStatus; 3] = [
        BankAccountStatus::HasAccount,
        BankAccountStatus::NoAccount,
        BankAccountStatus::OpeningSoon,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BankAccountStatus::HasAccount => "Yes, I already have one",
            BankAccountStatus::NoAccount => "No, not yet",
            BankAccountStatus::OpeningSoon => "I'm opening one soon",
        }
    }

    /// Parse a label back into a state
    #[must_use]
    pub fn parse_label(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.label() == value)
    }
}

/// Main credit objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditGoal {
    /// "Renting an apartment"
    RentApartment,
    /// "Leasing or financing a car"
    FinanceCar,
    /// "Getting a credit card with rewards"
    RewardsCard,
    /// "Building credit for a future mortgage"
    FutureMortgage,
}

impl CreditGoal {
    /// All goals in questionnaire order
    pub const ALL: [CreditGoal; 4] = [
        CreditGoal::RentApartment,
        CreditGoal::FinanceCar,
        CreditGoal::RewardsCard,
        CreditGoal::FutureMortgage,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CreditGoal::RentApartment => "Renting an apartment",
            CreditGoal::FinanceCar => "Leasing or financing a car",
            CreditGoal::RewardsCard => "Getting a credit card with rewards",
            CreditGoal::FutureMortgage => "Building credit for a future mortgage",
        }
    }

    /// Parse a label back into a goal
    #[must_use]
    pub fn parse_label(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.label() == value)
    }
}

/// The validated questionnaire result
///
/// All five fields are guaranteed present; partial answers never reach
/// derivation. Serializes as the flat label record
/// (`status`/`province`/`income`/`bankAccount`/`goal`) used by the local
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    /// Immigration/residency status
    pub status: Status,
    /// Province of residence
    pub province: Province,
    /// Monthly income bracket
    pub income: IncomeBracket,
    /// Bank account status
    #[serde(rename = "bankAccount")]
    pub bank_account: BankAccountStatus,
    /// Main credit goal
    pub goal: CreditGoal,
}

macro_rules! label_serde {
    ($ty:ty, $what:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Self::parse_label(&value)
                    .ok_or_else(|| D::Error::custom(format!("unknown {}: {value:?}", $what)))
            }
        }
    };
}

label_serde!(Status, "status");
label_serde!(Province, "province");
label_serde!(IncomeBracket, "income bracket");
label_serde!(BankAccountStatus, "bank account status");
label_serde!(CreditGoal, "credit goal");

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Answers {
        Answers {
            status: Status::StudyPermit,
            province: Province::Ontario,
            income: IncomeBracket::Under1000,
            bank_account: BankAccountStatus::NoAccount,
            goal: CreditGoal::RentApartment,
        }
    }

    #[test]
    fn labels_round_trip() {
        for p in Province::ALL {
            assert_eq!(Province::parse_label(p.label()), Some(p));
        }
        for b in IncomeBracket::ALL {
            assert_eq!(IncomeBracket::parse_label(b.label()), Some(b));
        }
        for s in BankAccountStatus::ALL {
            assert_eq!(BankAccountStatus::parse_label(s.label()), Some(s));
        }
        for g in CreditGoal::ALL {
            assert_eq!(CreditGoal::parse_label(g.label()), Some(g));
        }
    }

    #[test]
    fn status_unknown_falls_back_to_other() {
        let status = Status::parse_label("Visitor Visa").unwrap();
        assert_eq!(status, Status::Other("Visitor Visa".to_string()));
        assert_eq!(status.label(), "Visitor Visa");
    }

    #[test]
    fn status_empty_is_rejected() {
        assert_eq!(Status::parse_label(""), None);
    }

    #[test]
    fn income_brackets_are_ordered() {
        assert!(IncomeBracket::Under1000 < IncomeBracket::From1000To3000);
        assert!(IncomeBracket::From3000To5000 < IncomeBracket::Over5000);
    }

    #[test]
    fn answers_serialize_as_flat_label_record() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "Study Permit",
                "province": "Ontario",
                "income": "Under $1,000",
                "bankAccount": "No, not yet",
                "goal": "Renting an apartment",
            })
        );
    }

    #[test]
    fn answers_deserialize_from_stored_record() {
        let raw = r#"{
            "status": "Work Permit (PGWP or Employer-Sponsored)",
            "province": "British Columbia",
            "income": "$5,000+",
            "bankAccount": "Yes, I already have one",
            "goal": "Building credit for a future mortgage"
        }"#;
        let answers: Answers = serde_json::from_str(raw).unwrap();
        assert_eq!(answers.status, Status::WorkPermit);
        assert_eq!(answers.income, IncomeBracket::Over5000);
    }

    #[test]
    fn answers_reject_unknown_province() {
        let raw = r#"{
            "status": "Study Permit",
            "province": "Atlantis",
            "income": "Under $1,000",
            "bankAccount": "No, not yet",
            "goal": "Renting an apartment"
        }"#;
        assert!(serde_json::from_str::<Answers>(raw).is_err());
    }
}
