//! Roadmap derivation
//!
//! A small ordered set of mutually-exclusive predicate branches over
//! `(status, income)`; the first match wins and selects a fixed task table.
//! Derivation is pure and total: no I/O, no clock, no randomness, and
//! unmatched input resolves to the fallback table instead of an error.

use crate::tables;
use launchpath_model::{Answers, IncomeBracket, Roadmap, Status};

/// Which rule branch produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanKind {
    /// Study permit with income under $1,000
    Student,
    /// Work permit with income of $3,000 or more
    WorkPermit,
    /// Permanent resident or citizen, income independent
    Established,
    /// No branch matched; the general starting-point plan
    GeneralFallback,
}

impl PlanKind {
    /// Whether this plan came from the unmatched-combination fallback
    ///
    /// Drives the "general starting point" notice shown with the plan.
    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, PlanKind::GeneralFallback)
    }
}

/// A derived roadmap together with the branch that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// The matched rule branch
    pub kind: PlanKind,
    /// The immutable month-by-month task plan
    pub roadmap: Roadmap,
}

/// Derive the plan for a set of validated answers
///
/// Branches are evaluated in priority order; the first match wins.
#[must_use]
pub fn derive_plan(answers: &Answers) -> Plan {
    let (kind, roadmap) = match (&answers.status, answers.income) {
        (Status::StudyPermit, IncomeBracket::Under1000) => {
            (PlanKind::Student, tables::student_table())
        }
        (Status::WorkPermit, IncomeBracket::From3000To5000 | IncomeBracket::Over5000) => {
            (PlanKind::WorkPermit, tables::work_permit_table())
        }
        (Status::PermanentResident | Status::CanadianCitizen, _) => {
            (PlanKind::Established, tables::established_table())
        }
        _ => (PlanKind::GeneralFallback, tables::default_table()),
    };
    Plan { kind, roadmap }
}

/// Derive just the roadmap, discarding the branch tag
#[inline]
#[must_use]
pub fn derive_roadmap(answers: &Answers) -> Roadmap {
    derive_plan(answers).roadmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpath_model::{ActionId, BankAccountStatus, CreditGoal, Province};
    use pretty_assertions::assert_eq;

    fn answers(status: Status, income: IncomeBracket) -> Answers {
        Answers {
            status,
            province: Province::Ontario,
            income,
            bank_account: BankAccountStatus::NoAccount,
            goal: CreditGoal::RentApartment,
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = answers(Status::StudyPermit, IncomeBracket::Under1000);
        assert_eq!(derive_plan(&a), derive_plan(&a));
        assert_eq!(derive_roadmap(&a), derive_roadmap(&a));
    }

    #[test]
    fn student_branch() {
        let plan = derive_plan(&answers(Status::StudyPermit, IncomeBracket::Under1000));
        assert_eq!(plan.kind, PlanKind::Student);
        assert_eq!(plan.roadmap.len(), 6);
        let first = &plan.roadmap.months()[0].actions[0];
        assert_eq!(first.id, ActionId::new(1, 0));
        assert_eq!(first.text, "Visit RBC or TD branch with passport and study permit");
    }

    #[test]
    fn student_status_with_higher_income_falls_back() {
        let plan = derive_plan(&answers(Status::StudyPermit, IncomeBracket::Over5000));
        assert_eq!(plan.kind, PlanKind::GeneralFallback);
    }

    #[test]
    fn work_permit_branch_requires_mid_or_high_income() {
        let plan = derive_plan(&answers(Status::WorkPermit, IncomeBracket::Over5000));
        assert_eq!(plan.kind, PlanKind::WorkPermit);
        assert_eq!(plan.roadmap.month(2).unwrap().title, "Apply for a credit-builder loan");

        let mid = derive_plan(&answers(Status::WorkPermit, IncomeBracket::From3000To5000));
        assert_eq!(mid.kind, PlanKind::WorkPermit);

        let low = derive_plan(&answers(Status::WorkPermit, IncomeBracket::Under1000));
        assert_eq!(low.kind, PlanKind::GeneralFallback);
    }

    #[test]
    fn established_branch_ignores_income() {
        for income in IncomeBracket::ALL {
            let pr = derive_plan(&answers(Status::PermanentResident, income));
            assert_eq!(pr.kind, PlanKind::Established);
            let citizen = derive_plan(&answers(Status::CanadianCitizen, income));
            assert_eq!(citizen.kind, PlanKind::Established);
            assert_eq!(pr.roadmap, citizen.roadmap);
        }
    }

    #[test]
    fn unmatched_status_yields_fallback_equal_to_student_table() {
        let fallback = derive_plan(&answers(
            Status::Other("Visitor Visa".to_string()),
            IncomeBracket::Under1000,
        ));
        assert_eq!(fallback.kind, PlanKind::GeneralFallback);
        assert!(fallback.kind.is_fallback());

        let student = derive_plan(&answers(Status::StudyPermit, IncomeBracket::Under1000));
        assert_eq!(fallback.roadmap, student.roadmap);
    }
}
