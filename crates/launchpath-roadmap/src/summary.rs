//! Plan summary shown alongside the roadmap

use launchpath_model::{Answers, Status};

/// Headline figures for a derived plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    /// Expected score range after following the plan
    pub target_score_range: &'static str,
    /// Time to the credit goal
    pub timeline: &'static str,
}

impl PlanSummary {
    /// Summary figures for a set of answers
    ///
    /// Study-permit holders trend lower, permanent residents higher; every
    /// plan in the current tables runs six months.
    #[must_use]
    pub fn for_answers(answers: &Answers) -> Self {
        let target_score_range = match &answers.status {
            Status::StudyPermit => "640 - 660",
            Status::PermanentResident => "680 - 720",
            _ => "650 - 680",
        };
        Self {
            target_score_range,
            timeline: "6 Months",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpath_model::{BankAccountStatus, CreditGoal, IncomeBracket, Province};

    fn answers(status: Status) -> Answers {
        Answers {
            status,
            province: Province::Alberta,
            income: IncomeBracket::From1000To3000,
            bank_account: BankAccountStatus::HasAccount,
            goal: CreditGoal::FutureMortgage,
        }
    }

    #[test]
    fn ranges_track_status() {
        assert_eq!(
            PlanSummary::for_answers(&answers(Status::StudyPermit)).target_score_range,
            "640 - 660"
        );
        assert_eq!(
            PlanSummary::for_answers(&answers(Status::PermanentResident)).target_score_range,
            "680 - 720"
        );
        assert_eq!(
            PlanSummary::for_answers(&answers(Status::WorkPermit)).target_score_range,
            "650 - 680"
        );
        assert_eq!(
            PlanSummary::for_answers(&answers(Status::CanadianCitizen)).target_score_range,
            "650 - 680"
        );
    }

    #[test]
    fn timeline_is_six_months() {
        assert_eq!(PlanSummary::for_answers(&answers(Status::StudyPermit)).timeline, "6 Months");
    }
}
