//! The five-step questionnaire flow
//!
//! Fixed step order with per-step finalization: a step only advances once a
//! non-empty, in-set selection is made, so a completed draft always yields a
//! fully-populated [`Answers`].

use crate::answers::{Answers, BankAccountStatus, CreditGoal, IncomeBracket, Province, Status};
use crate::error::ValidationError;

/// One step of the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizStep {
    /// "What is your current status in Canada?"
    Status,
    /// "Which province are you in?"
    Province,
    /// "What is your monthly income in CAD?"
    Income,
    /// "Do you have a Canadian bank account?"
    BankAccount,
    /// "What is your main credit goal?"
    Goal,
}

impl QuizStep {
    /// All steps in presentation order
    pub const ALL: [QuizStep; 5] = [
        QuizStep::Status,
        QuizStep::Province,
        QuizStep::Income,
        QuizStep::BankAccount,
        QuizStep::Goal,
    ];

    /// The question shown for this step
    #[inline]
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            QuizStep::Status => "What is your current status in Canada?",
            QuizStep::Province => "Which province are you in?",
            QuizStep::Income => "What is your monthly income in CAD?",
            QuizStep::BankAccount => "Do you have a Canadian bank account?",
            QuizStep::Goal => "What is your main credit goal?",
        }
    }

    /// The option labels offered for this step
    #[must_use]
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            QuizStep::Status => vec![
                "Study Permit",
                "Work Permit (PGWP or Employer-Sponsored)",
                "Permanent Resident",
                "Canadian Citizen",
            ],
            QuizStep::Province => Province::ALL.iter().map(|p| p.label()).collect(),
            QuizStep::Income => IncomeBracket::ALL.iter().map(|b| b.label()).collect(),
            QuizStep::BankAccount => BankAccountStatus::ALL.iter().map(|s| s.label()).collect(),
            QuizStep::Goal => CreditGoal::ALL.iter().map(|g| g.label()).collect(),
        }
    }
}

/// In-progress questionnaire state
///
/// Collects one selection per step; [`AnswersDraft::finish`] refuses to
/// produce an [`Answers`] until every step has been answered.
#[derive(Debug, Clone, Default)]
pub struct AnswersDraft {
    status: Option<Status>,
    province: Option<Province>,
    income: Option<IncomeBracket>,
    bank_account: Option<BankAccountStatus>,
    goal: Option<CreditGoal>,
}

impl AnswersDraft {
    /// Create an empty draft
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection for a step
    ///
    /// # Errors
    /// - `ValidationError::MissingField` for an empty selection
    /// - `ValidationError::UnknownOption` for a value outside the step's set
    ///   (the status step accepts free-form values as a fallback)
    pub fn select(&mut self, step: QuizStep, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::MissingField(step));
        }
        let unknown = || ValidationError::UnknownOption {
            step,
            value: value.to_string(),
        };
        match step {
            QuizStep::Status => {
                self.status = Some(Status::parse_label(value).ok_or_else(unknown)?);
            }
            QuizStep::Province => {
                self.province = Some(Province::parse_label(value).ok_or_else(unknown)?);
            }
            QuizStep::Income => {
                self.income = Some(IncomeBracket::parse_label(value).ok_or_else(unknown)?);
            }
            QuizStep::BankAccount => {
                self.bank_account = Some(BankAccountStatus::parse_label(value).ok_or_else(unknown)?);
            }
            QuizStep::Goal => {
                self.goal = Some(CreditGoal::parse_label(value).ok_or_else(unknown)?);
            }
        }
        Ok(())
    }

    /// Whether a step has been answered
    #[inline]
    #[must_use]
    pub fn is_answered(&self, step: QuizStep) -> bool {
        match step {
            QuizStep::Status => self.status.is_some(),
            QuizStep::Province => self.province.is_some(),
            QuizStep::Income => self.income.is_some(),
            QuizStep::BankAccount => self.bank_account.is_some(),
            QuizStep::Goal => self.goal.is_some(),
        }
    }

    /// First unanswered step, if any
    #[must_use]
    pub fn next_unanswered(&self) -> Option<QuizStep> {
        QuizStep::ALL.into_iter().find(|s| !self.is_answered(*s))
    }

    /// Fraction of steps answered, 0.0 to 1.0
    #[must_use]
    pub fn progress(&self) -> f64 {
        let answered = QuizStep::ALL.iter().filter(|s| self.is_answered(**s)).count();
        answered as f64 / QuizStep::ALL.len() as f64
    }

    /// Finalize the draft into a validated answer record
    ///
    /// # Errors
    /// `ValidationError::MissingField` naming the first unanswered step.
    pub fn finish(self) -> Result<Answers, ValidationError> {
        use ValidationError::MissingField;
        Ok(Answers {
            status: self.status.ok_or(MissingField(QuizStep::Status))?,
            province: self.province.ok_or(MissingField(QuizStep::Province))?,
            income: self.income.ok_or(MissingField(QuizStep::Income))?,
            bank_account: self.bank_account.ok_or(MissingField(QuizStep::BankAccount))?,
            goal: self.goal.ok_or(MissingField(QuizStep::Goal))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> AnswersDraft {
        let mut draft = AnswersDraft::new();
        draft.select(QuizStep::Status, "Study Permit").unwrap();
        draft.select(QuizStep::Province, "Ontario").unwrap();
        draft.select(QuizStep::Income, "Under $1,000").unwrap();
        draft.select(QuizStep::BankAccount, "No, not yet").unwrap();
        draft.select(QuizStep::Goal, "Renting an apartment").unwrap();
        draft
    }

    #[test]
    fn full_flow_produces_answers() {
        let answers = full_draft().finish().unwrap();
        assert_eq!(answers.status, Status::StudyPermit);
        assert_eq!(answers.goal, CreditGoal::RentApartment);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let mut draft = AnswersDraft::new();
        let err = draft.select(QuizStep::Status, "").unwrap_err();
        assert_eq!(err, ValidationError::MissingField(QuizStep::Status));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut draft = AnswersDraft::new();
        let err = draft.select(QuizStep::Income, "$1M+").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownOption { step: QuizStep::Income, .. }));
    }

    #[test]
    fn free_form_status_is_accepted() {
        let mut draft = AnswersDraft::new();
        draft.select(QuizStep::Status, "Refugee Claimant").unwrap();
        assert!(draft.is_answered(QuizStep::Status));
    }

    #[test]
    fn partial_draft_cannot_finish() {
        let mut draft = AnswersDraft::new();
        draft.select(QuizStep::Status, "Canadian Citizen").unwrap();
        let err = draft.finish().unwrap_err();
        assert_eq!(err, ValidationError::MissingField(QuizStep::Province));
    }

    #[test]
    fn finish_names_the_actual_missing_step() {
        let mut draft = AnswersDraft::new();
        draft.select(QuizStep::Status, "Study Permit").unwrap();
        draft.select(QuizStep::Province, "Ontario").unwrap();
        draft.select(QuizStep::Income, "Under $1,000").unwrap();
        draft.select(QuizStep::Goal, "Renting an apartment").unwrap();

        let err = draft.finish().unwrap_err();
        assert_eq!(err, ValidationError::MissingField(QuizStep::BankAccount));
    }

    #[test]
    fn progress_counts_answered_steps() {
        let mut draft = AnswersDraft::new();
        assert_eq!(draft.progress(), 0.0);
        draft.select(QuizStep::Status, "Study Permit").unwrap();
        draft.select(QuizStep::Province, "Quebec").unwrap();
        assert!((draft.progress() - 0.4).abs() < f64::EPSILON);
        assert_eq!(draft.next_unanswered(), Some(QuizStep::Income));
    }

    #[test]
    fn every_step_has_prompt_and_options() {
        for step in QuizStep::ALL {
            assert!(!step.prompt().is_empty());
            assert!(!step.options().is_empty());
        }
        assert_eq!(QuizStep::Province.options().len(), 13);
    }
}
