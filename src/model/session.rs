use std::time::{Duration, Instant};

use thiserror::Error;

use super::completion::SectionStatuses;
use super::connection::ConnectionCheck;
use super::draft::StationDraft;
use super::field::{ChoiceField, FlagField, TextField};
use super::section::Section;
use super::summary::ReviewSummary;

/// Reasons a submission is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please complete all required sections before submitting.")]
    Incomplete,
    #[error("the review summary must be opened before confirming")]
    NotReviewed,
}

/// One onboarding session: the draft, its derived completion flags and the
/// pending connection check.
///
/// All edits go through this type so the flags are recomputed after every
/// change and identifier edits invalidate any in-flight check.
#[derive(Debug, Clone)]
pub struct Onboarding {
    draft: StationDraft,
    statuses: SectionStatuses,
    check: ConnectionCheck,
    review_open: bool,
    /// Last aggregate flag handed to observers; `None` until the first report.
    reported_submittable: Option<bool>,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new()
    }
}

impl Onboarding {
    pub fn new() -> Self {
        Self::with_check(ConnectionCheck::default())
    }

    /// Creates a session whose connection check resolves after `delay`.
    pub fn with_delay(delay: Duration) -> Self {
        Self::with_check(ConnectionCheck::new(delay))
    }

    fn with_check(check: ConnectionCheck) -> Self {
        let draft = StationDraft::new();
        let statuses = SectionStatuses::evaluate(&draft);
        Self {
            draft,
            statuses,
            check,
            review_open: false,
            reported_submittable: None,
        }
    }

    pub fn draft(&self) -> &StationDraft {
        &self.draft
    }

    pub fn statuses(&self) -> &SectionStatuses {
        &self.statuses
    }

    pub fn is_complete(&self, section: Section) -> bool {
        self.statuses.is_complete(section)
    }

    /// The aggregate flag gating review and submission.
    pub fn is_submittable(&self) -> bool {
        self.statuses.all_complete()
    }

    pub fn connection_check(&self) -> &ConnectionCheck {
        &self.check
    }

    fn refresh(&mut self) {
        self.statuses = SectionStatuses::evaluate(&self.draft);
    }

    /// Sets a text field. Read-only fields are left untouched.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        if field.read_only() {
            return;
        }
        self.draft.set_text(field, value);
        if field == TextField::OcppId {
            self.check.invalidate();
        }
        self.refresh();
    }

    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        self.draft.set_flag(field, value);
        self.refresh();
    }

    pub fn set_choice(&mut self, field: ChoiceField, index: Option<usize>) {
        self.draft.set_choice(field, index);
        self.refresh();
    }

    /// Starts the connection check. See [`ConnectionCheck::trigger`].
    pub fn trigger_connection_check(&mut self, now: Instant) -> bool {
        let changed = self.check.trigger(&mut self.draft, now);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Advances deferred work. Returns `true` if the draft changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.check.poll(&mut self.draft, now);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Returns the aggregate flag if it flipped since the last call.
    ///
    /// The first call always reports the current value, so observers learn
    /// the initial state without waiting for an edit.
    pub fn take_submittable_change(&mut self) -> Option<bool> {
        let current = self.is_submittable();
        if self.reported_submittable == Some(current) {
            return None;
        }
        self.reported_submittable = Some(current);
        Some(current)
    }

    /// Opens the review summary, or refuses if any section is incomplete.
    pub fn request_submit(&mut self) -> Result<ReviewSummary, SubmitError> {
        if !self.is_submittable() {
            tracing::info!(
                completed = self.statuses.completed_count(),
                "submission rejected: draft incomplete"
            );
            return Err(SubmitError::Incomplete);
        }
        self.review_open = true;
        Ok(ReviewSummary::from_draft(&self.draft))
    }

    pub fn is_review_open(&self) -> bool {
        self.review_open
    }

    /// Closes the review without submitting.
    pub fn cancel_review(&mut self) {
        self.review_open = false;
    }

    /// Confirms the reviewed draft and returns it for the sink.
    ///
    /// The gate is checked again: a draft that stopped being submittable
    /// while the review was open is refused.
    pub fn confirm_submit(&mut self) -> Result<&StationDraft, SubmitError> {
        if !self.review_open {
            return Err(SubmitError::NotReviewed);
        }
        self.review_open = false;
        if !self.is_submittable() {
            return Err(SubmitError::Incomplete);
        }
        Ok(&self.draft)
    }
}
