//! Outbound hand-off of drafts and submissions.
//!
//! Nothing is persisted: the default sink writes the draft as JSON to the
//! log and the app keeps the last submitted station in memory.

mod error;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::StationDraft;

pub use error::SinkError;

/// Receives drafts from the onboarding panel.
pub trait StationSink {
    /// Called by "Save draft", complete or not.
    fn save(&mut self, draft: &StationDraft) -> Result<(), SinkError>;

    /// Called after the review summary is confirmed.
    fn submit(&mut self, draft: &StationDraft) -> Result<(), SinkError>;

    /// Called with the initial aggregate submittable flag, then whenever it flips.
    fn submittable_changed(&mut self, _submittable: bool) {}
}

/// A submitted station with the time it was confirmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedStation {
    pub draft: StationDraft,
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedStation {
    pub fn new(draft: StationDraft) -> Self {
        Self {
            draft,
            submitted_at: Utc::now(),
        }
    }

    /// Location name, or a placeholder if it was left blank.
    pub fn display_name(&self) -> &str {
        let name = self.draft.station_details.location_name.trim();
        if name.is_empty() {
            "Unnamed station"
        } else {
            name
        }
    }
}

/// Sink that records every hand-off as a structured `tracing` event.
#[derive(Debug, Default)]
pub struct TracingSink {
    saves: usize,
    submissions: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }
}

impl StationSink for TracingSink {
    fn save(&mut self, draft: &StationDraft) -> Result<(), SinkError> {
        let json = serde_json::to_string(draft)?;
        self.saves += 1;
        tracing::info!(draft = %json, saves = self.saves, "draft saved");
        Ok(())
    }

    fn submit(&mut self, draft: &StationDraft) -> Result<(), SinkError> {
        let submitted = SubmittedStation::new(draft.clone());
        let json = serde_json::to_string(&submitted)?;
        self.submissions += 1;
        tracing::info!(station = %json, "station submitted for review");
        Ok(())
    }

    fn submittable_changed(&mut self, submittable: bool) {
        tracing::info!(submittable, "submittable state changed");
    }
}
