//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::model::{ChoiceField, FlagField, Onboarding, TextField};

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the onboarding session and navigate
/// between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Replace a text field's value.
    SetText(TextField, String),
    SetFlag(FlagField, bool),
    /// Select an option by index, or clear the choice.
    SetChoice(ChoiceField, Option<usize>),
    /// Start the simulated connection check.
    CheckConnection,
    /// Hand the draft to the sink and close the panel.
    SaveDraft,
    /// Open the review summary if every section is complete.
    RequestSubmit,
    /// Submit the reviewed draft.
    ConfirmSubmit,
    /// Close the review summary without submitting.
    CancelReview,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    ///
    /// Screens read the session but never mutate it; every change goes
    /// through the returned action.
    fn handle_key(&mut self, key: KeyEvent, session: &Onboarding) -> Action;
}
