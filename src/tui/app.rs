use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};

use crate::model::Onboarding;
use crate::sink::{StationSink, SubmittedStation};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    HelpState, HomeState, PanelState, ReviewState, draw_help, draw_home, draw_panel, draw_review,
};

/// How long the event loop waits for input before polling the session.
const TICK: Duration = Duration::from_millis(100);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The "New charge station" card.
    Home,
    /// Accordion of station detail sections.
    Panel,
    /// Read-only summary shown before submitting.
    Review,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Panel => "Station Details",
            Self::Review => "Review",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App<S: StationSink> {
    screen: Screen,
    session: Onboarding,
    sink: S,
    home: HomeState,
    panel: PanelState,
    review: Option<ReviewState>,
    /// Screen the review overlay was opened from.
    review_origin: Screen,
    help: HelpState,
    last_submitted: Option<SubmittedStation>,
    should_quit: bool,
}

impl<S: StationSink> App<S> {
    /// Creates a new `App` starting on the [`Screen::Home`] screen.
    pub fn new(session: Onboarding, sink: S) -> Self {
        Self {
            screen: Screen::Home,
            session,
            sink,
            home: HomeState::new(),
            panel: PanelState::new(),
            review: None,
            review_origin: Screen::Home,
            help: HelpState::new(),
            last_submitted: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll event → dispatch → advance the session.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        tracing::info!("onboarding started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.tick(Instant::now());
        }
        tracing::info!("onboarding finished");
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Home => draw_home(
                &self.home,
                &self.session,
                self.last_submitted.as_ref(),
                frame,
                area,
            ),
            Screen::Panel => draw_panel(&self.panel, &self.session, frame, area),
            Screen::Review => {
                if self.review_origin == Screen::Panel {
                    draw_panel(&self.panel, &self.session, frame, area);
                } else {
                    draw_home(
                        &self.home,
                        &self.session,
                        self.last_submitted.as_ref(),
                        frame,
                        area,
                    );
                }
                if let Some(review) = &self.review {
                    draw_review(review, frame, area);
                }
            }
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Advances the connection check and reports submittable flips to the sink.
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
        if let Some(submittable) = self.session.take_submittable_change() {
            self.sink.submittable_changed(submittable);
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) && self.screen != Screen::Help {
            self.help.set_origin(self.screen);
            self.help.reset();
            self.screen = Screen::Help;
            return;
        }

        let action = match self.screen {
            Screen::Home => self.home.handle_key(key, &self.session),
            Screen::Panel => self.panel.handle_key(key, &self.session),
            Screen::Review => match &mut self.review {
                Some(review) => review.handle_key(key, &self.session),
                None => Action::CancelReview,
            },
            Screen::Help => self.help.handle_key(key, &self.session),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::SetText(field, value) => self.session.set_text(field, value),
            Action::SetFlag(field, value) => self.session.set_flag(field, value),
            Action::SetChoice(field, index) => self.session.set_choice(field, index),
            Action::CheckConnection => {
                self.session.trigger_connection_check(Instant::now());
            }
            Action::SaveDraft => self.save_draft(),
            Action::RequestSubmit => self.request_submit(),
            Action::ConfirmSubmit => self.confirm_submit(),
            Action::CancelReview => {
                self.session.cancel_review();
                self.review = None;
                self.screen = self.review_origin;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = self.screen.label(), to = screen.label(), "navigate");
        // Help may return to a review that was already closed.
        if screen == Screen::Review && self.review.is_none() {
            self.screen = self.review_origin;
            return;
        }
        self.screen = screen;
    }

    fn save_draft(&mut self) {
        match self.sink.save(self.session.draft()) {
            Ok(()) => {
                self.panel.collapse();
                self.home.set_notice("Draft saved.");
                self.screen = Screen::Home;
            }
            Err(e) => {
                tracing::warn!(error = %e, "saving draft failed");
                self.panel.set_error(format!("Could not save draft: {e}"));
            }
        }
    }

    fn request_submit(&mut self) {
        match self.session.request_submit() {
            Ok(summary) => {
                self.review = Some(ReviewState::new(summary));
                self.review_origin = self.screen;
                self.screen = Screen::Review;
            }
            Err(e) => match self.screen {
                Screen::Panel => self.panel.set_error(e.to_string()),
                _ => self.home.set_error(e.to_string()),
            },
        }
    }

    fn confirm_submit(&mut self) {
        self.review = None;
        let draft = match self.session.confirm_submit() {
            Ok(draft) => draft.clone(),
            Err(e) => {
                self.screen = self.review_origin;
                match self.screen {
                    Screen::Panel => self.panel.set_error(e.to_string()),
                    _ => self.home.set_error(e.to_string()),
                }
                return;
            }
        };
        match self.sink.submit(&draft) {
            Ok(()) => {
                let station = SubmittedStation::new(draft);
                self.home
                    .set_notice(format!("{} submitted for review.", station.display_name()));
                self.last_submitted = Some(station);
                self.panel.collapse();
                self.screen = Screen::Home;
            }
            Err(e) => {
                tracing::warn!(error = %e, "submission failed");
                self.screen = self.review_origin;
                match self.screen {
                    Screen::Panel => self.panel.set_error(format!("Could not submit: {e}")),
                    _ => self.home.set_error(format!("Could not submit: {e}")),
                }
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn session(&self) -> &Onboarding {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Returns the most recently submitted station, if any.
    pub fn last_submitted(&self) -> Option<&SubmittedStation> {
        self.last_submitted.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::{ChoiceField, Section, StationDraft, TextField};
    use crate::sink::SinkError;

    const DELAY: Duration = Duration::from_millis(20);

    #[derive(Debug, Default)]
    struct RecordingSink {
        saved: Vec<StationDraft>,
        submitted: Vec<StationDraft>,
        flips: Vec<bool>,
    }

    impl StationSink for RecordingSink {
        fn save(&mut self, draft: &StationDraft) -> Result<(), SinkError> {
            self.saved.push(draft.clone());
            Ok(())
        }

        fn submit(&mut self, draft: &StationDraft) -> Result<(), SinkError> {
            self.submitted.push(draft.clone());
            Ok(())
        }

        fn submittable_changed(&mut self, submittable: bool) {
            self.flips.push(submittable);
        }
    }

    fn make_app() -> App<RecordingSink> {
        App::new(Onboarding::with_delay(DELAY), RecordingSink::default())
    }

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key_event(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn release(code: KeyCode) -> KeyEvent {
        key_event(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    fn alt(code: KeyCode) -> KeyEvent {
        key_event(code, KeyModifiers::ALT, KeyEventKind::Press)
    }

    /// Completes every section directly on the session, connecting with
    /// the success identity.
    fn complete(app: &mut App<RecordingSink>) {
        let start = Instant::now();
        let s = &mut app.session;
        s.set_choice(ChoiceField::Visibility, Some(0));
        s.set_text(TextField::LocationName, "Depot 9");
        s.set_text(TextField::LocationAddress, "9 Smith St");
        s.set_text(TextField::Latitude, "-37.8");
        s.set_text(TextField::Longitude, "144.9");
        s.set_choice(ChoiceField::StickersApplied, Some(0));
        s.set_text(TextField::StationNumber, "CFX-9");
        s.set_choice(ChoiceField::ConnectionType, Some(2));
        s.set_text(TextField::BasePricePerKwh, "0.40");
        s.set_text(TextField::OcppId, "chargefox");
        s.trigger_connection_check(start);
        app.tick(start + DELAY);
        let s = &mut app.session;
        s.set_text(TextField::PowerRating, "22");
        for i in 0..2 {
            s.set_choice(ChoiceField::PortName(i), Some(i));
            s.set_choice(ChoiceField::PlugType(i), Some(0));
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn new_starts_on_home() {
            let app = make_app();
            assert_eq!(app.screen(), Screen::Home);
            assert!(!app.should_quit());
            assert!(app.last_submitted().is_none());
        }

        #[test]
        fn q_on_home_quits() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn ctrl_c_quits_from_panel() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Char('a')));
            app.handle_key(key_event(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyEventKind::Press,
            ));
            assert!(app.should_quit());
        }

        #[test]
        fn add_opens_panel_and_esc_returns_home() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Char('a')));
            assert_eq!(app.screen(), Screen::Panel);
            app.handle_key(press(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::Home);
            assert!(!app.should_quit());
        }

        #[test]
        fn f1_opens_help_and_returns_to_origin() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Char('a')));
            app.handle_key(press(KeyCode::F(1)));
            assert_eq!(app.screen(), Screen::Help);
            app.handle_key(press(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::Panel);
        }

        #[test]
        fn release_events_are_ignored() {
            let mut app = make_app();
            app.handle_key(release(KeyCode::Char('q')));
            assert!(!app.should_quit());
            assert_eq!(app.screen(), Screen::Home);
        }

        #[test]
        fn screen_labels_match_expected() {
            let expected = [
                (Screen::Home, "Home"),
                (Screen::Panel, "Station Details"),
                (Screen::Review, "Review"),
                (Screen::Help, "Help"),
            ];
            for (screen, label) in expected {
                assert_eq!(screen.label(), label, "{screen:?} label mismatch");
            }
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn typing_in_panel_updates_session() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Char('a')));
            app.handle_key(press(KeyCode::Enter));
            assert_eq!(app.panel().open_section(), Some(Section::VisibilityLocation));
            // Visibility is first; move to the location name.
            app.handle_key(press(KeyCode::Tab));
            for ch in "Depot".chars() {
                app.handle_key(press(KeyCode::Char(ch)));
            }
            assert_eq!(app.session().draft().station_details.location_name, "Depot");
        }

        #[test]
        fn connection_check_resolves_on_tick() {
            let mut app = make_app();
            app.session.set_text(TextField::OcppId, "chargefox");
            app.apply(Action::CheckConnection);
            assert!(app.session().connection_check().is_pending());
            app.tick(Instant::now() + DELAY * 2);
            assert!(app.session().draft().connect_to_chargefox.connected);
        }
    }

    mod save {
        use super::*;

        #[test]
        fn save_hands_incomplete_draft_to_sink_and_goes_home() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Char('a')));
            app.handle_key(press(KeyCode::Enter));
            app.handle_key(alt(KeyCode::Char('s')));
            assert_eq!(app.sink().saved.len(), 1);
            assert_eq!(app.screen(), Screen::Home);
            assert_eq!(app.home().notice(), Some("Draft saved."));
            assert!(app.panel().open_section().is_none());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn incomplete_submit_from_home_shows_error() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Char('s')));
            assert_eq!(app.screen(), Screen::Home);
            assert_eq!(
                app.home().error(),
                Some("Please complete all required sections before submitting.")
            );
            assert!(app.sink().submitted.is_empty());
        }

        #[test]
        fn incomplete_submit_from_panel_shows_panel_error() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Char('a')));
            app.handle_key(alt(KeyCode::Char('r')));
            assert_eq!(app.screen(), Screen::Panel);
            assert!(app.panel().error().is_some());
        }

        #[test]
        fn completing_draft_reports_flip_to_sink() {
            let mut app = make_app();
            complete(&mut app);
            app.tick(Instant::now());
            assert_eq!(app.sink().flips, vec![false, true]);
        }

        #[test]
        fn first_tick_reports_initial_flag() {
            let mut app = make_app();
            app.tick(Instant::now());
            app.tick(Instant::now());
            assert_eq!(app.sink().flips, vec![false]);
        }

        #[test]
        fn review_then_confirm_submits() {
            let mut app = make_app();
            complete(&mut app);
            app.handle_key(press(KeyCode::Char('s')));
            assert_eq!(app.screen(), Screen::Review);
            app.handle_key(press(KeyCode::Enter));
            assert_eq!(app.screen(), Screen::Home);
            assert_eq!(app.sink().submitted.len(), 1);
            let station = app.last_submitted().unwrap();
            assert_eq!(station.display_name(), "Depot 9");
            assert_eq!(app.home().notice(), Some("Depot 9 submitted for review."));
        }

        #[test]
        fn cancel_review_returns_to_origin() {
            let mut app = make_app();
            complete(&mut app);
            app.handle_key(press(KeyCode::Char('a')));
            app.handle_key(alt(KeyCode::Char('r')));
            assert_eq!(app.screen(), Screen::Review);
            app.handle_key(press(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::Panel);
            assert!(!app.session().is_review_open());
            assert!(app.sink().submitted.is_empty());
        }

        #[test]
        fn help_from_review_returns_to_review() {
            let mut app = make_app();
            complete(&mut app);
            app.handle_key(press(KeyCode::Char('s')));
            app.handle_key(press(KeyCode::F(1)));
            app.handle_key(press(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::Review);
        }
    }
}
