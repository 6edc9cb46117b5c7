//! Station details panel: six accordion sections backed by the draft.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{ChoiceField, ConnectionCheck, ConnectionStatus, FieldId, Onboarding, Section};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::{FocusRing, FormRow, StatusBarContext, draw_form, draw_status_bar};

/// Shown when opening the hardware section before the station is connected.
pub const LOCKED_MESSAGE: &str =
    "This section is dependent on \"Connect to Chargefox\" being completed.";

/// State for the station details panel.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Highlighted section header.
    selected: usize,
    /// Expanded section, if any.
    open: Option<Section>,
    focus: FocusRing,
    error: Option<String>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the highlighted section.
    pub fn selected(&self) -> Section {
        Section::all()[self.selected.min(Section::all().len() - 1)]
    }

    pub fn open_section(&self) -> Option<Section> {
        self.open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets a message shown above the panel footer.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Collapses the open section, keeping the selection.
    pub fn collapse(&mut self) {
        self.open = None;
        self.focus.reset();
    }

    /// Returns the focused field of the expanded section.
    pub fn focused_field(&self, session: &Onboarding) -> Option<FieldId> {
        let section = self.open?;
        let fields = section.visible_fields(session.draft());
        self.focus.focus(fields.len()).map(|i| fields[i])
    }

    fn focus_index(&self, session: &Onboarding) -> Option<usize> {
        let section = self.open?;
        self.focus.focus(section.visible_fields(session.draft()).len())
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < Section::all().len() {
            self.selected += 1;
        }
    }

    fn expand_selected(&mut self, session: &Onboarding) {
        let section = self.selected();
        if session.statuses().is_unlocked(section) {
            self.open = Some(section);
            self.focus.reset();
        } else {
            tracing::debug!(section = section.key(), "locked section not opened");
            self.error = Some(LOCKED_MESSAGE.to_string());
        }
    }

    fn handle_collapsed(&mut self, key: KeyEvent, session: &Onboarding) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.expand_selected(session);
                Action::None
            }
            KeyCode::Esc | KeyCode::Char('q') => Action::Navigate(Screen::Home),
            _ => Action::None,
        }
    }

    fn handle_expanded(
        &mut self,
        section: Section,
        key: KeyEvent,
        session: &Onboarding,
    ) -> Action {
        let len = section.visible_fields(session.draft()).len();
        match key.code {
            KeyCode::Esc => {
                self.open = None;
                Action::None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus.focus_next(len);
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.focus_prev(len);
                Action::None
            }
            KeyCode::Enter if section == Section::ConnectToChargefox => {
                if ConnectionCheck::can_trigger(&session.draft().connect_to_chargefox) {
                    Action::CheckConnection
                } else {
                    Action::None
                }
            }
            KeyCode::Enter => {
                self.focus.focus_next(len);
                Action::None
            }
            _ => match self.focused_field(session) {
                Some(field) => edit_field(field, key, session),
                None => Action::None,
            },
        }
    }
}

/// Translates a key press on a focused field into a draft edit.
fn edit_field(field: FieldId, key: KeyEvent, session: &Onboarding) -> Action {
    if key
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::CONTROL)
    {
        return Action::None;
    }
    let draft = session.draft();
    match (field, key.code) {
        (FieldId::Text(f), _) if f.read_only() => Action::None,
        (FieldId::Text(f), KeyCode::Char(ch)) => {
            let current = draft.text(f);
            let at_limit = f
                .max_len()
                .is_some_and(|max| current.chars().count() >= max);
            if !f.input_kind().accepts(ch) || at_limit {
                return Action::None;
            }
            let mut value = current.to_string();
            value.push(ch);
            Action::SetText(f, value)
        }
        (FieldId::Text(f), KeyCode::Backspace) => {
            let mut value = draft.text(f).to_string();
            if value.pop().is_none() {
                return Action::None;
            }
            Action::SetText(f, value)
        }
        (FieldId::Flag(f), KeyCode::Char(' ')) => Action::SetFlag(f, !draft.flag(f)),
        (FieldId::Choice(f), KeyCode::Right | KeyCode::Char(' ')) => {
            Action::SetChoice(f, Some(cycle(f, draft.choice(f), true)))
        }
        (FieldId::Choice(f), KeyCode::Left) => {
            Action::SetChoice(f, Some(cycle(f, draft.choice(f), false)))
        }
        (FieldId::Choice(f), KeyCode::Backspace | KeyCode::Delete) if draft.choice(f).is_some() => {
            Action::SetChoice(f, None)
        }
        _ => Action::None,
    }
}

/// Next or previous option index, wrapping; an unset choice starts at either end.
fn cycle(field: ChoiceField, current: Option<usize>, forward: bool) -> usize {
    let len = field.option_count().max(1);
    match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    }
}

impl ScreenState for PanelState {
    fn handle_key(&mut self, key: KeyEvent, session: &Onboarding) -> Action {
        self.error = None;

        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char('s') => return Action::SaveDraft,
                KeyCode::Char('r') => return Action::RequestSubmit,
                _ => {}
            }
        }

        match self.open {
            Some(section) => self.handle_expanded(section, key, session),
            None => self.handle_collapsed(key, session),
        }
    }
}

fn status_label(section: Section, session: &Onboarding) -> Span<'static> {
    if !session.statuses().is_unlocked(section) {
        Span::styled("Locked", Style::default().fg(Color::DarkGray))
    } else if session.is_complete(section) {
        Span::styled("\u{2713} Complete", Style::default().fg(Color::Green))
    } else {
        Span::styled("Incomplete", Style::default().fg(Color::Yellow))
    }
}

fn header_line(
    section: Section,
    selected: bool,
    expanded: bool,
    session: &Onboarding,
) -> Line<'static> {
    let marker = if expanded { "\u{25be} " } else { "\u{25b8} " };
    let mut title_style = Style::default().add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.fg(Color::Black).bg(Color::Yellow);
    }
    Line::from(vec![
        Span::raw(marker),
        Span::styled(section.title(), title_style),
        Span::raw("  "),
        status_label(section, session),
    ])
}

/// Message and trigger hint for the connection section.
fn connection_lines(session: &Onboarding) -> Vec<Line<'static>> {
    let conn = &session.draft().connect_to_chargefox;
    let mut lines = Vec::new();
    if !conn.message.is_empty() {
        let color = match conn.status {
            ConnectionStatus::Success => Color::Green,
            ConnectionStatus::Error => Color::Red,
            ConnectionStatus::Loading => Color::Blue,
            ConnectionStatus::Idle => Color::Reset,
        };
        lines.push(Line::from(Span::styled(
            conn.message.clone(),
            Style::default().fg(color),
        )));
    }
    let (hint, style) = if conn.status == ConnectionStatus::Loading {
        ("Connecting...", Style::default().fg(Color::Yellow))
    } else if ConnectionCheck::can_trigger(conn) {
        ("Enter: Connect", Style::default().fg(Color::Yellow))
    } else {
        ("Connect (enter a chargebox identity)", Style::default().fg(Color::DarkGray))
    };
    lines.push(Line::from(Span::styled(hint, style)));
    lines
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_section_body(
    state: &PanelState,
    section: Section,
    session: &Onboarding,
    frame: &mut Frame,
    area: Rect,
) {
    let draft = session.draft();
    let mut intro = vec![Line::from(Span::styled(
        section.description(),
        Style::default().fg(Color::DarkGray),
    ))];
    if let Some(notice) = section.notice(draft) {
        intro.push(Line::from(Span::styled(notice, Style::default().fg(Color::Blue))));
    }
    if section == Section::ConnectToChargefox {
        intro.extend(connection_lines(session));
    }

    let [intro_area, form_area] = Layout::vertical([
        Constraint::Length(intro.len() as u16 + 1),
        Constraint::Min(0),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(intro).wrap(Wrap { trim: true }), intro_area);

    let rows: Vec<FormRow> = section
        .visible_fields(draft)
        .into_iter()
        .map(|f| FormRow::for_field(f, draft))
        .collect();
    draw_form(&rows, state.focus_index(session), frame, form_area);
}

/// Renders the station details panel.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_panel(state: &PanelState, session: &Onboarding, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Add station details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, error_area, status_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    // Headers above the open section, the open section's body, then the rest.
    let open_index = state.open.map(Section::index);
    let before: Vec<Line> = Section::all()
        .iter()
        .take(open_index.map_or(Section::all().len(), |i| i + 1))
        .map(|&s| header_line(s, s == state.selected(), Some(s) == state.open, session))
        .collect();
    let after: Vec<Line> = open_index
        .map(|i| {
            Section::all()[i + 1..]
                .iter()
                .map(|&s| header_line(s, s == state.selected(), false, session))
                .collect()
        })
        .unwrap_or_default();

    let [before_area, open_area, after_area] = Layout::vertical([
        Constraint::Length(before.len() as u16),
        Constraint::Min(0),
        Constraint::Length(after.len() as u16),
    ])
    .areas(body_area);
    frame.render_widget(Paragraph::new(before), before_area);
    frame.render_widget(Paragraph::new(after), after_area);
    if let Some(section) = state.open {
        let body = Rect {
            x: open_area.x + 2,
            width: open_area.width.saturating_sub(2),
            ..open_area
        };
        draw_section_body(state, section, session, frame, body);
    }

    if let Some(err) = state.error() {
        let line = Paragraph::new(Line::from(Span::styled(err, Style::default().fg(Color::Red))));
        frame.render_widget(line, error_area);
    }

    draw_status_bar(&StatusBarContext::from_session(session), frame, status_area);

    let footer = if state.open.is_some() {
        "Tab/Shift+Tab: field  \u{2190}/\u{2192}/Space: choose  Esc: collapse  Alt+s: save  Alt+r: submit"
    } else {
        "\u{2191}/\u{2193}: section  Enter: expand  Alt+s: save draft  Alt+r: submit  Esc: close"
    };
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}
