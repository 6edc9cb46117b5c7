//! Home screen: the "New charge station" card and its two buttons.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Onboarding;
use crate::sink::SubmittedStation;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the home screen.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    /// Confirmation of the last save or submission.
    notice: Option<String>,
    /// Error from the last failed action.
    error: Option<String>,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.notice = None;
    }

    fn clear_messages(&mut self) {
        self.notice = None;
        self.error = None;
    }
}

impl ScreenState for HomeState {
    fn handle_key(&mut self, key: KeyEvent, _session: &Onboarding) -> Action {
        match key.code {
            KeyCode::Char('a') | KeyCode::Enter => {
                self.clear_messages();
                Action::Navigate(Screen::Panel)
            }
            KeyCode::Char('s') => {
                self.clear_messages();
                Action::RequestSubmit
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

fn button<'a>(key: &'a str, label: &'a str, enabled: bool) -> Vec<Span<'a>> {
    let (key_style, label_style) = if enabled {
        (
            Style::default().fg(Color::Yellow),
            Style::default().add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };
    vec![
        Span::styled(format!("[{key}] "), key_style),
        Span::styled(label, label_style),
    ]
}

/// Renders the home screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_home(
    state: &HomeState,
    session: &Onboarding,
    last_submitted: Option<&SubmittedStation>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" CHARGEFOX ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, message_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let submittable = session.is_submittable();
    let mut lines = vec![
        Line::from(Span::styled(
            "New charge station",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Set up your station"),
        Line::from(Span::styled(
            "Get your station ready so that drivers can start charging",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(button("a", "Add station details", true)),
        Line::from(button("s", "Submit for review", submittable)),
    ];
    if !submittable {
        lines.push(Line::from(Span::styled(
            "Complete all required fields to enable",
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(station) = last_submitted {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Submitted for review: {} ({})",
                station.display_name(),
                station.submitted_at.format("%Y-%m-%d %H:%M UTC")
            ),
            Style::default().fg(Color::Green),
        )));
    }
    let content = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(content, content_area);

    if let Some(err) = state.error() {
        let line = Paragraph::new(err)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(line, message_area);
    } else if let Some(notice) = state.notice() {
        let line = Paragraph::new(notice)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        frame.render_widget(line, message_area);
    }

    let footer = Paragraph::new("a: add details  s: submit  F1: help  q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
