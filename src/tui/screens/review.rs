//! Review screen: read-only summary shown before the final submission.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::{Onboarding, REVIEW_NOTES, ReviewSummary, SUPPORT_EMAIL};
use crate::tui::action::{Action, ScreenState};

/// State for the review screen.
#[derive(Debug, Clone)]
pub struct ReviewState {
    summary: ReviewSummary,
    scroll: u16,
}

impl ReviewState {
    pub fn new(summary: ReviewSummary) -> Self {
        Self { summary, scroll: 0 }
    }

    pub fn summary(&self) -> &ReviewSummary {
        &self.summary
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

impl ScreenState for ReviewState {
    fn handle_key(&mut self, key: KeyEvent, _session: &Onboarding) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('y') => Action::ConfirmSubmit,
            KeyCode::Esc | KeyCode::Char('n') => Action::CancelReview,
            _ => Action::None,
        }
    }
}

fn summary_lines(summary: &ReviewSummary) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for block in &summary.blocks {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(block.heading.clone(), heading)));
        for (label, value) in &block.lines {
            lines.push(Line::from(vec![
                Span::raw(format!("  {label}: ")),
                Span::styled(value.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
        }
    }
    lines
}

/// Renders the review summary as a centered overlay.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_review(state: &ReviewState, frame: &mut Frame, area: Rect) {
    let [_, middle, _] = Layout::horizontal([
        Constraint::Percentage(10),
        Constraint::Percentage(80),
        Constraint::Percentage(10),
    ])
    .areas(area);

    let block = Block::default()
        .title(" Review Station Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(middle);
    frame.render_widget(Clear, middle);
    frame.render_widget(block, middle);

    let notes_height = REVIEW_NOTES.len() as u16 + 1;
    let [intro_area, content_area, notes_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(notes_height),
        Constraint::Length(1),
    ])
    .areas(inner);

    let intro = Paragraph::new(format!(
        "If you need help with your submission, please email {SUPPORT_EMAIL}."
    ))
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, intro_area);

    let lines = summary_lines(state.summary());
    let total = lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));
    frame.render_widget(
        Paragraph::new(lines).scroll((capped_scroll, 0)),
        content_area,
    );

    let warn = Style::default().fg(Color::Yellow);
    let mut notes = vec![Line::from(Span::styled(
        "Important information:",
        warn.add_modifier(Modifier::BOLD),
    ))];
    notes.extend(
        REVIEW_NOTES
            .iter()
            .map(|n| Line::from(Span::styled(format!("\u{2022} {n}"), warn))),
    );
    frame.render_widget(Paragraph::new(notes), notes_area);

    let footer = Paragraph::new("\u{2191}/\u{2193}: scroll  Enter: confirm  Esc: cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
