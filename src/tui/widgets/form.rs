//! Reusable form widget for draft-backed sections.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{ChoiceField, FieldId, FlagField, StationDraft, TextField, field_hint};

/// How a row's value is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue {
    Text(String),
    Checkbox(bool),
    /// The selected option label, if any, and whether it is a drop-down.
    Choice {
        selected: Option<String>,
        is_select: bool,
    },
}

/// A single rendered field within a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    /// Display label shown in the row's title.
    pub label: String,
    pub value: RowValue,
    /// Whether the field is marked as required.
    pub required: bool,
    /// Guidance shown when the row has no error.
    pub help: Option<&'static str>,
    /// Format hint for the current value, if any.
    pub error: Option<String>,
    /// `used/max` counter for length-limited free text.
    pub counter: Option<String>,
    pub read_only: bool,
}

fn connector_label(index: usize, label: &str) -> String {
    format!("Connector {} \u{b7} {label}", index + 1)
}

impl FormRow {
    /// Builds the row for `field` from the draft's current value.
    pub fn for_field(field: FieldId, draft: &StationDraft) -> Self {
        let label = match field {
            FieldId::Choice(ChoiceField::PortName(i) | ChoiceField::PlugType(i))
            | FieldId::Flag(FlagField::DriversBringCable(i)) => connector_label(i, field.label()),
            _ => field.label().to_string(),
        };
        let (value, error, counter, read_only) = match field {
            FieldId::Text(f) => {
                let text = draft.text(f);
                let counter = (f == TextField::Directions)
                    .then(|| f.max_len())
                    .flatten()
                    .map(|max| format!("{}/{max}", text.chars().count()));
                (
                    RowValue::Text(text.to_string()),
                    field_hint(f, text).map(|e| e.to_string()),
                    counter,
                    f.read_only(),
                )
            }
            FieldId::Flag(f) => (RowValue::Checkbox(draft.flag(f)), None, None, false),
            FieldId::Choice(f) => {
                let selected = (!field.is_blank(draft)).then(|| field.display_value(draft));
                (
                    RowValue::Choice {
                        selected,
                        is_select: f.is_select(),
                    },
                    None,
                    None,
                    false,
                )
            }
        };
        Self {
            label,
            value,
            required: field.required(),
            help: field.help(),
            error,
            counter,
            read_only,
        }
    }

    fn title(&self) -> String {
        let mut title = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };
        if let Some(counter) = &self.counter {
            title.push_str(&format!(" ({counter})"));
        }
        title
    }
}

/// Focus position within a list whose length can change between key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusRing {
    focus: usize,
}

impl FocusRing {
    /// Returns the focused index, clamped to a list of `len` rows.
    pub fn focus(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.focus.min(len - 1))
    }

    /// Moves focus to the next row, wrapping around.
    pub fn focus_next(&mut self, len: usize) {
        if let Some(current) = self.focus(len) {
            self.focus = (current + 1) % len;
        }
    }

    /// Moves focus to the previous row, wrapping around.
    pub fn focus_prev(&mut self, len: usize) {
        if let Some(current) = self.focus(len) {
            self.focus = (current + len - 1) % len;
        }
    }

    pub fn reset(&mut self) {
        self.focus = 0;
    }
}

const ROW_HEIGHT: u16 = 3;

/// First row to draw so that the focused row stays on screen.
fn first_visible(focus: Option<usize>, rows: usize, height: u16) -> usize {
    let fit = usize::from((height / ROW_HEIGHT).max(1));
    match focus {
        Some(f) if f >= fit => (f + 1 - fit).min(rows.saturating_sub(fit)),
        _ => 0,
    }
}

fn value_spans(row: &FormRow, focused: bool) -> Vec<Span<'_>> {
    let dim = Style::default().fg(Color::DarkGray);
    match &row.value {
        RowValue::Text(text) => {
            let mut spans = vec![Span::raw(text.as_str())];
            if focused && !row.read_only {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            spans
        }
        RowValue::Checkbox(checked) => {
            let mark = if *checked { "[x]" } else { "[ ]" };
            vec![Span::raw(mark)]
        }
        RowValue::Choice {
            selected,
            is_select,
        } => {
            let text = match selected {
                Some(label) => Span::raw(label.as_str()),
                None if *is_select => Span::styled("Select an option", dim),
                None => Span::styled("(none)", dim),
            };
            if focused {
                vec![Span::styled("\u{25c2} ", dim), text, Span::styled(" \u{25b8}", dim)]
            } else {
                vec![text]
            }
        }
    }
}

/// Renders rows within the given area, scrolling to keep the focus visible.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(rows: &[FormRow], focus: Option<usize>, frame: &mut Frame, area: Rect) {
    let start = first_visible(focus, rows.len(), area.height);
    let shown = &rows[start..];
    let constraints: Vec<Constraint> = shown
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    let areas = Layout::vertical(constraints).split(area);

    for (offset, row) in shown.iter().enumerate() {
        let Some(&row_area) = areas.get(offset) else {
            break;
        };
        if row_area.height < ROW_HEIGHT {
            break;
        }
        let is_focused = focus == Some(start + offset);

        let border_color = if row.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let mut value_style = Style::default();
        if row.read_only {
            value_style = value_style.fg(Color::DarkGray);
        }

        let block = Block::default()
            .title(row.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let paragraph = Paragraph::new(Line::from(value_spans(row, is_focused)))
            .style(value_style)
            .block(block);
        frame.render_widget(paragraph, row_area);

        // Error, or help for the focused row, overlaps the bottom border.
        let note = match (&row.error, row.help) {
            (Some(err), _) => Some(Span::styled(err.as_str(), Style::default().fg(Color::Red))),
            (None, Some(help)) if is_focused => {
                Some(Span::styled(help, Style::default().fg(Color::DarkGray)))
            }
            _ => None,
        };
        if let Some(note) = note {
            let note_area = Rect {
                x: row_area.x + 2,
                y: row_area.y + ROW_HEIGHT - 1,
                width: row_area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(Paragraph::new(note), note_area);
        }
    }
}
