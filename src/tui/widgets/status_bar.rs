//! Status bar widget: one-line onboarding progress display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{ConnectionStatus, Onboarding, Section};

/// Data passed to the status bar widget; decoupled from [`Onboarding`] so it
/// can be rendered in isolation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Number of complete sections.
    pub completed: usize,
    /// Total number of sections.
    pub total: usize,
    /// Whether every section is complete.
    pub submittable: bool,
    /// Progress of the connection check.
    pub connection: ConnectionStatus,
}

impl StatusBarContext {
    pub fn from_session(session: &Onboarding) -> Self {
        Self {
            completed: session.statuses().completed_count(),
            total: Section::all().len(),
            submittable: session.is_submittable(),
            connection: session.draft().connect_to_chargefox.status,
        }
    }
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - Incomplete:   `4/6 sections complete`
/// - Submittable:  `6/6 sections complete  READY TO SUBMIT` (in Green)
/// - While the connection check runs, `  Connecting...` is appended in Yellow.
///
/// Renders nothing if `ctx.total` is zero.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.total == 0 {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans = vec![Span::styled(
        format!("{}/{} sections complete", ctx.completed, ctx.total),
        cyan,
    )];
    if ctx.submittable {
        spans.push(Span::styled("  READY TO SUBMIT", green));
    }
    if ctx.connection == ConnectionStatus::Loading {
        spans.push(Span::styled("  Connecting...", yellow));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_progress() {
        let ctx = StatusBarContext {
            completed: 4,
            total: 6,
            submittable: false,
            connection: ConnectionStatus::Idle,
        };
        let output = render_status_bar(&ctx, 60, 1);
        assert!(output.contains("4/6 sections complete"));
        assert!(!output.contains("READY"), "incomplete draft is not ready");
    }

    #[test]
    fn renders_ready_when_submittable() {
        let ctx = StatusBarContext {
            completed: 6,
            total: 6,
            submittable: true,
            connection: ConnectionStatus::Success,
        };
        let output = render_status_bar(&ctx, 60, 1);
        assert!(output.contains("READY TO SUBMIT"));
    }

    #[test]
    fn renders_connecting_while_loading() {
        let ctx = StatusBarContext {
            completed: 1,
            total: 6,
            submittable: false,
            connection: ConnectionStatus::Loading,
        };
        let output = render_status_bar(&ctx, 60, 1);
        assert!(output.contains("Connecting..."));
    }

    #[test]
    fn renders_nothing_without_sections() {
        let output = render_status_bar(&StatusBarContext::default(), 40, 1);
        assert!(!output.contains("complete"));
    }

    #[test]
    fn context_from_new_session() {
        let ctx = StatusBarContext::from_session(&Onboarding::new());
        assert_eq!(ctx.completed, 1);
        assert_eq!(ctx.total, 6);
        assert!(!ctx.submittable);
        assert_eq!(ctx.connection, ConnectionStatus::Idle);
    }
}
