//! Help screen: scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Onboarding;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static HOME_KEYS: &[(&str, &str)] = &[
    ("a / Enter", "add station details"),
    ("s", "submit for review (when every section is complete)"),
    ("q / Esc", "quit"),
    ("F1", "help"),
    ("Ctrl+C", "quit from anywhere"),
];

static PANEL_SECTION_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "select section"),
    ("Enter / Space", "expand section"),
    ("Alt+s", "save draft and close"),
    ("Alt+r", "review and submit"),
    ("q / Esc", "close panel"),
    ("F1", "help"),
];

static PANEL_FIELD_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("←/→", "change option"),
    ("Space", "toggle checkbox"),
    ("Backspace", "delete character / clear option"),
    ("Enter", "next field; connect in the chargebox section"),
    ("Esc", "collapse section"),
];

static REVIEW_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "scroll"),
    ("Enter / y", "confirm submission"),
    ("Esc / n", "cancel"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top and origin [`Screen::Home`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::Home,
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the origin screen that opened help.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Sets the origin screen to return to when help is dismissed.
    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
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
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        Screen::Panel => "Station Details",
        Screen::Review => "Review",
        Screen::Help => "Help",
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content(origin: Screen) -> Vec<Line<'static>> {
    match origin {
        Screen::Home => build_section("Home", HOME_KEYS),
        Screen::Panel => {
            let mut lines = build_section("Sections", PANEL_SECTION_KEYS);
            lines.extend(build_section("Fields", PANEL_FIELD_KEYS));
            lines
        }
        Screen::Review => build_section("Review", REVIEW_KEYS),
        Screen::Help => build_section("Help", HELP_KEYS),
    }
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", screen_name(state.origin()));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content(state.origin());
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key(state: &mut HelpState, code: KeyCode) -> Action {
        state.handle_key(press(code), &Onboarding::new())
    }

    mod construction {
        use super::*;

        #[test]
        fn new_starts_at_top_with_home_origin() {
            let state = HelpState::new();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.origin(), Screen::Home);
        }

        #[test]
        fn set_origin_stores_screen() {
            let mut state = HelpState::default();
            state.set_origin(Screen::Panel);
            assert_eq!(state.origin(), Screen::Panel);
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn up_at_zero_saturates() {
            let mut state = HelpState::new();
            assert_eq!(key(&mut state, KeyCode::Up), Action::None);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn down_then_reset() {
            let mut state = HelpState::new();
            key(&mut state, KeyCode::Down);
            key(&mut state, KeyCode::Down);
            assert_eq!(state.scroll(), 2);
            state.reset();
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn q_and_esc_return_to_origin() {
            let mut state = HelpState::new();
            state.set_origin(Screen::Review);
            assert_eq!(
                key(&mut state, KeyCode::Char('q')),
                Action::Navigate(Screen::Review)
            );
            assert_eq!(key(&mut state, KeyCode::Esc), Action::Navigate(Screen::Review));
        }

        #[test]
        fn unknown_key_returns_none() {
            let mut state = HelpState::new();
            assert_eq!(key(&mut state, KeyCode::Char('x')), Action::None);
        }
    }

    mod help_content_fn {
        use super::*;

        fn content_text(screen: Screen) -> String {
            help_content(screen)
                .into_iter()
                .flat_map(|l| l.spans.into_iter())
                .map(|s| s.content.into_owned())
                .collect()
        }

        #[test]
        fn every_screen_has_a_name_and_content() {
            for screen in [Screen::Home, Screen::Panel, Screen::Review, Screen::Help] {
                assert!(!screen_name(screen).is_empty());
                assert!(!help_content(screen).is_empty(), "{screen:?} should have content");
            }
        }

        #[test]
        fn panel_lists_section_and_field_keys() {
            let text = content_text(Screen::Panel);
            assert!(text.contains("Sections"));
            assert!(text.contains("Fields"));
            assert!(text.contains("save draft"));
        }

        #[test]
        fn home_content_excludes_review_keys() {
            let text = content_text(Screen::Home);
            assert!(!text.contains("confirm submission"));
        }
    }

    mod rendering {
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

        fn render_help(state: &HelpState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_help(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn title_includes_origin_screen_name() {
            let mut state = HelpState::new();
            state.set_origin(Screen::Panel);
            let output = render_help(&state, 80, 30);
            assert!(output.contains("Help"));
            assert!(output.contains("Station Details"));
        }

        #[test]
        fn renders_review_keys() {
            let mut state = HelpState::new();
            state.set_origin(Screen::Review);
            let output = render_help(&state, 80, 30);
            assert!(output.contains("confirm submission"));
        }

        #[test]
        fn footer_contains_q_and_esc() {
            let output = render_help(&HelpState::new(), 80, 30);
            assert!(output.contains("q/Esc"));
        }
    }
}
