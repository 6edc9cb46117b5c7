//! TUI screen implementations.

pub mod help;
pub mod home;
pub mod panel;
pub mod review;

pub use help::{HelpState, draw_help};
pub use home::{HomeState, draw_home};
pub use panel::{PanelState, draw_panel};
pub use review::{ReviewState, draw_review};
