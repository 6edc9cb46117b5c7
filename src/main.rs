#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use station_onboard::config::{Cli, Config};
use station_onboard::logging::init_logging;
use station_onboard::model::Onboarding;
use station_onboard::sink::TracingSink;
use station_onboard::tui::App;

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_cli(Cli::parse())?;
    init_logging(&config)?;
    tracing::info!(
        log_file = %config.log_file.display(),
        connect_delay_ms = config.connect_delay.as_millis() as u64,
        "starting station-onboard"
    );

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(Onboarding::with_delay(config.connect_delay), TracingSink::new());
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    if let Err(e) = &result {
        tracing::error!(error = %e, "app exited with error");
    }
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
