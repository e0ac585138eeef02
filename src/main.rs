//! investyc-tui - A terminal front-end for the Investyc demo platform
//!
//! Entry point: loads config, installs file logging, then runs the
//! component event loop until the user quits.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{info, warn};

fn main() -> Result<()> {
    // A broken config file should never keep the demo from starting
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Err(err) = logging::init(&config) {
        eprintln!("Warning: logging disabled: {:#}", err);
    }
    if let Some(err) = config_error {
        warn!(error = %err, "ignoring malformed config file, using defaults");
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    let mut app = App::new(config);
    app.init()?;
    info!(page = %app.current_page(), "investyc-tui started");

    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("investyc-tui exited");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            // No event within the tick rate
            None => Some(Action::Tick),
        };

        // An action may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
