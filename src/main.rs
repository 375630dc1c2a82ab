//! Signup TUI - a registration form in the terminal
//!
//! A Ratatui front end over a small form controller that validates email,
//! password, repeated password and terms acceptance.

mod app;
mod config;
mod controller;
mod domain;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use state::ValidationEvent;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One wake-up of the run loop
enum Input {
    Terminal(Event),
    Validation(ValidationEvent),
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = TuiConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut terminal_events = EventStream::new();

    loop {
        let size = terminal.size()?;
        app.terminal_size = Some((size.height, size.width));
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Wait for terminal input or a controller notification
        let input = tokio::select! {
            Some(event) = terminal_events.next() => Input::Terminal(event?),
            Some(event) = app.next_validation_event() => Input::Validation(event),
            else => return Ok(()),
        };

        match input {
            Input::Terminal(Event::Key(key)) => app.handle_key(key)?,
            Input::Terminal(Event::Mouse(mouse)) => app.handle_mouse(mouse)?,
            Input::Terminal(Event::Resize(_width, _height)) => {
                // Layout is recalculated on next draw
            }
            Input::Terminal(_) => {}
            Input::Validation(event) => app.handle_validation_event(event),
        }

        if app.should_quit() {
            tracing::debug!("quitting");
            return Ok(());
        }
    }
}
