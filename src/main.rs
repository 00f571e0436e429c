//! Stargaze - Browse NASA imagery from the terminal
//!
//! A terminal UI application that shows NASA's astronomy picture of the day,
//! Mars rover photos queried by sol, and the day's near-Earth asteroids.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stargaze::app::App;
use stargaze::cache::SessionCache;
use stargaze::cli::{Cli, StartupConfig};
use stargaze::config::Config;
use stargaze::data::NasaClient;
use stargaze::favorites::FavoriteStore;
use stargaze::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments before touching the terminal
    let cli = Cli::parse();
    let startup = match StartupConfig::from_cli(&cli) {
        Ok(startup) => startup,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    // Build the stores and client the app runs over
    let config = Config::from_env().with_api_key_override(startup.api_key.clone());
    let client = NasaClient::new(config.api_key).with_base_url(config.api_base);
    let cache = SessionCache::new();
    let favorites = FavoriteStore::open();

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance and kick off the first fetch
    let mut app = App::with_startup_config(startup, client, cache, favorites);
    app.activate();

    // Main event loop
    loop {
        // Apply fetch results that arrived since the last frame, then
        // fire the debounced sol fetch if its quiet period elapsed
        app.poll_fetch_messages();
        app.tick();

        // Render UI
        terminal.draw(|frame| ui::render(frame, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
