//! Signup TUI - terminal sign-up form
//!
//! A Ratatui form for username, email, password, role and terms agreement,
//! validated on submit and remembered across sessions.

mod app;
mod config;
mod platform;
mod record;
mod state;
mod storage;
mod store;
mod sync;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::FormController;
use std::io;
use std::sync::Arc;
use storage::{FileStore, KeyValueStore, MemoryStore};
use store::FormStore;
use sync::Synchronizer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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

    // Hydrate before taking over the terminal
    let persist = config.persist_submissions();
    let sync = Synchronizer::new(Arc::new(FormStore::new()), open_storage(&config));
    let controller = FormController::new(sync).await;
    let mut app = App::new(controller, persist);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Pick the storage backend for this session
fn open_storage(config: &TuiConfig) -> Arc<dyn KeyValueStore> {
    if !config.persist_submissions() {
        tracing::info!("Persistence disabled, keeping form data in memory");
        return Arc::new(MemoryStore::new());
    }

    let store = match &config.storage_dir {
        Some(dir) => Some(FileStore::new(dir)),
        None => FileStore::default_location(),
    };
    match store {
        Some(store) => {
            tracing::info!("Storing form data in {}", store.dir().display());
            Arc::new(store)
        }
        None => {
            tracing::warn!("No data directory available, keeping form data in memory");
            Arc::new(MemoryStore::new())
        }
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up shared state writes before drawing
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
