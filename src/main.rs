use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use decider::app::{persistence::ListPersistence, r#loop::run_loop, state::AppState};
use decider::config::AppConfig;
use decider::domain::store::KeyValueStore;
use decider::infrastructure::{FileStore, MemoryStore};
use decider::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let logging_guard = logging::init();
    setup_panic_hook();

    let config = AppConfig::load();
    tracing::info!(
        theme = config.theme.label(),
        data_dir = %config.data_dir().display(),
        "starting decider"
    );
    // --ephemeral keeps lists in memory for a throwaway session.
    let store: Arc<dyn KeyValueStore> = if std::env::args().any(|arg| arg == "--ephemeral") {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(config.data_dir()))
    };
    let persistence = ListPersistence::new(store);
    let app_state = AppState::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, persistence).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "exited with error");
        eprintln!("{err:?}");
        if let Some(guard) = &logging_guard {
            eprintln!("Logs: {}", guard.log_dir().display());
        }
    }

    Ok(())
}
