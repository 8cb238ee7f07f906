use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io::{stdout, Stdout};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unwind_core::settings::Settings;
mod ui;
use ui::app::App;

const LOG_FILE: &str = "unwind.log";

#[tokio::main]
async fn main() -> Result<()> {
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };
    init_logging(&settings)?;
    info!(config = %Settings::config_path().display(), "starting unwind");

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);

    let result = app.run(&mut terminal).await;

    restore_terminal(&mut terminal)?;

    result
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(settings: &Settings) -> Result<()> {
    let dir = Settings::log_dir();
    fs::create_dir_all(&dir).with_context(|| format!("creating log dir {}", dir.display()))?;
    let file = File::create(dir.join(LOG_FILE)).context("creating log file")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
