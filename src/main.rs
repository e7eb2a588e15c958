// Tab Panels
// TUI host for an ARIA tab widget: arrow keys move focus, clicks select panels

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use tab_panels::core::validation::{has_errors, validate};
use tab_panels::core::{App, AppConfig, Document};
use tab_panels::ui::run_app;

//--------------------------------------------------------<<

/// Terminal host for an accessible tab widget
#[derive(Parser, Debug)]
#[command(name = "tab-panels", version, about)]
struct Args {
    /// Host document markup (YAML); defaults to the bundled planets demo
    document: Option<PathBuf>,

    /// Validate the document, print diagnostics and exit
    #[arg(long)]
    check: bool,

    /// Log file (overrides the compiled default)
    #[arg(long)]
    log_file: Option<String>,

    /// Log level when RUST_LOG is unset (overrides the compiled default)
    #[arg(long)]
    log_level: Option<String>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::default();
    if let Some(log_file) = args.log_file {
        config.logging.log_file = log_file;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if args.no_mouse {
        config.ui.mouse_enabled = false;
    }

    init_logging(&config)?;

    let path = args.document.unwrap_or_else(default_document_path);
    let document = Document::load(&path)
        .with_context(|| format!("Failed to load document: {}", path.display()))?;
    tracing::info!(path = %path.display(), "document loaded");

    let diagnostics = validate(&document);
    if args.check {
        for diagnostic in &diagnostics {
            println!("{}", diagnostic);
        }
        if has_errors(&diagnostics) {
            std::process::exit(1);
        }
        println!("{}: ok", path.display());
        return Ok(());
    }

    let mut app = App::new(config, document);
    run_terminal(&mut app)
}

/// Bundled demo document under the crate root
fn default_document_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push("planets.yaml");
    path
}

/// Send tracing output to the log file; the terminal belongs to the UI
fn init_logging(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.logging.log_file)
        .with_context(|| format!("Failed to open log file: {}", config.logging.log_file))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Set up the terminal, run the event loop, and always restore the terminal
fn run_terminal(app: &mut App) -> Result<()> {
    let mouse = app.config.ui.mouse_enabled;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Best effort: every step runs even if an earlier one fails
    let mut restore: Vec<io::Result<()>> = vec![disable_raw_mode()];
    restore.push(execute!(terminal.backend_mut(), LeaveAlternateScreen));
    if mouse {
        restore.push(execute!(terminal.backend_mut(), DisableMouseCapture));
    }
    restore.push(terminal.show_cursor());

    if let Err(ref e) = result {
        tracing::error!("event loop failed: {:#}", e);
    }
    result?;
    first_error(restore)?;
    Ok(())
}

/// First failure among steps that have all already run
fn first_error(steps: Vec<io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}
