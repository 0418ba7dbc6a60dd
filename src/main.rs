mod app;
mod clipboard;
mod config;
mod document;
mod error;
mod event;
mod http;
mod logging;
mod state;
mod terminal;
mod ui;

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::sync::mpsc;

use crate::app::App;
use crate::document::Document;
use crate::error::AppError;
use crate::event::Event;

/// Browse an OpenAPI document in the terminal.
#[derive(Debug, Parser)]
#[command(name = "apiscope", version)]
struct Args {
    /// YAML or JSON document. Read from stdin when omitted.
    file: Option<PathBuf>,

    /// Settings file (default: <config dir>/apiscope/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL for generated commands when the document lists no servers
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Start with this filter applied
    #[arg(short, long, value_name = "QUERY")]
    search: Option<String>,

    /// Write logs here instead of the default location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = config::load(args.config.as_deref())?.with_cli(args.server, args.log_file);
    if let Err(e) = logging::init(&config.log_file) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let doc = match load_document(args.file.as_deref()) {
        Ok(doc) => doc,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    let warnings = document::validate(&doc);
    if !warnings.is_empty() {
        eprintln!("Warning: document has validation errors:");
        for warning in &warnings {
            eprintln!("  - {warning}");
            tracing::warn!(%warning, "document validation");
        }
        eprintln!("Attempting to continue with partial data...");
    }

    let mut app = App::new(doc, config);
    if let Some(query) = args.search.as_deref().filter(|q| !q.is_empty()) {
        app.state.apply_query(query);
    }
    tracing::info!(
        title = %app.state.title,
        endpoints = app.state.endpoints.len(),
        components = app.state.components.len(),
        webhooks = app.state.webhooks.len(),
        "document loaded"
    );

    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    let mut terminal = terminal::init()?;
    let size = terminal.size()?;
    app.handle_event(Event::Resize(size.width, size.height));

    // Background thread: forward crossterm events until the receiver is gone
    std::thread::spawn(move || loop {
        let event = match crossterm::event::read() {
            Ok(crossterm::event::Event::Key(key)) => Event::Key(key),
            Ok(crossterm::event::Event::Resize(w, h)) => Event::Resize(w, h),
            Ok(_) => continue,
            Err(e) => {
                tracing::error!(error = %e, "terminal event read failed");
                break;
            }
        };
        if tx.send(event).is_err() {
            break;
        }
    });

    let result = run_loop(&mut terminal, &mut app, &mut rx).await;

    terminal::restore()?;
    result
}

/// Read and parse the document, returning the message to print on failure.
fn load_document(file: Option<&Path>) -> Result<Document, String> {
    let content = match file {
        Some(path) => read_file(path).map_err(|e| format!("Error reading file: {e}"))?,
        None => {
            if std::io::stdin().is_terminal() {
                return Err(
                    "Error: no input. Pass a file path or pipe a document on stdin.".to_string()
                );
            }
            read_stdin().map_err(|e| format!("Error reading from stdin: {e}"))?
        }
    };
    document::parse(&content).map_err(|e| format!("Error parsing document: {e}"))
}

fn read_file(path: &Path) -> Result<String, AppError> {
    Ok(std::fs::read_to_string(path)?)
}

fn read_stdin() -> Result<String, AppError> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

async fn run_loop(
    terminal: &mut terminal::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::layout::render(frame, &app.state))?;

        match rx.recv().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.state.should_quit {
            break;
        }
    }
    Ok(())
}
