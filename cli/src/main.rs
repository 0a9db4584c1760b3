//! Storefront search CLI.
//!
//! One-shot mode prints the records matching `--term` as JSON lines.
//! Interactive mode treats every stdin line as the current contents of the
//! search box and prints a JSON event whenever the debounced view changes.

mod args;
mod worker;

use args::Args;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::thread;
use storefront_core::source;
use storefront_core::types::{AppConfig, Record, SearchSettings};
use storefront_search::{SearchConfig, SearchEngine, SearchEvent, for_kind};
use thiserror::Error;
use tracing::info;
use worker::{Request, Response, WorkerSetup};

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = resolve_settings(&args)?;
    let records = source::load_collection(&args.records)?;
    info!(
        path = %args.records.display(),
        records = records.len(),
        keys = ?settings.keys,
        "Loaded records"
    );

    if args.interactive {
        run_interactive(args.records.clone(), records, &settings)
    } else {
        run_once(records, &settings, args.term.as_deref().unwrap_or_default())
    }
}

/// Loads config.toml (if given), applies flags, and validates the result.
fn resolve_settings(args: &Args) -> Result<SearchSettings, Box<dyn std::error::Error>> {
    let file_config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let config = AppConfig {
        search: args.apply_to(file_config.search),
    };
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(CliError::InvalidConfig(errors.join("; ")).into());
    }
    Ok(config.search)
}

/// Applies a single term without debouncing and prints the matches.
fn run_once(
    records: Vec<Record>,
    settings: &SearchSettings,
    term: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let notify = Arc::new(|_: &SearchEvent| {});
    let mut search = SearchEngine::with_equality(for_kind(settings.equality), notify);
    search.configure(records, settings.field_names()?, SearchConfig::immediate())?;
    search.set_search_term(term);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in search.filtered_view().iter() {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    info!(
        term,
        matched = search.filtered_view().len(),
        total = search.filtered_view().total(),
        "Search complete"
    );
    Ok(())
}

fn run_interactive(
    path: PathBuf,
    records: Vec<Record>,
    settings: &SearchSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let (response_tx, response_rx) = mpsc::channel::<Response>();
    let setup = WorkerSetup {
        source: records,
        keys: settings.field_names()?,
        config: SearchConfig::from(settings),
        equality: for_kind(settings.equality),
        loader: Box::new(move || source::load_collection(&path)),
    };
    let (request_tx, worker) = worker::start(setup, response_tx)?;

    let printer = thread::spawn(move || -> io::Result<()> {
        let stdout = io::stdout();
        for response in response_rx {
            let mut out = stdout.lock();
            serde_json::to_writer(&mut out, &response)?;
            writeln!(out)?;
            out.flush()?;
        }
        Ok(())
    });

    let mut quit = false;
    for line in io::stdin().lock().lines() {
        let request = Request::from_line(&line?);
        quit = matches!(request, Request::Shutdown);
        if request_tx.send(request).is_err() || quit {
            break;
        }
    }
    if !quit {
        // End of input still owes the user the view for the last term typed.
        let _ = request_tx.send(Request::Drain);
    }

    if worker.join().is_err() {
        tracing::error!("Worker thread panicked");
    }
    match printer.join() {
        Ok(result) => result?,
        Err(_) => tracing::error!("Printer thread panicked"),
    }
    Ok(())
}
