//! Background worker thread owning the SearchEngine.

use serde::Serialize;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use storefront_core::source::SourceError;
use storefront_core::types::{FieldName, Record};
use storefront_search::{ContentEquality, SearchConfig, SearchEngine, SearchError, SearchEvent};
use tracing::{debug, warn};

pub enum Request {
    Search { term: String },
    Submit { term: String },
    /// Re-read the source collection.
    Reload,
    /// Posted by the engine's notify callback.
    ViewChanged,
    /// Posted by the engine's notify callback.
    Submitted { term: String },
    /// End of input: apply any pending term, deliver its view, then stop.
    Drain,
    /// Stop immediately, discarding any pending term.
    Shutdown,
}

impl Request {
    /// Parses one line of interactive input.
    pub fn from_line(line: &str) -> Self {
        match line.trim_end_matches(['\r', '\n']) {
            ":quit" | ":q" => Request::Shutdown,
            ":reload" => Request::Reload,
            line => match line.strip_prefix(":submit ") {
                Some(term) => Request::Submit {
                    term: term.to_string(),
                },
                None => Request::Search {
                    term: line.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Response {
    View {
        term: String,
        total: usize,
        records: Vec<Record>,
    },
    Submitted {
        term: String,
    },
    Reloaded {
        changed: bool,
    },
    Error {
        message: String,
    },
}

pub type Loader = Box<dyn Fn() -> Result<Vec<Record>, SourceError> + Send>;

/// Everything the worker needs to build its engine.
pub struct WorkerSetup {
    pub source: Vec<Record>,
    pub keys: Vec<FieldName>,
    pub config: SearchConfig,
    pub equality: Box<dyn ContentEquality>,
    pub loader: Loader,
}

/// Starts the worker thread.
///
/// The engine is configured before the thread is spawned so configuration
/// errors reach the caller. Responses are sent via `response_tx`; the caller
/// should drain them on another thread. The engine's notify callback holds a
/// request sender, so the worker only exits on `Request::Drain` or
/// `Request::Shutdown`.
pub fn start(
    setup: WorkerSetup,
    response_tx: Sender<Response>,
) -> Result<(Sender<Request>, JoinHandle<()>), SearchError> {
    let (request_tx, request_rx) = mpsc::channel::<Request>();

    let notify_tx = request_tx.clone();
    let notify = Arc::new(move |event: &SearchEvent| {
        let request = match event {
            SearchEvent::ViewChanged { .. } => Request::ViewChanged,
            SearchEvent::Submitted { term } => Request::Submitted { term: term.clone() },
        };
        let _ = notify_tx.send(request);
    });

    let mut search = SearchEngine::with_equality(setup.equality, notify);
    search.configure(setup.source, setup.keys, setup.config)?;

    let handle = thread::spawn(move || {
        worker_loop(search, setup.loader, request_rx, response_tx);
    });

    Ok((request_tx, handle))
}

fn worker_loop(
    mut search: SearchEngine,
    loader: Loader,
    requests: mpsc::Receiver<Request>,
    responses: Sender<Response>,
) {
    loop {
        let request = match search.next_deadline() {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match requests.recv_timeout(timeout) {
                    Ok(request) => request,
                    Err(RecvTimeoutError::Timeout) => {
                        search.poll();
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match requests.recv() {
                Ok(request) => request,
                Err(_) => break,
            },
        };

        match request {
            Request::Search { term } => {
                search.set_search_term(term);
            }
            Request::Submit { term } => {
                search.submit_search(&term);
            }
            Request::Reload => {
                handle_reload(&mut search, &loader, &responses);
            }
            Request::ViewChanged => {
                send_view(&search, &responses);
            }
            Request::Submitted { term } => {
                let _ = responses.send(Response::Submitted { term });
            }
            Request::Drain => {
                drain(&mut search, &requests, &responses);
                break;
            }
            Request::Shutdown => {
                break;
            }
        }
    }

    search.dispose();
    debug!("worker.stopped");
}

/// Fires the pending timer without waiting and forwards the notifications it queued.
fn drain(
    search: &mut SearchEngine,
    requests: &mpsc::Receiver<Request>,
    responses: &Sender<Response>,
) {
    if let Some(deadline) = search.next_deadline() {
        let applied = search.poll_at(deadline);
        debug!(applied, "worker.drain");
    }

    while let Ok(request) = requests.try_recv() {
        match request {
            Request::ViewChanged => send_view(search, responses),
            Request::Submitted { term } => {
                let _ = responses.send(Response::Submitted { term });
            }
            _ => {}
        }
    }
}

fn handle_reload(search: &mut SearchEngine, loader: &Loader, responses: &Sender<Response>) {
    let result = loader()
        .map_err(|e| e.to_string())
        .and_then(|records| search.set_source(records).map_err(|e| e.to_string()));

    match result {
        Ok(changed) => {
            debug!(changed, "worker.reload");
            let _ = responses.send(Response::Reloaded { changed });
        }
        Err(message) => {
            warn!(%message, "worker.reload_failed");
            let _ = responses.send(Response::Error { message });
        }
    }
}

fn send_view(search: &SearchEngine, responses: &Sender<Response>) {
    let view = search.filtered_view();
    let _ = responses.send(Response::View {
        term: search.applied_term().to_string(),
        total: view.total(),
        records: view.to_vec(),
    });
}
