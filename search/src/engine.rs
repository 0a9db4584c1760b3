//! Debounced filter engine over a replaceable source collection.

use crate::config::SearchConfig;
use crate::debounce::DebounceTimer;
use crate::equality::{ContentEquality, StructuralEquality};
use crate::error::SearchError;
use crate::event::{Notify, SearchEvent};
use crate::keys::SearchKeys;
use crate::matcher;
use crate::results::FilteredView;
use std::time::Instant;
use storefront_core::types::{FieldName, Record};
use tracing::{debug, trace};

/// Search engine for one search box.
///
/// The engine owns the source collection and a single debounce timer. The
/// host forwards keystrokes to `set_search_term`, calls `poll` from its event
/// loop, and reads `filtered_view` when rendering. The `notify` callback is
/// invoked synchronously whenever the view changes or a search is submitted.
pub struct SearchEngine {
    config: SearchConfig,
    keys: Option<SearchKeys>,
    source: Vec<Record>,
    /// Indices into `source` making up the current view.
    matches: Vec<usize>,
    applied_term: String,
    pending_term: Option<String>,
    timer: DebounceTimer,
    equality: Box<dyn ContentEquality>,
    notify: Notify,
    recomputations: u64,
    disposed: bool,
}

/// Create operations.
impl SearchEngine {
    /// Creates an unconfigured engine using structural equality.
    pub fn new(notify: Notify) -> Self {
        Self::with_equality(Box::new(StructuralEquality), notify)
    }

    /// Creates an unconfigured engine with a custom change-detection strategy.
    pub fn with_equality(equality: Box<dyn ContentEquality>, notify: Notify) -> Self {
        Self {
            config: SearchConfig::default(),
            keys: None,
            source: Vec::new(),
            matches: Vec::new(),
            applied_term: String::new(),
            pending_term: None,
            timer: DebounceTimer::new(),
            equality,
            notify,
            recomputations: 0,
            disposed: false,
        }
    }
}

/// Configuration operations.
impl SearchEngine {
    /// (Re)initializes the engine with a source, the fields to scan, and timing.
    ///
    /// An empty key set is rejected and leaves the engine as it was. A pending
    /// term timer is kept; it fires at the deadline set when it was armed. A
    /// source deep-equal to the current one does not reset the view.
    pub fn configure(
        &mut self,
        source: Vec<Record>,
        keys: impl IntoIterator<Item = FieldName>,
        config: SearchConfig,
    ) -> Result<(), SearchError> {
        if self.disposed {
            return Err(SearchError::Disposed);
        }
        let keys = SearchKeys::new(keys)?;

        let keys_changed = self.keys.as_ref() != Some(&keys);
        self.keys = Some(keys);
        self.config = config;

        let source_changed = self.replace_source(source);
        debug!(
            records = self.source.len(),
            keys_changed,
            source_changed,
            debounce = ?config.debounce,
            "search.engine.configure"
        );

        if keys_changed || source_changed {
            self.recompute(source_changed);
        }
        Ok(())
    }

    /// Replaces the source collection, keeping keys and timing.
    ///
    /// Returns true if the content differed and the view was recomputed.
    pub fn set_source(&mut self, source: Vec<Record>) -> Result<bool, SearchError> {
        if self.disposed {
            return Err(SearchError::Disposed);
        }
        if self.keys.is_none() {
            return Err(SearchError::NotConfigured);
        }

        if !self.replace_source(source) {
            return Ok(false);
        }
        self.recompute(true);
        Ok(true)
    }

    fn replace_source(&mut self, source: Vec<Record>) -> bool {
        if self.equality.is_unchanged(&self.source, &source) {
            trace!(records = source.len(), "search.engine.source_unchanged");
            return false;
        }
        self.source = source;
        true
    }
}

/// Search operations.
impl SearchEngine {
    /// Sets the live search term, debounced against the current time.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.set_search_term_at(term, Instant::now());
    }

    /// Sets the live search term as if typed at `now`.
    ///
    /// Restarts the debounce timer; only the last term of a burst is applied.
    /// With a zero debounce the term is applied immediately.
    pub fn set_search_term_at(&mut self, term: impl Into<String>, now: Instant) {
        if self.disposed {
            return;
        }
        let term = term.into();

        if self.config.debounce.is_zero() {
            self.timer.cancel();
            self.pending_term = None;
            self.apply_term(term);
            return;
        }

        let replaced = self.timer.schedule(now + self.config.debounce);
        trace!(term = %term, replaced, "search.engine.debounce_scheduled");
        self.pending_term = Some(term);
    }

    /// Applies the pending term if its timer is due. Returns true if the view changed.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        if self.disposed || !self.timer.fire_if_due(now) {
            return false;
        }
        match self.pending_term.take() {
            Some(term) => self.apply_term(term),
            None => false,
        }
    }

    /// Instant at which the pending term becomes due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Explicit, non-debounced search submission.
    ///
    /// Emits [`SearchEvent::Submitted`] and leaves the view and timer alone.
    pub fn submit_search(&self, term: &str) {
        if self.disposed {
            return;
        }
        debug!(term, "search.engine.submit");
        (self.notify)(&SearchEvent::Submitted {
            term: term.to_string(),
        });
    }

    pub fn filtered_view(&self) -> FilteredView<'_> {
        FilteredView {
            source: &self.source,
            indices: &self.matches,
        }
    }

    fn apply_term(&mut self, term: String) -> bool {
        self.applied_term = term;
        if self.keys.is_none() {
            return false;
        }
        self.recompute(false)
    }

    /// Returns true if the view changed. A replaced source always counts as a
    /// change, since the same indices may now point at different records.
    fn recompute(&mut self, source_changed: bool) -> bool {
        let Some(keys) = self.keys.as_ref() else {
            return false;
        };

        let matches = matcher::filter_indices(&self.source, keys, &self.applied_term);
        self.recomputations += 1;

        let changed = source_changed || matches != self.matches;
        self.matches = matches;
        debug!(
            term = %self.applied_term,
            matched = self.matches.len(),
            total = self.source.len(),
            changed,
            "search.engine.recompute"
        );

        if changed {
            (self.notify)(&SearchEvent::ViewChanged {
                matched: self.matches.len(),
                total: self.source.len(),
            });
        }
        changed
    }
}

/// State accessors.
impl SearchEngine {
    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn keys(&self) -> Option<&SearchKeys> {
        self.keys.as_ref()
    }

    pub fn source(&self) -> &[Record] {
        &self.source
    }

    /// Term the current view was computed with.
    pub fn applied_term(&self) -> &str {
        &self.applied_term
    }

    /// Term waiting for its debounce timer, if any.
    pub fn pending_term(&self) -> Option<&str> {
        self.pending_term.as_deref()
    }

    /// Number of times the view has been recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

/// Teardown.
impl SearchEngine {
    /// Clears the pending timer and stops the engine. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        let had_pending = self.timer.cancel();
        self.pending_term = None;
        if !self.disposed {
            self.disposed = true;
            self.equality.reset();
            debug!(had_pending, "search.engine.dispose");
        }
    }
}

impl Drop for SearchEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}
