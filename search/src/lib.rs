//! Debounced client-side search over in-memory record collections.
//!
//! # Design
//!
//! - One [`SearchEngine`] per search box; no shared state between instances.
//! - The source collection is owned by the engine once handed over and is
//!   replaced wholesale on refetch. Content-identical replacements are
//!   detected by a [`ContentEquality`] strategy and leave the view untouched.
//! - Term changes go through a single trailing [`DebounceTimer`]; only the
//!   last term of a burst is applied.
//! - Matching is a case-insensitive substring test over string fields, gated
//!   on a minimum term length of [`MIN_TERM_CHARS`].
//!
//! # Non-blocking API
//!
//! - `set_search_term()`: Records the term and (re)arms the debounce timer
//! - `poll()`: Applies the pending term once its timer is due
//! - `filtered_view()`: Reads the current view without computing anything
//! - `next_deadline()`: Tells the host loop when to poll next

mod config;
mod debounce;
mod engine;
mod equality;
mod error;
mod event;
mod keys;
mod matcher;
mod results;

pub use config::SearchConfig;
pub use debounce::DebounceTimer;
pub use engine::SearchEngine;
pub use equality::{ContentEquality, SerializedEquality, StructuralEquality, for_kind};
pub use error::SearchError;
pub use event::{Notify, SearchEvent};
pub use keys::SearchKeys;
pub use matcher::{MIN_TERM_CHARS, filter_indices, is_filtering, record_matches};
pub use results::FilteredView;
pub use storefront_core::types::EqualityKind;
