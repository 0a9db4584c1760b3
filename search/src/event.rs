use std::sync::Arc;

/// Notifications emitted by the engine to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The filtered view was recomputed and differs from the previous one.
    ViewChanged { matched: usize, total: usize },
    /// A search was explicitly submitted, bypassing the debounce path.
    Submitted { term: String },
}

/// Callback invoked synchronously for every [`SearchEvent`].
///
/// Typically used to schedule a repaint or forward the event to a worker channel.
pub type Notify = Arc<dyn Fn(&SearchEvent) + Send + Sync>;
