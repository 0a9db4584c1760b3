use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search keys must name at least one field")]
    EmptySearchKeys,

    #[error("search engine is not configured")]
    NotConfigured,

    #[error("search engine has been disposed")]
    Disposed,
}
