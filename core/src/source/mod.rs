//! Loading of source collections handed over by the data layer.
//!
//! A collection is a JSON array of objects. Fetching is out of scope; these
//! helpers only turn already-fetched payloads into [`Record`]s.

use crate::types::{Record, RecordError};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("collection must be a JSON array")]
    NotAnArray,

    #[error("invalid record at index {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: RecordError,
    },
}

/// Parses a JSON array of objects into records, preserving order.
pub fn parse_collection(content: &str) -> Result<Vec<Record>, SourceError> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(items) = value else {
        return Err(SourceError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Record::from_value(item).map_err(|source| SourceError::Record { index, source })
        })
        .collect()
}

/// Reads and parses a collection file.
pub fn load_collection(path: &Path) -> Result<Vec<Record>, SourceError> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_collection(&content)?;
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "source.load_collection"
    );
    Ok(records)
}
