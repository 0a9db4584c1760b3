//! Strategies for detecting content-identical source replacements.

use storefront_core::types::{EqualityKind, Record};

/// Decides whether a replacement source has the same content as the current one.
///
/// Implementations may cache state from the previous comparison; the engine
/// calls `is_unchanged` once per source update, always with its current source.
pub trait ContentEquality: Send {
    fn is_unchanged(&mut self, current: &[Record], next: &[Record]) -> bool;

    /// Drops any cached comparison state.
    fn reset(&mut self) {}
}

/// Deep field-by-field comparison. Insensitive to field order.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralEquality;

impl ContentEquality for StructuralEquality {
    fn is_unchanged(&mut self, current: &[Record], next: &[Record]) -> bool {
        current == next
    }
}

/// Compares digests of the serialized collections.
///
/// The digest of the current source is kept between updates, so each update
/// serializes only the incoming collection.
#[derive(Debug, Default, Clone)]
pub struct SerializedEquality {
    cached: Option<blake3::Hash>,
}

impl SerializedEquality {
    pub fn new() -> Self {
        Self::default()
    }

    fn digest(records: &[Record]) -> Option<blake3::Hash> {
        let mut hasher = blake3::Hasher::new();
        serde_json::to_writer(&mut hasher, records).ok()?;
        Some(hasher.finalize())
    }
}

impl ContentEquality for SerializedEquality {
    fn is_unchanged(&mut self, current: &[Record], next: &[Record]) -> bool {
        let current_digest = match self.cached {
            Some(digest) => Some(digest),
            None => Self::digest(current),
        };
        let next_digest = Self::digest(next);

        match (current_digest, next_digest) {
            (Some(current), Some(next)) if current == next => {
                self.cached = Some(current);
                true
            }
            (_, next) => {
                self.cached = next;
                false
            }
        }
    }

    fn reset(&mut self) {
        self.cached = None;
    }
}

/// Builds the strategy selected in configuration.
pub fn for_kind(kind: EqualityKind) -> Box<dyn ContentEquality> {
    match kind {
        EqualityKind::Structural => Box::new(StructuralEquality),
        EqualityKind::Serialized => Box::new(SerializedEquality::new()),
    }
}
