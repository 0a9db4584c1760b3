//! Filtered view snapshot.

use storefront_core::types::Record;

/// Snapshot of the filtered view that provides zero-copy iteration.
///
/// Borrows from the SearchEngine. Use `iter()` to walk matching records in
/// source order without collecting.
#[derive(Debug, Clone, Copy)]
pub struct FilteredView<'a> {
    pub(crate) source: &'a [Record],
    pub(crate) indices: &'a [usize],
}

impl<'a> FilteredView<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + use<'a> {
        let source = self.source;
        self.indices.iter().map(move |&index| &source[index])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of records in the source the view was computed from.
    pub fn total(&self) -> usize {
        self.source.len()
    }

    pub fn to_vec(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }
}
