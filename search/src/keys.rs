use crate::error::SearchError;
use storefront_core::types::FieldName;

/// Non-empty, duplicate-free list of fields to scan, in match order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKeys(Vec<FieldName>);

impl SearchKeys {
    /// Builds a key set, keeping the first occurrence of each field.
    pub fn new(keys: impl IntoIterator<Item = FieldName>) -> Result<Self, SearchError> {
        let mut unique: Vec<FieldName> = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }

        if unique.is_empty() {
            return Err(SearchError::EmptySearchKeys);
        }
        Ok(Self(unique))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldName> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchKeys {
    type Item = &'a FieldName;
    type IntoIter = std::slice::Iter<'a, FieldName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
