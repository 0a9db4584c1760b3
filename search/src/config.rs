use storefront_core::types::SearchSettings;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Quiet period after the last term change before it is applied.
    /// Zero applies terms synchronously.
    pub debounce: Duration,
}

impl SearchConfig {
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

    pub fn with_debounce(debounce: Duration) -> Self {
        Self { debounce }
    }

    /// No debounce; every term is applied as soon as it is set.
    pub fn immediate() -> Self {
        Self::with_debounce(Duration::ZERO)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Self::DEFAULT_DEBOUNCE,
        }
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            debounce: Duration::from_millis(settings.debounce_ms),
        }
    }
}
