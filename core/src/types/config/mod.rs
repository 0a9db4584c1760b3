mod app;

pub use app::{AppConfig, AppConfigError, EqualityKind, SearchSettings};
