pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, EqualityKind, SearchSettings};

pub(crate) mod field;
pub use field::{FieldName, FieldNameError, MAX_FIELD_NAME_LENGTH};

pub(crate) mod record;
pub use record::{Record, RecordError};
