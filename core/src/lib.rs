//! Data model shared by the storefront search crates.
//!
//! - [`types::Record`]: field/value records from the back-office API.
//! - [`types::FieldName`]: validated names of searchable fields.
//! - [`types::AppConfig`]: `config.toml` settings.
//! - [`source`]: turning fetched JSON payloads into record collections.

pub mod source;
pub mod types;
