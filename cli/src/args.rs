use clap::Parser;
use std::path::PathBuf;
use storefront_core::types::{EqualityKind, SearchSettings};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Debounced search over back-office record exports")]
#[command(version)]
pub struct Args {
    /// JSON file holding an array of records
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Field to search; repeat for several fields
    #[arg(short, long = "key", value_name = "FIELD")]
    pub keys: Vec<String>,

    /// Term to search for in one-shot mode
    #[arg(short, long)]
    pub term: Option<String>,

    /// Quiet period before a typed term is applied
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// How reloaded records are compared (structural, serialized)
    #[arg(long, value_name = "KIND")]
    pub equality: Option<EqualityKind>,

    /// Path to config.toml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read search terms from stdin, one per line
    #[arg(short, long)]
    pub interactive: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Applies command line overrides on top of file settings.
    pub fn apply_to(&self, mut settings: SearchSettings) -> SearchSettings {
        if !self.keys.is_empty() {
            settings.keys = self.keys.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            settings.debounce_ms = debounce_ms;
        }
        if let Some(equality) = self.equality {
            settings.equality = equality;
        }
        settings
    }
}
