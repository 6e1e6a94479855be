use std::path::PathBuf;

use thiserror::Error;

use crate::ygoprodeck_client::LookupError;

pub type Result<T> = std::result::Result<T, UpdaterError>;

/// Everything that can end a run early. All variants are fatal to the run;
/// `main` is the only place that turns them into an exit status.
#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error("Unable to find '{}' in this directory...", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("collection file is not valid CSV: {0}")]
    InputMalformed(#[source] csv::Error),

    #[error("collection file is empty, expected a header line")]
    MissingHeader,

    #[error("collection line {line} has {found} columns, expected {expected}")]
    InputRowWidth {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("failed to open file '{}': {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write updated collection: {0}")]
    OutputWrite(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("row {row}: {source}")]
    Lookup {
        row: usize,
        #[source]
        source: LookupError,
    },

    #[error("row {row}: no card data returned for id '{card_id}'")]
    EmptyResult { row: usize, card_id: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
