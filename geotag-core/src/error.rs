use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeotagError {
    #[error("Failed to read input file {}: {}", .path.display(), .source)]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file {}: {}", .path.display(), .source)]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeotagError>;
