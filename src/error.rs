use std::path::PathBuf;
use thiserror::Error;

/// The main error type for yoloexport operations.
///
/// Only failures that stop the run live here. Problems with individual
/// annotations are contained per file and show up in the
/// [`ExportReport`](crate::export::ExportReport) instead.
#[derive(Debug, Error)]
pub enum YoloExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write label file {path}: {source}")]
    WriteLabel {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write dataset index {path}: {source}")]
    WriteDatasetYaml {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse annotation JSON from {path}: {source}")]
    CorpusJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to discover annotation files under {path}: {message}")]
    CorpusDiscovery { path: PathBuf, message: String },

    #[error("Failed to render export report as JSON: {0}")]
    ReportJsonWrite(#[source] serde_json::Error),
}
