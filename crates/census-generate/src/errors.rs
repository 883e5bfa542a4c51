use thiserror::Error;

/// Errors emitted by the census generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation exhausted: no valid {what} after {attempts} attempts")]
    Exhausted { what: &'static str, attempts: u32 },
    #[error("delivery of file {file_index} failed (delivered: {delivered:?}): {message}")]
    Delivery {
        file_index: usize,
        delivered: Vec<usize>,
        message: String,
    },
    #[error("file {file_index} could not be produced (delivered: {delivered:?}): {source}")]
    FileFailed {
        file_index: usize,
        delivered: Vec<usize>,
        #[source]
        source: Box<GenerationError>,
    },
    #[error("batch cancelled after {completed} file(s)")]
    Cancelled { completed: usize },
    #[error("core error: {0}")]
    Core(#[from] census_core::Error),
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
