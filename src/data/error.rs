//! Error types for data loading and preparation.

/// Result type for data operations
pub type DataResult<T> = Result<T, DataError>;

/// Error type for data loading, preparation, and export.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Source file absent or unreadable. Fatal: nothing can render.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row failed its declared column type or the date column was
    /// unparsable. Fatal for the load; rows are never silently coerced.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// CSV export writer error.
    #[error("csv export failed: {0}")]
    Export(String),
}

impl DataError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<String>, source: csv::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
