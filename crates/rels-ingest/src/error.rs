use thiserror::Error;

/// Result type local to rels-ingest.
pub type Result<T> = std::result::Result<T, IngestionError>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("field '{field}' could not be read: {source}")]
    UnreadableField {
        field: String,
        #[source]
        source: BoxError,
    },

    #[error("not a record: {0}")]
    NotARecord(String),

    #[error("unsupported value for field '{field}': {kind}")]
    UnsupportedValue { field: String, kind: &'static str },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestionError {
    pub fn unreadable(field: impl Into<String>, source: impl Into<BoxError>) -> Self {
        IngestionError::UnreadableField {
            field: field.into(),
            source: source.into(),
        }
    }
}
