use thiserror::Error;

#[derive(Debug, Error)]
pub enum PriceTableError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PriceTableError {
    fn from(e: serde_json::Error) -> Self {
        PriceTableError::SerializationError(e.to_string())
    }
}
