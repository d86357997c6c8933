/// All application errors, categorized by domain.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ── Database ──
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database directory not found: {0}")]
    DatabaseDirNotFound(String),

    // ── Serialization ──
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversions from external errors ──

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
