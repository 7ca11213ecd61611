use thiserror::Error;

pub type Result<T> = std::result::Result<T, FacetError>;

#[derive(Debug, Error)]
pub enum FacetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed:\n{}", .errors.join("\n"))]
    InvalidGroups { errors: Vec<String> },

    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: String },
}

impl FacetError {
    /// Validation messages, empty for other kinds
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::InvalidGroups { errors } => errors,
            _ => &[],
        }
    }
}
