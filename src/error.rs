use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShoppingError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("There is an error in the file '{file}': {reason}")]
    FileFormat { file: String, reason: String },

    #[error(
        "The ingredient '{ingredient}' is needed both in '{first_unit}' and in '{other_unit}'"
    )]
    UnitMismatch {
        ingredient: String,
        first_unit: String,
        other_unit: String,
    },

    #[error("Cannot read the file '{file}': {source}")]
    ReadFile {
        file: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ShoppingError {
    /// Build a `FileFormat` error for a structural defect in `file`.
    pub fn file_format(file: impl Into<String>, reason: impl Into<String>) -> Self {
        ShoppingError::FileFormat {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShoppingError>;
