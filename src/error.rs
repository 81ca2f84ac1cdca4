use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying a recipe table
#[derive(Error, Debug)]
pub enum RecipeQueryError {
    /// The recipe file does not exist at the configured path
    #[error("Recipe file not found: {}. Check that the data path is correct.", path.display())]
    NotFoundError { path: PathBuf },

    /// The recipe file is not a mapping of URL to recipe record
    #[error("Failed to parse recipe data: {0}")]
    ParseError(String),

    /// A query referenced a column the table does not have
    #[error("Unknown field: {0}")]
    FieldNotFoundError(String),

    /// A row's value does not have the type the query needs
    #[error("Type mismatch in {field}: {detail}")]
    TypeMismatchError { field: &'static str, detail: String },

    /// Error reading the recipe file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Result type alias for recipe table operations
pub type Result<T> = std::result::Result<T, RecipeQueryError>;
