use thiserror::Error;

use crate::domain::MAX_TITLE_LENGTH;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title cannot be empty")]
    TitleEmpty,

    #[error("Title must be less than {} characters", MAX_TITLE_LENGTH)]
    TitleTooLong { length: usize },

    #[error("No todo IDs provided")]
    NoIdsProvided,

    #[error("Todo not found")]
    NotFound { id: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    pub fn not_found(id: impl Into<String>) -> Self {
        TodoError::NotFound { id: id.into() }
    }

    /// Whether the error was caused by the caller's input rather than the server.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TodoError::TitleRequired
                | TodoError::TitleEmpty
                | TodoError::TitleTooLong { .. }
                | TodoError::NoIdsProvided
                | TodoError::NotFound { .. }
        )
    }

    /// Machine-readable code attached to GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self {
            TodoError::TitleRequired
            | TodoError::TitleEmpty
            | TodoError::TitleTooLong { .. }
            | TodoError::NoIdsProvided => "BAD_USER_INPUT",
            TodoError::NotFound { .. } => "NOT_FOUND",
            TodoError::Storage { .. }
            | TodoError::Config(_)
            | TodoError::Toml(_)
            | TodoError::Io(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
