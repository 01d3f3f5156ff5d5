use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Required field '{field}' is missing")]
    MissingField { field: &'static str },

    #[error("Field '{field}' must be a valid integer")]
    InvalidNumber { field: &'static str },

    #[error("Building code '{code}' already exists")]
    DuplicateKey { code: String },

    #[error("Building {id} not found")]
    NotFound { id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    #[must_use]
    pub fn invalid_number(field: &'static str) -> Self {
        Self::InvalidNumber { field }
    }

    #[must_use]
    pub fn duplicate_key(code: impl Into<String>) -> Self {
        Self::DuplicateKey { code: code.into() }
    }

    #[must_use]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        Self::Database(e.into())
    }
}
