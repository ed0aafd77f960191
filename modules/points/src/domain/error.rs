use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Point not found: {id}")]
    PointNotFound { id: i32 },

    #[error("Registration references an item that is not in the catalog")]
    UnknownItem,

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn point_not_found(id: i32) -> Self {
        Self::PointNotFound { id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Referential failures inside the registration transaction surface as a
/// client error; everything else stays an internal database error.
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
            return Self::UnknownItem;
        }
        Self::database(e.to_string())
    }
}
