use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Constraint violations are never translated: they stay inside `Db` as the
/// engine reported them and can be classified with [`AppError::sql_err`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Db(#[from] DbErr),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot hydrate row: {0}")]
    Hydrate(#[from] serde_json::Error),

    #[error("invalid media type {0:?}, expected one of \"1\", \"2\", \"3\"")]
    InvalidMediaType(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn sql_err(&self) -> Option<SqlErr> {
        match self {
            Self::Db(err) => err.sql_err(),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }
}
