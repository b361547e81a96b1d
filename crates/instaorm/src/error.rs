//! Errors raised while describing, rendering, binding or running a query.

use thiserror::Error;
use tokio_postgres::error::SqlState;

pub type OrmResult<T, E = OrmError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum OrmError {
    // ----- describing and rendering -----
    /// A descriptor or builder precondition does not hold
    /// (blank identifier, UPDATE without SET, DELETE without WHERE, ...).
    #[error("invalid query: {0}")]
    Validation(String),

    // ----- binding -----
    /// Positional values do not match the template's placeholders.
    #[error("template expects {expected} values, got {got}")]
    BindMismatch { expected: usize, got: usize },

    /// A named value matches no bind slot.
    #[error("no placeholder is bound to `{0}`")]
    UnknownBind(String),

    /// A bind slot received no value.
    #[error("no value supplied for `{0}`")]
    MissingBind(String),

    // ----- running -----
    #[error("cannot connect: {0}")]
    Connection(String),

    #[cfg(feature = "pool")]
    #[error("connection pool: {0}")]
    Pool(String),

    /// Any database error without a more specific variant.
    #[error("database error: {0}")]
    Query(#[from] tokio_postgres::Error),

    #[error("duplicate value ({0})")]
    UniqueViolation(String),

    #[error("missing referenced row ({0})")]
    ForeignKeyViolation(String),

    #[error("check constraint failed ({0})")]
    CheckViolation(String),

    /// A query expected a row and got none.
    #[error("not found: {0}")]
    NotFound(String),

    /// A column could not be read into the requested Rust type.
    #[error("cannot decode column `{column}`: {message}")]
    Decode { column: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl OrmError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }

    /// Whether values were paired with the template incorrectly.
    ///
    /// These errors are raised before anything is sent to the database.
    pub fn is_bind_error(&self) -> bool {
        matches!(
            self,
            Self::BindMismatch { .. } | Self::UnknownBind(_) | Self::MissingBind(_)
        )
    }

    /// Classify a driver error, singling out constraint violations.
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        let Some(db) = err.as_db_error() else {
            return Self::Query(err);
        };
        let detail = format!("{}: {}", db.constraint().unwrap_or("unknown"), db.message());
        match db.code() {
            code if *code == SqlState::UNIQUE_VIOLATION => Self::UniqueViolation(detail),
            code if *code == SqlState::FOREIGN_KEY_VIOLATION => Self::ForeignKeyViolation(detail),
            code if *code == SqlState::CHECK_VIOLATION => Self::CheckViolation(detail),
            _ => Self::Query(err),
        }
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for OrmError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
