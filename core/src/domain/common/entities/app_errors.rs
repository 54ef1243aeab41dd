use thiserror::Error;

use crate::domain::query::QueryError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Casino not found")]
    CasinoNotFound,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl From<QueryError> for CoreError {
    fn from(error: QueryError) -> Self {
        CoreError::InvalidQuery(error.to_string())
    }
}
