use sea_orm::DbErr;
use thiserror::Error;

/// Rejections raised while turning a request into a query, before any I/O.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("unknown sort field `{0}`")]
    UnknownSortField(String),
}

/// Errors returned by the list and write operations in [`crate::db`].
///
/// Database errors are passed through untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Db(#[from] DbErr),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}
