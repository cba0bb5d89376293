use axum::{
    extract::{Path, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{db::StoreError, filters::FilterError, res};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Nothing stored under the requested id; the payload names the kind of record.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// A record id taken from the path. One that is not a number names no record, so it is a 404 for `what`.
pub fn record_id(path: Result<Path<i64>, PathRejection>, what: &'static str) -> AppResult<i64> {
    path.map(|Path(id)| id).map_err(|_| AppError::NotFound(what))
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => res::sorry(what),
            err => {
                tracing::error!(error = ?err, "request failed");
                res::failure("Something went wrong on our side. Please try again later.")
            }
        }
    }
}
