//! Error types and their HTTP mapping.
//!
//! Two failure sources exist: the upstream statistics API ([`UpstreamError`]) and
//! the database ([`PersistenceError`]). Handlers wrap them into [`AppError`], whose
//! variant decides the status code returned to the browser. Bodies are plain text:
//! a fixed prefix followed by the underlying error message.
//!
//! A path id or form body the `covid` table cannot hold is reported the same way
//! as a failed statement: a [`PersistenceError`] behind a 500.
//!
//! | Variant | Status |
//! |---|---|
//! | [`AppError::ApiSoft`] | `200 OK` |
//! | [`AppError::Api`] | `400 Bad Request` |
//! | [`AppError::Insert`] / [`AppError::Read`] / [`AppError::Delete`] | `500 Internal Server Error` |

use axum::{
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure while fetching from the upstream statistics API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, TLS or protocol failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("upstream responded with {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the JSON shape we expected.
    #[error("malformed upstream body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure of a statement against the `covid` table.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Input that cannot be bound to a column; no statement was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<PathRejection> for PersistenceError {
    fn from(rejection: PathRejection) -> Self {
        PersistenceError::InvalidInput(rejection.body_text())
    }
}

impl From<FormRejection> for PersistenceError {
    fn from(rejection: FormRejection) -> Self {
        PersistenceError::InvalidInput(rejection.body_text())
    }
}

/// Handler-level error; the variant fixes the response status.
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream failure reported without changing the status (homepage).
    #[error("An error occurred while getting data from API {0}")]
    ApiSoft(#[source] UpstreamError),

    #[error("An error occurred while getting data from API {0}")]
    Api(#[source] UpstreamError),

    #[error("An error occurred while inserting data into database {0}")]
    Insert(#[source] PersistenceError),

    #[error("An error occurred while getting data from database {0}")]
    Read(#[source] PersistenceError),

    #[error("An error occurred while deleting data from database {0}")]
    Delete(#[source] PersistenceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ApiSoft(_) => StatusCode::OK,
            AppError::Api(_) => StatusCode::BAD_REQUEST,
            AppError::Insert(_) | AppError::Read(_) | AppError::Delete(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::ApiSoft(e) | AppError::Api(e) => {
                tracing::warn!(error = %e, status = status.as_u16(), "Upstream API request failed");
            }
            AppError::Insert(PersistenceError::InvalidInput(e))
            | AppError::Read(PersistenceError::InvalidInput(e))
            | AppError::Delete(PersistenceError::InvalidInput(e)) => {
                tracing::warn!(error = %e, "Rejected input for the covid table");
            }
            AppError::Insert(e) | AppError::Read(e) | AppError::Delete(e) => {
                tracing::error!(error = %e, "Database statement failed");
            }
        }

        (status, self.to_string()).into_response()
    }
}
