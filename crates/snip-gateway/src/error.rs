use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use snip_core::StorageError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request itself was malformed (bad JSON envelope, wrong
    /// content type).
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Storage(err) => {
                error!(%err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
