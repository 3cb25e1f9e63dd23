use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            log_app_error(&self, status);
        }
        // A String body is sent as text/plain; charset=utf-8.
        (status, self.message().to_string()).into_response()
    }
}

/// The one place an error kind becomes an HTTP status.
pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
    }
}

pub(crate) fn log_app_error(err: &AppError, status: StatusCode) {
    tracing::error!(status = status.as_u16(), error = %err, "request failed");
}
