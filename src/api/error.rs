use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::DirectoryError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub struct ApiError(DirectoryError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DirectoryError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            DirectoryError::AlreadyExists(_) => StatusCode::CONFLICT,
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.0 {
            DirectoryError::InvalidArgument(_) => "invalid_argument",
            DirectoryError::AlreadyExists(_) => "already_exists",
            DirectoryError::NotFound(_) => "not_found",
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DirectoryError::invalid_argument(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DirectoryError::invalid_argument(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            code: self.code().to_string(),
            error: self.0.message().to_string(),
        });

        (status, body).into_response()
    }
}
