// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use petgroom::CoreError;
use petgroom_domain::DomainError;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error kind reported in the body.
    pub kind: &'static str,
    /// The error message.
    pub message: String,
}

impl HttpError {
    /// A malformed request parameter.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "bad_request",
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: String::from(self.kind),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidStatusTransition { .. } => Self {
                status: StatusCode::CONFLICT,
                kind: "invalid_transition",
                message: err.to_string(),
            },
            _ => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                kind: "validation",
                message: err.to_string(),
            },
        }
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                kind: "not_found",
                message: err.to_string(),
            },
            CoreError::ReferentialConflict { .. } => Self {
                status: StatusCode::CONFLICT,
                kind: "referential_conflict",
                message: err.to_string(),
            },
            CoreError::NoGroomerAvailable => Self {
                status: StatusCode::CONFLICT,
                kind: "no_groomer_available",
                message: err.to_string(),
            },
            CoreError::UnknownReference { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                kind: "unknown_reference",
                message: err.to_string(),
            },
            CoreError::Domain(domain) => Self::from(domain),
            CoreError::Storage(storage) => {
                error!(error = %storage, "Storage error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    kind: "storage",
                    message: format!("Storage error: {storage}"),
                }
            }
        }
    }
}
