use crate::Error;
use actix_web::{http::StatusCode, web::Json, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

pub type RestResult<T, E = RestApiError> = std::result::Result<Json<T>, E>;

#[derive(Debug)]
pub struct RestApiError {
    pub code: RestApiErrorCode,
    pub message: String,
}

impl RestApiError {
    pub fn new(code: RestApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(RestApiErrorCode::InvalidInput, message)
    }

    pub fn not_found() -> Self {
        Self::new(
            RestApiErrorCode::NotFound,
            "Requested resource doesn't exist.",
        )
    }

    pub fn internal() -> Self {
        Self::new(
            RestApiErrorCode::Internal,
            "Internal error. Contact CivicMap team to resolve.",
        )
    }
}

#[derive(Debug, PartialEq)]
pub enum RestApiErrorCode {
    InvalidInput,
    NotFound,
    Internal,
}

/// Error body as it appears on the wire, mostly useful for tests
#[derive(Serialize, Deserialize, Debug)]
pub struct RestApiErrorBody {
    pub code: String,
    pub message: String,
}

impl fmt::Display for RestApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::fmt::Display for RestApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestApiErrorCode::InvalidInput => write!(f, "invalid_input"),
            RestApiErrorCode::NotFound => write!(f, "not_found"),
            RestApiErrorCode::Internal => write!(f, "internal"),
        }
    }
}

impl RestApiErrorCode {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for RestApiError {
    fn error_response(&self) -> HttpResponse {
        let body = RestApiErrorBody {
            code: self.code.to_string(),
            message: self.message.clone(),
        };
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

/// Fallback for unmatched routes
pub async fn default_service() -> Result<HttpResponse, RestApiError> {
    Err(RestApiError::not_found())
}

impl From<Error> for RestApiError {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidInput(message) => RestApiError::invalid_input(message),
            _ => {
                error!(%error, "Request failed with internal error");
                RestApiError::internal()
            }
        }
    }
}
