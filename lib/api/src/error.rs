use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::validate::FieldError;

/// Failures a handler reports to the client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NoResults(String),

    #[error("{0}")]
    LoadFailed(String),

    #[error("Validation failed for {title}")]
    Validation {
        title: String,
        errors: Vec<FieldError>,
    },

    #[error("Wrong Route")]
    WrongRoute,
}

impl ApiError {
    pub fn validation(title: impl Into<String>, errors: Vec<FieldError>) -> Self {
        ApiError::Validation {
            title: title.into(),
            errors,
        }
    }

    fn title(&self) -> &str {
        match self {
            ApiError::NoResults(_) => "No Results",
            ApiError::Validation { title, .. } => title,
            _ => "Error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::NoResults(_) | ApiError::WrongRoute => {
                StatusCode::NOT_FOUND
            }
            ApiError::LoadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation { errors, .. } => serde_json::json!({
                "title": self.title(),
                "errors": errors,
            }),
            _ => serde_json::json!({
                "title": self.title(),
                "message": self.to_string(),
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
