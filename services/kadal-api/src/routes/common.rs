use actix_web::HttpResponse;
use kadal_core::{ErrorCode, KadalError};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: message.into(),
    })
}

pub fn not_found(message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: message.into(),
    })
}

pub fn conflict(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Conflict().json(ErrorResponse {
        error: message.into(),
    })
}

pub fn unavailable(message: impl Into<String>) -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(ErrorResponse {
        error: message.into(),
    })
}

pub fn internal_error(message: impl Into<String>) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: message.into(),
    })
}

pub fn error_response(err: &KadalError) -> HttpResponse {
    match err.code {
        ErrorCode::InvalidInput => bad_request(err.message.clone()),
        ErrorCode::NotFound => not_found(err.message.clone()),
        ErrorCode::Conflict => conflict(err.message.clone()),
        ErrorCode::Unavailable => unavailable(err.message.clone()),
        ErrorCode::Internal => internal_error(err.message.clone()),
    }
}

pub fn parse_uuid(value: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(value).map_err(|_| bad_request("invalid UUID"))
}
