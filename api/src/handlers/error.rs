//! Conversion of domain errors and guard denials into HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    Error, HttpRequest, HttpResponse,
};
use sg_core::errors::{AuthError, DomainError};
use sg_core::services::guard::Denial;
use sg_shared::errors::error_codes;
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Status, error code and client message for a domain error
pub fn domain_error_parts(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::MissingField { .. } => (
                StatusCode::BAD_REQUEST,
                error_codes::VALIDATION_ERROR,
                auth_error.to_string(),
            ),
            AuthError::OtpMismatch => (
                StatusCode::BAD_REQUEST,
                error_codes::OTP_INVALID,
                auth_error.to_string(),
            ),
            AuthError::OtpNotFound => (
                StatusCode::BAD_REQUEST,
                error_codes::OTP_EXPIRED,
                auth_error.to_string(),
            ),
            AuthError::OtpAlreadyPending => (
                StatusCode::BAD_REQUEST,
                error_codes::OTP_PENDING,
                auth_error.to_string(),
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_CREDENTIALS,
                auth_error.to_string(),
            ),
            AuthError::AccountDisabled => (
                StatusCode::FORBIDDEN,
                error_codes::ACCOUNT_DISABLED,
                auth_error.to_string(),
            ),
            AuthError::PrincipalNotFound { .. } => (
                StatusCode::NOT_FOUND,
                error_codes::NOT_FOUND,
                auth_error.to_string(),
            ),
            AuthError::DuplicateEmail => (
                StatusCode::CONFLICT,
                error_codes::DUPLICATE_EMAIL,
                auth_error.to_string(),
            ),
            AuthError::NotificationFailed => internal_parts(),
        },
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::Token(_) | DomainError::Internal { .. } => internal_parts(),
    }
}

fn internal_parts() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_codes::INTERNAL_ERROR,
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code, message) = domain_error_parts(error);

    if status.is_server_error() {
        log::error!("Domain error: {:?}", error);
    } else {
        log::warn!("Request rejected: {}", error);
    }

    ErrorResponse::new(code, message).to_response(status)
}

/// Render a guard denial with its fixed status and message
pub fn denial_response(denial: &Denial) -> HttpResponse {
    let status =
        StatusCode::from_u16(denial.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ErrorResponse::new(denial.code(), denial.message()).to_response(status)
}

/// Wrap a denial as an actix error so extractors can short-circuit a request
pub fn denial_error(denial: Denial) -> Error {
    let response = denial_response(&denial);
    InternalError::from_response(denial, response).into()
}

/// 400 response listing the fields that failed validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    log::warn!("Validation failed for fields: {:?}", fields);

    ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
        .add_detail("fields", fields)
        .to_response(StatusCode::BAD_REQUEST)
}

/// JSON body errors (malformed JSON, missing fields, unknown intent)
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, "Invalid request body")
        .add_detail("reason", error.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(error, response).into()
}
