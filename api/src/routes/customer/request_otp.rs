use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{OtpRequest, OtpRequestResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

use sg_core::repositories::{AdminRepository, CustomerRepository};
use sg_core::services::session::{mask_email, NotificationChannel, OtpStore, PasswordVerifier};

/// Handler for POST /api/v1/customers/otp
///
/// Emails a one-time passcode for login or signup.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jo@example.com",
///     "intent": "signup"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "OTP sent to your email",
///     "expires_in": 600
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid email, or a passcode is already pending
/// - 403 Forbidden: Account disabled (login)
/// - 404 Not Found: "Customer not found" (login)
/// - 409 Conflict: Email already registered (signup)
/// - 500 Internal Server Error: Delivery failure
pub async fn request_otp<A, C, P, O, N>(
    state: web::Data<AppState<A, C, P, O, N>>,
    request: web::Json<OtpRequest>,
) -> HttpResponse
where
    A: AdminRepository + 'static,
    C: CustomerRepository + 'static,
    P: PasswordVerifier + 'static,
    O: OtpStore + 'static,
    N: NotificationChannel + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!(
        "Passcode requested for {} ({})",
        mask_email(&request.email),
        request.intent
    );

    match state
        .session_service
        .request_customer_otp(&request.email, request.intent)
        .await
    {
        Ok(dispatch) => HttpResponse::Ok().json(OtpRequestResponse {
            message: "OTP sent to your email".to_string(),
            expires_in: dispatch.expires_in,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
