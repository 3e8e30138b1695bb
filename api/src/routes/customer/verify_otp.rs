use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{CustomerTokenResponse, VerifyOtpRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

use sg_core::repositories::{AdminRepository, CustomerRepository};
use sg_core::services::session::{NotificationChannel, OtpStore, PasswordVerifier};

/// Handler for POST /api/v1/customers/otp/verify
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jo@example.com",
///     "otp": "123456",
///     "intent": "signup",
///     "name": "Jo"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJ...",
///     "token_type": "Bearer",
///     "expires_in": 2592000,
///     "customer_id": "1c9e...",
///     "created": true
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Wrong, expired or missing passcode; missing name on signup
/// - 403 Forbidden: Account disabled
/// - 404 Not Found: "Customer not found" (login)
/// - 409 Conflict: Email already registered (signup)
pub async fn verify_otp<A, C, P, O, N>(
    state: web::Data<AppState<A, C, P, O, N>>,
    request: web::Json<VerifyOtpRequest>,
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

    let request = request.into_inner();
    match state
        .session_service
        .verify_customer_otp(
            &request.email,
            &request.otp,
            request.intent,
            request.name.as_deref(),
        )
        .await
    {
        Ok(session) => {
            log::info!(
                "Customer {} signed in (created: {})",
                session.principal_id,
                session.created
            );

            HttpResponse::Ok().json(CustomerTokenResponse {
                token: session.token,
                token_type: "Bearer".to_string(),
                expires_in: session.expires_in,
                customer_id: session.principal_id,
                created: session.created,
            })
        }
        Err(error) => handle_domain_error(&error),
    }
}
