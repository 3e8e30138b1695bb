use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AdminLoginRequest, AdminLoginResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};
use crate::middleware::auth::session_cookie;
use crate::routes::AppState;

use sg_core::repositories::{AdminRepository, CustomerRepository};
use sg_core::services::session::{mask_email, NotificationChannel, OtpStore, PasswordVerifier};

/// Handler for POST /api/v1/admin/login
///
/// # Request Body
///
/// ```json
/// {
///     "email": "ops@example.com",
///     "password": "correct horse battery staple"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "admin_id": "7d1f...",
///     "authority": "superadmin",
///     "expires_in": 86400
/// }
/// ```
/// with `Set-Cookie: admin_token=<jwt>; HttpOnly; SameSite=Strict; Max-Age=86400`
/// (`Secure` in production).
///
/// ## Errors
/// - 400 Bad Request: Invalid or missing fields
/// - 401 Unauthorized: Wrong password
/// - 403 Forbidden: Account disabled
/// - 404 Not Found: "Admin not found"
pub async fn admin_login<A, C, P, O, N>(
    state: web::Data<AppState<A, C, P, O, N>>,
    request: web::Json<AdminLoginRequest>,
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

    match state
        .session_service
        .admin_login(&request.email, &request.password)
        .await
    {
        Ok(session) => {
            log::info!(
                "Admin {} logged in ({})",
                session.principal_id,
                mask_email(&request.email)
            );

            let cookie = session_cookie(&state.cookie, &session.token, session.expires_in);
            HttpResponse::Ok().cookie(cookie).json(AdminLoginResponse {
                admin_id: session.principal_id,
                authority: session.authority,
                expires_in: session.expires_in,
            })
        }
        Err(error) => handle_domain_error(&error),
    }
}
