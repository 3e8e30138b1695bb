use actix_web::{web, HttpResponse};

use crate::dto::auth::LogoutResponse;
use crate::middleware::auth::{expired_session_cookie, AdminSession};

use sg_shared::config::SessionCookieConfig;

/// Handler for POST /api/v1/admin/logout
///
/// Requires a valid admin session cookie. Clears the cookie; the token
/// itself stays valid until it expires or the admin logs in again.
///
/// ## Errors
/// Any access guard denial (401, 403, 404, 500)
pub async fn admin_logout(
    session: AdminSession,
    cookie_config: web::Data<SessionCookieConfig>,
) -> HttpResponse {
    log::info!("Admin {} logged out", session.0.principal_id);

    HttpResponse::Ok()
        .cookie(expired_session_cookie(&cookie_config))
        .json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
}
