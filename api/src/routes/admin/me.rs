use actix_web::HttpResponse;

use crate::middleware::auth::AdminSession;

/// Handler for GET /api/v1/admin/me
///
/// Returns the authenticated administrator's session context.
pub async fn admin_me(session: AdminSession) -> HttpResponse {
    HttpResponse::Ok().json(session.into_inner())
}
