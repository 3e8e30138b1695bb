use actix_web::HttpResponse;

use crate::middleware::auth::CustomerSession;

/// Handler for GET /api/v1/customers/me
///
/// Requires `Authorization: Bearer <token>`.
pub async fn customer_me(session: CustomerSession) -> HttpResponse {
    HttpResponse::Ok().json(session.into_inner())
}
