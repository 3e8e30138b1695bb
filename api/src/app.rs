//! Application factory
//!
//! Builds the Actix-web application from an already wired `AppState`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use crate::handlers::error::json_error_handler;
use crate::middleware::cors::create_cors;
use crate::routes::admin::{admin_login, admin_logout, admin_me};
use crate::routes::customer::{customer_me, request_otp, verify_otp};
use crate::routes::AppState;

use sg_core::repositories::{AdminRepository, CustomerRepository};
use sg_core::services::session::{NotificationChannel, OtpStore, PasswordVerifier};

/// Create and configure the application with all dependencies
pub fn create_app<A, C, P, O, N>(
    app_state: web::Data<AppState<A, C, P, O, N>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    A: AdminRepository + 'static,
    C: CustomerRepository + 'static,
    P: PasswordVerifier + 'static,
    O: OtpStore + 'static,
    N: NotificationChannel + 'static,
{
    let cors = create_cors(&app_state.cors, app_state.environment);
    let guard = web::Data::from(app_state.guard.clone());
    let cookie = web::Data::new(app_state.cookie.clone());

    App::new()
        .app_data(app_state)
        .app_data(guard)
        .app_data(cookie)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(cors)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/admin")
                        .route("/login", web::post().to(admin_login::<A, C, P, O, N>))
                        .route("/logout", web::post().to(admin_logout))
                        .route("/me", web::get().to(admin_me)),
                )
                .service(
                    web::scope("/customers")
                        .route("/otp", web::post().to(request_otp::<A, C, P, O, N>))
                        .route("/otp/verify", web::post().to(verify_otp::<A, C, P, O, N>))
                        .route("/me", web::get().to(customer_me)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "storegate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found"
    }))
}
