//! CORS middleware configuration for cross-origin requests.
//!
//! The admin dashboard sends its session cookie cross-origin, so
//! credentials are always supported. In production only the configured
//! origins are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use sg_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_production() || !config.allowed_origins.is_empty() {
        create_restricted_cors(config)
    } else {
        create_development_cors(config.max_age)
    }
}

/// Permissive CORS for local dashboards and storefront development servers.
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
        .supports_credentials()
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for {} origin(s)", config.allowed_origins.len());

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age)
        .supports_credentials();

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse};

    #[actix_web::test]
    async fn test_restricted_cors_rejects_unknown_origin() {
        use actix_web::test;

        let config = CorsConfig {
            allowed_origins: vec!["https://admin.storegate.example".to_string()],
            max_age: 600,
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config, Environment::Production))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let allowed = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://admin.storegate.example"))
            .to_request();
        let resp = test::call_service(&app, allowed).await;
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://admin.storegate.example"
        );
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );

        let refused = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        if let Ok(resp) = test::try_call_service(&app, refused).await {
            assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        }
    }

    #[actix_web::test]
    async fn test_development_cors_allows_any_origin_with_credentials() {
        use actix_web::test;

        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::default(), Environment::Development))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }
}
