//! Session extraction for protected endpoints.
//!
//! Administrator tokens are read from the session cookie, customer tokens
//! from the `Authorization: Bearer` header. Both are handed to the access
//! guard registered in app data, and the resulting context is passed to
//! the handler as an extractor value.

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    dev::Payload,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use sg_core::domain::entities::principal::Role;
use sg_core::repositories::{AdminRepository, CustomerRepository};
use sg_core::services::guard::{AccessGuard, AuthContext, Decision, Denial};
use sg_shared::config::SessionCookieConfig;

use crate::handlers::error::denial_error;

/// Object-safe view of the access guard so extractors need no type parameters
#[async_trait]
pub trait SessionGuard: Send + Sync {
    async fn authorize(&self, required_role: Option<Role>, presented: Option<&str>) -> Decision;
}

#[async_trait]
impl<A, C> SessionGuard for AccessGuard<A, C>
where
    A: AdminRepository + 'static,
    C: CustomerRepository + 'static,
{
    async fn authorize(&self, required_role: Option<Role>, presented: Option<&str>) -> Decision {
        AccessGuard::authorize(self, required_role, presented).await
    }
}

/// Authenticated administrator session
#[derive(Debug, Clone)]
pub struct AdminSession(pub AuthContext);

/// Authenticated customer session
#[derive(Debug, Clone)]
pub struct CustomerSession(pub AuthContext);

impl AdminSession {
    pub fn into_inner(self) -> AuthContext {
        self.0
    }
}

impl CustomerSession {
    pub fn into_inner(self) -> AuthContext {
        self.0
    }
}

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let guard = session_guard(req);
        let token = extract_cookie_token(req);

        Box::pin(async move { authorize(guard, Role::Admin, token).await.map(AdminSession) })
    }
}

impl FromRequest for CustomerSession {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let guard = session_guard(req);
        let token = extract_bearer_token(req);

        Box::pin(async move { authorize(guard, Role::Customer, token).await.map(CustomerSession) })
    }
}

fn session_guard(req: &HttpRequest) -> Option<web::Data<dyn SessionGuard>> {
    req.app_data::<web::Data<dyn SessionGuard>>().cloned()
}

async fn authorize(
    guard: Option<web::Data<dyn SessionGuard>>,
    role: Role,
    token: Option<String>,
) -> Result<AuthContext, Error> {
    let guard = match guard {
        Some(guard) => guard,
        None => {
            log::error!("No session guard registered in app data");
            return Err(denial_error(Denial::Internal));
        }
    };

    guard
        .authorize(Some(role), token.as_deref())
        .await
        .into_result()
        .map_err(|denial| {
            log::debug!("{} session refused: {}", role, denial);
            denial_error(denial)
        })
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extracts the administrator token from the session cookie
fn extract_cookie_token(req: &HttpRequest) -> Option<String> {
    let name = req
        .app_data::<web::Data<SessionCookieConfig>>()
        .map(|config| config.cookie_name.clone())
        .unwrap_or_else(|| SessionCookieConfig::default().cookie_name);

    req.cookie(&name).map(|cookie| cookie.value().to_string())
}

/// Cookie carrying a freshly issued administrator token
pub fn session_cookie(config: &SessionCookieConfig, token: &str, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token.to_string())
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(same_site(&config.same_site))
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// Cookie that makes the browser drop the administrator token
pub fn expired_session_cookie(config: &SessionCookieConfig) -> Cookie<'static> {
    session_cookie(config, "", 0)
}

fn same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "lax" => SameSite::Lax,
        "none" => SameSite::None,
        _ => SameSite::Strict,
    }
}
