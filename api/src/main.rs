use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};

use sg_api::app::create_app;
use sg_api::config::Config;
use sg_api::middleware::auth::SessionGuard;
use sg_api::routes::AppState;

use sg_core::repositories::AccountDirectory;
use sg_core::services::guard::AccessGuard;
use sg_core::services::session::{SessionService, SessionServiceConfig};
use sg_core::services::token::{TokenService, TokenServiceConfig};
use sg_infra::cache::{RedisClient, RedisOtpStore};
use sg_infra::database::{DatabasePool, MySqlAdminRepository, MySqlCustomerRepository};
use sg_infra::notification::EmailChannel;
use sg_infra::security::BcryptPasswordVerifier;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.log_level()));

    info!("Starting Storegate API Server ({})", config.environment());

    if config.auth().jwt.is_using_default_secret() {
        if config.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let database = DatabasePool::new(&config.app.database)
        .await
        .context("failed to connect to the account database")?;
    let redis = RedisClient::new(config.app.cache.clone())
        .await
        .context("failed to connect to Redis")?;

    let admins = Arc::new(MySqlAdminRepository::new(database.pool()));
    let customers = Arc::new(MySqlCustomerRepository::new(database.pool()));
    let directory = AccountDirectory::new(admins, customers);

    let token_config = TokenServiceConfig::from_jwt_config(&config.auth().jwt)
        .context("invalid JWT configuration")?;
    let token_service =
        Arc::new(TokenService::new(token_config).context("invalid JWT configuration")?);

    let notifier = EmailChannel::from_config(config.email.clone())
        .context("invalid email configuration")?;

    let session_service = Arc::new(SessionService::new(
        directory.clone(),
        Arc::clone(&token_service),
        Arc::new(BcryptPasswordVerifier::new()),
        Arc::new(RedisOtpStore::new(redis)),
        Arc::new(notifier),
        SessionServiceConfig::from(config.auth()),
    ));
    let guard: Arc<dyn SessionGuard> = Arc::new(AccessGuard::new(token_service, directory));

    let app_state = web::Data::new(AppState {
        session_service,
        guard,
        cookie: config.auth().cookie.clone(),
        cors: config.cors().clone(),
        environment: config.environment(),
    });

    let bind_address = config.server().bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server().workers > 0 {
        server = server.workers(config.server().workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    Ok(())
}
