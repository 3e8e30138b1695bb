use sg_infra::config::EmailConfig;
use sg_shared::config::{AppConfig, AuthConfig, CorsConfig, Environment, ServerConfig};

/// Everything the API binary needs at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub email: EmailConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.app.environment
    }

    pub fn is_production(&self) -> bool {
        self.app.environment.is_production()
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    pub fn cors(&self) -> &CorsConfig {
        &self.app.cors
    }

    pub fn log_level(&self) -> &str {
        &self.app.logging.level
    }
}
