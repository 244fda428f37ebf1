use serde::Deserialize;

/// Process-wide settings, loaded once at startup and passed by reference
/// to the components that need them. The secret is never logged.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    pub database_url: String,
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            jwt_secret: std::env::var("JWT_SECRET")?,
        })
    }
}
