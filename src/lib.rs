pub mod auth;
pub mod config;

pub use auth::error::AuthError;
pub use auth::service::AccountAuthService;
