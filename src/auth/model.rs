use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record as persisted by a `UserStore`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAccount {
    pub id: Uuid,                     // unique user ID
    pub email: String,                // unique login email
    #[serde(skip_serializing)]
    pub password_hash: String,        // Argon2 hash, not exposed in JSON
    #[serde(skip_serializing)]
    pub current_token: Option<String>, // latest issued session token, None when logged out
    pub created_at: OffsetDateTime,   // creation timestamp
}

/// Login input pair; lives only for the duration of the call.
#[derive(Debug, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

/// Registration input.
#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
}

/// Non-sensitive projection of a `UserAccount` returned to the client.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub id: Uuid,
    pub email: String,
    pub created_at: OffsetDateTime,
}
