use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;

/// Session token lifetime, fixed at compile time.
pub const TOKEN_TTL: Duration = Duration::days(48);

/// JWT payload: the principal email and expiry, no other claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // principal email
    pub exp: usize,  // expires at (unix timestamp)
}

/// Signs bearer tokens for the auth service. The service decides subject
/// and lifetime; the issuer owns the secret.
pub trait TokenIssuer: Send + Sync {
    fn sign(&self, subject: &str, expires_at: OffsetDateTime) -> anyhow::Result<String>;
}

/// HS512-signed JWTs keyed with the process secret.
pub struct JwtIssuer {
    encoding: EncodingKey,
}

impl JwtIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenIssuer for JwtIssuer {
    fn sign(&self, subject: &str, expires_at: OffsetDateTime) -> anyhow::Result<String> {
        let claims = Claims {
            sub: subject.to_owned(),
            exp: expires_at.unix_timestamp() as usize,
        };
        let token = encode(&Header::new(Algorithm::HS512), &claims, &self.encoding)?;
        debug!(subject = %claims.sub, "session token signed");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    #[test]
    fn signed_token_carries_subject_and_expiry() {
        let issuer = JwtIssuer::new("test-secret");
        let expires_at = OffsetDateTime::now_utc() + TOKEN_TTL;
        let token = issuer.sign("a@x.com", expires_at).expect("sign");

        let validation = Validation::new(Algorithm::HS512);
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &validation,
        )
        .expect("decode");
        assert_eq!(data.claims.sub, "a@x.com");
        assert_eq!(data.claims.exp, expires_at.unix_timestamp() as usize);
    }

    #[test]
    fn token_rejected_with_wrong_secret() {
        let issuer = JwtIssuer::new("test-secret");
        let token = issuer
            .sign("a@x.com", OffsetDateTime::now_utc() + TOKEN_TTL)
            .expect("sign");
        let validation = Validation::new(Algorithm::HS512);
        assert!(
            decode::<Claims>(&token, &DecodingKey::from_secret(b"other"), &validation).is_err()
        );
    }
}
