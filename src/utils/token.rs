use crate::config::JwtConfig;
use crate::types::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::UserRole;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: UserRole,
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn issue(user_id: Uuid, role: UserRole, kind: TokenKind, ttl: Duration, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        role,
        kind,
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
}

/// Issue the `(access, refresh)` pair returned by every auth mutation.
pub fn issue_pair(user_id: Uuid, role: UserRole, cfg: &JwtConfig) -> Result<(String, String), AppError> {
    let access = issue(
        user_id,
        role,
        TokenKind::Access,
        Duration::minutes(cfg.access_ttl_minutes),
        &cfg.secret,
    )?;
    let refresh = issue(
        user_id,
        role,
        TokenKind::Refresh,
        Duration::days(cfg.refresh_ttl_days),
        &cfg.secret,
    )?;
    Ok((access, refresh))
}

/// Decode and check a token. Any failure (signature, expiry, wrong kind)
/// degrades to `Unauthorized` so callers never leak the reason.
pub fn verify(token: &str, expected: TokenKind, cfg: &JwtConfig) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)?;
    if data.claims.kind != expected {
        return Err(AppError::Unauthorized);
    }
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cfg() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret".to_string(),
            access_ttl_minutes: 15,
            refresh_ttl_days: 30,
        }
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("s3cret-password").unwrap();
        assert!(verify_password("s3cret-password", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn access_token_round_trip() {
        let cfg = test_cfg();
        let id = new_id();
        let (access, refresh) = issue_pair(id, UserRole::Manager, &cfg).unwrap();

        let claims = verify(&access, TokenKind::Access, &cfg).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, UserRole::Manager);

        let claims = verify(&refresh, TokenKind::Refresh, &cfg).unwrap();
        assert_eq!(claims.kind, TokenKind::Refresh);
    }

    #[test]
    fn refresh_token_rejected_as_access() {
        let cfg = test_cfg();
        let (access, refresh) = issue_pair(new_id(), UserRole::Client, &cfg).unwrap();
        assert!(matches!(
            verify(&refresh, TokenKind::Access, &cfg),
            Err(AppError::Unauthorized)
        ));
        assert!(matches!(
            verify(&access, TokenKind::Refresh, &cfg),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn wrong_secret_rejected() {
        let cfg = test_cfg();
        let (access, _) = issue_pair(new_id(), UserRole::Admin, &cfg).unwrap();
        let other = JwtConfig {
            secret: "other-secret".to_string(),
            ..test_cfg()
        };
        assert!(verify(&access, TokenKind::Access, &other).is_err());
    }
}
