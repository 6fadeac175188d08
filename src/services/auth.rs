// src/services/auth.rs

use bcrypt::verify;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{RbacRepository, UserRepository},
    models::auth::{Claims, User},
};

// Emissão e leitura de JWT (não toca no banco)
#[derive(Clone)]
pub struct JwtKeys {
    secret: String,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(secret: String, ttl_days: i64) -> Self {
        Self { secret, ttl: Duration::days(ttl_days) }
    }

    pub fn issue(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires_at = now + self.ttl;

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )?)
    }

    /// Assinatura ou validade incorretas viram `InvalidToken`.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    rbac_repo: RbacRepository,
    keys: JwtKeys,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, rbac_repo: RbacRepository, keys: JwtKeys) -> Self {
        Self { user_repo, rbac_repo, keys }
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // bcrypt é caro: roda fora do executor assíncrono
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))?
        ?;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!("Login de {}", user.id);
        self.keys.issue(user.id, Utc::now())
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self.keys.decode_claims(token)?;

        self.user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    pub async fn abilities_of(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        self.rbac_repo.list_abilities(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new("segredo-de-teste".into(), 7)
    }

    #[test]
    fn issued_token_decodes_to_the_same_user() {
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let token = keys().issue(user_id, now).unwrap();
        let claims = keys().decode_claims(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iat, now.timestamp() as usize);
        assert_eq!(claims.exp, (now + Duration::days(7)).timestamp() as usize);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = JwtKeys::new("outro".into(), 7)
            .issue(Uuid::new_v4(), Utc::now())
            .unwrap();

        assert!(matches!(keys().decode_claims(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued_long_ago = Utc::now() - Duration::days(30);
        let token = keys().issue(Uuid::new_v4(), issued_long_ago).unwrap();

        assert!(matches!(keys().decode_claims(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(keys().decode_claims("nao.e.jwt"), Err(AppError::InvalidToken)));
    }
}
