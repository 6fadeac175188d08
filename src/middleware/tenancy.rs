// src/middleware/tenancy.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use uuid::Uuid;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::auth::User,
};

// O estúdio (director_id) em nome do qual o usuário autenticado age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext(pub Uuid);

impl TenantContext {
    pub fn from_user(user: &User) -> Result<Self, AppError> {
        user.director_id.map(TenantContext).ok_or(AppError::MissingTenant)
    }

    /// Escritas que informam um director_id precisam apontar para o próprio estúdio.
    pub fn ensure_owns(&self, director_id: Uuid) -> Result<(), AppError> {
        if director_id == self.0 {
            Ok(())
        } else {
            tracing::warn!("Escrita recusada: estúdio {} tentou usar {}", self.0, director_id);
            Err(AppError::TenantMismatch)
        }
    }
}

impl<S> FromRequestParts<S> for TenantContext
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let locale = Locale::from_request_parts(parts, state).await.unwrap_or_else(|e| match e {});

        let auth = AuthenticatedUser::from_request_parts(parts, state).await?;

        TenantContext::from_user(&auth.user)
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))
    }
}
