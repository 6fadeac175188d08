// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
};

/// Quem pode o quê. Os handlers só conhecem esta interface.
pub trait Capabilities {
    fn allows(&self, ability: &str) -> bool;
}

impl Capabilities for AuthenticatedUser {
    fn allows(&self, ability: &str) -> bool {
        self.abilities.contains(ability)
    }
}

/// 1. O Trait que define o que é uma Permissão
pub trait PermissionDef: Send + Sync + 'static {
    fn slug() -> &'static str;
}

pub fn ensure_allowed<T: PermissionDef>(caps: &dyn Capabilities) -> Result<(), AppError> {
    if caps.allows(T::slug()) {
        Ok(())
    } else {
        Err(AppError::MissingAbility(T::slug().to_string()))
    }
}

/// 2. O Extractor (Guardião)
pub struct RequirePermission<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequirePermission<T>
where
    T: PermissionDef,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let locale = Locale::from_request_parts(parts, state).await.unwrap_or_else(|e| match e {});

        let user = AuthenticatedUser::from_request_parts(parts, state).await?;

        ensure_allowed::<T>(&user).map_err(|e| {
            tracing::warn!("Usuário {} sem a habilidade '{}'", user.user.id, T::slug());
            e.to_api_error(&locale, &app_state.i18n_store)
        })?;

        Ok(RequirePermission(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS PERMISSÕES (TIPOS)
// ---

pub struct PermManageSales;
impl PermissionDef for PermManageSales {
    fn slug() -> &'static str { "manage-sales" }
}

pub struct PermManageTasks;
impl PermissionDef for PermManageTasks {
    fn slug() -> &'static str { "manage-tasks" }
}
