// src/middleware/auth.rs

use std::collections::BTreeSet;

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::auth::User,
};

// Usuário da equipe já autenticado, com o conjunto de habilidades
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub abilities: BTreeSet<String>,
}

impl AuthenticatedUser {
    pub fn new(user: User, abilities: impl IntoIterator<Item = String>) -> Self {
        Self { user, abilities: abilities.into_iter().collect() }
    }
}

/// Valida o Bearer token e deixa o `AuthenticatedUser` nas extensions.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    locale: Locale,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let to_api = |e: AppError| e.to_api_error(&locale, &app_state.i18n_store);

    let (mut parts, body) = request.into_parts();

    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(&mut parts, &app_state)
            .await
            .map_err(|_| to_api(AppError::InvalidToken))?;

    // Token de um usuário que não existe mais vale como token inválido
    let user = app_state
        .auth_service
        .validate_token(bearer.token())
        .await
        .map_err(|e| match e {
            AppError::UserNotFound => AppError::InvalidToken,
            other => other,
        })
        .map_err(to_api)?;

    let abilities = app_state
        .auth_service
        .abilities_of(user.id)
        .await
        .map_err(to_api)?;

    let mut request = Request::from_parts(parts, body);
    request
        .extensions_mut()
        .insert(AuthenticatedUser::new(user, abilities));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(user.clone());
        }

        let app_state = AppState::from_ref(state);
        let locale = Locale::from_request_parts(parts, state).await.unwrap_or_else(|e| match e {});

        Err(AppError::InvalidToken.to_api_error(&locale, &app_state.i18n_store))
    }
}
