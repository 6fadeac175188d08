// src/middleware/i18n.rs

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts};

use crate::{
    common::i18n::{I18nStore, DEFAULT_LANG},
    config::AppState,
};

// Idioma da resposta, negociado a partir do Accept-Language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Locale {
    /// Primeiro idioma do cabeçalho que o catálogo conhece; senão, inglês.
    pub fn negotiate(accept_language: Option<&str>, store: &I18nStore) -> Self {
        let lang = accept_language
            .map(accept_language::parse)
            .unwrap_or_default()
            .into_iter()
            .map(|tag| {
                // "pt-BR" -> "pt"
                tag.split('-').next().unwrap_or(tag.as_str()).to_lowercase()
            })
            .find(|lang| store.supports(lang))
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Locale(lang)
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let header_value = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        Ok(Locale::negotiate(header_value, &app_state.i18n_store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_supported_language() {
        let store = I18nStore::new();
        assert_eq!(Locale::negotiate(Some("pt-BR,pt;q=0.9"), &store).0, "pt");
        assert_eq!(Locale::negotiate(Some("de-DE,ru;q=0.8,en;q=0.5"), &store).0, "ru");
    }

    #[test]
    fn falls_back_to_english() {
        let store = I18nStore::new();
        assert_eq!(Locale::negotiate(None, &store).0, "en");
        assert_eq!(Locale::negotiate(Some("fr-FR"), &store).0, "en");
        assert_eq!(Locale::negotiate(Some(""), &store).0, "en");
    }
}
