use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Permissão ausente: {0}")]
    MissingAbility(String),

    // O usuário autenticado não tem director_id
    #[error("Usuário sem estúdio")]
    MissingTenant,

    #[error("Escrita para outro estúdio")]
    TenantMismatch,

    #[error("Tarefa pertence a outro estúdio")]
    TaskForbidden,

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Tarefa não encontrada")]
    TaskNotFound,

    #[error("Remetente da tarefa não encontrado")]
    SenderNotFound,

    #[error("Fim da assinatura anterior ao início")]
    InvalidSubscriptionWindow,

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::SenderNotFound
            | AppError::InvalidSubscriptionWindow => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::MissingAbility(_)
            | AppError::MissingTenant
            | AppError::TenantMismatch
            | AppError::TaskForbidden => StatusCode::FORBIDDEN,
            AppError::UserNotFound | AppError::ClientNotFound | AppError::TaskNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Código estável usado para buscar a mensagem traduzida.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_failed",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::InvalidToken => "invalid_token",
            AppError::UserNotFound => "user_not_found",
            AppError::MissingAbility(_) => "missing_ability",
            AppError::MissingTenant => "missing_tenant",
            AppError::TenantMismatch => "tenant_mismatch",
            AppError::TaskForbidden => "task_forbidden",
            AppError::ClientNotFound => "client_not_found",
            AppError::TaskNotFound => "task_not_found",
            AppError::SenderNotFound => "sender_not_found",
            AppError::InvalidSubscriptionWindow => "invalid_subscription_window",
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => "internal_error",
        }
    }

    pub fn to_api_error(self, locale: &Locale, store: &I18nStore) -> ApiError {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Os detalhes ficam só no log
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        match self {
            AppError::ValidationError(errors) => {
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), json!(messages));
                }
                ApiError {
                    status,
                    error: store.translate(&locale.0, "validation_failed"),
                    details: Some(Value::Object(details)),
                }
            }
            AppError::MissingAbility(ref ability) => ApiError {
                status,
                error: store.translate_with(&locale.0, "missing_ability", &[("ability", ability.as_str())]),
                details: None,
            },
            other => ApiError {
                status,
                error: store.translate(&locale.0, other.code()),
                details: None,
            },
        }
    }
}

// O erro que de fato vai para o cliente HTTP
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}
