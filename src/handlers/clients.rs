// src/handlers/clients.rs

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::{
        error::{ApiError, AppError},
        pagination::{PageRequest, Paginated},
    },
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{PermManageSales, RequirePermission},
        tenancy::TenantContext,
    },
    models::{
        client::{Category, Client, ClientDetail, ClientFields, ClientIndex, ClientSearchHit, Gender},
        report::{OldClient, TrialClient},
        sale::Sale,
    },
    services::lifecycle::ReportClock,
};

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientFieldsPayload {
    #[validate(length(max = 255))]
    pub surname: Option<String>,

    #[validate(custom(function = "not_blank"), length(max = 255))]
    #[schema(example = "Anna")]
    pub name: String,

    #[validate(length(max = 255))]
    pub patronymic: Option<String>,

    pub birthdate: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub workplace: Option<String>,

    #[validate(length(max = 255))]
    pub phone: Option<String>,

    #[validate(email, length(max = 255))]
    pub email: Option<String>,

    #[validate(length(max = 255))]
    pub telegram: Option<String>,

    #[validate(length(max = 255))]
    pub instagram: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,

    pub gender: Option<Gender>,

    #[validate(length(max = 255))]
    #[schema(example = "instagram")]
    pub ad_source: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

// Campo em branco vale como ausente
fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ClientFieldsPayload {
    fn into_fields(self) -> ClientFields {
        ClientFields {
            surname: blank_to_none(self.surname),
            name: self.name.trim().to_string(),
            patronymic: blank_to_none(self.patronymic),
            birthdate: self.birthdate,
            workplace: blank_to_none(self.workplace),
            phone: blank_to_none(self.phone),
            email: blank_to_none(self.email),
            telegram: blank_to_none(self.telegram),
            instagram: blank_to_none(self.instagram),
            address: blank_to_none(self.address),
            gender: self.gender,
            ad_source: blank_to_none(self.ad_source),
        }
    }
}

// Os campos vêm no mesmo nível de directorId/isLead
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    pub director_id: Uuid,

    #[serde(default)]
    pub is_lead: bool,

    #[serde(flatten)]
    pub fields: ClientFieldsPayload,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Página (1 = primeira)
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Trecho do sobrenome, nome ou patronímico
    pub query: Option<String>,
    pub is_lead: Option<bool>,
}

// =============================================================================
//  CADASTRO
// =============================================================================

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clients",
    params(PageQuery),
    responses(
        (status = 200, description = "Clientes (não-leads) do estúdio + origens", body = ClientIndex),
        (status = 403, description = "Sem permissão")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = PageRequest::new(query.page, "page", &uri);

    let index = app_state.client_service
        .list_clients(&app_state.db_pool, tenant.0, &page)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(index)))
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clients",
    request_body = CreateClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Client),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Sem permissão ou estúdio diferente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.fields.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    tenant.ensure_owns(payload.director_id)
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let client = app_state.client_service
        .create_client(&app_state.db_pool, tenant.0, payload.is_lead, &payload.fields.into_fields())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(client)))
}

// PUT /api/clients/{id}
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "Clients",
    request_body = ClientFieldsPayload,
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente atualizado"),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    Path(client_id): Path<Uuid>,
    Json(payload): Json<ClientFieldsPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    app_state.client_service
        .update_client(&app_state.db_pool, tenant.0, client_id, &payload.into_fields())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  CONSULTAS
// =============================================================================

// GET /api/clients/search
#[utoipa::path(
    get,
    path = "/api/clients/search",
    tag = "Clients",
    params(SearchQuery),
    responses(
        (status = 200, description = "Até 50 clientes", body = Vec<ClientSearchHit>)
    ),
    security(("api_jwt" = []))
)]
pub async fn search_clients(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let hits = app_state.client_service
        .search_clients(
            &app_state.db_pool,
            tenant.0,
            query.query.as_deref().unwrap_or(""),
            query.is_lead,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(hits)))
}

// GET /api/clients/source-options
#[utoipa::path(
    get,
    path = "/api/clients/source-options",
    tag = "Clients",
    responses(
        (status = 200, description = "Origens de anúncio do estúdio", body = Vec<Category>)
    ),
    security(("api_jwt" = []))
)]
pub async fn source_options(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
) -> Result<impl IntoResponse, ApiError> {
    let options = app_state.client_service
        .source_options(tenant.0)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(options)))
}

// GET /api/clients/{id}
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente com a data da primeira compra", body = ClientDetail),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn show_client(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    Path(client_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = app_state.client_service
        .client_detail(&app_state.db_pool, tenant.0, client_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(detail)))
}

// GET /api/clients/{id}/sales
#[utoipa::path(
    get,
    path = "/api/clients/{id}/sales",
    tag = "Clients",
    params(("id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Vendas do cliente, mais recentes primeiro", body = Vec<Sale>),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn client_sales(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    Path(client_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let sales = app_state.sale_service
        .list_client_sales(&app_state.db_pool, tenant.0, client_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(sales)))
}

// =============================================================================
//  RELATÓRIOS
// =============================================================================

// GET /api/clients/old
#[utoipa::path(
    get,
    path = "/api/clients/old",
    tag = "Reports",
    params(PageQuery),
    responses(
        (status = 200, description = "Clientes com abonamento de grupo vencido há mais de um mês", body = Paginated<OldClient>)
    ),
    security(("api_jwt" = []))
)]
pub async fn old_clients(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let clock = ReportClock::at(Utc::now());
    let page = PageRequest::new(query.page, "page", &uri);

    let report = app_state.report_service
        .old_clients(tenant.0, clock, &page)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(report)))
}

// GET /api/clients/trials
#[utoipa::path(
    get,
    path = "/api/clients/trials",
    tag = "Reports",
    params(PageQuery),
    responses(
        (status = 200, description = "Experimentais de mais de um mês sem compra", body = Paginated<TrialClient>)
    ),
    security(("api_jwt" = []))
)]
pub async fn trial_clients(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let clock = ReportClock::at(Utc::now());
    let page = PageRequest::new(query.page, "page", &uri);

    let report = app_state.report_service
        .trial_clients(tenant.0, clock, &page)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(report)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> ClientFieldsPayload {
        ClientFieldsPayload {
            surname: None,
            name: name.into(),
            patronymic: None,
            birthdate: None,
            workplace: None,
            phone: None,
            email: None,
            telegram: None,
            instagram: None,
            address: None,
            gender: None,
            ad_source: None,
        }
    }

    #[test]
    fn name_is_required() {
        assert!(fields("").validate().is_err());
        assert!(fields("Anna").validate().is_ok());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let errors = fields("   ").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn email_format_and_length_are_checked() {
        let mut payload = fields("Anna");
        payload.email = Some("nao-e-email".into());
        assert!(payload.validate().is_err());

        payload.email = Some("anna@studio.com".into());
        payload.address = Some("x".repeat(256));
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));
    }

    #[test]
    fn create_payload_reads_camel_case_and_defaults_is_lead() {
        let director = Uuid::new_v4();
        let payload: CreateClientPayload = serde_json::from_value(serde_json::json!({
            "directorId": director,
            "name": "Anna",
            "adSource": "instagram",
            "gender": "female"
        }))
        .unwrap();

        assert_eq!(payload.director_id, director);
        assert!(!payload.is_lead);
        assert_eq!(payload.fields.ad_source.as_deref(), Some("instagram"));
        assert_eq!(payload.fields.gender, Some(Gender::Female));
    }

    #[test]
    fn blank_optional_fields_become_null() {
        let mut payload = fields("  Anna ");
        payload.phone = Some("   ".into());
        payload.telegram = Some(" @anna ".into());

        let fields = payload.into_fields();
        assert_eq!(fields.name, "Anna");
        assert_eq!(fields.phone, None);
        assert_eq!(fields.telegram.as_deref(), Some("@anna"));
    }
}
