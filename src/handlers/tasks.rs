// src/handlers/tasks.rs

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
        pagination::PageRequest,
    },
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{PermManageTasks, RequirePermission},
        tenancy::TenantContext,
    },
    models::{
        report::TasksDashboard,
        task::{ClientTask, NewTask, Task},
    },
    services::{lifecycle::ReportClock, report_service::DashboardPages},
};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    pub client_id: Uuid,
    pub director_id: Uuid,
    pub user_sender_id: Uuid,
    pub task_date: NaiveDate,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "Ligar para confirmar a renovação")]
    pub task_description: String,
}

/// Cada coleção do painel tem seu próprio parâmetro de página.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Página das tarefas (e das renovações, se `page_renewals` faltar)
    pub page: Option<i64>,
    pub page_no_show_leads: Option<i64>,
    /// Página das experimentais do último mês
    pub trials: Option<i64>,
    pub page_renewals: Option<i64>,
}

impl DashboardQuery {
    fn pages(&self, uri: &axum::http::Uri) -> DashboardPages {
        DashboardPages {
            tasks: PageRequest::new(self.page, "page", uri),
            no_show_leads: PageRequest::new(self.page_no_show_leads, "page_no_show_leads", uri),
            trials: PageRequest::new(self.trials, "trials", uri),
            renewals: PageRequest::new(self.page_renewals.or(self.page), "page_renewals", uri),
        }
    }
}

// GET /api/tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "Tasks",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Painel: tarefas, leads que faltaram, experimentais e renovações", body = TasksDashboard),
        (status = 403, description = "Sem permissão")
    ),
    security(("api_jwt" = []))
)]
pub async fn tasks_dashboard(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageTasks>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let clock = ReportClock::at(Utc::now());

    let dashboard = app_state.report_service
        .tasks_dashboard(tenant.0, clock, &query.pages(&uri))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(dashboard)))
}

// POST /api/tasks
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "Tasks",
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "Tarefa criada", body = Task),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Estúdio diferente do seu"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageTasks>,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let new_task = NewTask {
        client_id: payload.client_id,
        director_id: payload.director_id,
        user_sender_id: payload.user_sender_id,
        task_date: payload.task_date,
        task_description: payload.task_description.trim().to_string(),
    };

    let task = app_state.task_service
        .create_task(&app_state.db_pool, tenant.0, &new_task)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(task)))
}

// GET /api/tasks/client/{client_id}
#[utoipa::path(
    get,
    path = "/api/tasks/client/{client_id}",
    tag = "Tasks",
    params(("client_id" = Uuid, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Tarefas do cliente por data", body = Vec<ClientTask>),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn client_tasks(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageTasks>,
    Path(client_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let tasks = app_state.task_service
        .list_client_tasks(&app_state.db_pool, tenant.0, client_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(tasks)))
}

// DELETE /api/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    responses(
        (status = 204, description = "Tarefa excluída"),
        (status = 403, description = "Tarefa de outro estúdio"),
        (status = 404, description = "Tarefa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageTasks>,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state.task_service
        .delete_task(tenant.0, task_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
