// src/handlers/sales.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{PermManageSales, RequirePermission},
        tenancy::TenantContext,
    },
    models::sale::{NewSale, Sale, ServiceOrProduct},
};

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalePayload {
    pub client_id: Uuid,
    pub sale_date: NaiveDate,
    pub service_or_product: ServiceOrProduct,

    #[validate(length(max = 255))]
    pub sport_type: Option<String>,

    #[validate(length(max = 255))]
    #[schema(example = "group")]
    pub service_type: Option<String>,

    // 0.03 = visita avulsa
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = Option<f64>, example = 1.0)]
    pub subscription_duration: Option<Decimal>,

    #[validate(range(min = 0))]
    pub visits_per_week: Option<i32>,

    #[validate(range(min = 0))]
    pub training_count: Option<i32>,

    #[validate(length(max = 255))]
    pub trainer: Option<String>,

    #[validate(length(max = 255))]
    pub trainer_category: Option<String>,

    #[validate(length(max = 255))]
    pub product_type: Option<String>,

    pub subscription_start_date: Option<NaiveDate>,
    pub subscription_end_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 3500.0)]
    pub cost: Decimal,

    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 3500.0)]
    pub paid_amount: Decimal,

    #[validate(length(max = 255))]
    pub pay_method: Option<String>,
}

impl From<CreateSalePayload> for NewSale {
    fn from(p: CreateSalePayload) -> Self {
        NewSale {
            client_id: p.client_id,
            sale_date: p.sale_date,
            service_or_product: p.service_or_product,
            sport_type: p.sport_type,
            service_type: p.service_type,
            subscription_duration: p.subscription_duration,
            visits_per_week: p.visits_per_week,
            training_count: p.training_count,
            trainer: p.trainer,
            trainer_category: p.trainer_category,
            product_type: p.product_type,
            subscription_start_date: p.subscription_start_date,
            subscription_end_date: p.subscription_end_date,
            cost: p.cost,
            paid_amount: p.paid_amount,
            pay_method: p.pay_method,
        }
    }
}

// POST /api/sales
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sales",
    request_body = CreateSalePayload,
    responses(
        (status = 201, description = "Venda registrada", body = Sale),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_sale(
    State(app_state): State<AppState>,
    locale: Locale,
    tenant: TenantContext,
    _perm: RequirePermission<PermManageSales>,
    Json(payload): Json<CreateSalePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let sale = app_state.sale_service
        .create_sale(&app_state.db_pool, tenant.0, &NewSale::from(payload))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(sale)))
}
