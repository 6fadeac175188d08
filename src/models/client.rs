// src/models/client.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::common::pagination::Paginated;

// Mapeia o CREATE TYPE client_gender do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "client_gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

// ---
// 1. Client (registro completo)
// ---
// Lead e cliente convertido são a mesma entidade; `is_lead` os diferencia.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub director_id: Uuid,
    pub is_lead: bool,

    pub surname: Option<String>,
    #[schema(example = "Anna")]
    pub name: String,
    pub patronymic: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub workplace: Option<String>,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub telegram: Option<String>,
    pub instagram: Option<String>,
    pub address: Option<String>,

    pub gender: Option<Gender>,
    #[schema(example = "instagram")]
    pub ad_source: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---
// 2. ClientSummary (as colunas que as listagens e relatórios mostram)
// ---
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: Uuid,
    pub surname: Option<String>,
    pub name: String,
    pub patronymic: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

// Resultado da busca rápida
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientSearchHit {
    pub id: Uuid,
    pub name: String,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub phone: Option<String>,
    pub ad_source: Option<String>,
    pub is_lead: bool,
}

// Detalhe do cliente com a data da primeira compra (conversão lead -> cliente)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetail {
    #[serde(flatten)]
    pub client: Client,
    pub purchase_created_at: Option<DateTime<Utc>>,
}

// Opções de "origem do anúncio" (categorias do tipo ad_source)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub director_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientIndex {
    pub clients: Paginated<ClientSummary>,
    pub source_options: Vec<Category>,
}

// Dados já validados para INSERT/UPDATE
#[derive(Debug, Clone, Default)]
pub struct ClientFields {
    pub surname: Option<String>,
    pub name: String,
    pub patronymic: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub workplace: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub telegram: Option<String>,
    pub instagram: Option<String>,
    pub address: Option<String>,
    pub gender: Option<Gender>,
    pub ad_source: Option<String>,
}

// Cliente como as regras de classificação o enxergam
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ClientFacts {
    #[sqlx(flatten)]
    pub summary: ClientSummary,
    pub director_id: Uuid,
    pub is_lead: bool,
}
