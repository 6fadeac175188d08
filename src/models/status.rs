// src/models/status.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE client_status_transition do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "client_status_transition", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusTransition {
    LeadCreated,
    ClientCreated,
    PurchaseCreated,
}

impl StatusTransition {
    /// Transição registrada ao cadastrar um cliente.
    pub fn on_create(is_lead: bool) -> Self {
        if is_lead {
            StatusTransition::LeadCreated
        } else {
            StatusTransition::ClientCreated
        }
    }
}

// Linha imutável do histórico (só INSERT)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatus {
    pub id: Uuid,
    pub client_id: Uuid,
    pub director_id: Uuid,
    pub status_to: StatusTransition,
    pub created_at: DateTime<Utc>,
}
