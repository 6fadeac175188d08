// src/models/appointment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::client::ClientSummary;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Attended,
    NoShow,
    Cancelled,
}

// Agendamento de lead que não compareceu, com o resumo do cliente
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoShowLead {
    pub appointment_id: Uuid,
    pub training_date: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[sqlx(flatten)]
    pub client: ClientSummary,
}
