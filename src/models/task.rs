// src/models/task.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::client::ClientSummary;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub client_id: Uuid,
    pub director_id: Uuid,
    pub user_sender_id: Uuid,
    pub task_date: NaiveDate,
    #[schema(example = "Ligar para confirmar a renovação")]
    pub task_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Tarefa de um cliente com o nome de quem a criou
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientTask {
    pub id: Uuid,
    pub client_id: Uuid,
    pub user_sender_id: Uuid,
    pub sender_name: Option<String>,
    pub task_date: NaiveDate,
    pub task_description: String,
    pub created_at: DateTime<Utc>,
}

// Linha do painel: tarefa + resumo do cliente + remetente
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskEntry {
    pub task_id: Uuid,
    pub user_sender_id: Uuid,
    pub sender_name: Option<String>,
    pub task_date: NaiveDate,
    pub task_description: String,
    #[sqlx(flatten)]
    pub client: ClientSummary,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub client_id: Uuid,
    pub director_id: Uuid,
    pub user_sender_id: Uuid,
    pub task_date: NaiveDate,
    pub task_description: String,
}
