// src/db/status_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::status::{ClientStatus, StatusTransition},
};

// Histórico de transições: só INSERT e SELECT.
#[derive(Clone)]
pub struct StatusRepository {
    pool: PgPool,
}

impl StatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Acrescenta uma linha imutável ao histórico.
    pub async fn record<'e, E>(
        &self,
        executor: E,
        client_id: Uuid,
        status_to: StatusTransition,
        tenant_id: Uuid,
    ) -> Result<ClientStatus, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let status = sqlx::query_as::<_, ClientStatus>(
            r#"
            INSERT INTO client_statuses (client_id, status_to, director_id)
            VALUES ($1, $2, $3)
            RETURNING id, client_id, director_id, status_to, created_at
            "#,
        )
            .bind(client_id)
            .bind(status_to)
            .bind(tenant_id)
            .fetch_one(executor)
            .await?;

        Ok(status)
    }

    pub async fn list_for_client(
        &self,
        tenant_id: Uuid,
        client_id: Uuid,
    ) -> Result<Vec<ClientStatus>, AppError> {
        let history = sqlx::query_as::<_, ClientStatus>(
            r#"
            SELECT id, client_id, director_id, status_to, created_at
            FROM client_statuses
            WHERE client_id = $1 AND director_id = $2
            ORDER BY created_at ASC, id ASC
            "#,
        )
            .bind(client_id)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(history)
    }
}
