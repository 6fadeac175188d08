// src/db/report_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        appointment::NoShowLead,
        client::ClientFacts,
        report::LifecycleSnapshot,
        sale::SaleFact,
    },
};

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clientes e vendas do tenant, lidos na mesma transação.
    pub async fn load_snapshot(&self, tenant_id: Uuid) -> Result<LifecycleSnapshot, AppError> {
        let mut tx = self.pool.begin().await?;

        let clients = sqlx::query_as::<_, ClientFacts>(
            r#"
            SELECT id, surname, name, patronymic, birthdate, phone, email,
                   director_id, is_lead
            FROM clients
            WHERE director_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
            .bind(tenant_id)
            .fetch_all(&mut *tx)
            .await?;

        let sales = sqlx::query_as::<_, SaleFact>(
            r#"
            SELECT s.id, s.client_id, s.director_id, s.sale_date, s.service_type,
                   s.subscription_duration, s.subscription_end_date, s.created_at
            FROM sales s
            JOIN clients c ON c.id = s.client_id
            WHERE c.director_id = $1
            "#,
        )
            .bind(tenant_id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(LifecycleSnapshot { clients, sales })
    }

    pub async fn count_no_show_leads(&self, tenant_id: Uuid) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM lead_appointments la
            JOIN clients c ON c.id = la.client_id
            WHERE la.director_id = $1 AND c.director_id = $1 AND la.status = 'no_show'
            "#,
        )
            .bind(tenant_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// Leads que faltaram à aula marcada, da data mais antiga para a mais nova.
    pub async fn list_no_show_leads(
        &self,
        tenant_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NoShowLead>, AppError> {
        let leads = sqlx::query_as::<_, NoShowLead>(
            r#"
            SELECT la.id AS appointment_id, la.training_date, la.status,
                   c.id, c.surname, c.name, c.patronymic, c.birthdate, c.phone, c.email
            FROM lead_appointments la
            JOIN clients c ON c.id = la.client_id
            WHERE la.director_id = $1 AND c.director_id = $1 AND la.status = 'no_show'
            ORDER BY la.training_date ASC, la.id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
            .bind(tenant_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(leads)
    }
}
