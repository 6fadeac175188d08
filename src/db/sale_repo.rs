// src/db/sale_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::sale::{NewSale, Sale},
};

const SALE_COLUMNS: &str = r#"
    id, director_id, client_id, sale_date, service_or_product, sport_type, service_type,
    subscription_duration, visits_per_week, training_count, trainer, trainer_category,
    product_type, subscription_start_date, subscription_end_date, cost, paid_amount,
    pay_method, created_at, updated_at
"#;

#[derive(Clone)]
pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_sale<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        sale: &NewSale,
    ) -> Result<Sale, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO sales (
                director_id, client_id, sale_date, service_or_product, sport_type, service_type,
                subscription_duration, visits_per_week, training_count, trainer, trainer_category,
                product_type, subscription_start_date, subscription_end_date, cost, paid_amount,
                pay_method
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING {}
            "#,
            SALE_COLUMNS
        );

        let created = sqlx::query_as::<_, Sale>(&sql)
            .bind(tenant_id)
            .bind(sale.client_id)
            .bind(sale.sale_date)
            .bind(sale.service_or_product)
            .bind(&sale.sport_type)
            .bind(&sale.service_type)
            .bind(sale.subscription_duration)
            .bind(sale.visits_per_week)
            .bind(sale.training_count)
            .bind(&sale.trainer)
            .bind(&sale.trainer_category)
            .bind(&sale.product_type)
            .bind(sale.subscription_start_date)
            .bind(sale.subscription_end_date)
            .bind(sale.cost)
            .bind(sale.paid_amount)
            .bind(&sale.pay_method)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    /// Histórico de compras de um cliente, da mais recente para a mais antiga.
    pub async fn list_for_client(
        &self,
        tenant_id: Uuid,
        client_id: Uuid,
    ) -> Result<Vec<Sale>, AppError> {
        let sql = format!(
            r#"
            SELECT {}
            FROM sales
            WHERE client_id = $1 AND director_id = $2
            ORDER BY sale_date DESC, created_at DESC
            "#,
            SALE_COLUMNS
        );

        let sales = sqlx::query_as::<_, Sale>(&sql)
            .bind(client_id)
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }
}
