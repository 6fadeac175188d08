// src/services/sale_service.rs

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ClientRepository, SaleRepository, StatusRepository},
    models::{
        sale::{NewSale, Sale},
        status::StatusTransition,
    },
};

#[derive(Clone)]
pub struct SaleService {
    sale_repo: SaleRepository,
    client_repo: ClientRepository,
    status_repo: StatusRepository,
}

impl SaleService {
    pub fn new(
        sale_repo: SaleRepository,
        client_repo: ClientRepository,
        status_repo: StatusRepository,
    ) -> Self {
        Self { sale_repo, client_repo, status_repo }
    }

    /// Registra a venda e a transição `purchase_created` atomicamente.
    pub async fn create_sale<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        sale: &NewSale,
    ) -> Result<Sale, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        if !sale.has_valid_window() {
            return Err(AppError::InvalidSubscriptionWindow);
        }

        let mut tx = executor.begin().await?;

        if !self.client_repo.client_exists(&mut *tx, tenant_id, sale.client_id).await? {
            return Err(AppError::ClientNotFound);
        }

        let created = self.sale_repo.create_sale(&mut *tx, tenant_id, sale).await?;

        self.status_repo
            .record(&mut *tx, sale.client_id, StatusTransition::PurchaseCreated, tenant_id)
            .await?;

        tx.commit().await?;

        tracing::info!("Venda {} registrada para o cliente {}", created.id, sale.client_id);
        Ok(created)
    }

    pub async fn list_client_sales<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
    ) -> Result<Vec<Sale>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if !self.client_repo.client_exists(executor, tenant_id, client_id).await? {
            return Err(AppError::ClientNotFound);
        }

        self.sale_repo.list_for_client(tenant_id, client_id).await
    }
}
