// src/services/client_service.rs

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        pagination::{PageRequest, Paginated},
    },
    db::{ClientRepository, StatusRepository},
    models::{
        client::{Category, Client, ClientDetail, ClientFields, ClientIndex, ClientSearchHit},
        status::StatusTransition,
    },
    services::lifecycle::purchase_created_at,
};

#[derive(Clone)]
pub struct ClientService {
    client_repo: ClientRepository,
    status_repo: StatusRepository,
}

impl ClientService {
    pub fn new(client_repo: ClientRepository, status_repo: StatusRepository) -> Self {
        Self { client_repo, status_repo }
    }

    // =========================================================================
    //  CADASTRO
    // =========================================================================

    /// Insere o cliente e a primeira transição de status na mesma transação.
    pub async fn create_client<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        is_lead: bool,
        fields: &ClientFields,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let client = self.client_repo
            .create_client(&mut *tx, tenant_id, is_lead, fields)
            .await?;

        self.status_repo
            .record(&mut *tx, client.id, StatusTransition::on_create(is_lead), tenant_id)
            .await?;

        tx.commit().await?;

        tracing::info!("Cliente {} criado no estúdio {} (lead: {})", client.id, tenant_id, is_lead);
        Ok(client)
    }

    pub async fn update_client<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
        fields: &ClientFields,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.client_repo
            .update_client(executor, tenant_id, client_id, fields)
            .await?
            .ok_or(AppError::ClientNotFound)
    }

    // =========================================================================
    //  CONSULTAS
    // =========================================================================

    /// Página de clientes + opções de origem, como a tela de listagem pede.
    pub async fn list_clients<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        page: &PageRequest,
    ) -> Result<ClientIndex, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        let total = self.client_repo.count_clients(&mut *conn, tenant_id).await?;

        let data = match page.offset() {
            Some(offset) => {
                self.client_repo
                    .list_clients_page(&mut *conn, tenant_id, page.limit(), offset)
                    .await?
            }
            None => Vec::new(),
        };

        let source_options = self.client_repo.list_source_options(tenant_id).await?;

        Ok(ClientIndex {
            clients: Paginated::from_page(data, total.max(0) as u64, page),
            source_options,
        })
    }

    pub async fn search_clients<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        query: &str,
        is_lead: Option<bool>,
    ) -> Result<Vec<ClientSearchHit>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.client_repo.search_clients(executor, tenant_id, query, is_lead).await
    }

    pub async fn source_options(&self, tenant_id: Uuid) -> Result<Vec<Category>, AppError> {
        self.client_repo.list_source_options(tenant_id).await
    }

    /// Cliente + data da primeira compra (só para quem entrou como lead).
    pub async fn client_detail<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
    ) -> Result<ClientDetail, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = self.client_repo
            .find_client(executor, tenant_id, client_id)
            .await?
            .ok_or(AppError::ClientNotFound)?;

        let history = self.status_repo.list_for_client(tenant_id, client_id).await?;

        Ok(ClientDetail {
            client,
            purchase_created_at: purchase_created_at(&history),
        })
    }
}
