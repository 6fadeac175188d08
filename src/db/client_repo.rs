// src/db/client_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::client::{Category, Client, ClientFields, ClientSearchHit, ClientSummary},
};

const CLIENT_COLUMNS: &str = r#"
    id, director_id, is_lead, surname, name, patronymic, birthdate, workplace,
    phone, email, telegram, instagram, address, gender, ad_source,
    created_at, updated_at
"#;

const SEARCH_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  ESCRITA
    // =========================================================================

    pub async fn create_client<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        is_lead: bool,
        fields: &ClientFields,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO clients (
                director_id, is_lead, surname, name, patronymic, birthdate, workplace,
                phone, email, telegram, instagram, address, gender, ad_source
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {}
            "#,
            CLIENT_COLUMNS
        );

        let client = sqlx::query_as::<_, Client>(&sql)
            .bind(tenant_id)
            .bind(is_lead)
            .bind(&fields.surname)
            .bind(&fields.name)
            .bind(&fields.patronymic)
            .bind(fields.birthdate)
            .bind(&fields.workplace)
            .bind(&fields.phone)
            .bind(&fields.email)
            .bind(&fields.telegram)
            .bind(&fields.instagram)
            .bind(&fields.address)
            .bind(fields.gender)
            .bind(&fields.ad_source)
            .fetch_one(executor)
            .await?;

        Ok(client)
    }

    /// Atualiza só se o cliente for do tenant; `None` caso contrário.
    pub async fn update_client<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
        fields: &ClientFields,
    ) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE clients SET
                surname = $3, name = $4, patronymic = $5, birthdate = $6, workplace = $7,
                phone = $8, email = $9, telegram = $10, instagram = $11, address = $12,
                gender = $13, ad_source = $14, updated_at = NOW()
            WHERE id = $1 AND director_id = $2
            RETURNING {}
            "#,
            CLIENT_COLUMNS
        );

        let client = sqlx::query_as::<_, Client>(&sql)
            .bind(client_id)
            .bind(tenant_id)
            .bind(&fields.surname)
            .bind(&fields.name)
            .bind(&fields.patronymic)
            .bind(fields.birthdate)
            .bind(&fields.workplace)
            .bind(&fields.phone)
            .bind(&fields.email)
            .bind(&fields.telegram)
            .bind(&fields.instagram)
            .bind(&fields.address)
            .bind(fields.gender)
            .bind(&fields.ad_source)
            .fetch_optional(executor)
            .await?;

        Ok(client)
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub async fn find_client<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
    ) -> Result<Option<Client>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {} FROM clients WHERE id = $1 AND director_id = $2",
            CLIENT_COLUMNS
        );

        let client = sqlx::query_as::<_, Client>(&sql)
            .bind(client_id)
            .bind(tenant_id)
            .fetch_optional(executor)
            .await?;

        Ok(client)
    }

    pub async fn client_exists<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM clients WHERE id = $1 AND director_id = $2)",
        )
            .bind(client_id)
            .bind(tenant_id)
            .fetch_one(executor)
            .await?;

        Ok(exists)
    }

    /// Total de clientes (não-leads) do tenant, para a paginação.
    pub async fn count_clients<'e, E>(&self, executor: E, tenant_id: Uuid) -> Result<i64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clients WHERE director_id = $1 AND is_lead = FALSE",
        )
            .bind(tenant_id)
            .fetch_one(executor)
            .await?;

        Ok(total)
    }

    /// Uma página de clientes, dos mais novos para os mais antigos.
    pub async fn list_clients_page<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ClientSummary>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let clients = sqlx::query_as::<_, ClientSummary>(
            r#"
            SELECT id, surname, name, patronymic, birthdate, phone, email
            FROM clients
            WHERE director_id = $1 AND is_lead = FALSE
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
            .bind(tenant_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await?;

        Ok(clients)
    }

    /// Busca por sobrenome, nome ou patronímico (sem ranking).
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
        let search_term = format!("%{}%", escape_like(query));

        let clients = sqlx::query_as::<_, ClientSearchHit>(
            r#"
            SELECT id, name, surname, patronymic, phone, ad_source, is_lead
            FROM clients
            WHERE director_id = $1
              AND ($2::BOOLEAN IS NULL OR is_lead = $2)
              AND (
                surname ILIKE $3
                OR name ILIKE $3
                OR patronymic ILIKE $3
              )
            ORDER BY surname ASC NULLS LAST, name ASC
            LIMIT $4
            "#,
        )
            .bind(tenant_id)
            .bind(is_lead)
            .bind(search_term)
            .bind(SEARCH_LIMIT)
            .fetch_all(executor)
            .await?;

        Ok(clients)
    }

    pub async fn list_source_options(&self, tenant_id: Uuid) -> Result<Vec<Category>, AppError> {
        let options = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, director_id, type, name
            FROM categories
            WHERE director_id = $1 AND type = 'ad_source'
            ORDER BY name ASC
            "#,
        )
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(options)
    }
}

// '%' e '_' digitados pelo usuário são literais
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
