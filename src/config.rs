// src/config.rs

mod settings;

pub use settings::Config;

use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{
        ClientRepository, RbacRepository, ReportRepository, SaleRepository, StatusRepository,
        TaskRepository, UserRepository,
    },
    services::{
        auth::{AuthService, JwtKeys},
        client_service::ClientService,
        report_service::ReportService,
        sale_service::SaleService,
        task_service::TaskService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub i18n_store: Arc<I18nStore>,

    pub auth_service: AuthService,
    pub client_service: ClientService,
    pub sale_service: SaleService,
    pub task_service: TaskService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool, config))
    }

    // --- Monta o gráfico de dependências ---
    fn with_pool(db_pool: PgPool, config: &Config) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let rbac_repo = RbacRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let status_repo = StatusRepository::new(db_pool.clone());
        let sale_repo = SaleRepository::new(db_pool.clone());
        let task_repo = TaskRepository::new(db_pool.clone());
        let report_repo = ReportRepository::new(db_pool.clone());

        let keys = JwtKeys::new(config.jwt_secret.clone(), config.jwt_ttl_days);

        Self {
            auth_service: AuthService::new(user_repo, rbac_repo, keys),
            client_service: ClientService::new(client_repo.clone(), status_repo.clone()),
            sale_service: SaleService::new(sale_repo, client_repo.clone(), status_repo),
            task_service: TaskService::new(task_repo.clone(), client_repo),
            report_service: ReportService::new(report_repo, task_repo),
            i18n_store: Arc::new(I18nStore::new()),
            db_pool,
        }
    }
}
