//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::{AppState, Config};
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG manda; sem ele, info para o nosso crate
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("studio_backend=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let app_state = AppState::new(&config).await?;

    sqlx::migrate!().run(&app_state.db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = router(app_state);

    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(app_state: AppState) -> Router {
    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login));

    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me));

    let client_routes = Router::new()
        .route("/"
               ,get(handlers::clients::list_clients)
               .post(handlers::clients::create_client)
        )
        .route("/search", get(handlers::clients::search_clients))
        .route("/source-options", get(handlers::clients::source_options))
        .route("/old", get(handlers::clients::old_clients))
        .route("/trials", get(handlers::clients::trial_clients))
        .route("/{id}"
               ,get(handlers::clients::show_client)
               .put(handlers::clients::update_client)
        )
        .route("/{id}/sales", get(handlers::clients::client_sales));

    let sale_routes = Router::new()
        .route("/", post(handlers::sales::create_sale));

    let task_routes = Router::new()
        .route("/"
               ,get(handlers::tasks::tasks_dashboard)
               .post(handlers::tasks::create_task)
        )
        .route("/client/{client_id}", get(handlers::tasks::client_tasks))
        .route("/{id}", delete(handlers::tasks::delete_task));

    // Tudo abaixo de /api exige Bearer token, menos login e health
    let protected = Router::new()
        .nest("/users", user_routes)
        .nest("/clients", client_routes)
        .nest("/sales", sale_routes)
        .nest("/tasks", task_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api", protected)
        .with_state(app_state)
}
