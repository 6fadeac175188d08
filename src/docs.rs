// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Clients ---
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::update_client,
        handlers::clients::search_clients,
        handlers::clients::source_options,
        handlers::clients::show_client,
        handlers::clients::client_sales,

        // --- Reports ---
        handlers::clients::old_clients,
        handlers::clients::trial_clients,

        // --- Sales ---
        handlers::sales::create_sale,

        // --- Tasks ---
        handlers::tasks::tasks_dashboard,
        handlers::tasks::create_task,
        handlers::tasks::client_tasks,
        handlers::tasks::delete_task,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::MeResponse,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Clients ---
            models::client::Gender,
            models::client::Client,
            models::client::ClientSummary,
            models::client::ClientSearchHit,
            models::client::ClientDetail,
            models::client::Category,
            models::status::StatusTransition,

            // --- Sales ---
            models::sale::ServiceOrProduct,
            models::sale::Sale,

            // --- Reports ---
            models::report::OldClient,
            models::report::TrialClient,
            models::report::RenewalClient,
            models::appointment::AppointmentStatus,
            models::appointment::NoShowLead,

            // --- Tasks ---
            models::task::Task,
            models::task::ClientTask,
            models::task::TaskEntry,

            // --- Payloads ---
            handlers::clients::ClientFieldsPayload,
            handlers::clients::CreateClientPayload,
            handlers::sales::CreateSalePayload,
            handlers::tasks::CreateTaskPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação"),
        (name = "Users", description = "Dados do Usuário e Habilidades"),
        (name = "Clients", description = "Cadastro e Consulta de Clientes e Leads"),
        (name = "Reports", description = "Clientes antigos e experimentais"),
        (name = "Sales", description = "Vendas e Abonamentos"),
        (name = "Tasks", description = "Tarefas e Painel de Lembretes")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
