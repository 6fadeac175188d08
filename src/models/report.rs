// src/models/report.rs

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::pagination::Paginated,
    models::{
        appointment::NoShowLead,
        client::{ClientFacts, ClientSummary},
        sale::SaleFact,
        task::TaskEntry,
    },
};

/// Fotografia do estúdio lida numa única transação de leitura.
#[derive(Debug, Clone, Default)]
pub struct LifecycleSnapshot {
    pub clients: Vec<ClientFacts>,
    pub sales: Vec<SaleFact>,
}

// Cliente cujo último abonamento de grupo venceu há mais de um mês
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OldClient {
    #[serde(flatten)]
    pub client: ClientSummary,
    pub subscription_end_date: NaiveDate,
}

// Cliente que fez aula experimental e não comprou
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrialClient {
    #[serde(flatten)]
    pub client: ClientSummary,
    pub training_date: NaiveDate,
}

// Cliente com abonamento vencendo ou recém-vencido
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenewalClient {
    #[serde(flatten)]
    pub client: ClientSummary,
    pub subscription_end_date: NaiveDate,
    pub service_type: String,
}

// O painel de tarefas: quatro coleções paginadas independentes
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TasksDashboard {
    pub tasks: Paginated<TaskEntry>,
    pub no_show_leads: Paginated<NoShowLead>,
    pub trial_less_than_month: Paginated<TrialClient>,
    pub renewals: Paginated<RenewalClient>,
}
