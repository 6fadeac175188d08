// src/services/report_service.rs

use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        pagination::{PageRequest, Paginated},
    },
    db::{ReportRepository, TaskRepository},
    models::{
        appointment::NoShowLead,
        report::{OldClient, TasksDashboard, TrialClient},
        task::TaskEntry,
    },
    services::lifecycle::{LifecycleRules, ReportClock, TrialWindow},
};

/// As quatro paginações independentes do painel de tarefas.
#[derive(Debug, Clone)]
pub struct DashboardPages {
    pub tasks: PageRequest,
    pub no_show_leads: PageRequest,
    pub trials: PageRequest,
    pub renewals: PageRequest,
}

#[derive(Clone)]
pub struct ReportService {
    report_repo: ReportRepository,
    task_repo: TaskRepository,
}

impl ReportService {
    pub fn new(report_repo: ReportRepository, task_repo: TaskRepository) -> Self {
        Self { report_repo, task_repo }
    }

    // =========================================================================
    //  RELATÓRIOS DE CLIENTES
    // =========================================================================

    pub async fn old_clients(
        &self,
        tenant_id: Uuid,
        clock: ReportClock,
        page: &PageRequest,
    ) -> Result<Paginated<OldClient>, AppError> {
        let snapshot = self.report_repo.load_snapshot(tenant_id).await?;
        let rules = LifecycleRules::new(&snapshot, tenant_id, clock);

        Ok(Paginated::from_vec(rules.old_clients(), page))
    }

    pub async fn trial_clients(
        &self,
        tenant_id: Uuid,
        clock: ReportClock,
        page: &PageRequest,
    ) -> Result<Paginated<TrialClient>, AppError> {
        let snapshot = self.report_repo.load_snapshot(tenant_id).await?;
        let rules = LifecycleRules::new(&snapshot, tenant_id, clock);

        Ok(Paginated::from_vec(rules.trial_clients(TrialWindow::OlderThanMonth), page))
    }

    // =========================================================================
    //  PAINEL DE TAREFAS
    // =========================================================================

    /// Monta o painel com um único relógio; as leituras independentes rodam em paralelo.
    pub async fn tasks_dashboard(
        &self,
        tenant_id: Uuid,
        clock: ReportClock,
        pages: &DashboardPages,
    ) -> Result<TasksDashboard, AppError> {
        tracing::debug!(
            "Painel do estúdio {} às {}: hoje {}, mês {}, semana {}",
            tenant_id,
            clock.now(),
            clock.today(),
            clock.month_ago(),
            clock.week_ahead()
        );

        let (snapshot, tasks, no_show_leads) = tokio::try_join!(
            self.report_repo.load_snapshot(tenant_id),
            self.tasks_page(tenant_id, &pages.tasks),
            self.no_show_page(tenant_id, &pages.no_show_leads),
        )?;

        let rules = LifecycleRules::new(&snapshot, tenant_id, clock);

        Ok(TasksDashboard {
            tasks,
            no_show_leads,
            trial_less_than_month: Paginated::from_vec(
                rules.trial_clients(TrialWindow::WithinMonth),
                &pages.trials,
            ),
            renewals: Paginated::from_vec(rules.renewal_clients(), &pages.renewals),
        })
    }

    async fn tasks_page(
        &self,
        tenant_id: Uuid,
        page: &PageRequest,
    ) -> Result<Paginated<TaskEntry>, AppError> {
        let total = self.task_repo.count_for_tenant(tenant_id).await?;

        let data = match page.offset() {
            Some(offset) => self.task_repo.list_page(tenant_id, page.limit(), offset).await?,
            None => Vec::new(),
        };

        Ok(Paginated::from_page(data, total.max(0) as u64, page))
    }

    async fn no_show_page(
        &self,
        tenant_id: Uuid,
        page: &PageRequest,
    ) -> Result<Paginated<NoShowLead>, AppError> {
        let total = self.report_repo.count_no_show_leads(tenant_id).await?;

        let data = match page.offset() {
            Some(offset) => {
                self.report_repo
                    .list_no_show_leads(tenant_id, page.limit(), offset)
                    .await?
            }
            None => Vec::new(),
        };

        Ok(Paginated::from_page(data, total.max(0) as u64, page))
    }
}
