// src/services/lifecycle.rs
//
// Regras de ciclo de vida do cliente. Tudo aqui é puro: recebe a fotografia
// do estúdio e um relógio imutável, devolve os grupos anotados.

use std::collections::HashMap;

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{
    client::ClientFacts,
    report::{LifecycleSnapshot, OldClient, RenewalClient, TrialClient},
    sale::{SaleFact, SERVICE_TRIAL},
    status::{ClientStatus, StatusTransition},
};

// =========================================================================
//  RELÓGIO
// =========================================================================

/// "Agora" capturado uma única vez por requisição, com as janelas derivadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportClock {
    now: DateTime<Utc>,
    today: NaiveDate,
    month_ago: NaiveDate,
    week_ahead: NaiveDate,
}

impl ReportClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        // chrono limita o dia ao fim do mês menor (31/03 -> 29/02)
        let month_ago = today
            .checked_sub_months(Months::new(1))
            .unwrap_or(NaiveDate::MIN);
        let week_ahead = today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);

        Self { now, today, month_ago, week_ahead }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Início do dia, um mês atrás.
    pub fn month_ago(&self) -> NaiveDate {
        self.month_ago
    }

    pub fn week_ahead(&self) -> NaiveDate {
        self.week_ahead
    }

    /// Abonamento ainda vigente: termina depois de hoje.
    pub fn is_active(&self, end: Option<NaiveDate>) -> bool {
        end.is_some_and(|end| end > self.today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialWindow {
    /// Experimental feita antes de um mês atrás (relatório `trials`)
    OlderThanMonth,
    /// Experimental feita no último mês (painel de tarefas)
    WithinMonth,
}

impl TrialWindow {
    fn contains(self, clock: &ReportClock, sale_date: NaiveDate) -> bool {
        match self {
            TrialWindow::OlderThanMonth => sale_date < clock.month_ago,
            TrialWindow::WithinMonth => sale_date >= clock.month_ago,
        }
    }
}

// =========================================================================
//  HISTÓRICO DE STATUS
// =========================================================================

/// Data da primeira compra de quem já foi lead; `None` para quem nunca foi.
pub fn purchase_created_at(history: &[ClientStatus]) -> Option<DateTime<Utc>> {
    let was_lead = history
        .iter()
        .any(|s| s.status_to == StatusTransition::LeadCreated);

    if !was_lead {
        return None;
    }

    history
        .iter()
        .filter(|s| s.status_to == StatusTransition::PurchaseCreated)
        .map(|s| s.created_at)
        .min()
}

// =========================================================================
//  REGRAS DE CLASSIFICAÇÃO
// =========================================================================

pub struct LifecycleRules<'a> {
    tenant_id: Uuid,
    clock: ReportClock,
    clients: Vec<&'a ClientFacts>,
    sales_by_client: HashMap<Uuid, Vec<&'a SaleFact>>,
}

impl<'a> LifecycleRules<'a> {
    /// Descarta tudo que não é do tenant antes de avaliar qualquer regra.
    pub fn new(snapshot: &'a LifecycleSnapshot, tenant_id: Uuid, clock: ReportClock) -> Self {
        let clients: Vec<&ClientFacts> = snapshot
            .clients
            .iter()
            .filter(|c| c.director_id == tenant_id)
            .collect();

        let mut sales_by_client: HashMap<Uuid, Vec<&SaleFact>> = clients
            .iter()
            .map(|c| (c.summary.id, Vec::new()))
            .collect();

        for sale in &snapshot.sales {
            if let Some(bucket) = sales_by_client.get_mut(&sale.client_id) {
                bucket.push(sale);
            }
        }

        Self { tenant_id, clock, clients, sales_by_client }
    }

    fn sales_of(&self, client_id: Uuid) -> &[&'a SaleFact] {
        self.sales_by_client
            .get(&client_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn has_active_sale(&self, client_id: Uuid) -> bool {
        self.sales_of(client_id)
            .iter()
            .any(|s| self.clock.is_active(s.subscription_end_date))
    }

    /// Venda de grupo/minigrupo mais recente pela data de término (NULL fica por último).
    fn most_recent_group_sale<F>(&self, client_id: Uuid, eligible: F) -> Option<&'a SaleFact>
    where
        F: Fn(&SaleFact) -> bool,
    {
        self.sales_of(client_id)
            .iter()
            .copied()
            .filter(|s| s.is_group_class() && eligible(s))
            .max_by_key(|s| (s.subscription_end_date, s.created_at, s.id))
    }

    /// Clientes "antigos": o último abonamento de grupo venceu há mais de um mês.
    pub fn old_clients(&self) -> Vec<OldClient> {
        self.clients
            .iter()
            .filter(|c| !c.is_lead)
            .filter_map(|client| {
                let id = client.summary.id;
                let end = self.most_recent_group_sale(id, |_| true)?.subscription_end_date?;

                if self.has_active_sale(id) || end >= self.clock.month_ago {
                    return None;
                }

                Some(OldClient {
                    client: client.summary.clone(),
                    subscription_end_date: end,
                })
            })
            .collect()
    }

    /// Clientes com aula experimental na janela e sem abonamento vigente.
    pub fn trial_clients(&self, window: TrialWindow) -> Vec<TrialClient> {
        self.clients
            .iter()
            .filter_map(|client| {
                let id = client.summary.id;

                // Desempate explícito: menor data, depois criação, depois id
                let first_trial = self
                    .sales_of(id)
                    .iter()
                    .filter(|s| s.director_id == self.tenant_id)
                    .filter(|s| s.is_service(SERVICE_TRIAL))
                    .filter(|s| window.contains(&self.clock, s.sale_date))
                    .min_by_key(|s| (s.sale_date, s.created_at, s.id))?;

                if self.has_active_sale(id) {
                    return None;
                }

                Some(TrialClient {
                    client: client.summary.clone(),
                    training_date: first_trial.sale_date,
                })
            })
            .collect()
    }

    /// Clientes para renovação: vence até daqui a 7 dias ou venceu no último mês.
    /// Qualquer venda vigente exclui o cliente, inclusive uma visita avulsa.
    pub fn renewal_clients(&self) -> Vec<RenewalClient> {
        let clock = &self.clock;

        self.clients
            .iter()
            .filter(|c| !c.is_lead)
            .filter_map(|client| {
                let id = client.summary.id;
                let sale = self.most_recent_group_sale(id, |s| s.has_renewable_duration())?;
                let end = sale.subscription_end_date?;

                if self.has_active_sale(id) {
                    return None;
                }

                let ending_soon = clock.today <= end && end <= clock.week_ahead;
                let recently_ended = clock.month_ago <= end && end < clock.today;

                if !(ending_soon || recently_ended) {
                    return None;
                }

                Some(RenewalClient {
                    client: client.summary.clone(),
                    subscription_end_date: end,
                    service_type: sale.service_type.clone().unwrap_or_default(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        client::ClientSummary,
        sale::{SERVICE_GROUP, SERVICE_MINIGROUP, SINGLE_VISIT_DURATION},
    };
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
    }

    fn clock() -> ReportClock {
        ReportClock::at(now())
    }

    fn days(offset: i64) -> NaiveDate {
        now().date_naive() + Duration::days(offset)
    }

    struct Fixture {
        tenant: Uuid,
        snapshot: LifecycleSnapshot,
    }

    impl Fixture {
        fn new() -> Self {
            Self { tenant: Uuid::new_v4(), snapshot: LifecycleSnapshot::default() }
        }

        fn client(&mut self, name: &str, is_lead: bool) -> Uuid {
            let tenant = self.tenant;
            self.client_in(tenant, name, is_lead)
        }

        fn client_in(&mut self, tenant: Uuid, name: &str, is_lead: bool) -> Uuid {
            let id = Uuid::new_v4();
            self.snapshot.clients.push(ClientFacts {
                summary: ClientSummary {
                    id,
                    surname: None,
                    name: name.to_string(),
                    patronymic: None,
                    birthdate: None,
                    phone: None,
                    email: None,
                },
                director_id: tenant,
                is_lead,
            });
            id
        }

        fn sale(
            &mut self,
            client_id: Uuid,
            service_type: &str,
            sale_date: NaiveDate,
            end: Option<NaiveDate>,
            duration: Option<Decimal>,
        ) -> Uuid {
            let director_id = self
                .snapshot
                .clients
                .iter()
                .find(|c| c.summary.id == client_id)
                .map(|c| c.director_id)
                .unwrap();
            let id = Uuid::new_v4();
            self.snapshot.sales.push(SaleFact {
                id,
                client_id,
                director_id,
                sale_date,
                service_type: Some(service_type.to_string()),
                subscription_duration: duration,
                subscription_end_date: end,
                created_at: now() - Duration::days(400) + Duration::seconds(self.snapshot.sales.len() as i64),
            });
            id
        }

        fn group(&mut self, client_id: Uuid, end: NaiveDate) -> Uuid {
            self.sale(client_id, SERVICE_GROUP, end - Duration::days(30), Some(end), Some(Decimal::ONE))
        }

        fn trial(&mut self, client_id: Uuid, sale_date: NaiveDate) -> Uuid {
            self.sale(client_id, SERVICE_TRIAL, sale_date, None, None)
        }

        fn rules(&self) -> LifecycleRules<'_> {
            LifecycleRules::new(&self.snapshot, self.tenant, clock())
        }
    }

    fn ids<T, F: Fn(&T) -> Uuid>(rows: &[T], id: F) -> Vec<Uuid> {
        rows.iter().map(id).collect()
    }

    // ---------------------------------------------------------------------
    //  Relógio
    // ---------------------------------------------------------------------

    #[test]
    fn clock_derives_windows_from_a_single_now() {
        let clock = clock();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(clock.month_ago(), NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());
        assert_eq!(clock.week_ahead(), NaiveDate::from_ymd_opt(2024, 6, 22).unwrap());
        assert_eq!(clock.now(), now());
    }

    #[test]
    fn month_arithmetic_clamps_short_months() {
        let clock = ReportClock::at(Utc.with_ymd_and_hms(2024, 3, 31, 8, 0, 0).unwrap());
        assert_eq!(clock.month_ago(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn subscription_ending_today_is_not_active() {
        let clock = clock();
        assert!(!clock.is_active(Some(days(0))));
        assert!(clock.is_active(Some(days(1))));
        assert!(!clock.is_active(None));
    }

    // ---------------------------------------------------------------------
    //  Clientes antigos
    // ---------------------------------------------------------------------

    #[test]
    fn lapsed_group_client_is_old() {
        let mut fx = Fixture::new();
        let anna = fx.client("Anna", false);
        fx.group(anna, days(-40));

        let old = fx.rules().old_clients();
        assert_eq!(old.len(), 1);
        assert_eq!(old[0].client.id, anna);
        assert_eq!(old[0].subscription_end_date, days(-40));
    }

    #[test]
    fn active_subscription_disqualifies_even_with_a_lapsed_one() {
        let mut fx = Fixture::new();
        let boris = fx.client("Boris", false);
        fx.group(boris, days(3));
        fx.group(boris, days(-200));

        let rules = fx.rules();
        assert!(rules.old_clients().is_empty());

        let recent = rules.most_recent_group_sale(boris, |_| true).unwrap();
        assert_eq!(recent.subscription_end_date, Some(days(3)));
    }

    #[test]
    fn any_active_sale_disqualifies_from_old() {
        let mut fx = Fixture::new();
        let client = fx.client("Vera", false);
        fx.group(client, days(-90));
        fx.sale(client, "personal", days(-5), Some(days(20)), Some(Decimal::ONE));

        assert!(fx.rules().old_clients().is_empty());
    }

    #[test]
    fn old_boundary_is_start_of_day_one_month_ago() {
        let mut fx = Fixture::new();
        let on_boundary = fx.client("Boundary", false);
        fx.group(on_boundary, clock().month_ago());
        let day_before = fx.client("DayBefore", false);
        fx.group(day_before, clock().month_ago() - Duration::days(1));

        let old = fx.rules().old_clients();
        assert_eq!(ids(&old, |o| o.client.id), vec![day_before]);
    }

    #[test]
    fn leads_and_clients_without_group_sales_are_not_old() {
        let mut fx = Fixture::new();
        let lead = fx.client("Lead", true);
        fx.group(lead, days(-60));
        let personal = fx.client("Personal", false);
        fx.sale(personal, "personal", days(-90), Some(days(-60)), Some(Decimal::ONE));
        let _no_sales = fx.client("Nobody", false);

        assert!(fx.rules().old_clients().is_empty());
    }

    #[test]
    fn null_end_date_on_most_recent_group_sale_is_skipped() {
        let mut fx = Fixture::new();
        let client = fx.client("Null", false);
        fx.sale(client, SERVICE_MINIGROUP, days(-100), None, Some(Decimal::ONE));

        assert!(fx.rules().old_clients().is_empty());
    }

    #[test]
    fn null_end_date_ranks_below_real_dates() {
        let mut fx = Fixture::new();
        let client = fx.client("Mixed", false);
        fx.sale(client, SERVICE_GROUP, days(-10), None, Some(Decimal::ONE));
        fx.group(client, days(-50));

        let old = fx.rules().old_clients();
        assert_eq!(old.len(), 1);
        assert_eq!(old[0].subscription_end_date, days(-50));
    }

    // ---------------------------------------------------------------------
    //  Experimentais
    // ---------------------------------------------------------------------

    #[test]
    fn recent_trial_is_within_month_only() {
        let mut fx = Fixture::new();
        let client = fx.client("Trial", true);
        fx.trial(client, days(-20));

        let rules = fx.rules();
        let within = rules.trial_clients(TrialWindow::WithinMonth);
        assert_eq!(ids(&within, |t| t.client.id), vec![client]);
        assert_eq!(within[0].training_date, days(-20));
        assert!(rules.trial_clients(TrialWindow::OlderThanMonth).is_empty());
    }

    #[test]
    fn old_trial_is_older_than_month_only() {
        let mut fx = Fixture::new();
        let client = fx.client("OldTrial", false);
        fx.trial(client, days(-45));

        let rules = fx.rules();
        assert_eq!(rules.trial_clients(TrialWindow::OlderThanMonth).len(), 1);
        assert!(rules.trial_clients(TrialWindow::WithinMonth).is_empty());
    }

    #[test]
    fn trial_windows_partition_on_the_boundary_day() {
        let mut fx = Fixture::new();
        let client = fx.client("Edge", false);
        fx.trial(client, clock().month_ago());

        let rules = fx.rules();
        assert_eq!(rules.trial_clients(TrialWindow::WithinMonth).len(), 1);
        assert!(rules.trial_clients(TrialWindow::OlderThanMonth).is_empty());
    }

    #[test]
    fn trial_client_who_bought_is_excluded() {
        let mut fx = Fixture::new();
        let client = fx.client("Converted", false);
        fx.trial(client, days(-50));
        fx.group(client, days(10));

        assert!(fx.rules().trial_clients(TrialWindow::OlderThanMonth).is_empty());
    }

    #[test]
    fn trial_training_date_is_the_earliest_matching_sale() {
        let mut fx = Fixture::new();
        let client = fx.client("Twice", true);
        fx.trial(client, days(-40));
        fx.trial(client, days(-70));
        fx.trial(client, days(-10));

        let older = fx.rules().trial_clients(TrialWindow::OlderThanMonth);
        assert_eq!(older.len(), 1);
        assert_eq!(older[0].training_date, days(-70));
    }

    #[test]
    fn same_day_trials_tie_break_on_creation_order() {
        let mut fx = Fixture::new();
        let client = fx.client("SameDay", true);
        fx.trial(client, days(-5));
        fx.trial(client, days(-5));

        let rules = fx.rules();
        let first = rules.trial_clients(TrialWindow::WithinMonth);
        let second = rules.trial_clients(TrialWindow::WithinMonth);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    // ---------------------------------------------------------------------
    //  Renovações
    // ---------------------------------------------------------------------

    #[test]
    fn recently_ended_subscription_is_due_for_renewal() {
        let mut fx = Fixture::new();
        let client = fx.client("Recent", false);
        fx.group(client, days(-10));

        let due = fx.rules().renewal_clients();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].subscription_end_date, days(-10));
        assert_eq!(due[0].service_type, SERVICE_GROUP);
    }

    #[test]
    fn subscription_ending_today_is_due_for_renewal() {
        let mut fx = Fixture::new();
        let client = fx.client("Today", false);
        fx.group(client, days(0));

        assert_eq!(fx.rules().renewal_clients().len(), 1);
    }

    #[test]
    fn renewal_window_lower_bound_is_inclusive() {
        let mut fx = Fixture::new();
        let inside = fx.client("Inside", false);
        fx.group(inside, clock().month_ago());
        let outside = fx.client("Outside", false);
        fx.group(outside, clock().month_ago() - Duration::days(1));

        let due = fx.rules().renewal_clients();
        assert_eq!(ids(&due, |r| r.client.id), vec![inside]);
    }

    #[test]
    fn active_subscription_is_not_due_for_renewal() {
        let mut fx = Fixture::new();
        let client = fx.client("Active", false);
        fx.group(client, days(4));

        assert!(fx.rules().renewal_clients().is_empty());
    }

    #[test]
    fn single_visits_are_ignored_for_renewal() {
        let mut fx = Fixture::new();
        let client = fx.client("Single", false);
        fx.sale(client, SERVICE_GROUP, days(-6), Some(days(-5)), Some(SINGLE_VISIT_DURATION));

        assert!(fx.rules().renewal_clients().is_empty());

        // Mas a visita avulsa não esconde o abonamento anterior
        fx.group(client, days(-12));
        let due = fx.rules().renewal_clients();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].subscription_end_date, days(-12));
    }

    #[test]
    fn minigroup_service_type_is_reported() {
        let mut fx = Fixture::new();
        let client = fx.client("Mini", false);
        fx.sale(client, SERVICE_MINIGROUP, days(-40), Some(days(-2)), Some(Decimal::ONE));

        let due = fx.rules().renewal_clients();
        assert_eq!(due[0].service_type, SERVICE_MINIGROUP);
    }

    #[test]
    fn null_duration_is_not_a_renewal_candidate() {
        let mut fx = Fixture::new();
        let client = fx.client("SemDuracao", false);
        fx.sale(client, SERVICE_GROUP, days(-35), Some(days(-5)), None);

        assert!(fx.rules().renewal_clients().is_empty());

        // Um abonamento com duração conhecida continua valendo
        fx.group(client, days(-12));
        let due = fx.rules().renewal_clients();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].subscription_end_date, days(-12));
    }

    #[test]
    fn active_single_visit_hides_ended_subscription_from_renewal() {
        let mut fx = Fixture::new();
        let client = fx.client("Avulsa", false);
        fx.group(client, days(-12));
        fx.sale(client, SERVICE_GROUP, days(0), Some(days(1)), Some(SINGLE_VISIT_DURATION));

        assert!(fx.rules().renewal_clients().is_empty());
    }

    // ---------------------------------------------------------------------
    //  Propriedades gerais
    // ---------------------------------------------------------------------

    #[test]
    fn clients_without_sales_are_never_old_or_due() {
        let mut fx = Fixture::new();
        for i in 0..5 {
            fx.client(&format!("Empty{}", i), i % 2 == 0);
        }
        let rules = fx.rules();
        assert!(rules.old_clients().is_empty());
        assert!(rules.renewal_clients().is_empty());
    }

    #[test]
    fn any_active_sale_excludes_from_every_bucket() {
        let mut fx = Fixture::new();
        let client = fx.client("Busy", false);
        fx.group(client, days(-45));
        fx.group(client, days(-3));
        fx.trial(client, days(-60));
        fx.trial(client, days(-5));
        fx.sale(client, "personal", days(-1), Some(days(30)), Some(Decimal::ONE));

        let rules = fx.rules();
        assert!(rules.old_clients().is_empty());
        assert!(rules.renewal_clients().is_empty());
        assert!(rules.trial_clients(TrialWindow::OlderThanMonth).is_empty());
        assert!(rules.trial_clients(TrialWindow::WithinMonth).is_empty());
    }

    #[test]
    fn classification_is_idempotent() {
        let mut fx = Fixture::new();
        let a = fx.client("A", false);
        fx.group(a, days(-40));
        let b = fx.client("B", false);
        fx.group(b, days(-3));
        let c = fx.client("C", true);
        fx.trial(c, days(-33));

        let rules = fx.rules();
        assert_eq!(rules.old_clients(), rules.old_clients());
        assert_eq!(rules.renewal_clients(), rules.renewal_clients());
        assert_eq!(
            rules.trial_clients(TrialWindow::OlderThanMonth),
            fx.rules().trial_clients(TrialWindow::OlderThanMonth)
        );
    }

    #[test]
    fn other_tenants_never_leak() {
        let mut fx = Fixture::new();
        let other = Uuid::new_v4();

        let mine = fx.client("Mine", false);
        fx.group(mine, days(-40));

        let theirs = fx.client_in(other, "Theirs", false);
        fx.group(theirs, days(-40));
        let their_lead = fx.client_in(other, "TheirLead", true);
        fx.trial(their_lead, days(-50));
        fx.trial(their_lead, days(-5));
        let their_due = fx.client_in(other, "TheirDue", false);
        fx.group(their_due, days(-2));

        let rules = fx.rules();
        assert_eq!(ids(&rules.old_clients(), |o| o.client.id), vec![mine]);
        assert!(rules.renewal_clients().is_empty());
        assert!(rules.trial_clients(TrialWindow::OlderThanMonth).is_empty());
        assert!(rules.trial_clients(TrialWindow::WithinMonth).is_empty());
    }

    #[test]
    fn trial_sale_registered_by_another_tenant_is_ignored() {
        let mut fx = Fixture::new();
        let client = fx.client("Shared", true);
        let sale = fx.trial(client, days(-40));
        fx.snapshot
            .sales
            .iter_mut()
            .find(|s| s.id == sale)
            .unwrap()
            .director_id = Uuid::new_v4();

        assert!(fx.rules().trial_clients(TrialWindow::OlderThanMonth).is_empty());
    }

    #[test]
    fn output_keeps_snapshot_order() {
        let mut fx = Fixture::new();
        let first = fx.client("First", false);
        let second = fx.client("Second", false);
        let third = fx.client("Third", false);
        fx.group(third, days(-100));
        fx.group(first, days(-40));
        fx.group(second, days(-70));

        let old = fx.rules().old_clients();
        assert_eq!(ids(&old, |o| o.client.id), vec![first, second, third]);
    }

    // ---------------------------------------------------------------------
    //  Data da primeira compra
    // ---------------------------------------------------------------------

    fn status(client_id: Uuid, to: StatusTransition, at: DateTime<Utc>) -> ClientStatus {
        ClientStatus {
            id: Uuid::new_v4(),
            client_id,
            director_id: Uuid::new_v4(),
            status_to: to,
            created_at: at,
        }
    }

    #[test]
    fn former_lead_gets_first_purchase_date() {
        let id = Uuid::new_v4();
        let first = now() - Duration::days(30);
        let history = vec![
            status(id, StatusTransition::LeadCreated, now() - Duration::days(60)),
            status(id, StatusTransition::PurchaseCreated, now() - Duration::days(10)),
            status(id, StatusTransition::PurchaseCreated, first),
        ];

        assert_eq!(purchase_created_at(&history), Some(first));
    }

    #[test]
    fn lead_without_purchase_has_no_date() {
        let id = Uuid::new_v4();
        let history = vec![status(id, StatusTransition::LeadCreated, now())];
        assert_eq!(purchase_created_at(&history), None);
    }

    #[test]
    fn direct_client_never_gets_purchase_date() {
        let id = Uuid::new_v4();
        let history = vec![
            status(id, StatusTransition::ClientCreated, now() - Duration::days(5)),
            status(id, StatusTransition::PurchaseCreated, now()),
        ];
        assert_eq!(purchase_created_at(&history), None);
    }
}
