// src/models/sale.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Valores reservados de service_type (o campo continua texto livre)
pub const SERVICE_TRIAL: &str = "trial";
pub const SERVICE_GROUP: &str = "group";
pub const SERVICE_MINIGROUP: &str = "minigroup";

/// Duração 0.03 marca uma visita avulsa.
pub const SINGLE_VISIT_DURATION: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "service_or_product", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceOrProduct {
    Service,
    Product,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Uuid,
    pub director_id: Uuid,
    pub client_id: Uuid,
    pub sale_date: NaiveDate,
    pub service_or_product: ServiceOrProduct,
    pub sport_type: Option<String>,
    #[schema(example = "group")]
    pub service_type: Option<String>,
    #[schema(value_type = Option<f64>, example = 1.0)]
    pub subscription_duration: Option<Decimal>,
    pub visits_per_week: Option<i32>,
    pub training_count: Option<i32>,
    pub trainer: Option<String>,
    pub trainer_category: Option<String>,
    pub product_type: Option<String>,
    pub subscription_start_date: Option<NaiveDate>,
    pub subscription_end_date: Option<NaiveDate>,
    #[schema(value_type = f64)]
    pub cost: Decimal,
    #[schema(value_type = f64)]
    pub paid_amount: Decimal,
    pub pay_method: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados já validados para o INSERT
#[derive(Debug, Clone)]
pub struct NewSale {
    pub client_id: Uuid,
    pub sale_date: NaiveDate,
    pub service_or_product: ServiceOrProduct,
    pub sport_type: Option<String>,
    pub service_type: Option<String>,
    pub subscription_duration: Option<Decimal>,
    pub visits_per_week: Option<i32>,
    pub training_count: Option<i32>,
    pub trainer: Option<String>,
    pub trainer_category: Option<String>,
    pub product_type: Option<String>,
    pub subscription_start_date: Option<NaiveDate>,
    pub subscription_end_date: Option<NaiveDate>,
    pub cost: Decimal,
    pub paid_amount: Decimal,
    pub pay_method: Option<String>,
}

impl NewSale {
    pub fn has_valid_window(&self) -> bool {
        match (self.subscription_start_date, self.subscription_end_date) {
            (Some(start), Some(end)) => end >= start,
            _ => true,
        }
    }
}

// ---
// SaleFact: só o que as regras de classificação precisam
// ---
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SaleFact {
    pub id: Uuid,
    pub client_id: Uuid,
    pub director_id: Uuid,
    pub sale_date: NaiveDate,
    pub service_type: Option<String>,
    pub subscription_duration: Option<Decimal>,
    pub subscription_end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl SaleFact {
    pub fn is_service(&self, kind: &str) -> bool {
        self.service_type.as_deref() == Some(kind)
    }

    pub fn is_group_class(&self) -> bool {
        self.is_service(SERVICE_GROUP) || self.is_service(SERVICE_MINIGROUP)
    }

    /// Duração conhecida e diferente de 0.03; NULL não conta.
    pub fn has_renewable_duration(&self) -> bool {
        matches!(self.subscription_duration, Some(d) if d != SINGLE_VISIT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn single_visit_sentinel_matches_numeric_value() {
        assert_eq!(SINGLE_VISIT_DURATION, Decimal::from_str("0.03").unwrap());
        // NUMERIC(5,2) volta do banco com escala 2, mas a comparação ignora a escala
        assert_eq!(SINGLE_VISIT_DURATION, Decimal::from_str("0.030").unwrap());
    }

    #[test]
    fn only_known_non_sentinel_durations_are_renewable() {
        let mut fact = SaleFact {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            director_id: Uuid::new_v4(),
            sale_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            service_type: Some(SERVICE_GROUP.into()),
            subscription_duration: Some(Decimal::ONE),
            subscription_end_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            created_at: Utc::now(),
        };
        assert!(fact.has_renewable_duration());

        fact.subscription_duration = Some(SINGLE_VISIT_DURATION);
        assert!(!fact.has_renewable_duration());

        fact.subscription_duration = None;
        assert!(!fact.has_renewable_duration());
    }

    #[test]
    fn window_must_not_end_before_start() {
        let mut sale = NewSale {
            client_id: Uuid::new_v4(),
            sale_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            service_or_product: ServiceOrProduct::Service,
            sport_type: None,
            service_type: Some(SERVICE_GROUP.into()),
            subscription_duration: Some(Decimal::ONE),
            visits_per_week: None,
            training_count: None,
            trainer: None,
            trainer_category: None,
            product_type: None,
            subscription_start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            subscription_end_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            cost: Decimal::ZERO,
            paid_amount: Decimal::ZERO,
            pay_method: None,
        };
        assert!(sale.has_valid_window());

        sale.subscription_end_date = NaiveDate::from_ymd_opt(2024, 4, 30);
        assert!(!sale.has_valid_window());

        sale.subscription_start_date = None;
        assert!(sale.has_valid_window());
    }
}
