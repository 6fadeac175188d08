// src/db/rbac_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;

#[derive(Clone)]
pub struct RbacRepository {
    pool: PgPool,
}

impl RbacRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Habilidades concedidas ao usuário (ex: "manage-sales").
    pub async fn list_abilities(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let abilities = sqlx::query_scalar::<_, String>(
            r#"
            SELECT ability
            FROM user_abilities
            WHERE user_id = $1
            ORDER BY ability ASC
            "#,
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(abilities)
    }
}
