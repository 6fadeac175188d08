// src/db/task_repo.rs

use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::task::{ClientTask, NewTask, Task, TaskEntry},
};

const TASK_COLUMNS: &str =
    "id, client_id, director_id, user_sender_id, task_date, task_description, created_at, updated_at";

/// O mínimo que a exclusão de tarefas precisa do armazenamento.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn find_task(&self, task_id: Uuid) -> Result<Option<Task>, AppError>;
    async fn delete_task(&self, task_id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_task<'e, E>(&self, executor: E, task: &NewTask) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO tasks (client_id, director_id, user_sender_id, task_date, task_description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            TASK_COLUMNS
        );

        let created = sqlx::query_as::<_, Task>(&sql)
            .bind(task.client_id)
            .bind(task.director_id)
            .bind(task.user_sender_id)
            .bind(task.task_date)
            .bind(&task.task_description)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    /// O remetente é o próprio diretor ou alguém da equipe dele.
    pub async fn sender_in_tenant<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE id = $1 AND (director_id = $2 OR id = $2))",
        )
            .bind(user_id)
            .bind(tenant_id)
            .fetch_one(executor)
            .await?;

        Ok(exists)
    }

    /// Tarefas de um cliente, por data, com o nome de quem criou.
    pub async fn list_for_client<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
    ) -> Result<Vec<ClientTask>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let tasks = sqlx::query_as::<_, ClientTask>(
            r#"
            SELECT t.id, t.client_id, t.user_sender_id, u.name AS sender_name,
                   t.task_date, t.task_description, t.created_at
            FROM tasks t
            LEFT JOIN users u ON u.id = t.user_sender_id
            WHERE t.client_id = $1 AND t.director_id = $2
            ORDER BY t.task_date ASC, t.created_at ASC
            "#,
        )
            .bind(client_id)
            .bind(tenant_id)
            .fetch_all(executor)
            .await?;

        Ok(tasks)
    }

    pub async fn count_for_tenant(&self, tenant_id: Uuid) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE director_id = $1")
            .bind(tenant_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn list_page(
        &self,
        tenant_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TaskEntry>, AppError> {
        let tasks = sqlx::query_as::<_, TaskEntry>(
            r#"
            SELECT t.id AS task_id, t.user_sender_id, u.name AS sender_name,
                   t.task_date, t.task_description,
                   c.id, c.surname, c.name, c.patronymic, c.birthdate, c.phone, c.email
            FROM tasks t
            JOIN clients c ON c.id = t.client_id
            LEFT JOIN users u ON u.id = t.user_sender_id
            WHERE t.director_id = $1
            ORDER BY t.task_date ASC, t.created_at ASC
            LIMIT $2 OFFSET $3
            "#,
        )
            .bind(tenant_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(tasks)
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn find_task(&self, task_id: Uuid) -> Result<Option<Task>, AppError> {
        let sql = format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS);

        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(task)
    }

    async fn delete_task(&self, task_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
