// src/services/task_service.rs

use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{task_repo::TaskStore, ClientRepository, TaskRepository},
    models::task::{ClientTask, NewTask, Task},
};

#[derive(Clone)]
pub struct TaskService {
    task_repo: TaskRepository,
    client_repo: ClientRepository,
}

impl TaskService {
    pub fn new(task_repo: TaskRepository, client_repo: ClientRepository) -> Self {
        Self { task_repo, client_repo }
    }

    pub async fn create_task<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        task: &NewTask,
    ) -> Result<Task, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        if task.director_id != tenant_id {
            tracing::warn!("Tarefa recusada: estúdio {} tentou escrever em {}", tenant_id, task.director_id);
            return Err(AppError::TenantMismatch);
        }

        let mut conn = executor.acquire().await?;

        if !self.client_repo.client_exists(&mut *conn, tenant_id, task.client_id).await? {
            return Err(AppError::ClientNotFound);
        }

        if !self.task_repo.sender_in_tenant(&mut *conn, tenant_id, task.user_sender_id).await? {
            return Err(AppError::SenderNotFound);
        }

        let created = self.task_repo.create_task(&mut *conn, task).await?;

        tracing::info!("Tarefa {} criada para o cliente {}", created.id, created.client_id);
        Ok(created)
    }

    pub async fn list_client_tasks<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
    ) -> Result<Vec<ClientTask>, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut conn = executor.acquire().await?;

        if !self.client_repo.client_exists(&mut *conn, tenant_id, client_id).await? {
            return Err(AppError::ClientNotFound);
        }

        self.task_repo.list_for_client(&mut *conn, tenant_id, client_id).await
    }

    pub async fn delete_task(&self, tenant_id: Uuid, task_id: Uuid) -> Result<(), AppError> {
        remove_task(&self.task_repo, tenant_id, task_id).await
    }
}

/// Apaga a tarefa só se ela for do estúdio de quem pede.
pub async fn remove_task(
    store: &dyn TaskStore,
    tenant_id: Uuid,
    task_id: Uuid,
) -> Result<(), AppError> {
    let task = store.find_task(task_id).await?.ok_or(AppError::TaskNotFound)?;

    if task.director_id != tenant_id {
        tracing::warn!(
            "Exclusão recusada: tarefa {} é do estúdio {}, pedido veio de {}",
            task_id,
            task.director_id,
            tenant_id
        );
        return Err(AppError::TaskForbidden);
    }

    store.delete_task(task_id).await?;
    tracing::info!("Tarefa {} excluída", task_id);
    Ok(())
}
