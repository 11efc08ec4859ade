use crate::errors::AppError;
use crate::models::{Project, Role, Task, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Read-only access to the taskboard tables.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn get_role(&self, id: i32) -> Result<Option<Role>, AppError> {
        let role = sqlx::query_as(
            r#"
            SELECT id, name
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(role)
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        let roles: Vec<Role> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM roles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(roles)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, email, name, password_hash, role_id, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, email, name, password_hash, role_id, created_at
            FROM users
            ORDER BY role_id, email
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get_project(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects: Vec<Project> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    pub async fn get_task(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as(
            r#"
            SELECT id, task_code, name, status, phase, effort_hours, effort_level,
                   project_id, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn list_project_tasks(&self, project_id: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks: Vec<Task> = sqlx::query_as(
            r#"
            SELECT id, task_code, name, status, phase, effort_hours, effort_level,
                   project_id, created_at
            FROM tasks
            WHERE project_id = $1
            ORDER BY task_code
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }
}
