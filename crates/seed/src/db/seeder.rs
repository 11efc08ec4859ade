//! Database seeding utilities.

use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::dataset::{ProjectSeed, RoleSeed, SeedData, TaskSeed, UserSeed};
use taskboard::auth::{DEFAULT_HASH_COST, hash_password};
use taskboard::models::{Project, Role, Task, User};
use taskboard::{AppError, Database};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    App(#[from] AppError),
    #[error("User {email} references unknown role id {role_id}")]
    UnknownRole { email: String, role_id: i32 },
    #[error("No {table} row for {key} after upsert")]
    MissingRow { table: &'static str, key: String },
}

/// Rows persisted by one seeding stage.
#[derive(Debug, Clone)]
pub struct Seeded<T> {
    /// Stored rows, in the order they were seeded.
    pub rows: Vec<T>,
    /// How many of them this run created.
    pub inserted: usize,
}

impl<T> Seeded<T> {
    /// Rows that were already present before this run.
    pub fn existing(&self) -> usize {
        self.rows.len() - self.inserted
    }
}

/// Everything a full run left in the database.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub roles: Vec<Role>,
    pub users: Vec<User>,
    pub project: Project,
    pub tasks: Vec<Task>,
    /// Rows created by this run.
    pub inserted: usize,
    /// Rows that matched an existing key and were left untouched.
    pub existing: usize,
}

/// Writes seed data into the database without touching rows that already
/// exist under the same key.
pub struct Seeder {
    db: Database,
    hash_cost: u32,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            db: Database::new(pool),
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    /// Sets the bcrypt cost for seeded passwords.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    fn pool(&self) -> &PgPool {
        self.db.pool()
    }

    /// Seeds the whole dataset: roles, users, the project, then its tasks.
    ///
    /// Stops at the first failure. Nothing is rolled back, so rows written
    /// by earlier stages stay in place.
    pub async fn run(&self, data: &SeedData) -> Result<SeedReport, SeedError> {
        let roles = self.seed_roles(data.roles).await?;
        let users = self.seed_users(data.users, &roles.rows).await?;
        let (project, project_inserted) = self.upsert_project(&data.project).await?;
        let tasks = self.seed_tasks(project.id, data.tasks).await?;

        let total = roles.rows.len() + users.rows.len() + 1 + tasks.rows.len();
        let inserted =
            roles.inserted + users.inserted + usize::from(project_inserted) + tasks.inserted;

        Ok(SeedReport {
            roles: roles.rows,
            users: users.rows,
            project,
            tasks: tasks.rows,
            inserted,
            existing: total - inserted,
        })
    }

    /// Seeds roles, keyed on id.
    pub async fn seed_roles(&self, roles: &[RoleSeed]) -> Result<Seeded<Role>, SeedError> {
        info!("Seeding {} roles...", roles.len());

        let mut seeded = Seeded {
            rows: Vec::with_capacity(roles.len()),
            inserted: 0,
        };
        for role in roles {
            let inserted = sqlx::query(
                r#"
                INSERT INTO roles (id, name)
                VALUES ($1, $2)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(role.id)
            .bind(role.name)
            .execute(self.pool())
            .await?
            .rows_affected()
                > 0;

            let row = self
                .db
                .get_role(role.id)
                .await?
                .ok_or_else(|| SeedError::MissingRow {
                    table: "roles",
                    key: role.id.to_string(),
                })?;

            debug!(id = row.id, name = %row.name, inserted, "Upserted role");
            seeded.inserted += usize::from(inserted);
            seeded.rows.push(row);
        }

        info!("Seeded {} roles ({} new)", seeded.rows.len(), seeded.inserted);
        Ok(seeded)
    }

    /// Seeds users, keyed on email. Each user's role id must be one of the
    /// stored `roles`; its password is hashed before it is written.
    pub async fn seed_users(
        &self,
        users: &[UserSeed],
        roles: &[Role],
    ) -> Result<Seeded<User>, SeedError> {
        info!("Seeding {} users...", users.len());

        let mut seeded = Seeded {
            rows: Vec::with_capacity(users.len()),
            inserted: 0,
        };
        for user in users {
            let role_id = resolve_role_id(roles, user)?;
            let password_hash = hash_password(user.password, self.hash_cost)?;

            let inserted = sqlx::query(
                r#"
                INSERT INTO users (email, name, password_hash, role_id, created_at)
                VALUES ($1, $2, $3, $4, NOW())
                ON CONFLICT (email) DO NOTHING
                "#,
            )
            .bind(user.email)
            .bind(user.name)
            .bind(&password_hash)
            .bind(role_id)
            .execute(self.pool())
            .await?
            .rows_affected()
                > 0;

            let row = self
                .db
                .get_user_by_email(user.email)
                .await?
                .ok_or_else(|| SeedError::MissingRow {
                    table: "users",
                    key: user.email.to_string(),
                })?;

            debug!(email = %row.email, role_id = row.role_id, inserted, "Upserted user");
            seeded.inserted += usize::from(inserted);
            seeded.rows.push(row);
        }

        info!("Seeded {} users ({} new)", seeded.rows.len(), seeded.inserted);
        Ok(seeded)
    }

    /// Seeds a single project, keyed on id.
    pub async fn seed_project(&self, project: &ProjectSeed) -> Result<Project, SeedError> {
        let (row, _) = self.upsert_project(project).await?;
        Ok(row)
    }

    async fn upsert_project(&self, project: &ProjectSeed) -> Result<(Project, bool), SeedError> {
        info!("Seeding project {}...", project.id);

        let inserted = sqlx::query(
            r#"
            INSERT INTO projects (id, name, description, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(project.id)
        .bind(project.name)
        .bind(project.description)
        .execute(self.pool())
        .await?
        .rows_affected()
            > 0;

        let row = self
            .db
            .get_project(project.id)
            .await?
            .ok_or_else(|| SeedError::MissingRow {
                table: "projects",
                key: project.id.to_string(),
            })?;

        debug!(id = %row.id, name = %row.name, inserted, "Upserted project");
        info!(
            "Seeded project {} ({})",
            row.name,
            if inserted { "new" } else { "existing" }
        );
        Ok((row, inserted))
    }

    /// Seeds tasks under `project_id`, keyed on task id.
    pub async fn seed_tasks(
        &self,
        project_id: Uuid,
        tasks: &[TaskSeed],
    ) -> Result<Seeded<Task>, SeedError> {
        info!("Seeding {} tasks...", tasks.len());

        let mut seeded = Seeded {
            rows: Vec::with_capacity(tasks.len()),
            inserted: 0,
        };
        for task in tasks {
            let inserted = sqlx::query(
                r#"
                INSERT INTO tasks (
                    id, task_code, name, status, phase,
                    effort_hours, effort_level, project_id, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(task.id)
            .bind(task.task_code)
            .bind(task.name)
            .bind(task.status)
            .bind(task.phase)
            .bind(task.effort_hours)
            .bind(task.effort_level)
            .bind(project_id)
            .execute(self.pool())
            .await?
            .rows_affected()
                > 0;

            let row = self
                .db
                .get_task(task.id)
                .await?
                .ok_or_else(|| SeedError::MissingRow {
                    table: "tasks",
                    key: task.id.to_string(),
                })?;

            debug!(
                code = %row.task_code,
                status = row.status.as_str(),
                level = row.effort_level.as_str(),
                inserted,
                "Upserted task"
            );
            seeded.inserted += usize::from(inserted);
            seeded.rows.push(row);
        }

        info!("Seeded {} tasks ({} new)", seeded.rows.len(), seeded.inserted);
        Ok(seeded)
    }
}

/// Checks that the role `user` refers to was stored. Only the id matters:
/// a stored role keeps whatever name it already had.
fn resolve_role_id(roles: &[Role], user: &UserSeed) -> Result<i32, SeedError> {
    roles
        .iter()
        .find(|r| r.id == user.role_id)
        .map(|r| r.id)
        .ok_or_else(|| SeedError::UnknownRole {
            email: user.email.to_string(),
            role_id: user.role_id,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<Role> {
        vec![
            Role {
                id: 1,
                name: "administrator".to_string(),
            },
            Role {
                id: 2,
                name: "editor".to_string(),
            },
        ]
    }

    #[test]
    fn test_resolve_role_ignores_stored_name() {
        let user = UserSeed {
            email: "admin@example.com",
            name: "Admin",
            password: "admin123",
            role_id: 1,
        };

        assert_eq!(resolve_role_id(&roles(), &user).unwrap(), 1);
    }

    #[test]
    fn test_resolve_unknown_role() {
        let user = UserSeed {
            email: "viewer@example.com",
            name: "Viewer",
            password: "viewer123",
            role_id: 3,
        };

        let err = resolve_role_id(&roles(), &user).unwrap_err();
        assert!(matches!(
            err,
            SeedError::UnknownRole { ref email, role_id: 3 } if email == "viewer@example.com"
        ));
    }

    #[test]
    fn test_seeded_existing_count() {
        let seeded = Seeded {
            rows: vec![1, 2, 3],
            inserted: 1,
        };
        assert_eq!(seeded.existing(), 2);
    }

    #[test]
    fn test_error_messages() {
        let err = SeedError::MissingRow {
            table: "tasks",
            key: "T1-01".to_string(),
        };
        assert_eq!(err.to_string(), "No tasks row for T1-01 after upsert");
    }
}
