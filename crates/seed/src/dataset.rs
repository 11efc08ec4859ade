//! The fixed records every development database starts with.
//!
//! Identifiers are constants so that re-running the seeder finds the rows
//! it wrote last time instead of creating new ones.

use uuid::Uuid;

use taskboard::models::{EffortLevel, TaskStatus};

/// A role to ensure, keyed on its id.
#[derive(Debug, Clone, Copy)]
pub struct RoleSeed {
    pub id: i32,
    pub name: &'static str,
}

/// A user to ensure, keyed on email. The role is referenced by its fixed
/// id, which must be among the roles stored at seed time.
#[derive(Debug, Clone, Copy)]
pub struct UserSeed {
    pub email: &'static str,
    pub name: &'static str,
    /// Plaintext login; only its hash is ever written.
    pub password: &'static str,
    pub role_id: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectSeed {
    pub id: Uuid,
    pub name: &'static str,
    pub description: Option<&'static str>,
}

/// A task to ensure, keyed on id. The owning project is supplied when
/// seeding, not stored here.
#[derive(Debug, Clone, Copy)]
pub struct TaskSeed {
    pub id: Uuid,
    pub task_code: &'static str,
    pub name: &'static str,
    pub status: TaskStatus,
    pub phase: &'static str,
    pub effort_hours: i32,
    pub effort_level: EffortLevel,
}

/// A complete dataset: what the seeder writes, in order.
#[derive(Debug, Clone, Copy)]
pub struct SeedData {
    pub roles: &'static [RoleSeed],
    pub users: &'static [UserSeed],
    pub project: ProjectSeed,
    pub tasks: &'static [TaskSeed],
}

impl SeedData {
    /// The user whose credentials are announced after a run: the first
    /// user holding the `admin` role.
    pub fn admin(&self) -> Option<&'static UserSeed> {
        self.users.iter().find(|u| u.role_id == ADMIN_ROLE_ID)
    }
}

pub const ADMIN_ROLE_ID: i32 = 1;
pub const EDITOR_ROLE_ID: i32 = 2;
pub const VIEWER_ROLE_ID: i32 = 3;

pub const DEFAULT_PROJECT_ID: Uuid = Uuid::from_u128(0x1);

pub const ROLES: &[RoleSeed] = &[
    RoleSeed {
        id: ADMIN_ROLE_ID,
        name: "admin",
    },
    RoleSeed {
        id: EDITOR_ROLE_ID,
        name: "editor",
    },
    RoleSeed {
        id: VIEWER_ROLE_ID,
        name: "viewer",
    },
];

pub const USERS: &[UserSeed] = &[
    UserSeed {
        email: "admin@example.com",
        name: "システム管理者",
        password: "admin123",
        role_id: ADMIN_ROLE_ID,
    },
    UserSeed {
        email: "editor@example.com",
        name: "テスト編集者",
        password: "editor123",
        role_id: EDITOR_ROLE_ID,
    },
    UserSeed {
        email: "viewer@example.com",
        name: "テスト閲覧者",
        password: "viewer123",
        role_id: VIEWER_ROLE_ID,
    },
];

pub const PROJECT: ProjectSeed = ProjectSeed {
    id: DEFAULT_PROJECT_ID,
    name: "デフォルトプロジェクト",
    description: Some("初期プロジェクト"),
};

pub const TASKS: &[TaskSeed] = &[
    TaskSeed {
        id: Uuid::from_u128(0x101),
        task_code: "T1-01",
        name: "要件定義",
        status: TaskStatus::Completed,
        phase: "第1段階",
        effort_hours: 8,
        effort_level: EffortLevel::Medium,
    },
    TaskSeed {
        id: Uuid::from_u128(0x102),
        task_code: "T1-02",
        name: "DB設計",
        status: TaskStatus::InProgress,
        phase: "第1段階",
        effort_hours: 16,
        effort_level: EffortLevel::Heavy,
    },
    TaskSeed {
        id: Uuid::from_u128(0x103),
        task_code: "T2-01",
        name: "UI実装",
        status: TaskStatus::NotStarted,
        phase: "第2段階",
        effort_hours: 24,
        effort_level: EffortLevel::Heavy,
    },
];

/// The development dataset.
pub const DEFAULT_SEED: SeedData = SeedData {
    roles: ROLES,
    users: USERS,
    project: PROJECT,
    tasks: TASKS,
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_roles_are_fixed() {
        let roles: Vec<(i32, &str)> = ROLES.iter().map(|r| (r.id, r.name)).collect();
        assert_eq!(roles, vec![(1, "admin"), (2, "editor"), (3, "viewer")]);
    }

    #[test]
    fn test_every_user_references_a_known_role() {
        let role_ids: HashSet<_> = ROLES.iter().map(|r| r.id).collect();

        for user in USERS {
            assert!(role_ids.contains(&user.role_id), "{} has unknown role", user.email);
        }
    }

    #[test]
    fn test_user_emails_are_unique() {
        let emails: HashSet<_> = USERS.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), USERS.len());
    }

    #[test]
    fn test_fixed_identifiers() {
        assert_eq!(
            DEFAULT_PROJECT_ID.to_string(),
            "00000000-0000-0000-0000-000000000001"
        );

        let ids: Vec<String> = TASKS.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "00000000-0000-0000-0000-000000000101",
                "00000000-0000-0000-0000-000000000102",
                "00000000-0000-0000-0000-000000000103",
            ]
        );
    }

    #[test]
    fn test_task_codes_are_unique() {
        let codes: HashSet<_> = TASKS.iter().map(|t| t.task_code).collect();
        assert_eq!(codes.len(), TASKS.len());
    }

    #[test]
    fn test_admin_credentials() {
        let admin = DEFAULT_SEED.admin().unwrap();

        assert_eq!(admin.email, "admin@example.com");
        assert_eq!(admin.password, "admin123");
        assert_eq!(admin.role_id, 1);
    }
}
