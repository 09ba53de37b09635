//! Staff records: profile fields, roles and arena handles

use std::fmt;

use generational_arena::Index;

/// Handle to a staff member stored in a [`Hierarchy`](crate::domain::Hierarchy).
///
/// Handles are plain copyable values. Holding one does not own the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaffId(pub(crate) Index);

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}@{}", slot, generation)
    }
}

/// Identity and profile fields shared by employees and managers.
///
/// Immutable once constructed. Equality and hashing cover every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile {
    id: i32,
    name: String,
    email: String,
    job_title: String,
    salary: i32,
}

impl Profile {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        job_title: impl Into<String>,
        salary: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            job_title: job_title.into(),
            salary,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn salary(&self) -> i32 {
        self.salary
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.name, self.job_title, self.id)
    }
}

/// What a staff member can do in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Employee,
    /// Owns the ordered list of direct reports.
    Manager { reports: Vec<StaffId> },
}

/// A staff member as stored in the arena.
#[derive(Debug)]
pub struct StaffNode {
    pub(crate) profile: Profile,
    /// Back-reference to the current manager; never an ownership edge
    pub(crate) manager: Option<StaffId>,
    pub(crate) role: Role,
}

impl StaffNode {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn manager(&self) -> Option<StaffId> {
        self.manager
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager { .. })
    }

    /// Direct reports, `None` for plain employees.
    pub fn reports(&self) -> Option<&[StaffId]> {
        match &self.role {
            Role::Manager { reports } => Some(reports),
            Role::Employee => None,
        }
    }
}
