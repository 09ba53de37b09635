//! Serializable roster: the flat, on-disk form of a hierarchy

use serde::{Deserialize, Serialize};

use crate::domain::arena::Hierarchy;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::staff::{Profile, StaffNode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    #[default]
    Employee,
    Manager,
}

/// One staff member; `manager` is the profile id of the direct manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub salary: i32,
    #[serde(default)]
    pub role: RoleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<i32>,
}

impl RosterEntry {
    pub fn profile(&self) -> Profile {
        Profile::new(
            self.id,
            self.name.clone(),
            self.email.clone(),
            self.job_title.clone(),
            self.salary,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub staff: Vec<RosterEntry>,
}

impl Roster {
    /// Flattens a hierarchy, walking each root in pre-order.
    ///
    /// Managers are listed before their reports and reports keep their
    /// order, so building the result again reproduces the same hierarchy.
    pub fn from_hierarchy(hierarchy: &Hierarchy) -> DomainResult<Self> {
        let mut staff = Vec::with_capacity(hierarchy.len());

        for root in hierarchy.roots() {
            match hierarchy.iter_subordinates(root) {
                Ok(subtree) => {
                    for (_, node) in subtree {
                        staff.push(Self::entry(hierarchy, node));
                    }
                }
                // plain employee without a manager
                Err(DomainError::NotAManager(_)) => {
                    staff.push(Self::entry(hierarchy, hierarchy.node(root)?));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Self { staff })
    }

    fn entry(hierarchy: &Hierarchy, node: &StaffNode) -> RosterEntry {
        let profile = node.profile();
        RosterEntry {
            id: profile.id(),
            name: profile.name().to_string(),
            email: profile.email().to_string(),
            job_title: profile.job_title().to_string(),
            salary: profile.salary(),
            role: if node.is_manager() {
                RoleKind::Manager
            } else {
                RoleKind::Employee
            },
            manager: node
                .manager()
                .and_then(|m| hierarchy.get(m))
                .map(|m| m.profile().id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: i32, name: &str) -> Profile {
        Profile::new(id, name, format!("{}@example.com", name), "Staff", 1000)
    }

    #[test]
    fn given_lone_employee_root_when_flattening_then_listed_without_manager() {
        let mut org = Hierarchy::new();
        let boss = org.hire_manager(profile(1, "boss"));
        let dev = org.hire_employee(profile(2, "dev"));
        org.hire_employee(profile(3, "contractor"));
        org.add_employee(boss, dev).unwrap();

        let roster = Roster::from_hierarchy(&org).unwrap();

        let ids: Vec<_> = roster.staff.iter().map(|e| (e.id, e.manager)).collect();
        assert_eq!(ids, vec![(1, None), (2, Some(1)), (3, None)]);
        assert_eq!(roster.staff[2].role, RoleKind::Employee);
    }
}
