//! Builds a [`Hierarchy`] from a [`Roster`].

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::domain::arena::Hierarchy;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::roster::{RoleKind, Roster};
use crate::domain::staff::StaffId;

/// Constructs hierarchies from roster entries.
///
/// All entries are hired first, then reporting lines are applied in roster
/// order, so the order of reports follows the order of the roster.
#[derive(Debug, Default)]
pub struct RosterBuilder {
    by_id: HashMap<i32, StaffId>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "debug", skip(self, roster), fields(entries = roster.staff.len()))]
    pub fn build(&mut self, roster: &Roster) -> DomainResult<Hierarchy> {
        // Reset state for fresh build
        self.by_id.clear();
        let mut hierarchy = Hierarchy::new();

        for entry in &roster.staff {
            if self.by_id.contains_key(&entry.id) {
                return Err(DomainError::DuplicateId(entry.id));
            }
            let staff = match entry.role {
                RoleKind::Manager => hierarchy.hire_manager(entry.profile()),
                RoleKind::Employee => hierarchy.hire_employee(entry.profile()),
            };
            self.by_id.insert(entry.id, staff);
        }

        for entry in &roster.staff {
            let Some(manager_id) = entry.manager else {
                continue;
            };
            let manager = *self
                .by_id
                .get(&manager_id)
                .ok_or(DomainError::UnknownManager {
                    employee: entry.id,
                    manager: manager_id,
                })?;
            let employee = self.by_id[&entry.id];

            hierarchy
                .add_employee(manager, employee)
                .map_err(|e| match e {
                    DomainError::NotAManager(_) => DomainError::InvalidRoster {
                        id: entry.id,
                        message: format!("manager {} is not a manager", manager_id),
                    },
                    DomainError::CycleDetected(_) => DomainError::InvalidRoster {
                        id: entry.id,
                        message: format!("reporting to {} creates a cycle", manager_id),
                    },
                    other => other,
                })?;
        }

        debug!("built hierarchy with {} staff", hierarchy.len());
        Ok(hierarchy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roster::RosterEntry;

    fn entry(id: i32, role: RoleKind, manager: Option<i32>) -> RosterEntry {
        RosterEntry {
            id,
            name: format!("staff{}", id),
            email: format!("staff{}@example.com", id),
            job_title: "Staff".into(),
            salary: 100,
            role,
            manager,
        }
    }

    #[test]
    fn given_self_reporting_manager_when_building_then_invalid_roster() {
        let roster = Roster {
            staff: vec![entry(1, RoleKind::Manager, Some(1))],
        };
        let result = RosterBuilder::new().build(&roster);
        assert!(matches!(
            result,
            Err(DomainError::InvalidRoster { id: 1, .. })
        ));
    }

    #[test]
    fn given_builder_reused_when_building_then_state_is_reset() {
        let mut builder = RosterBuilder::new();
        let roster = Roster {
            staff: vec![entry(1, RoleKind::Manager, None)],
        };
        builder.build(&roster).unwrap();
        let hierarchy = builder.build(&roster).unwrap();
        assert_eq!(hierarchy.len(), 1);
    }
}
