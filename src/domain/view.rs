//! Value semantics for staff members.
//!
//! Handles compare by identity. A [`StaffView`] compares by value instead:
//! two employees are equal when their profiles are equal; two managers are
//! equal when their profiles are equal and their report lists are equal
//! element by element, in order. An employee never equals a manager.
//! Views from different hierarchies can be compared.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::arena::Hierarchy;
use crate::domain::error::DomainResult;
use crate::domain::staff::{Profile, Role, StaffId, StaffNode};

#[derive(Clone, Copy)]
pub struct StaffView<'a> {
    hierarchy: &'a Hierarchy,
    id: StaffId,
    node: &'a StaffNode,
}

impl<'a> StaffView<'a> {
    pub(crate) fn new(hierarchy: &'a Hierarchy, id: StaffId) -> DomainResult<Self> {
        let node = hierarchy.node(id)?;
        Ok(Self {
            hierarchy,
            id,
            node,
        })
    }

    pub fn id(&self) -> StaffId {
        self.id
    }

    pub fn profile(&self) -> &'a Profile {
        &self.node.profile
    }

    pub fn is_manager(&self) -> bool {
        self.node.is_manager()
    }

    pub fn manager(&self) -> Option<StaffView<'a>> {
        self.node
            .manager
            .and_then(|m| StaffView::new(self.hierarchy, m).ok())
    }

    /// Direct reports as views; empty for plain employees.
    pub fn reports(&self) -> Vec<StaffView<'a>> {
        self.node
            .reports()
            .unwrap_or_default()
            .iter()
            .filter_map(|&r| StaffView::new(self.hierarchy, r).ok())
            .collect()
    }
}

impl PartialEq for StaffView<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.node.profile != other.node.profile {
            return false;
        }
        match (&self.node.role, &other.node.role) {
            (Role::Employee, Role::Employee) => true,
            (Role::Manager { reports: a }, Role::Manager { reports: b }) => {
                a.len() == b.len() && self.reports() == other.reports()
            }
            _ => false,
        }
    }
}

impl Eq for StaffView<'_> {}

impl Hash for StaffView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.profile.hash(state);
        self.node.is_manager().hash(state);
        if self.node.is_manager() {
            self.reports().hash(state);
        }
    }
}

impl fmt::Debug for StaffView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffView")
            .field("id", &self.id)
            .field("profile", &self.node.profile)
            .field("manager", &self.node.manager)
            .field("reports", &self.node.reports())
            .finish()
    }
}

impl fmt::Display for StaffView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node.profile)
    }
}
