use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::staff::{Profile, Role, StaffId, StaffNode};
use crate::domain::view::StaffView;

/// Arena-based staff hierarchy.
///
/// Every employee and manager of one organisation lives in a single arena.
/// The report list of a manager is the only forward edge; each node keeps a
/// plain handle to its current manager for reparenting bookkeeping.
///
/// Invariant: `node(e).manager == Some(m)` iff `e` appears exactly once in
/// the reports of `m`.
#[derive(Debug)]
pub struct Hierarchy {
    arena: Arena<StaffNode>,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn hire_employee(&mut self, profile: Profile) -> StaffId {
        self.hire(profile, Role::Employee)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn hire_manager(&mut self, profile: Profile) -> StaffId {
        self.hire(
            profile,
            Role::Manager {
                reports: Vec::new(),
            },
        )
    }

    fn hire(&mut self, profile: Profile, role: Role) -> StaffId {
        StaffId(self.arena.insert(StaffNode {
            profile,
            manager: None,
            role,
        }))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get(&self, id: StaffId) -> Option<&StaffNode> {
        self.arena.get(id.0)
    }

    /// Looks up a node, treating a dangling handle as a missing employee.
    pub fn node(&self, id: StaffId) -> DomainResult<&StaffNode> {
        self.arena.get(id.0).ok_or(DomainError::MissingEmployee(id))
    }

    fn node_mut(&mut self, id: StaffId) -> DomainResult<&mut StaffNode> {
        self.arena.get_mut(id.0).ok_or(DomainError::MissingEmployee(id))
    }

    fn reports_mut(&mut self, manager: StaffId) -> DomainResult<&mut Vec<StaffId>> {
        match &mut self.node_mut(manager)?.role {
            Role::Manager { reports } => Ok(reports),
            Role::Employee => Err(DomainError::NotAManager(manager)),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn manager_of(&self, employee: StaffId) -> DomainResult<Option<StaffId>> {
        Ok(self.node(employee)?.manager)
    }

    /// Read-only view of the direct reports of `manager`, in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn reports(&self, manager: StaffId) -> DomainResult<&[StaffId]> {
        self.node(manager)?
            .reports()
            .ok_or(DomainError::NotAManager(manager))
    }

    /// Assigns `employee` to `manager`, detaching it from its previous manager.
    ///
    /// Re-adding a direct report to its current manager is a no-op and keeps
    /// its position in the report list.
    #[instrument(level = "debug", skip(self))]
    pub fn add_employee(&mut self, manager: StaffId, employee: StaffId) -> DomainResult<()> {
        let previous = self.node(employee)?.manager;
        if !self.node(manager)?.is_manager() {
            return Err(DomainError::NotAManager(manager));
        }
        if previous == Some(manager) {
            debug!("{} already reports to {}", employee, manager);
            return Ok(());
        }
        if self.is_within(employee, manager) {
            return Err(DomainError::CycleDetected(manager));
        }

        if let Some(old) = previous {
            self.detach(old, employee)?;
        }
        self.reports_mut(manager)?.push(employee);
        self.node_mut(employee)?.manager = Some(manager);
        debug!("{} now reports to {}", employee, manager);
        Ok(())
    }

    /// Removes `employee` from the direct reports of `manager`.
    ///
    /// Does nothing when `manager` does not currently manage `employee`.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_employee(&mut self, manager: StaffId, employee: StaffId) -> DomainResult<()> {
        let current = self.node(employee)?.manager;
        if !self.node(manager)?.is_manager() {
            return Err(DomainError::NotAManager(manager));
        }
        if current != Some(manager) {
            debug!("{} is not managed by {}, nothing to remove", employee, manager);
            return Ok(());
        }
        self.detach(manager, employee)?;
        self.node_mut(employee)?.manager = None;
        Ok(())
    }

    fn detach(&mut self, manager: StaffId, employee: StaffId) -> DomainResult<()> {
        let reports = self.reports_mut(manager)?;
        if let Some(pos) = reports.iter().position(|&r| r == employee) {
            reports.remove(pos);
        }
        Ok(())
    }

    /// True if `candidate` is `root` or sits somewhere beneath it.
    fn is_within(&self, root: StaffId, candidate: StaffId) -> bool {
        let mut current = Some(candidate);
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = self.get(id).and_then(|node| node.manager);
        }
        false
    }

    /// `manager` followed by everyone transitively reporting to it, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn all_subordinates(&self, manager: StaffId) -> DomainResult<Vec<StaffId>> {
        Ok(self.iter_subordinates(manager)?.map(|(id, _)| id).collect())
    }

    /// Pre-order iterator starting at `manager`.
    pub fn iter_subordinates(&self, manager: StaffId) -> DomainResult<SubordinateIter<'_>> {
        if !self.node(manager)?.is_manager() {
            return Err(DomainError::NotAManager(manager));
        }
        Ok(SubordinateIter::new(self, manager))
    }

    /// All staff in hire order.
    pub fn iter(&self) -> impl Iterator<Item = (StaffId, &StaffNode)> {
        self.arena.iter().map(|(idx, node)| (StaffId(idx), node))
    }

    /// Staff without a manager, in hire order.
    pub fn roots(&self) -> Vec<StaffId> {
        self.iter()
            .filter(|(_, node)| node.manager.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn find_by_id(&self, id: i32) -> Option<StaffId> {
        self.iter()
            .find(|(_, node)| node.profile.id() == id)
            .map(|(staff, _)| staff)
    }

    /// Borrowed view with value equality, see [`StaffView`].
    pub fn view(&self, id: StaffId) -> DomainResult<StaffView<'_>> {
        StaffView::new(self, id)
    }

    /// Number of levels below and including the deepest root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots()
            .into_iter()
            .map(|root| self.depth_of(root))
            .max()
            .unwrap_or(0)
    }

    fn depth_of(&self, id: StaffId) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(id, 1)];

        while let Some((current, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(reports) = self.get(current).and_then(StaffNode::reports) {
                stack.extend(reports.iter().map(|&r| (r, depth + 1)));
            }
        }

        max_depth
    }
}

/// Depth-first pre-order iterator over a manager's subtree.
pub struct SubordinateIter<'a> {
    hierarchy: &'a Hierarchy,
    stack: Vec<StaffId>,
}

impl<'a> SubordinateIter<'a> {
    fn new(hierarchy: &'a Hierarchy, start: StaffId) -> Self {
        Self {
            hierarchy,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for SubordinateIter<'a> {
    type Item = (StaffId, &'a StaffNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.hierarchy.get(current) {
                // Push reports in reverse order for left-to-right traversal
                if let Some(reports) = node.reports() {
                    self.stack.extend(reports.iter().rev());
                }
                return Some((current, node));
            }
        }
        None
    }
}
