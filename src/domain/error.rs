//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::StaffId;

/// Domain errors represent violations of the hierarchy rules.
/// All of them are raised before any mutation takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Handle names no live staff member (the "null employee" case).
    #[error("employee cannot be null: no staff member {0}")]
    MissingEmployee(StaffId),

    #[error("staff member {0} is not a manager")]
    NotAManager(StaffId),

    #[error("cycle detected in hierarchy: {0} cannot report to itself")]
    CycleDetected(StaffId),

    #[error("duplicate staff id in roster: {0}")]
    DuplicateId(i32),

    #[error("staff {employee} refers to unknown manager {manager}")]
    UnknownManager { employee: i32, manager: i32 },

    #[error("invalid roster entry {id}: {message}")]
    InvalidRoster { id: i32, message: String },
}

/// Result type for hierarchy operations.
pub type DomainResult<T> = Result<T, DomainError>;
