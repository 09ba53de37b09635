//! orgchart: employee/manager hierarchies
//!
//! Staff live in an arena-backed [`domain::Hierarchy`]. Managers own the
//! ordered list of their direct reports, every staff member records its
//! current manager, and reassignment keeps both sides consistent.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
