//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the FileSystem boundary trait but are themselves
//! concrete structs, not traits.

mod counter;
mod roster;

pub use counter::CharCountService;
pub use roster::RosterService;
