//! Domain layer: staff hierarchy and its invariants
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod charcount;
pub mod error;
pub mod roster;
pub mod staff;
pub mod tree_traits;
pub mod view;

pub use arena::{Hierarchy, SubordinateIter};
pub use builder::RosterBuilder;
pub use charcount::CharCount;
pub use error::{DomainError, DomainResult};
pub use roster::{RoleKind, Roster, RosterEntry};
pub use staff::{Profile, Role, StaffId, StaffNode};
pub use tree_traits::TreeNodeConvert;
pub use view::StaffView;
