// Mon Oct 19 2026 - Alex

pub mod offset;
pub mod hierarchy;
pub mod layout;

pub use offset::Offset;
pub use hierarchy::{DependencyOrderer, OrderedClass, Ordering, DroppedClass, OrphanParent, order};
pub use layout::{LayoutComputer, LayoutWalk, Placement, SizeTable, walk_fields, compute_sizes};
