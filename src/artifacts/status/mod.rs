//! Working tree status inspection
//!
//! Status is a pure read over the union of paths known to the current
//! commit tree, the index, and the working directory. No store is mutated.

pub mod file_status;
pub mod inspector;
pub mod report;
