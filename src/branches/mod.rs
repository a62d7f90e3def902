//! Branch housekeeping across the community and enterprise checkouts.

pub mod cleaner;
pub mod inventory;

pub use cleaner::{clean_branches, CleanSummary};
pub use inventory::{BranchEntry, BranchInventory};
