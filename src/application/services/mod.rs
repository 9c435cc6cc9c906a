//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Reporter)
//! but are themselves concrete structs, not traits.

mod tree_update;

pub use tree_update::{TreeUpdateService, UpdateSummary};
