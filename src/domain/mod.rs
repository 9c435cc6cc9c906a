//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod description;
pub mod entities;
pub mod error;
pub mod render;
pub mod splice;

pub use description::{extract_description, DescriptionRule, DESCRIPTION_RULES};
pub use entities::*;
pub use error::DomainError;
pub use render::render_tree;
pub use splice::splice;
