//! skilltree: keep the references file tree in SKILL.md in sync.
//!
//! Scans a references directory for markdown files, derives a one-line
//! description for each, renders an ASCII tree and splices it between two
//! markers in the target document.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
