//! Core data model definitions shared across scenefile crates.
#![allow(missing_docs)]

pub mod context;
pub mod discipline;
pub mod error;

pub use context::{Context, ContextIds, HierarchyLevel, Node};
pub use discipline::Discipline;
pub use error::ModelError;
