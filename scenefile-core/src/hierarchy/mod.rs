//! Job/scene/shot hierarchy: resolution through a naming authority, a cached
//! tree per job, and validated context transitions.

pub mod authority;
pub mod context;
pub mod layout;
pub mod memory;
pub mod tree;

pub use authority::NamingAuthority;
pub use context::HierarchyContext;
pub use layout::{DEFAULT_ROOT, DEFAULT_SCENE_IGNORE, DEFAULT_SHOT_IGNORE, HierarchyLayout};
pub use memory::InMemoryAuthority;
pub use tree::JobTree;
