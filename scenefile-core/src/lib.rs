//! # scenefile-core
//!
//! Naming and placement of versioned production scene files.
//!
//! ## Overview
//!
//! - **Filename inference** ([`naming`]): recover description, discipline,
//!   version, author initials and extension from an existing filename, and
//!   render a canonical filename back from those fields.
//! - **Hierarchy context** ([`hierarchy`]): track the job/scene/shot a session
//!   works in, cache the tree under the job, and move between locations only
//!   after a naming authority has confirmed they exist.
//! - **Save sessions** ([`save`]): the two combined for one input path.
//!
//! ## Examples
//!
//! ```
//! use scenefile_core::naming::FilenameDescriptor;
//!
//! let mut descriptor = FilenameDescriptor::from_existing("char_santa_rig_v003_aw.ma");
//! descriptor.increment(None, 1);
//! assert_eq!(descriptor.render(), "char_santa_RIG_004_aw.ma");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Error types for naming, hierarchy and save operations
pub mod error;

/// Job/scene/shot context and tree cache
pub mod hierarchy;

/// Filename inference, templates and rendering
pub mod naming;

/// Save destination assembly
pub mod save;

pub use error::{AuthorityError, HierarchyError, NamingError, SaveError};
pub use hierarchy::{HierarchyContext, HierarchyLayout, InMemoryAuthority, JobTree, NamingAuthority};
pub use naming::{FilenameDescriptor, FilenameTemplate, UNDETERMINED_VERSION};
pub use save::SaveSession;
pub use scenefile_model::{Context, ContextIds, Discipline, HierarchyLevel, Node};
