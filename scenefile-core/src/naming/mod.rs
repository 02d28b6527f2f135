//! Scene filename conventions: inferring metadata from existing names and
//! rendering new ones.

pub mod descriptor;
pub mod inference;
pub mod template;

pub use descriptor::{FilenameDescriptor, initials_from_username};
pub use template::{DEFAULT_FILENAME_TEMPLATE, FilenameTemplate, TemplateFields};

/// Version reported when a filename carries no usable version number.
pub const UNDETERMINED_VERSION: i64 = -1;

pub const DEFAULT_VERSION: i64 = 1;
pub const DEFAULT_DESCRIPTION: &str = "untitled";
pub const DEFAULT_EXTENSION: &str = "ma";
