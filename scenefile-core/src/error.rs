use thiserror::Error;

/// Failures while rendering or configuring filenames.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("cannot render an undetermined version ({0}); set an explicit version first")]
    UndeterminedVersion(i64),

    #[error("filename template is missing the {{{0}}} placeholder")]
    MissingPlaceholder(&'static str),

    #[error("filename template contains unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
}

/// Failures reported by a naming authority.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("naming authority unavailable: {0}")]
    Unavailable(String),
}

/// Failures while navigating or transitioning the hierarchy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error(transparent)]
    Authority(#[from] AuthorityError),

    #[error("context does not exist: {0}")]
    ValidationFailed(String),

    #[error("no job is set on the current context")]
    NoJob,

    #[error("tree for job {0} has not been loaded")]
    TreeNotLoaded(String),

    #[error("scene not found in tree: {0}")]
    SceneNotFound(String),

    #[error("context is incomplete, missing {0}")]
    IncompleteContext(&'static str),
}

pub type NamingResult<T> = std::result::Result<T, NamingError>;
pub type HierarchyResult<T> = std::result::Result<T, HierarchyError>;

/// Failures while assembling a save destination.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}
