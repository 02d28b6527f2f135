use scenefile_model::{Context, ContextIds, Node};

use crate::error::AuthorityError;

/// External service that owns the job/scene/shot namespace.
///
/// Every call may fail; callers never assume a lookup succeeds.
pub trait NamingAuthority: Send + Sync {
    /// Turn a (possibly partial) identifier triple into resolved nodes.
    fn resolve(&self, ids: &ContextIds) -> Result<Context, AuthorityError>;

    /// Direct children of `node`, in the authority's order.
    fn children(&self, node: &Node) -> Result<Vec<Node>, AuthorityError>;

    /// Whether `context` points at a location that exists.
    fn validate(&self, context: &Context) -> Result<bool, AuthorityError>;

    /// Context described by the invoking environment.
    fn from_environment(&self) -> Result<Context, AuthorityError>;
}
