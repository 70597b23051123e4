use crate::tree::Node;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong when building or querying an LCA index.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The tree handed to a build doesn't satisfy the parent-array invariants.
    #[error("invalid tree: {0}")]
    InvalidTree(#[from] InvalidTreeReason),
    /// A query used a node id that is not below `bound`.
    #[error("node {node} is out of range (must be < {bound}){}", fmt_position(.position))]
    OutOfRange {
        node: Node,
        bound: usize,
        /// Index of the offending element in a batch, or of the offending edge.
        position: Option<usize>,
    },
    /// The two sides of a batched query have different lengths.
    #[error("batched query has {left} left nodes but {right} right nodes")]
    ShapeMismatch { left: usize, right: usize },
}

fn fmt_position(position: &Option<usize>) -> String {
    position
        .map(|p| format!(" at position {p}"))
        .unwrap_or_default()
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum InvalidTreeReason {
    #[error("tree has no vertices")]
    Empty,
    #[error("parent {parent} of node {node} doesn't exist")]
    ParentOutOfRange { node: Node, parent: Node },
    /// Also catches every cycle, since a cycle must go down somewhere.
    #[error("parent {parent} of node {node} is not larger than it")]
    ParentNotGreater { node: Node, parent: Node },
    #[error("nodes {first} and {second} are both roots")]
    MultipleRoots { first: Node, second: Node },
    #[error("root {root} is not the last node or not its own parent")]
    RootNotLast { root: Node },
    #[error("node {node} has no children but is numbered after an internal node")]
    LeavesNotFirst { node: Node },
    #[error("tree reports {reported} leaves but has {actual}")]
    LeafCountMismatch { reported: usize, actual: usize },
}
