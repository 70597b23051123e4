pub mod error;
pub mod euler_tour;
pub mod graph;
pub mod lca;
pub mod rmq;
pub mod tree;
pub use error::{Error, Result};
pub use lca::LcaFast;
pub use tree::{Node, RootedTree, Tree};

use rmq::sparse_table::SparseTable;

/// The LCA index used by default, backed by a sparse table.
pub type LcaIndex = LcaFast<SparseTable>;
