//! Constant time lowest common ancestor queries on a static tree.
//!
//! The tree is linearized with an Euler tour, and the LCA of u and v is the shallowest node in
//! the tour between the first visits to u and v. That is a range minimum query over the depths.

use derivative::Derivative;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    euler_tour::EulerTour,
    graph::EdgeGraph,
    rmq::{sparse_table::SparseTable, RangeMinimum},
    tree::{self, Node, RootedTree},
};

/// Precomputed LCA index. Owns everything it needs, so the tree can be dropped after the build.
///
/// Queries never mutate the index, so it can be shared between threads freely.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct LcaFast<R: RangeMinimum = SparseTable> {
    num_leaves: usize,
    root: Node,
    euler: EulerTour,
    #[derivative(Debug = "ignore")]
    rmq: R,
}

impl<R: RangeMinimum> LcaFast<R> {
    /// Preprocess the tree. O(n lg n).
    pub fn build(tree: &impl RootedTree) -> Result<Self> {
        tree::validate(tree)?;
        let root = tree.root();
        let euler = EulerTour::new(root, &tree.children());
        let rmq = R::new(&euler.tour_depths());
        log::debug!(
            "Built LCA index on {} nodes ({} leaves), tour of length {}",
            euler.num_vertices(),
            tree.num_leaves(),
            rmq.len()
        );
        Ok(Self {
            num_leaves: tree.num_leaves(),
            root,
            euler,
            rmq,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.euler.num_vertices()
    }

    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    pub fn root(&self) -> Node {
        self.root
    }

    /// Distance from the node to the root.
    pub fn depth(&self, node: Node) -> Result<usize> {
        check_range(node, self.num_vertices(), None)?;
        Ok(self.euler.depth()[node])
    }

    /// The deepest node that is an ancestor of both u and v. A node is its own ancestor.
    pub fn lca(&self, u: Node, v: Node) -> Result<Node> {
        check_range(u, self.num_vertices(), None)?;
        check_range(v, self.num_vertices(), None)?;
        Ok(self.lca_unchecked(u, v))
    }

    /// Element-wise LCA of `us[i]` and `vs[i]`, in the same order as the input.
    pub fn lca_pairs(&self, us: &[Node], vs: &[Node]) -> Result<Vec<Node>> {
        if us.len() != vs.len() {
            return Err(Error::ShapeMismatch {
                left: us.len(),
                right: vs.len(),
            });
        }
        check_all(us, vs, self.num_vertices())?;
        log::trace!("LCA of {} pairs", us.len());
        Ok(self.lca_slices(us, vs))
    }

    /// LCA of the endpoints of each edge of the graph, in edge order. The graph vertices must be
    /// leaves of the tree.
    pub fn lca_edges(&self, graph: &impl EdgeGraph) -> Result<Vec<Node>> {
        if graph.num_vertices() > self.num_leaves {
            return Err(Error::OutOfRange {
                node: graph.num_vertices() - 1,
                bound: self.num_leaves,
                position: None,
            });
        }
        let (sources, targets) = (graph.sources(), graph.targets());
        check_all(&sources, &targets, self.num_leaves)?;
        log::trace!("LCA of {} edges", sources.len());
        Ok(self.lca_slices(&sources, &targets))
    }

    fn lca_unchecked(&self, u: Node, v: Node) -> Node {
        if u == v {
            return u;
        }
        let first = self.euler.first_occurrence();
        let (i, j) = (first[u], first[v]);
        let k = self.rmq.argmin(i.min(j), i.max(j));
        self.euler.tour()[k]
    }

    #[cfg(feature = "rayon")]
    fn lca_slices(&self, us: &[Node], vs: &[Node]) -> Vec<Node> {
        us.par_iter()
            .zip(vs.par_iter())
            .map(|(&u, &v)| self.lca_unchecked(u, v))
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn lca_slices(&self, us: &[Node], vs: &[Node]) -> Vec<Node> {
        us.iter()
            .zip(vs)
            .map(|(&u, &v)| self.lca_unchecked(u, v))
            .collect()
    }
}

fn check_range(node: Node, bound: usize, position: Option<usize>) -> Result<()> {
    if node < bound {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            node,
            bound,
            position,
        })
    }
}

/// Reports the first position where either side is out of range.
fn check_all(us: &[Node], vs: &[Node], bound: usize) -> Result<()> {
    for (i, (&u, &v)) in us.iter().zip(vs).enumerate() {
        check_range(u, bound, Some(i))?;
        check_range(v, bound, Some(i))?;
    }
    Ok(())
}
