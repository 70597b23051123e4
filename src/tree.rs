//! Static rooted trees stored as parent arrays.
//!
//! Nodes are numbered so that every parent has a larger index than its children: leaves come
//! first (`0..num_leaves`), and the root is the last node and its own parent.

use std::fmt::{Debug, Formatter};
use std::ops::Range;

use debug_tree::{add_leaf_to, TreeBuilder};
use rand::Rng;

use crate::error::{InvalidTreeReason, Result};

pub type Node = usize;

/// Read-only view of a rooted tree, enough to build an LCA index from it.
pub trait RootedTree {
    /// Total number of nodes, leaves and internal.
    fn num_vertices(&self) -> usize;
    /// Number of nodes without children. They are numbered `0..num_leaves()`.
    fn num_leaves(&self) -> usize;
    /// Parent of the node. The root is its own parent.
    fn parent_of(&self, node: Node) -> Node;
    /// The unique root, which is the node with the largest index.
    fn root(&self) -> Node {
        self.num_vertices() - 1
    }
    /// Child lists of every node, computed in a single pass over the parents.
    fn children(&self) -> Children {
        Children::new(self.num_vertices(), self.root(), |u| self.parent_of(u))
    }
}

/// Child lists of all nodes of a tree, packed in a single array. Children of a node are sorted.
#[derive(Debug, Clone)]
pub struct Children {
    /// Children of `u` are `nodes[offsets[u]..offsets[u + 1]]`.
    offsets: Vec<usize>,
    nodes: Vec<Node>,
}

impl Children {
    fn new(n: usize, root: Node, parent_of: impl Fn(Node) -> Node) -> Self {
        let mut offsets = vec![0; n + 1];
        for u in (0..n).filter(|&u| u != root) {
            offsets[parent_of(u) + 1] += 1;
        }
        for u in 0..n {
            offsets[u + 1] += offsets[u];
        }
        let mut next = offsets.clone();
        let mut nodes = vec![0; n.saturating_sub(1)];
        for u in (0..n).filter(|&u| u != root) {
            let p = parent_of(u);
            nodes[next[p]] = u;
            next[p] += 1;
        }
        Self { offsets, nodes }
    }
    /// Children of `u`, in increasing order.
    pub fn of(&self, u: Node) -> &[Node] {
        &self.nodes[self.offsets[u]..self.offsets[u + 1]]
    }
    pub fn num_vertices(&self) -> usize {
        self.offsets.len() - 1
    }
}

/// Checks the parent array of `tree`. Cheap enough to run before every build.
pub fn validate(tree: &impl RootedTree) -> Result<()> {
    let n = tree.num_vertices();
    if n == 0 {
        return Err(InvalidTreeReason::Empty.into());
    }
    let root = tree.root();
    if root != n - 1 || tree.parent_of(root) != root {
        return Err(InvalidTreeReason::RootNotLast { root }.into());
    }
    let actual = check_parents(n, |u| tree.parent_of(u))?;
    if actual != tree.num_leaves() {
        return Err(InvalidTreeReason::LeafCountMismatch {
            reported: tree.num_leaves(),
            actual,
        }
        .into());
    }
    Ok(())
}

/// Checks the ordering invariant, and returns the number of leaves.
fn check_parents(n: usize, parent_of: impl Fn(Node) -> Node) -> Result<usize> {
    let mut root = None;
    let mut has_child = vec![false; n];
    for u in 0..n {
        let p = parent_of(u);
        if p >= n {
            return Err(InvalidTreeReason::ParentOutOfRange { node: u, parent: p }.into());
        }
        if p == u {
            if let Some(first) = root {
                return Err(InvalidTreeReason::MultipleRoots { first, second: u }.into());
            }
            root = Some(u);
        } else if p < u {
            return Err(InvalidTreeReason::ParentNotGreater { node: u, parent: p }.into());
        } else {
            has_child[p] = true;
        }
    }
    match root {
        Some(root) if root == n - 1 => {}
        Some(root) => return Err(InvalidTreeReason::RootNotLast { root }.into()),
        // Unreachable for n > 0, the last node can only point to itself.
        None => return Err(InvalidTreeReason::RootNotLast { root: n - 1 }.into()),
    }
    let num_leaves = has_child.iter().take_while(|&&c| !c).count();
    if let Some(node) = (num_leaves..n).find(|&u| !has_child[u]) {
        // The root of a single node tree is a leaf, and it's never found here.
        return Err(InvalidTreeReason::LeavesNotFirst { node }.into());
    }
    Ok(num_leaves)
}

/// A rooted tree given by its parent array.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree {
    parents: Vec<Node>,
    num_leaves: usize,
}

impl Tree {
    /// Validates the parent array and builds the tree.
    pub fn from_parents(parents: Vec<Node>) -> Result<Self> {
        if parents.is_empty() {
            return Err(InvalidTreeReason::Empty.into());
        }
        let num_leaves = check_parents(parents.len(), |u| parents[u])?;
        Ok(Self {
            parents,
            num_leaves,
        })
    }
    /// Random tree with the given number of leaves. Internal nodes are created by merging one to
    /// three of the current roots, so chains of single child nodes also show up.
    pub fn random(num_leaves: usize, rng: &mut impl Rng) -> Self {
        assert!(num_leaves > 0, "a tree needs at least one leaf");
        let mut parents: Vec<Node> = (0..num_leaves).collect();
        let mut roots: Vec<Node> = (0..num_leaves).collect();
        while roots.len() > 1 {
            let id = parents.len();
            parents.push(id);
            let k = rng.gen_range(1..=3).min(roots.len());
            for _ in 0..k {
                let c = roots.swap_remove(rng.gen_range(0..roots.len()));
                parents[c] = id;
            }
            roots.push(id);
        }
        Self {
            parents,
            num_leaves,
        }
    }
    pub fn parents(&self) -> &[Node] {
        &self.parents
    }
    pub fn is_leaf(&self, node: Node) -> bool {
        node < self.num_leaves
    }
    pub fn leaves(&self) -> Range<Node> {
        0..self.num_leaves
    }
}

impl RootedTree for Tree {
    fn num_vertices(&self) -> usize {
        self.parents.len()
    }
    fn num_leaves(&self) -> usize {
        self.num_leaves
    }
    fn parent_of(&self, node: Node) -> Node {
        self.parents[node]
    }
}

impl Debug for Tree {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let children = self.children();
        // Explicit stack, so printing deep trees doesn't overflow.
        let mut branches = vec![];
        let mut stack = vec![(self.root(), 0)];
        while let Some(frame) = stack.last_mut() {
            let (u, cursor) = *frame;
            if self.is_leaf(u) {
                add_leaf_to!(builder, "{u}");
                stack.pop();
                continue;
            }
            if cursor == 0 {
                branches.push(builder.add_branch(&format!("[{u}]")));
            }
            match children.of(u).get(cursor) {
                Some(&c) => {
                    frame.1 += 1;
                    stack.push((c, 0));
                }
                None => {
                    stack.pop();
                    branches.pop();
                }
            }
        }
        write!(f, "{}", builder.string())
    }
}
