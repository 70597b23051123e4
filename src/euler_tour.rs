//! Euler tour of a static tree.

use crate::tree::{Children, Node};

/// A node is written to the tour when it is first visited and again after each of its children
/// returns, so a tree with n nodes has a tour of length 2n - 1.
#[derive(Debug, Clone)]
pub struct EulerTour {
    tour: Vec<Node>,
    /// Distance to the root, indexed by node.
    depth: Vec<usize>,
    /// Position in the tour of the first visit to each node.
    first_occurrence: Vec<usize>,
}

impl EulerTour {
    /// Depth first traversal from root, visiting children in the order given.
    pub fn new(root: Node, children: &Children) -> Self {
        let n = children.num_vertices();
        let mut tour = Vec::with_capacity(2 * n - 1);
        let mut depth = vec![0; n];
        let mut first_occurrence = vec![usize::MAX; n];
        first_occurrence[root] = 0;
        tour.push(root);
        // (node, index of the next child to visit)
        let mut stack = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (u, cursor) = *frame;
            match children.of(u).get(cursor) {
                Some(&c) => {
                    frame.1 += 1;
                    depth[c] = depth[u] + 1;
                    first_occurrence[c] = tour.len();
                    tour.push(c);
                    stack.push((c, 0));
                }
                None => {
                    stack.pop();
                    if let Some(&(p, _)) = stack.last() {
                        tour.push(p);
                    }
                }
            }
        }
        debug_assert_eq!(tour.len(), 2 * n - 1);
        debug_assert!(first_occurrence.iter().all(|&i| i < tour.len()));
        Self {
            tour,
            depth,
            first_occurrence,
        }
    }
    pub fn tour(&self) -> &[Node] {
        &self.tour
    }
    pub fn depth(&self) -> &[usize] {
        &self.depth
    }
    pub fn first_occurrence(&self) -> &[usize] {
        &self.first_occurrence
    }
    pub fn num_vertices(&self) -> usize {
        self.depth.len()
    }
    /// Depth of the node at each position of the tour.
    pub fn tour_depths(&self) -> Vec<usize> {
        self.tour.iter().map(|&u| self.depth[u]).collect()
    }
}
