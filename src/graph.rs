//! Undirected graphs whose vertices are leaves of a tree, used for edge-wise LCA queries.

use crate::tree::Node;

/// Read-only view of a graph's edge list. Edges are numbered `0..num_edges()`.
pub trait EdgeGraph {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;
    /// (source, target) of the edge.
    fn edge_endpoints(&self, edge: usize) -> (Node, Node);
    /// Sources of all edges, in edge order.
    fn sources(&self) -> Vec<Node> {
        (0..self.num_edges())
            .map(|e| self.edge_endpoints(e).0)
            .collect()
    }
    /// Targets of all edges, in edge order.
    fn targets(&self) -> Vec<Node> {
        (0..self.num_edges())
            .map(|e| self.edge_endpoints(e).1)
            .collect()
    }
}

/// Explicit edge list, stored as two parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    num_vertices: usize,
    sources: Vec<Node>,
    targets: Vec<Node>,
}

impl UndirectedGraph {
    /// Graph with n vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            num_vertices: n,
            ..Default::default()
        }
    }
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (Node, Node)>) -> Self {
        let mut g = Self::new(n);
        for (u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }
    /// Adds an edge and returns its index. Panics if an endpoint doesn't exist.
    pub fn add_edge(&mut self, u: Node, v: Node) -> usize {
        assert!(
            u < self.num_vertices && v < self.num_vertices,
            "edge ({u}, {v}) in graph with {} vertices",
            self.num_vertices
        );
        self.sources.push(u);
        self.targets.push(v);
        self.sources.len() - 1
    }
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.sources.iter().copied().zip(self.targets.iter().copied())
    }
}

impl EdgeGraph for UndirectedGraph {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }
    fn num_edges(&self) -> usize {
        self.sources.len()
    }
    fn edge_endpoints(&self, edge: usize) -> (Node, Node) {
        (self.sources[edge], self.targets[edge])
    }
    fn sources(&self) -> Vec<Node> {
        self.sources.clone()
    }
    fn targets(&self) -> Vec<Node> {
        self.targets.clone()
    }
}

const FOUR_NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const EIGHT_NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 4-adjacency graph of a `rows x cols` grid, pixels numbered in row-major order.
pub fn four_adjacency_graph(rows: usize, cols: usize) -> UndirectedGraph {
    grid_graph(rows, cols, &FOUR_NEIGHBOURS)
}

/// 8-adjacency graph of a `rows x cols` grid, pixels numbered in row-major order.
pub fn eight_adjacency_graph(rows: usize, cols: usize) -> UndirectedGraph {
    grid_graph(rows, cols, &EIGHT_NEIGHBOURS)
}

/// Each edge is added once, when scanning its smaller endpoint.
fn grid_graph(rows: usize, cols: usize, neighbours: &[(isize, isize)]) -> UndirectedGraph {
    let mut g = UndirectedGraph::new(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let u = r * cols + c;
            for &(dr, dc) in neighbours {
                let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc))
                else {
                    continue;
                };
                if nr < rows && nc < cols && nr * cols + nc > u {
                    g.add_edge(u, nr * cols + nc);
                }
            }
        }
    }
    g
}
