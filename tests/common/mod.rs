use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use lca_fast::{rmq::RangeMinimum, Node, RootedTree, Tree};
use rand::SeedableRng;

/// Linear scan on every query.
#[allow(dead_code)]
#[derive(Debug)]
pub struct SlowRmq(Vec<usize>);

impl RangeMinimum for SlowRmq {
    fn new(values: &[usize]) -> Self {
        Self(values.to_vec())
    }

    fn argmin(&self, l: usize, r: usize) -> usize {
        (l..=r).min_by_key(|&k| (self.0[k], k)).unwrap()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Walks up the parent array on every query.
#[allow(dead_code)]
#[derive(Debug)]
pub struct SlowLca {
    parents: Vec<Node>,
    depth: Vec<usize>,
}

#[allow(dead_code)]
impl SlowLca {
    pub fn new(tree: &impl RootedTree) -> Self {
        let n = tree.num_vertices();
        let parents: Vec<Node> = (0..n).map(|u| tree.parent_of(u)).collect();
        let mut depth = vec![0; n];
        // Parents have larger indices, so this visits them first.
        for u in (0..n).rev() {
            if parents[u] != u {
                depth[u] = depth[parents[u]] + 1;
            }
        }
        Self { parents, depth }
    }

    pub fn lca(&self, mut u: Node, mut v: Node) -> Node {
        while self.depth[u] > self.depth[v] {
            u = self.parents[u];
        }
        while self.depth[v] > self.depth[u] {
            v = self.parents[v];
        }
        while u != v {
            u = self.parents[u];
            v = self.parents[v];
        }
        u
    }

    pub fn depth(&self, u: Node) -> usize {
        self.depth[u]
    }

    /// Whether a is an ancestor of u, or u itself.
    pub fn is_ancestor(&self, a: Node, mut u: Node) -> bool {
        while u != a && self.parents[u] != u {
            u = self.parents[u];
        }
        u == a
    }
}

#[allow(dead_code)]
pub fn random_tree(seed: u64, num_leaves: usize) -> Tree {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Tree::random(num_leaves, &mut rng)
}

/// Leaves 0 and 1 hang from the deepest internal node, every other leaf one level above the
/// previous one. Depth grows linearly with the number of leaves.
#[allow(dead_code)]
pub fn caterpillar(num_leaves: usize) -> Tree {
    assert!(num_leaves >= 2);
    let l = num_leaves;
    let mut parents = vec![0; 2 * l - 1];
    parents[0] = l;
    for i in 1..l {
        parents[i] = l + i - 1;
    }
    for k in l..2 * l - 2 {
        parents[k] = k + 1;
    }
    parents[2 * l - 2] = 2 * l - 2;
    Tree::from_parents(parents).unwrap()
}

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S%.3f"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}
