use super::RangeMinimum;

/// O(n lg n) preprocessing, O(1) query.
#[derive(Debug, Clone)]
pub struct SparseTable {
    values: Vec<usize>,
    /// `levels[j][k]` is the position of the minimum in `k..k + 2^j`.
    /// Level 0 is the identity, the last level has the largest `j` with `2^j <= n`.
    levels: Vec<Vec<usize>>,
}

impl SparseTable {
    /// Leftmost of the two positions on ties. `a` must be to the left of `b`.
    fn pick(&self, a: usize, b: usize) -> usize {
        if self.values[b] < self.values[a] {
            b
        } else {
            a
        }
    }
    /// Number of levels in the table.
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }
}

impl RangeMinimum for SparseTable {
    fn new(values: &[usize]) -> Self {
        let n = values.len();
        let mut table = Self {
            values: values.to_vec(),
            levels: vec![(0..n).collect()],
        };
        let mut half = 1;
        while 2 * half <= n {
            let prev = &table.levels[table.levels.len() - 1];
            let level: Vec<usize> = (0..=n - 2 * half)
                .map(|k| table.pick(prev[k], prev[k + half]))
                .collect();
            table.levels.push(level);
            half *= 2;
        }
        table
    }

    fn argmin(&self, l: usize, r: usize) -> usize {
        debug_assert!(l <= r && r < self.len(), "bad range {l}..={r}");
        let j = (r - l + 1).ilog2() as usize;
        let level = &self.levels[j];
        self.pick(level[l], level[r + 1 - (1 << j)])
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}
