use std::fmt::Debug;

pub mod sparse_table;

/// Range minimum queries over a fixed array of values. Answers with positions, not values.
pub trait RangeMinimum
where
    Self: Debug + Send + Sync + Sized,
{
    /// Preprocess the values. They can't change afterwards.
    fn new(values: &[usize]) -> Self;
    /// Position of the minimum value in `l..=r`. If there are ties, the leftmost one.
    /// Requires `l <= r < len()`.
    fn argmin(&self, l: usize, r: usize) -> usize;
    /// Number of values.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
