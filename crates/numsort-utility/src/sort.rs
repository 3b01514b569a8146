use std::cmp::Ordering;

use rayon::slice::ParallelSliceMut;

use crate::numeric_cmp::numeric_cmp;

/// Numeric sorting for slices of strings.
pub trait NumericSort {
    /// Stable sort with [`numeric_cmp`].
    fn numeric_sort(&mut self);

    /// Unstable sort with [`numeric_cmp`]. Only identical strings compare
    /// equal, so the result matches [`NumericSort::numeric_sort`].
    fn numeric_sort_unstable(&mut self);

    /// Stable sort with [`numeric_cmp`] spread over the rayon thread pool.
    fn par_numeric_sort(&mut self);
}

impl<S> NumericSort for [S]
where
    S: AsRef<str> + Send,
{
    fn numeric_sort(&mut self) {
        crate::numeric_cmp::numeric_sort(self);
    }

    fn numeric_sort_unstable(&mut self) {
        profiling::scope!("numeric sort unstable");
        self.sort_unstable_by(|a, b| numeric_cmp(a.as_ref(), b.as_ref()));
    }

    fn par_numeric_sort(&mut self) {
        profiling::scope!("parallel numeric sort");
        self.par_sort_by(|a, b| numeric_cmp(a.as_ref(), b.as_ref()));
    }
}

/// Sorts `items` by the text `key` extracts from each of them.
pub fn numeric_sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    K: AsRef<str>,
    F: FnMut(&T) -> K,
{
    items.sort_by(|a, b| numeric_cmp(key(a).as_ref(), key(b).as_ref()));
}

/// Removes consecutive entries that compare equal, keeping the first.
pub fn dedup_numeric<S: AsRef<str>>(items: &mut Vec<S>) {
    items.dedup_by(|a, b| numeric_cmp(a.as_ref(), b.as_ref()) == Ordering::Equal);
}

/// Index of the first entry that is ordered before its predecessor.
pub fn first_unsorted<S: AsRef<str>>(items: &[S]) -> Option<usize> {
    items
        .windows(2)
        .position(|pair| numeric_cmp(pair[0].as_ref(), pair[1].as_ref()) == Ordering::Greater)
        .map(|i| i + 1)
}
