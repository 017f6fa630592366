//! Pairwise edit-distance and similarity metrics.
//!
//! Every metric treats its inputs as sequences of Unicode scalar values, so a
//! multi-byte character counts as a single edit unit. Each submodule exposes
//! `&str` entry points plus `pub(crate)` slice-level kernels that the fuzzy
//! ratio and suggestion engines call with pre-collected `char` buffers.
//!
//! Normalized similarities fall in `[0.0, 1.0]`, with `1.0` meaning identical.
//! Two empty strings are identical under every metric.

pub mod damerau;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;

/// Collect a string's scalar values into a buffer.
pub(crate) fn to_chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Length of the shared prefix of two sequences.
pub(crate) fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Length of the shared suffix of two sequences.
pub(crate) fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter().rev().zip(b.iter().rev()).take_while(|(x, y)| x == y).count()
}

/// Strip the shared prefix and suffix, which never change an edit distance.
pub(crate) fn trim_common<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    let prefix = common_prefix(a, b);
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = common_suffix(a, b);
    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}

/// `1 - dist / max_dist`, defined as `1.0` when `max_dist` is zero.
pub(crate) fn normalized_similarity(dist: usize, max_dist: usize) -> f64 {
    if max_dist == 0 {
        1.0
    } else {
        1.0 - dist as f64 / max_dist as f64
    }
}

/// A row-major DP matrix backed by one flat allocation.
///
/// Lives for the duration of a single call; nothing is shared between calls.
pub(crate) struct Matrix {
    cells: Vec<usize>,
    width: usize,
}

impl Matrix {
    pub(crate) fn new(rows: usize, width: usize) -> Self {
        Self {
            cells: vec![0; rows * width],
            width,
        }
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.width + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.width + col] = value;
    }
}
