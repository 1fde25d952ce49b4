use std::{
    iter::Copied,
    slice::{Iter, IterMut},
};

/// A `Vec<f64>` of section peaks.
///
/// All entries are expected to be non-negative.
#[derive(Clone, Debug, Default)]
pub struct StrainsVec {
    inner: Vec<f64>,
}

impl StrainsVec {
    /// Constructs a new, empty [`StrainsVec`] with at least the specified
    /// capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Appends an element to the back.
    pub fn push(&mut self, value: f64) {
        self.inner.push(value);
    }

    /// Sorts the entries in descending order.
    ///
    /// The sort is stable so equal peaks keep their relative order.
    pub fn sort_desc(&mut self) {
        self.inner.sort_by(|a, b| b.total_cmp(a));
    }

    /// Removes all entries that are not strictly positive.
    pub fn retain_non_zero(&mut self) {
        self.inner.retain(|&a| a > 0.0);
    }

    /// Removes all zeros and sorts the remaining entries in descending order.
    pub fn retain_non_zero_and_sort(&mut self) {
        self.retain_non_zero();
        self.sort_desc();
    }

    /// Removes all zeros, sorts the remaining entries in descending order, and
    /// returns an iterator over mutable references to the values.
    pub fn sorted_non_zero_iter_mut(&mut self) -> IterMut<'_, f64> {
        self.retain_non_zero_and_sort();

        self.inner.iter_mut()
    }

    /// Sum up all values in insertion order.
    pub fn sum(&self) -> f64 {
        self.inner.iter().fold(0.0, |sum, value| sum + value)
    }

    pub fn iter(&self) -> Copied<Iter<'_, f64>> {
        self.inner.iter().copied()
    }
}

impl From<Vec<f64>> for StrainsVec {
    fn from(inner: Vec<f64>) -> Self {
        Self { inner }
    }
}
