//! Fenwick trees (binary indexed trees).
//!
//! A [`FenwickTree`] keeps `n` frequencies and answers prefix and range sums
//! in `O(log n)`, updates a single frequency in `O(log n)`, bulk-loads and
//! reconstructs all frequencies in `O(n)`, and searches for the first prefix
//! whose sum reaches a threshold in `O(log n)`.
//!
//! Indexing is 0-based. Sums are over half-open ranges.
//!
//! ```
//! use fenwick::FenwickTree;
//!
//! # fn main() -> Result<(), fenwick::Error> {
//! let mut tree = FenwickTree::new(10);
//! tree.init(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])?;
//!
//! assert_eq!(tree.prefix_sum(10)?, 55);
//! assert_eq!(tree.range_sum(2, 9)?, 42);
//! assert_eq!(tree.get(5)?, 6);
//! assert_eq!(tree.find_stop(15), Some(5));
//! # Ok(())
//! # }
//! ```
//!
//! The tree never hands out its internal storage, so frequencies can only be
//! written through [`FenwickTree::add`], [`FenwickTree::set`] and
//! [`FenwickTree::init`]:
//!
//! ```compile_fail
//! let mut tree = fenwick::FenwickTree::<i32>::new(4);
//! tree[0] = 5;
//! ```
//!
//! Only signed integers and floats are [`Frequency`] types:
//!
//! ```compile_fail
//! let tree = fenwick::FenwickTree::<u32>::new(4);
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod frequency;
mod utils;

use alloc::vec::Vec;

pub use error::{Error, Result};
pub use frequency::Frequency;

use error::{length_mismatch, out_of_range};
use utils::{highest_power_of_two_le, parent};

/// A fixed-size sequence of frequencies supporting `O(log n)` point updates
/// and prefix sums.
///
/// Two trees compare equal iff they have the same length and hold the same
/// frequencies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FenwickTree<T> {
    // Invariant: for every 1-based `i` in `1..=len`, `inner[i - 1]` is the sum
    // of the frequencies at 1-based positions `(i - lowbit(i), i]`.
    inner: Vec<T>,
}

impl<T> FenwickTree<T> {
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Frequency> FenwickTree<T> {
    /// Creates a tree of `n` frequencies, all zero.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            inner: alloc::vec![T::ZERO; n],
        }
    }

    /// Creates a tree holding `values` in `O(n)`.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        let mut this = Self {
            inner: values.to_vec(),
        };
        this.build();
        this
    }

    /// Sum of the frequencies in `0..stop`.
    ///
    /// `stop` must be in `1..=len`; an empty prefix is rejected rather than
    /// summing to zero.
    pub fn prefix_sum(&self, stop: usize) -> Result<T> {
        if stop == 0 || stop > self.len() {
            return Err(out_of_range("stop", stop, 1..self.len() + 1));
        }
        Ok(self.sum_to(stop))
    }

    /// Sum of the frequencies in `start..stop`.
    ///
    /// Requires `start < len` and `start < stop <= len`.
    pub fn range_sum(&self, start: usize, stop: usize) -> Result<T> {
        let len = self.len();
        if start >= len {
            return Err(out_of_range("start", start, 0..len));
        }
        if stop <= start || stop > len {
            return Err(out_of_range("stop", stop, start + 1..len + 1));
        }
        let mut sum = self.sum_to(stop);
        if start > 0 {
            sum -= self.sum_to(start);
        }
        Ok(sum)
    }

    /// The frequency at `idx`.
    pub fn get(&self, idx: usize) -> Result<T> {
        self.check_index(idx)?;
        self.range_sum(idx, idx + 1)
    }

    /// Adds `k` to the frequency at `idx`.
    pub fn add(&mut self, idx: usize, k: T) -> Result<()> {
        self.check_index(idx)?;
        let len = self.len();
        let mut index = idx + 1;
        while index <= len {
            self.inner[index - 1] += k;
            index = parent(index);
        }
        Ok(())
    }

    /// Replaces the frequency at `idx` with `value`.
    pub fn set(&mut self, idx: usize, value: T) -> Result<()> {
        let current = self.get(idx)?;
        self.add(idx, value - current)
    }

    /// Replaces every frequency with `values` in `O(n)`.
    ///
    /// The tree is left untouched if `values.len() != self.len()`.
    pub fn init(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.len() {
            return Err(length_mismatch(self.len(), values.len()));
        }
        self.inner.copy_from_slice(values);
        self.build();
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len(), "bulk-loaded frequencies");
        Ok(())
    }

    /// Reconstructs all frequencies in `O(n)`.
    ///
    /// The returned `Vec` is a copy; changing it does not affect the tree.
    #[must_use]
    pub fn frequencies(&self) -> Vec<T> {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len(), "reconstructing frequencies");
        let len = self.len();
        let mut frequencies = self.inner.clone();
        for index in 1..=len {
            let parent = parent(index);
            if parent <= len {
                frequencies[parent - 1] -= self.inner[index - 1];
            }
        }
        frequencies
    }

    /// Consumes the tree, reconstructing its frequencies in place.
    #[must_use]
    pub fn into_frequencies(mut self) -> Vec<T> {
        let len = self.len();
        for index in (1..=len).rev() {
            let parent = parent(index);
            if parent <= len {
                let child = self.inner[index - 1];
                self.inner[parent - 1] -= child;
            }
        }
        self.inner
    }

    /// Sum of all frequencies; zero for an empty tree.
    #[must_use]
    pub fn total(&self) -> T {
        self.sum_to(self.len())
    }

    /// Smallest `stop` in `1..=len` with `prefix_sum(stop) >= value`, or
    /// `None` if even the total falls short.
    ///
    /// Runs in `O(log n)`. The answer is exact when no frequency is negative,
    /// so that prefix sums never decrease; otherwise it is still `None` or in
    /// `1..=len`.
    ///
    /// ```
    /// let tree = fenwick::FenwickTree::from_slice(&[1, 2, 3]);
    /// assert_eq!(tree.find_stop(3), Some(2));
    /// assert_eq!(tree.find_stop(-4), Some(1));
    /// assert_eq!(tree.find_stop(7), None);
    /// ```
    #[must_use]
    pub fn find_stop(&self, value: T) -> Option<usize> {
        self.search(value, |value, partial| value > partial)
    }

    /// Like [`find_stop`](Self::find_stop), but the prefix sum must strictly
    /// exceed `value`.
    ///
    /// ```
    /// let tree = fenwick::FenwickTree::from_slice(&[1, 2, 3]);
    /// assert_eq!(tree.find_stop_strict(3), Some(3));
    /// assert_eq!(tree.find_stop_strict(6), None);
    /// ```
    #[must_use]
    pub fn find_stop_strict(&self, value: T) -> Option<usize> {
        self.search(value, |value, partial| value >= partial)
    }

    // Walks the implicit tree from the highest step down, accepting a block
    // whenever the remaining budget still lies past it. A budget that would
    // overflow past a negative block is already beyond every prefix sum, so it
    // saturates.
    fn search<F>(&self, mut value: T, accept: F) -> Option<usize>
    where
        F: Fn(T, T) -> bool,
    {
        let len = self.len();
        let mut base = 0;
        let mut step = highest_power_of_two_le(len);
        while step != 0 {
            let index = base + step;
            if index <= len {
                let partial = self.inner[index - 1];
                if accept(value, partial) {
                    value = value.sub_saturating(partial);
                    base = index;
                }
            }
            step >>= 1;
        }
        let stop = base + 1;
        (stop <= len).then_some(stop)
    }

    fn sum_to(&self, mut stop: usize) -> T {
        let mut sum = T::ZERO;
        while stop != 0 {
            sum += self.inner[stop - 1];
            stop &= stop - 1;
        }
        sum
    }

    fn build(&mut self) {
        let len = self.len();
        for index in 1..=len {
            let parent = parent(index);
            if parent <= len {
                let child = self.inner[index - 1];
                self.inner[parent - 1] += child;
            }
        }
    }

    #[inline]
    fn check_index(&self, idx: usize) -> Result<()> {
        if idx >= self.len() {
            return Err(out_of_range("idx", idx, 0..self.len()));
        }
        Ok(())
    }
}

impl<T> Default for FenwickTree<T> {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl<T: Frequency> FromIterator<T> for FenwickTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self {
            inner: iter.into_iter().collect(),
        };
        this.build();
        this
    }
}

impl<T: Frequency> From<FenwickTree<T>> for Vec<T> {
    fn from(tree: FenwickTree<T>) -> Self {
        tree.into_frequencies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn one_to_ten() -> FenwickTree<i32> {
        let mut tree = FenwickTree::new(10);
        tree.init(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();
        tree
    }

    #[test]
    fn test_new() {
        let tree = FenwickTree::<i64>::new(5);
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
        assert_eq!(tree.frequencies(), vec![0; 5]);
        assert_eq!(tree.total(), 0);
    }

    #[test]
    fn test_internal_layout() {
        let tree = one_to_ten();
        assert_eq!(tree.inner, vec![1, 3, 3, 10, 5, 11, 7, 36, 9, 19]);
    }

    #[test]
    fn test_sums() {
        let tree = one_to_ten();
        assert_eq!(tree.prefix_sum(10), Ok(55));
        assert_eq!(tree.prefix_sum(1), Ok(1));
        assert_eq!(tree.range_sum(2, 9), Ok(42));
        assert_eq!(tree.range_sum(0, 10), Ok(55));
        assert_eq!(tree.get(5), Ok(6));
        assert_eq!(tree.total(), 55);
        assert_eq!(tree.frequencies(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_add_matches_init() {
        let mut tree = FenwickTree::new(10);
        for (idx, x) in (1..=10).enumerate() {
            tree.add(idx, x).unwrap();
        }
        assert_eq!(tree, one_to_ten());
    }

    #[test]
    fn test_add_then_query() {
        let mut tree = FenwickTree::new(5);
        tree.add(2, 10).unwrap();
        assert_eq!(tree.range_sum(0, 5), Ok(10));
        assert_eq!(tree.get(2), Ok(10));
        assert_eq!(tree.get(1), Ok(0));
    }

    #[test]
    fn test_set() {
        let mut tree = one_to_ten();
        tree.set(3, -6).unwrap();
        assert_eq!(tree.get(3), Ok(-6));
        assert_eq!(tree.prefix_sum(10), Ok(45));
        assert_eq!(tree.frequencies(), vec![1, 2, 3, -6, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_frequencies_is_a_copy() {
        let tree = one_to_ten();
        let mut frequencies = tree.frequencies();
        frequencies[0] = 100;
        assert_eq!(tree.get(0), Ok(1));
    }

    #[test]
    fn test_into_frequencies() {
        let values = [4.5, -1.0, 0.25, 8.0, 3.0, 2.0, 7.5];
        let tree = FenwickTree::from_slice(&values);
        assert_eq!(tree.frequencies(), values);
        assert_eq!(Vec::from(tree), values);
    }

    #[test]
    fn test_from_iter() {
        let tree: FenwickTree<i32> = (1..=10).collect();
        assert_eq!(tree, one_to_ten());
    }

    #[test]
    fn test_find_stop() {
        let tree = FenwickTree::from_slice(&[1, 2, 3]);
        assert_eq!(tree.find_stop(3), Some(2));
        assert_eq!(tree.find_stop_strict(3), Some(3));
        assert_eq!(tree.find_stop(7), None);
        assert_eq!(tree.find_stop(6), Some(3));
        assert_eq!(tree.find_stop_strict(6), None);
        assert_eq!(tree.find_stop(1), Some(1));
        assert_eq!(tree.find_stop_strict(0), Some(1));
        assert_eq!(tree.find_stop(i32::MIN), Some(1));
    }

    #[test]
    fn test_find_stop_negative_extremes() {
        let tree = FenwickTree::from_slice(&[-1i32]);
        assert_eq!(tree.find_stop(i32::MAX), None);
        assert_eq!(tree.find_stop_strict(i32::MAX), None);
        assert_eq!(tree.find_stop(i32::MIN), Some(1));

        let tree = FenwickTree::from_slice(&[-5i32, 3, 2]);
        assert_eq!(tree.find_stop(i32::MAX), None);
        assert_eq!(tree.find_stop_strict(i32::MAX - 1), None);
        assert_eq!(tree.find_stop(i32::MIN), Some(1));
        assert_eq!(tree.find_stop_strict(i32::MIN), Some(1));

        let tree = FenwickTree::from_slice(&[i64::MIN, 0, 7]);
        assert_eq!(tree.find_stop(i64::MAX), None);
        assert_eq!(tree.find_stop(i64::MIN), Some(1));

        let tree = FenwickTree::from_slice(&[-1i8, -1, -1, -1]);
        assert_eq!(tree.find_stop(i8::MAX), None);
        assert_eq!(tree.find_stop_strict(i8::MAX), None);
    }

    #[test]
    fn test_empty() {
        let mut tree = FenwickTree::<i32>::new(0);
        assert!(tree.is_empty());
        assert_eq!(tree, FenwickTree::default());
        assert_eq!(tree.find_stop(10), None);
        assert_eq!(tree.find_stop(-10), None);
        assert_eq!(tree.find_stop_strict(0), None);
        assert_eq!(tree.total(), 0);
        assert!(tree.get(0).is_err());
        assert!(tree.add(0, 1).is_err());
        assert!(tree.set(0, 1).is_err());
        assert!(tree.prefix_sum(0).is_err());
        assert!(tree.range_sum(0, 1).is_err());
        assert_eq!(tree.init(&[]), Ok(()));
        assert!(tree.frequencies().is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let mut tree = one_to_ten();
        assert_eq!(
            tree.prefix_sum(0),
            Err(Error::OutOfRange {
                argument: "stop",
                value: 0,
                valid: 1..11
            })
        );
        assert!(tree.prefix_sum(11).is_err());
        assert_eq!(
            tree.range_sum(10, 11),
            Err(Error::OutOfRange {
                argument: "start",
                value: 10,
                valid: 0..10
            })
        );
        assert_eq!(
            tree.range_sum(4, 4),
            Err(Error::OutOfRange {
                argument: "stop",
                value: 4,
                valid: 5..11
            })
        );
        assert!(tree.range_sum(4, 11).is_err());
        assert_eq!(
            tree.get(10),
            Err(Error::OutOfRange {
                argument: "idx",
                value: 10,
                valid: 0..10
            })
        );
        assert!(tree.add(10, 1).is_err());
        assert!(tree.set(usize::MAX, 1).is_err());
        assert_eq!(tree, one_to_ten());
    }

    #[test]
    fn test_length_mismatch() {
        let mut tree = one_to_ten();
        assert_eq!(
            tree.init(&[1, 2, 3]),
            Err(Error::LengthMismatch {
                expected: 10,
                actual: 3
            })
        );
        assert_eq!(tree, one_to_ten());
    }
}
