//! Subsequence search over slices.
//!
//! This module provides [`SequenceSearch`], an extension trait implemented
//! for `[T]` that locates occurrences of a needle subsequence inside a
//! haystack slice, the way `str::find` locates substrings, but for any
//! element type with an equality notion.
//!
//! # Windows
//!
//! Every operation has a windowed variant (`*_in`) that constrains the
//! search to a sub-range of the haystack. Window bounds are **clamped** to
//! the haystack length rather than panicking: a window reaching past the end
//! simply ends at the end, and a window starting past the end is empty.
//! Returned indices always refer to positions in the full haystack, never to
//! window-relative positions.
//!
//! # Examples
//!
//! ```rust
//! use recollect::search::SequenceSearch;
//!
//! let haystack = [1, 2, 3, 1, 2, 3, 2, 3];
//!
//! // First occurrence, whole haystack or a window of it.
//! assert_eq!(haystack.find_seq(&[2, 3]), Some(1));
//! assert_eq!(haystack.find_seq_in(2.., &[2, 3]), Some(4));
//!
//! // All non-overlapping occurrences, in ascending order.
//! let positions: Vec<usize> = haystack.find_seq_iter(&[2, 3]).collect();
//! assert_eq!(positions, [1, 4, 6]);
//! ```

use std::iter::FusedIterator;
use std::ops::{Bound, Range, RangeBounds};

use super::split::SplitSeq;

/// Resolves a `RangeBounds` window against a haystack length, clamping both
/// ends so the result is always a valid, possibly empty, sub-range.
pub(crate) fn clamp_window<R: RangeBounds<usize>>(window: R, length: usize) -> Range<usize> {
    let start = match window.start_bound() {
        Bound::Included(&bound) => bound,
        Bound::Excluded(&bound) => bound.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match window.end_bound() {
        Bound::Included(&bound) => bound.saturating_add(1),
        Bound::Excluded(&bound) => bound,
        Bound::Unbounded => length,
    };
    let start = start.min(length);
    let end = end.clamp(start, length);
    start..end
}

/// Returns the haystack-relative start of the first occurrence of `needle`
/// within `window`, which must already be clamped.
///
/// An empty needle never matches. The scan compares every candidate
/// alignment, so occurrences of self-overlapping needles are never skipped.
pub(crate) fn find_in_window<T: PartialEq>(
    haystack: &[T],
    window: Range<usize>,
    needle: &[T],
) -> Option<usize> {
    if needle.is_empty() || needle.len() > window.len() {
        return None;
    }
    haystack[window.start..window.end]
        .windows(needle.len())
        .position(|candidate| candidate == needle)
        .map(|offset| window.start + offset)
}

/// Searches for occurrences of a needle subsequence inside a slice.
///
/// Implemented for `[T]` where `T: PartialEq`, so the methods are available
/// on slices, arrays, and `Vec`s alike. All operations are read-only: they
/// return indices into, or subslices of, the original haystack and never
/// copy or mutate elements.
///
/// # Examples
///
/// ```rust
/// use recollect::search::SequenceSearch;
///
/// let frames = [0u8, 0xFF, 0xD8, 7, 7, 0xFF, 0xD8, 9];
/// assert_eq!(frames.find_seq(&[0xFF, 0xD8]), Some(1));
/// assert!(frames.contains_seq(&[7, 7]));
/// assert_eq!(frames.find_seq(&[0xFF, 0xD9]), None);
/// ```
pub trait SequenceSearch<T> {
    /// Returns the start index of the first occurrence of `needle`, or
    /// `None` if `needle` does not occur. An empty needle never matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// let haystack = [1, 2, 3, 4, 5, 6];
    /// assert_eq!(haystack.find_seq(&[4, 5, 6]), Some(3));
    /// assert_eq!(haystack.find_seq(&[4, 6]), None);
    /// assert_eq!(haystack.find_seq(&[]), None);
    /// ```
    fn find_seq(&self, needle: &[T]) -> Option<usize>;

    /// Returns the start index of the first occurrence of `needle` within
    /// `window`, or `None`. The returned index refers to the full haystack.
    ///
    /// Window bounds are clamped to the haystack length; out-of-range
    /// windows are empty and never match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// let haystack = [1, 2, 3, 1, 2, 3];
    /// assert_eq!(haystack.find_seq_in(1.., &[1, 2]), Some(3));
    /// assert_eq!(haystack.find_seq_in(1..4, &[1, 2]), None); // match would end at 5
    /// assert_eq!(haystack.find_seq_in(100.., &[1, 2]), None); // clamped to empty
    /// ```
    fn find_seq_in<R: RangeBounds<usize>>(&self, window: R, needle: &[T]) -> Option<usize>;

    /// Returns `true` if `needle` occurs anywhere in the haystack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// assert!([1, 2, 3].contains_seq(&[2, 3]));
    /// assert!(![1, 2, 3].contains_seq(&[3, 2]));
    /// ```
    fn contains_seq(&self, needle: &[T]) -> bool;

    /// Returns an iterator over the start indices of all non-overlapping
    /// occurrences of `needle`, in ascending order. After a match at `p`,
    /// the scan resumes at `p + needle.len()`.
    ///
    /// The iterator is lazy, fused, and restartable via [`Clone`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// let haystack = [7, 7, 7, 7, 7];
    /// let positions: Vec<usize> = haystack.find_seq_iter(&[7, 7]).collect();
    /// assert_eq!(positions, [0, 2]); // non-overlapping: 5th element unpaired
    /// ```
    fn find_seq_iter<'n>(&self, needle: &'n [T]) -> FindSeq<'_, 'n, T>;

    /// Returns an iterator over the start indices of all non-overlapping
    /// occurrences of `needle` within `window` (clamped), in ascending
    /// order. Indices refer to the full haystack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// let haystack = [1, 2, 1, 2, 1, 2];
    /// let positions: Vec<usize> = haystack.find_seq_iter_in(1..5, &[2, 1]).collect();
    /// assert_eq!(positions, [1, 3]);
    /// ```
    fn find_seq_iter_in<'n, R: RangeBounds<usize>>(
        &self,
        window: R,
        needle: &'n [T],
    ) -> FindSeq<'_, 'n, T>;

    /// Returns an iterator over the segments of the haystack delimited by
    /// non-overlapping occurrences of `needle`. A haystack containing `n`
    /// occurrences yields exactly `n + 1` segments; empty segments between
    /// adjacent, leading, or trailing delimiters are preserved.
    ///
    /// When `needle` does not occur at all, the single yielded segment is
    /// the haystack itself (the identical subslice, not a copy).
    ///
    /// # Panics
    ///
    /// Panics if `needle` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// let haystack = [1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4];
    /// let segments: Vec<&[i32]> = haystack.split_seq(&[4, 1]).collect();
    /// assert_eq!(segments, [&[1, 2, 3][..], &[2, 3][..], &[2, 3, 4][..]]);
    /// ```
    fn split_seq<'n>(&self, needle: &'n [T]) -> SplitSeq<'_, 'n, T>;

    /// Returns an iterator over the segments of `window` (clamped) delimited
    /// by non-overlapping occurrences of `needle`.
    ///
    /// # Panics
    ///
    /// Panics if `needle` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// let haystack = [9, 1, 0, 2, 0, 3, 9];
    /// let segments: Vec<&[i32]> = haystack.split_seq_in(1..6, &[0]).collect();
    /// assert_eq!(segments, [&[1][..], &[2][..], &[3][..]]);
    /// ```
    fn split_seq_in<'n, R: RangeBounds<usize>>(
        &self,
        window: R,
        needle: &'n [T],
    ) -> SplitSeq<'_, 'n, T>;

    /// Splits the haystack around the first occurrence of `needle`,
    /// returning the parts before and after it. Returns `None` when
    /// `needle` does not occur (an empty needle never occurs).
    ///
    /// A match at the very start yields `Some((&[], ..))`: an empty prefix
    /// is a successful match, distinct from `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// let haystack = [1, 2, 3, 4, 5, 6];
    /// let (before, after) = haystack.split_once_seq(&[4, 5, 6]).unwrap();
    /// assert_eq!(before, [1, 2, 3]);
    /// assert!(after.is_empty());
    ///
    /// let (before, _) = haystack.split_once_seq(&[1, 2, 3]).unwrap();
    /// assert!(before.is_empty());
    ///
    /// assert_eq!(haystack.split_once_seq(&[6, 5]), None);
    /// ```
    fn split_once_seq(&self, needle: &[T]) -> Option<(&[T], &[T])>;

    /// Splits `window` (clamped) around the first occurrence of `needle`
    /// inside it. The prefix spans from the window start to the match start;
    /// the suffix spans from the match end to the window end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::search::SequenceSearch;
    ///
    /// let haystack = [1, 2, 3, 4, 5, 6];
    /// let (before, _) = haystack.split_once_seq_in(0.., &[4, 5, 6]).unwrap();
    /// assert_eq!(before, [1, 2, 3]);
    ///
    /// // No occurrence from index 1 onward: None, not an empty prefix.
    /// assert_eq!(haystack.split_once_seq_in(1.., &[1, 2, 3]), None);
    /// ```
    fn split_once_seq_in<R: RangeBounds<usize>>(
        &self,
        window: R,
        needle: &[T],
    ) -> Option<(&[T], &[T])>;
}

impl<T: PartialEq> SequenceSearch<T> for [T] {
    #[inline]
    fn find_seq(&self, needle: &[T]) -> Option<usize> {
        find_in_window(self, 0..self.len(), needle)
    }

    #[inline]
    fn find_seq_in<R: RangeBounds<usize>>(&self, window: R, needle: &[T]) -> Option<usize> {
        find_in_window(self, clamp_window(window, self.len()), needle)
    }

    #[inline]
    fn contains_seq(&self, needle: &[T]) -> bool {
        self.find_seq(needle).is_some()
    }

    #[inline]
    fn find_seq_iter<'n>(&self, needle: &'n [T]) -> FindSeq<'_, 'n, T> {
        FindSeq::new(self, 0..self.len(), needle)
    }

    #[inline]
    fn find_seq_iter_in<'n, R: RangeBounds<usize>>(
        &self,
        window: R,
        needle: &'n [T],
    ) -> FindSeq<'_, 'n, T> {
        FindSeq::new(self, clamp_window(window, self.len()), needle)
    }

    #[inline]
    fn split_seq<'n>(&self, needle: &'n [T]) -> SplitSeq<'_, 'n, T> {
        SplitSeq::new(self, 0..self.len(), needle)
    }

    #[inline]
    fn split_seq_in<'n, R: RangeBounds<usize>>(
        &self,
        window: R,
        needle: &'n [T],
    ) -> SplitSeq<'_, 'n, T> {
        SplitSeq::new(self, clamp_window(window, self.len()), needle)
    }

    #[inline]
    fn split_once_seq(&self, needle: &[T]) -> Option<(&[T], &[T])> {
        self.split_once_seq_in(.., needle)
    }

    fn split_once_seq_in<R: RangeBounds<usize>>(
        &self,
        window: R,
        needle: &[T],
    ) -> Option<(&[T], &[T])> {
        let window = clamp_window(window, self.len());
        let found = find_in_window(self, window.clone(), needle)?;
        Some((
            &self[window.start..found],
            &self[found + needle.len()..window.end],
        ))
    }
}

/// Iterator over the start indices of non-overlapping occurrences of a
/// needle, created by [`SequenceSearch::find_seq_iter`] and
/// [`SequenceSearch::find_seq_iter_in`].
///
/// The `'h` lifetime borrows the haystack and `'n` the needle, so positions
/// collected from the iterator outlive a temporary needle.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FindSeq<'h, 'n, T> {
    haystack: &'h [T],
    needle: &'n [T],
    position: usize,
    end: usize,
}

impl<'h, 'n, T> FindSeq<'h, 'n, T> {
    pub(crate) fn new(haystack: &'h [T], window: Range<usize>, needle: &'n [T]) -> Self {
        Self {
            haystack,
            needle,
            position: window.start,
            end: window.end,
        }
    }
}

impl<T: PartialEq> Iterator for FindSeq<'_, '_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match find_in_window(self.haystack, self.position..self.end, self.needle) {
            Some(found) => {
                self.position = found + self.needle.len();
                Some(found)
            }
            None => {
                self.position = self.end;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.needle.is_empty() {
            return (0, Some(0));
        }
        (0, Some((self.end - self.position) / self.needle.len()))
    }
}

impl<T: PartialEq> FusedIterator for FindSeq<'_, '_, T> {}

impl<T> Clone for FindSeq<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            haystack: self.haystack,
            needle: self.needle,
            position: self.position,
            end: self.end,
        }
    }
}

static_assertions::assert_impl_all!(FindSeq<'static, 'static, u8>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
