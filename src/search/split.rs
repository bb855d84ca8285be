//! Splitting slices on subsequence delimiters.
//!
//! [`SplitSeq`] is the iterator behind
//! [`SequenceSearch::split_seq`](super::SequenceSearch::split_seq) and
//! [`SequenceSearch::split_seq_in`](super::SequenceSearch::split_seq_in).
//! It walks the haystack left to right, yielding the segment before each
//! non-overlapping occurrence of the needle and finally the segment after
//! the last one.
//!
//! Split semantics mirror `str::split`: `n` delimiter occurrences produce
//! exactly `n + 1` segments, and empty segments are preserved rather than
//! collapsed. A leading occurrence yields a leading empty segment, adjacent
//! occurrences yield an empty segment between them, and a trailing
//! occurrence yields a trailing empty segment.
//!
//! # Examples
//!
//! ```rust
//! use recollect::search::SequenceSearch;
//!
//! let haystack = [1, 1, 2, 2, 1, 1, 3];
//! let segments: Vec<&[i32]> = haystack.split_seq(&[1, 1]).collect();
//! assert_eq!(segments, [&[][..], &[2, 2][..], &[3][..]]);
//! ```

use std::iter::FusedIterator;
use std::ops::Range;

use super::sequence::find_in_window;

/// Iterator over the segments of a haystack delimited by a needle
/// subsequence, created by
/// [`SequenceSearch::split_seq`](super::SequenceSearch::split_seq) and
/// [`SequenceSearch::split_seq_in`](super::SequenceSearch::split_seq_in).
///
/// Yields `&'h [T]` subslices of the haystack; the needle borrow (`'n`) only
/// needs to live as long as the iterator itself.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SplitSeq<'h, 'n, T> {
    haystack: &'h [T],
    needle: &'n [T],
    position: usize,
    end: usize,
    finished: bool,
}

impl<'h, 'n, T> SplitSeq<'h, 'n, T> {
    /// Builds a splitter over an already clamped window.
    ///
    /// # Panics
    ///
    /// Panics if `needle` is empty: splitting on an empty delimiter has no
    /// meaningful segment boundaries.
    pub(crate) fn new(haystack: &'h [T], window: Range<usize>, needle: &'n [T]) -> Self {
        assert!(!needle.is_empty(), "cannot split by an empty needle");
        Self {
            haystack,
            needle,
            position: window.start,
            end: window.end,
            finished: false,
        }
    }
}

impl<'h, T: PartialEq> Iterator for SplitSeq<'h, '_, T> {
    type Item = &'h [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match find_in_window(self.haystack, self.position..self.end, self.needle) {
            Some(found) => {
                let segment = &self.haystack[self.position..found];
                self.position = found + self.needle.len();
                Some(segment)
            }
            None => {
                self.finished = true;
                Some(&self.haystack[self.position..self.end])
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        // One trailing segment plus at most one segment per remaining match.
        (1, Some((self.end - self.position) / self.needle.len() + 1))
    }
}

impl<T: PartialEq> FusedIterator for SplitSeq<'_, '_, T> {}

impl<T> Clone for SplitSeq<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            haystack: self.haystack,
            needle: self.needle,
            position: self.position,
            end: self.end,
            finished: self.finished,
        }
    }
}

static_assertions::assert_impl_all!(SplitSeq<'static, 'static, u8>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
