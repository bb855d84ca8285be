//! Sequence search over slices.
//!
//! This module generalizes the `str` search family to `[T]`:
//!
//! - [`SequenceSearch`]: find, enumerate, and split on occurrences of a
//!   needle subsequence inside a haystack slice
//! - [`FindSeq`]: lazy iterator over non-overlapping match positions
//! - [`SplitSeq`]: lazy iterator over the segments between matches
//! - [`Zeroed`]: all-zero checks for numeric slices and optional slices
//!
//! # Matching Model
//!
//! Matching is exact and windowed: every candidate alignment inside the
//! (clamped) window is compared, so self-overlapping needles are found
//! wherever they occur. Occurrence enumeration is greedy left-to-right and
//! non-overlapping: after a match the scan resumes immediately past it.
//! There is no needle preprocessing; a search runs in
//! O(window · needle) worst-case time and O(1) space.
//!
//! # Examples
//!
//! ## Finding
//!
//! ```rust
//! use recollect::search::SequenceSearch;
//!
//! let samples = [4i32, 8, 15, 16, 23, 42];
//! assert_eq!(samples.find_seq(&[15, 16]), Some(2));
//! assert_eq!(samples.find_seq_in(3.., &[15, 16]), None);
//! ```
//!
//! ## Splitting
//!
//! ```rust
//! use recollect::search::SequenceSearch;
//!
//! let record = [b'a', 0, 0, b'b', 0, 0, b'c'];
//! let fields: Vec<&[u8]> = record.split_seq(&[0, 0]).collect();
//! assert_eq!(fields, [&[b'a'][..], &[b'b'][..], &[b'c'][..]]);
//! ```
//!
//! ## Zero checks
//!
//! ```rust
//! use recollect::search::Zeroed;
//!
//! let padding = [0u8; 32];
//! assert!(padding.is_zeroed());
//! ```

mod sequence;
mod split;
mod zeroed;

pub use sequence::FindSeq;
pub use sequence::SequenceSearch;
pub use split::SplitSeq;
pub use zeroed::Zeroed;
