//! # recollect
//!
//! Subsequence search and most-recently-used collections for Rust.
//!
//! ## Overview
//!
//! This library provides two small, independent facilities that the standard
//! library stops short of:
//!
//! - **Sequence search**: find, enumerate, and split on occurrences of a
//!   subsequence inside a slice of any equality-comparable element type
//!   (the `[T]` counterpart of `str::find`/`str::split`/`str::split_once`),
//!   plus all-zero checks for numeric slices.
//! - **MRU collections**: [`MruList`](mru::MruList), a capacity-bounded list
//!   that keeps its most recently touched item at the front, with
//!   configurable [`Triggers`](mru::Triggers) deciding which operations
//!   (insert, set, access) cause reordering.
//!
//! ## Feature Flags
//!
//! - `search`: the sequence-search engine (default)
//! - `mru`: the most-recently-used list (default)
//! - `serde`: serialization support for the MRU list
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use recollect::prelude::*;
//!
//! // Subsequence search over any slice of comparable elements.
//! let readings = [1, 2, 3, 4, 1, 2, 3, 4];
//! assert_eq!(readings.find_seq(&[3, 4]), Some(2));
//! let segments: Vec<&[i32]> = readings.split_seq(&[4]).collect();
//! assert_eq!(segments, [&[1, 2, 3][..], &[1, 2, 3][..], &[][..]]);
//!
//! // A recency-ordered list: touched items move to the front.
//! let mut recent_files = MruList::new(4);
//! recent_files.insert(0, "notes.txt");
//! recent_files.insert(0, "todo.md");
//! recent_files.insert(1, "notes.txt"); // already present: promoted, not duplicated
//! assert_eq!(recent_files.first(), Some(&"notes.txt"));
//! assert_eq!(recent_files.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use recollect::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "search")]
    pub use crate::search::*;

    #[cfg(feature = "mru")]
    pub use crate::mru::*;
}

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "mru")]
pub mod mru;
