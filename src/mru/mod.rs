//! Most-recently-used collections.
//!
//! This module provides [`MruList`], a capacity-bounded list that keeps its
//! items ordered by recency of use, and [`Triggers`], the flag bundle that
//! decides which operations count as "use".
//!
//! # Overview
//!
//! The front of an `MruList` (index `0`) holds the most recently used item;
//! the tail holds the next eviction candidate. Three mechanisms maintain the
//! order:
//!
//! - **Promotion**: operations covered by an active trigger move the touched
//!   item to the front.
//! - **Relocation**: inserting or setting an item that is already present
//!   moves the existing occurrence instead of storing a duplicate.
//! - **Eviction**: whenever an insertion pushes the length past the
//!   capacity, items fall off the tail until the length fits.
//!
//! Reads come in two flavors: [`MruList::get`] counts as use and promotes
//! when the `item_accessed` trigger is active, while [`MruList::peek`] never
//! reorders.
//!
//! # Examples
//!
//! A recently-opened-files list that never grows past four entries:
//!
//! ```rust
//! use recollect::mru::MruList;
//!
//! let mut recent = MruList::new(4);
//! for file in ["a.rs", "b.rs", "c.rs", "d.rs"] {
//!     recent.insert(0, file);
//! }
//! assert_eq!(recent.as_slice(), ["d.rs", "c.rs", "b.rs", "a.rs"]);
//!
//! // Opening a fifth file evicts the least recently used one.
//! recent.insert(0, "e.rs");
//! assert_eq!(recent.as_slice(), ["e.rs", "d.rs", "c.rs", "b.rs"]);
//!
//! // Re-opening a known file just refreshes its recency.
//! recent.insert(0, "b.rs");
//! assert_eq!(recent.as_slice(), ["b.rs", "e.rs", "d.rs", "c.rs"]);
//! ```
//!
//! Trigger selection tunes the behavior anywhere between a true MRU cache
//! and a plain bounded list:
//!
//! ```rust
//! use recollect::mru::{MruList, Triggers};
//!
//! // Only explicit reads refresh recency; placement is positional.
//! let triggers = Triggers::NONE.with_item_accessed(true);
//! let mut recent = MruList::with_initial(4, triggers, [10, 20, 30]);
//!
//! assert_eq!(recent.get(1), Some(&20));
//! assert_eq!(recent.as_slice(), [20, 10, 30]);
//! ```

mod list;
mod triggers;

pub use list::MruList;
pub use list::MruListIntoIterator;
pub use list::MruListIterator;
pub use triggers::Triggers;
