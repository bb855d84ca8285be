//! Reordering triggers for [`MruList`](super::MruList).
//!
//! A trigger decides whether a given operation moves the touched item to the
//! front of the list. Each of the five flags covers one
//! (operation, presence) pair; all five are on by default, which gives the
//! usual most-recently-used behavior. Turning flags off selectively degrades
//! the list toward a plain bounded list.

/// Flag bundle selecting which operations reorder an
/// [`MruList`](super::MruList).
///
/// The flags are plain public booleans; build a value from [`Triggers::ALL`]
/// or [`Triggers::NONE`] and the `with_*` methods, or with a struct literal.
///
/// # Examples
///
/// ```rust
/// use recollect::mru::Triggers;
///
/// // Promote on access only: inserts and sets keep their positions.
/// let access_only = Triggers::NONE.with_item_accessed(true);
/// assert!(access_only.item_accessed);
/// assert!(!access_only.reorders_on_insert());
///
/// let everything = Triggers::default();
/// assert_eq!(everything, Triggers::ALL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triggers {
    /// Inserting an item not yet present moves it to the front.
    pub new_item_inserted: bool,
    /// Inserting an item already present relocates the existing one to the
    /// front instead of duplicating it.
    pub existing_item_inserted: bool,
    /// Setting a slot to an item not yet present moves it to the front.
    pub new_item_set: bool,
    /// Setting a slot to an item already present elsewhere relocates the
    /// existing one to the front.
    pub existing_item_set: bool,
    /// Reading an item through a promoting accessor moves it to the front.
    pub item_accessed: bool,
}

impl Triggers {
    /// Every operation reorders. This is the default.
    pub const ALL: Self = Self {
        new_item_inserted: true,
        existing_item_inserted: true,
        new_item_set: true,
        existing_item_set: true,
        item_accessed: true,
    };

    /// No operation reorders; the list behaves as a plain bounded list.
    pub const NONE: Self = Self {
        new_item_inserted: false,
        existing_item_inserted: false,
        new_item_set: false,
        existing_item_set: false,
        item_accessed: false,
    };

    /// Returns a copy with `new_item_inserted` set to `enabled`.
    #[must_use]
    pub const fn with_new_item_inserted(mut self, enabled: bool) -> Self {
        self.new_item_inserted = enabled;
        self
    }

    /// Returns a copy with `existing_item_inserted` set to `enabled`.
    #[must_use]
    pub const fn with_existing_item_inserted(mut self, enabled: bool) -> Self {
        self.existing_item_inserted = enabled;
        self
    }

    /// Returns a copy with `new_item_set` set to `enabled`.
    #[must_use]
    pub const fn with_new_item_set(mut self, enabled: bool) -> Self {
        self.new_item_set = enabled;
        self
    }

    /// Returns a copy with `existing_item_set` set to `enabled`.
    #[must_use]
    pub const fn with_existing_item_set(mut self, enabled: bool) -> Self {
        self.existing_item_set = enabled;
        self
    }

    /// Returns a copy with `item_accessed` set to `enabled`.
    #[must_use]
    pub const fn with_item_accessed(mut self, enabled: bool) -> Self {
        self.item_accessed = enabled;
        self
    }

    /// Returns `true` if either insert trigger is active, i.e. an insert
    /// must scan for duplicates before placing the item.
    #[must_use]
    pub const fn reorders_on_insert(&self) -> bool {
        self.new_item_inserted || self.existing_item_inserted
    }

    /// Returns `true` if either set trigger is active, i.e. a differing set
    /// relocates instead of overwriting in place.
    #[must_use]
    pub const fn reorders_on_set(&self) -> bool {
        self.new_item_set || self.existing_item_set
    }
}

impl Default for Triggers {
    #[inline]
    fn default() -> Self {
        Self::ALL
    }
}

// =============================================================================
// Tests
// =============================================================================
