//! Most-recently-used list backed by inline storage.

use smallvec::SmallVec;

use super::triggers::Triggers;

/// The smallest capacity an [`MruList`] accepts. With fewer than two slots
/// there is no recency order to maintain.
const MIN_CAPACITY: usize = 2;

/// Number of items stored inline before spilling to the heap.
const INLINE_CAPACITY: usize = 8;

/// A capacity-bounded list that keeps its items in most-recently-used order.
///
/// The front of the list (index `0`) is the most recently used position.
/// Operations covered by an active [`Triggers`] flag move the touched item to
/// the front; when an insertion pushes the length past the capacity, items are
/// evicted from the tail until the length fits again.
///
/// Inserting an item that is already present (under an active insert trigger)
/// relocates the existing occurrence instead of storing a duplicate, so a
/// fully triggered list never holds the same item twice through `insert`,
/// `set`, or `get`. Bulk loading via [`MruList::with_initial`] and untriggered
/// operations do not scan for duplicates.
///
/// # Trigger Dispatch
///
/// | Flag                     | Operation | Effect when active                               |
/// |--------------------------|-----------|--------------------------------------------------|
/// | `new_item_inserted`      | `insert`  | an absent item goes to the front, not to `index` |
/// | `existing_item_inserted` | `insert`  | a present item relocates to the front            |
/// | `new_item_set`           | `set`     | an absent item goes to the front, not to the slot|
/// | `existing_item_set`      | `set`     | a present item relocates to the front            |
/// | `item_accessed`          | `get`     | the read item moves to the front                 |
///
/// When a set trigger applies, the written item is *placed* rather than
/// overwritten: the previous occupant of the slot stays in the list, shifted
/// one position toward the tail (and possibly evicted).
///
/// # Time Complexity
///
/// | Operation          | Complexity                               |
/// |--------------------|------------------------------------------|
/// | `insert`, `set`    | O(n) duplicate scan plus O(n) shift      |
/// | `get`              | O(n) when a promotion happens, else O(1) |
/// | `peek`, `first`    | O(1)                                     |
/// | `remove`           | O(n)                                     |
/// | `contains`         | O(n)                                     |
///
/// Up to eight items are stored inline; longer lists spill to the heap.
///
/// # Examples
///
/// ```rust
/// use recollect::mru::MruList;
///
/// let mut recent = MruList::new(4);
/// recent.insert(0, "notes.txt");
/// recent.insert(1, "todo.md");
/// recent.insert(2, "report.pdf");
///
/// // Re-opening a known file promotes it instead of duplicating it.
/// recent.insert(0, "notes.txt");
/// assert_eq!(recent.as_slice(), ["notes.txt", "report.pdf", "todo.md"]);
///
/// // A promoting read also refreshes recency.
/// assert_eq!(recent.get(2), Some(&"todo.md"));
/// assert_eq!(recent.first(), Some(&"todo.md"));
/// ```
#[derive(Clone)]
pub struct MruList<T: PartialEq> {
    items: SmallVec<[T; INLINE_CAPACITY]>,
    capacity: usize,
    triggers: Triggers,
}

impl<T: PartialEq> MruList<T> {
    /// Creates an empty list bounded by `capacity`, with every trigger
    /// active.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is less than 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let recent: MruList<i32> = MruList::new(8);
    /// assert!(recent.is_empty());
    /// assert_eq!(recent.capacity(), 8);
    /// assert_eq!(recent.triggers(), Triggers::ALL);
    /// ```
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_triggers(capacity, Triggers::ALL)
    }

    /// Creates an empty list bounded by `capacity` with the given trigger
    /// set.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is less than 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let mut plain = MruList::with_triggers(3, Triggers::NONE);
    /// plain.insert(0, 'a');
    /// plain.insert(1, 'b');
    /// plain.insert(1, 'a');
    ///
    /// // Without triggers nothing scans or promotes, duplicates included.
    /// assert_eq!(plain.as_slice(), ['a', 'a', 'b']);
    /// ```
    #[must_use]
    pub fn with_triggers(capacity: usize, triggers: Triggers) -> Self {
        assert!(
            capacity >= MIN_CAPACITY,
            "capacity (is {capacity}) should be at least 2"
        );
        Self {
            items: SmallVec::new(),
            capacity,
            triggers,
        }
    }

    /// Creates a list bounded by `capacity` and loads it from `initial` in
    /// iteration order, front first.
    ///
    /// Loading is a plain bulk operation: no trigger fires, no duplicate scan
    /// runs, and items beyond the capacity are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is less than 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let recent = MruList::with_initial(3, Triggers::ALL, [1, 2, 3, 4, 5]);
    /// assert_eq!(recent.as_slice(), [1, 2, 3]);
    /// ```
    #[must_use]
    pub fn with_initial<I>(capacity: usize, triggers: Triggers, initial: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::with_triggers(capacity, triggers);
        list.items.extend(initial.into_iter().take(capacity));
        list
    }

    /// Returns the number of items currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the bound on the number of items.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the active trigger set.
    #[inline]
    #[must_use]
    pub const fn triggers(&self) -> Triggers {
        self.triggers
    }

    /// Rebounds the list to `capacity`, evicting from the tail if the current
    /// length no longer fits.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is less than 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let mut recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3, 4]);
    /// recent.set_capacity(2);
    /// assert_eq!(recent.as_slice(), [1, 2]);
    /// assert_eq!(recent.capacity(), 2);
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) {
        assert!(
            capacity >= MIN_CAPACITY,
            "capacity (is {capacity}) should be at least 2"
        );
        self.capacity = capacity;
        self.trim_excess();
    }

    /// Inserts `item` at `index`, subject to the insert triggers.
    ///
    /// With neither insert trigger active this is a plain positional insert.
    /// Otherwise the list is scanned for an item equal to `item` first:
    ///
    /// - present and `existing_item_inserted`: the occurrence relocates to
    ///   the front;
    /// - present otherwise: the occurrence is removed and `item` lands at
    ///   `index`, which must still be in bounds for the shrunken list;
    /// - absent and `new_item_inserted`: `item` goes to the front;
    /// - absent otherwise: `item` lands at `index`.
    ///
    /// Any insertion that pushes the length past the capacity evicts from the
    /// tail.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the length, or, after a duplicate
    /// was removed, greater than the shortened length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::MruList;
    ///
    /// let mut recent = MruList::new(3);
    /// recent.insert(0, 1);
    /// recent.insert(1, 2);
    /// recent.insert(2, 3);
    ///
    /// // New items go to the front regardless of the requested index.
    /// assert_eq!(recent.as_slice(), [3, 2, 1]);
    ///
    /// // An existing item is promoted, not duplicated.
    /// recent.insert(0, 2);
    /// assert_eq!(recent.as_slice(), [2, 3, 1]);
    ///
    /// // A full list evicts its least recently used tail.
    /// recent.insert(0, 4);
    /// assert_eq!(recent.as_slice(), [4, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) {
        assert!(
            index <= self.items.len(),
            "insertion index (is {index}) should be <= len (is {len})",
            len = self.items.len()
        );
        if self.triggers.reorders_on_insert() {
            self.place(
                index,
                item,
                self.triggers.new_item_inserted,
                self.triggers.existing_item_inserted,
            );
        } else {
            self.items.insert(index, item);
            self.trim_excess();
        }
    }

    /// Writes `item` into the slot at `index`, subject to the set triggers.
    ///
    /// Writing an item equal to the slot's current occupant is a no-op and
    /// never reorders. With neither set trigger active a differing write
    /// overwrites the slot in place. Otherwise the write is dispatched like
    /// an insertion at `index` under the set flags, so the previous occupant
    /// stays in the list, shifted toward the tail.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let mut recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);
    ///
    /// // A new item placed through `set` goes to the front; the old slot
    /// // occupant survives one position further back.
    /// recent.set(1, 9);
    /// assert_eq!(recent.as_slice(), [9, 1, 2, 3]);
    ///
    /// // Setting an item that exists elsewhere relocates it.
    /// recent.set(3, 2);
    /// assert_eq!(recent.as_slice(), [2, 9, 1, 3]);
    /// ```
    pub fn set(&mut self, index: usize, item: T) {
        assert!(
            index < self.items.len(),
            "index out of bounds: the len is {len} but the index is {index}",
            len = self.items.len()
        );
        if self.items[index] == item {
            return;
        }
        if self.triggers.reorders_on_set() {
            self.place(
                index,
                item,
                self.triggers.new_item_set,
                self.triggers.existing_item_set,
            );
        } else {
            self.items[index] = item;
        }
    }

    /// Places `item` after scanning for a duplicate, honoring the
    /// promote-to-front flags of the calling operation.
    fn place(&mut self, index: usize, item: T, promote_new: bool, promote_existing: bool) {
        match self.position(&item) {
            Some(occupied) => {
                self.items.remove(occupied);
                if promote_existing {
                    self.items.insert(0, item);
                } else {
                    let len = self.items.len();
                    assert!(
                        index <= len,
                        "insertion index (is {index}) should be <= len (is {len})"
                    );
                    self.items.insert(index, item);
                }
            }
            None => {
                if promote_new {
                    self.items.insert(0, item);
                } else {
                    self.items.insert(index, item);
                }
            }
        }
        self.trim_excess();
    }

    /// Returns a reference to the item at `index`, promoting it to the front
    /// first when the `item_accessed` trigger is active.
    ///
    /// After a promoting read the returned reference points at index `0`.
    /// Use [`MruList::peek`] to read without disturbing the order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::MruList;
    ///
    /// let mut recent = MruList::new(3);
    /// recent.insert(0, 10);
    /// recent.insert(0, 20);
    /// recent.insert(0, 30);
    ///
    /// assert_eq!(recent.get(2), Some(&10));
    /// assert_eq!(recent.as_slice(), [10, 30, 20]);
    /// assert_eq!(recent.get(5), None);
    /// ```
    pub fn get(&mut self, index: usize) -> Option<&T> {
        if index >= self.items.len() {
            return None;
        }
        if self.triggers.item_accessed && index != 0 {
            let item = self.items.remove(index);
            self.items.insert(0, item);
            self.items.first()
        } else {
            self.items.get(index)
        }
    }

    /// Returns a reference to the item at `index` without reordering,
    /// whatever the triggers say.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let recent = MruList::with_initial(3, Triggers::ALL, ['a', 'b']);
    /// assert_eq!(recent.peek(1), Some(&'b'));
    /// assert_eq!(recent.as_slice(), ['a', 'b']);
    /// assert_eq!(recent.peek(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn peek(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Removes and returns the item at `index`, or `None` if `index` is out
    /// of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let mut recent = MruList::with_initial(3, Triggers::ALL, [1, 2]);
    /// assert_eq!(recent.remove(1), Some(2));
    /// assert_eq!(recent.remove(1), None);
    /// assert_eq!(recent.as_slice(), [1]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Drops every item, keeping the capacity and triggers.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns `true` if some held item equals `item`.
    #[inline]
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Returns the index of the first item equal to `item`, front first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let recent = MruList::with_initial(4, Triggers::ALL, ['x', 'y']);
    /// assert_eq!(recent.position(&'y'), Some(1));
    /// assert_eq!(recent.position(&'z'), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Returns the most recently used item.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the least recently used item, the next eviction candidate.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Views the items as a slice, most recently used first.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the items from most to least recently used, without
    /// reordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::mru::{MruList, Triggers};
    ///
    /// let recent = MruList::with_initial(3, Triggers::ALL, [1, 2, 3]);
    /// let doubled: Vec<i32> = recent.iter().map(|value| value * 2).collect();
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    #[inline]
    pub fn iter(&self) -> MruListIterator<'_, T> {
        MruListIterator {
            inner: self.items.iter(),
        }
    }

    /// Evicts from the tail until the length fits the capacity.
    fn trim_excess(&mut self) {
        self.items.truncate(self.capacity);
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: PartialEq + std::fmt::Debug> std::fmt::Debug for MruList<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Equality compares the held items and their order only; capacity and
/// triggers are configuration, not content.
impl<T: PartialEq> PartialEq for MruList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for MruList<T> {}

/// Feeds each item through a triggered insertion at the tail.
///
/// With the default triggers extended items therefore arrive at the front,
/// newest last. With [`Triggers::NONE`] on a full list, appended items are
/// themselves the first evicted.
impl<T: PartialEq> Extend<T> for MruList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for item in iterable {
            self.insert(self.items.len(), item);
        }
    }
}

impl<'a, T: PartialEq> IntoIterator for &'a MruList<T> {
    type Item = &'a T;
    type IntoIter = MruListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> IntoIterator for MruList<T> {
    type Item = T;
    type IntoIter = MruListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        MruListIntoIterator {
            inner: self.items.into_iter(),
        }
    }
}

/// Borrowing iterator over an [`MruList`], most recently used first.
///
/// Created by [`MruList::iter`].
#[derive(Debug, Clone)]
pub struct MruListIterator<'a, T: PartialEq> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T: PartialEq> Iterator for MruListIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: PartialEq> ExactSizeIterator for MruListIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: PartialEq> std::iter::FusedIterator for MruListIterator<'_, T> {}

/// Owning iterator over an [`MruList`], most recently used first.
///
/// Created by the [`IntoIterator`] implementation on [`MruList`].
#[derive(Debug)]
pub struct MruListIntoIterator<T: PartialEq> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T: PartialEq> Iterator for MruListIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: PartialEq> ExactSizeIterator for MruListIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: PartialEq> std::iter::FusedIterator for MruListIntoIterator<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
const MRU_LIST_FIELDS: &[&str] = &["capacity", "triggers", "items"];

#[cfg(feature = "serde")]
impl<T> serde::Serialize for MruList<T>
where
    T: PartialEq + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("MruList", 3)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("triggers", &self.triggers)?;
        state.serialize_field("items", self.as_slice())?;
        state.end()
    }
}

#[cfg(feature = "serde")]
enum MruListField {
    Capacity,
    Triggers,
    Items,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MruListField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FieldVisitor;

        impl serde::de::Visitor<'_> for FieldVisitor {
            type Value = MruListField;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("`capacity`, `triggers`, or `items`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "capacity" => Ok(MruListField::Capacity),
                    "triggers" => Ok(MruListField::Triggers),
                    "items" => Ok(MruListField::Items),
                    _ => Err(serde::de::Error::unknown_field(value, MRU_LIST_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

/// Rejects capacities below the minimum and tail-truncates item overflow, so
/// a decoded list always satisfies the length invariant.
#[cfg(feature = "serde")]
fn rebuild_deserialized<T, E>(
    capacity: usize,
    triggers: Triggers,
    items: Vec<T>,
) -> Result<MruList<T>, E>
where
    T: PartialEq,
    E: serde::de::Error,
{
    if capacity < MIN_CAPACITY {
        return Err(E::invalid_value(
            serde::de::Unexpected::Unsigned(capacity as u64),
            &"a capacity of at least 2",
        ));
    }
    Ok(MruList::with_initial(capacity, triggers, items))
}

#[cfg(feature = "serde")]
struct MruListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> MruListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for MruListVisitor<T>
where
    T: PartialEq + serde::Deserialize<'de>,
{
    type Value = MruList<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a struct with capacity, triggers, and items")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
        let triggers = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
        let items = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(2, &self))?;
        rebuild_deserialized(capacity, triggers, items)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut capacity: Option<usize> = None;
        let mut triggers: Option<Triggers> = None;
        let mut items: Option<Vec<T>> = None;
        while let Some(field) = map.next_key()? {
            match field {
                MruListField::Capacity => {
                    if capacity.is_some() {
                        return Err(serde::de::Error::duplicate_field("capacity"));
                    }
                    capacity = Some(map.next_value()?);
                }
                MruListField::Triggers => {
                    if triggers.is_some() {
                        return Err(serde::de::Error::duplicate_field("triggers"));
                    }
                    triggers = Some(map.next_value()?);
                }
                MruListField::Items => {
                    if items.is_some() {
                        return Err(serde::de::Error::duplicate_field("items"));
                    }
                    items = Some(map.next_value()?);
                }
            }
        }
        let capacity = capacity.ok_or_else(|| serde::de::Error::missing_field("capacity"))?;
        let triggers = triggers.unwrap_or_default();
        let items = items.ok_or_else(|| serde::de::Error::missing_field("items"))?;
        rebuild_deserialized(capacity, triggers, items)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for MruList<T>
where
    T: PartialEq + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct("MruList", MRU_LIST_FIELDS, MruListVisitor::new())
    }
}

// =============================================================================
// Static Assertions
// =============================================================================

static_assertions::assert_impl_all!(MruList<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(MruList<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(MruListIterator<'static, i32>: Send, Sync);
static_assertions::assert_impl_all!(MruListIntoIterator<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn serializes_capacity_triggers_and_items() {
        let recent = MruList::with_initial(3, Triggers::ALL, [1, 2]);
        let json = serde_json::to_string(&recent).unwrap();
        assert!(json.contains("\"capacity\":3"));
        assert!(json.contains("\"items\":[1,2]"));
    }

    #[rstest]
    fn roundtrips_through_json() {
        let recent = MruList::with_initial(3, Triggers::NONE, [1, 2, 3]);
        let json = serde_json::to_string(&recent).unwrap();
        let decoded: MruList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.as_slice(), [1, 2, 3]);
        assert_eq!(decoded.capacity(), 3);
        assert_eq!(decoded.triggers(), Triggers::NONE);
    }

    #[rstest]
    fn missing_triggers_default_to_all() {
        let decoded: MruList<i32> =
            serde_json::from_str(r#"{"capacity":4,"items":[7]}"#).unwrap();
        assert_eq!(decoded.triggers(), Triggers::ALL);
        assert_eq!(decoded.as_slice(), [7]);
    }

    #[rstest]
    fn rejects_deserialized_capacity_below_two() {
        let error =
            serde_json::from_str::<MruList<i32>>(r#"{"capacity":1,"items":[]}"#).unwrap_err();
        assert!(error.to_string().contains("a capacity of at least 2"));
    }

    #[rstest]
    fn truncates_deserialized_items_beyond_capacity() {
        let decoded: MruList<i32> =
            serde_json::from_str(r#"{"capacity":2,"items":[1,2,3,4]}"#).unwrap();
        assert_eq!(decoded.as_slice(), [1, 2]);
    }
}
