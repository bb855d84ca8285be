//! Unit tests for the most-recently-used list.
//!
//! The insert and set dispatch tables are exercised exhaustively over the
//! reachable (trigger flags, item presence) combinations, alongside the
//! promotion, eviction, and removal behavior.

#![cfg(feature = "mru")]

use recollect::mru::{MruList, Triggers};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_list_is_empty_with_all_triggers() {
    let recent: MruList<i32> = MruList::new(4);
    assert!(recent.is_empty());
    assert_eq!(recent.len(), 0);
    assert_eq!(recent.capacity(), 4);
    assert_eq!(recent.triggers(), Triggers::ALL);
}

#[rstest]
fn test_minimum_capacity_is_accepted() {
    let recent: MruList<i32> = MruList::new(2);
    assert_eq!(recent.capacity(), 2);
}

#[rstest]
#[should_panic(expected = "capacity (is 1) should be at least 2")]
fn test_capacity_of_one_is_rejected() {
    let _ = MruList::<i32>::new(1);
}

#[rstest]
fn test_initial_items_load_in_order_without_reordering() {
    let recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);
    assert_eq!(recent.as_slice(), [1, 2, 3]);
}

#[rstest]
fn test_initial_items_beyond_capacity_are_dropped() {
    let recent = MruList::with_initial(2, Triggers::ALL, [1, 2, 3, 4]);
    assert_eq!(recent.as_slice(), [1, 2]);
}

#[rstest]
fn test_initial_load_keeps_duplicates() {
    let recent = MruList::with_initial(4, Triggers::ALL, [1, 1, 2]);
    assert_eq!(recent.as_slice(), [1, 1, 2]);
}

// =============================================================================
// Insert Dispatch
// =============================================================================

// All reachable (trigger flags, presence) pairs for `insert`, starting from
// [1, 2, 3] with capacity 5 and inserting at index 2. Item 2 is already
// present (at index 1); item 9 is new.
#[rstest]
#[case::no_triggers_present(false, false, 2, &[1, 2, 2, 3])]
#[case::no_triggers_absent(false, false, 9, &[1, 2, 9, 3])]
#[case::promote_new_only_present(true, false, 2, &[1, 3, 2])]
#[case::promote_new_only_absent(true, false, 9, &[9, 1, 2, 3])]
#[case::promote_existing_only_present(false, true, 2, &[2, 1, 3])]
#[case::promote_existing_only_absent(false, true, 9, &[1, 2, 9, 3])]
#[case::both_triggers_present(true, true, 2, &[2, 1, 3])]
#[case::both_triggers_absent(true, true, 9, &[9, 1, 2, 3])]
fn test_insert_dispatch(
    #[case] new_item_inserted: bool,
    #[case] existing_item_inserted: bool,
    #[case] item: i32,
    #[case] expected: &[i32],
) {
    let triggers = Triggers::NONE
        .with_new_item_inserted(new_item_inserted)
        .with_existing_item_inserted(existing_item_inserted);
    let mut recent = MruList::with_initial(5, triggers, [1, 2, 3]);

    recent.insert(2, item);
    assert_eq!(recent.as_slice(), expected);
}

#[rstest]
fn test_triggered_duplicate_insert_never_grows_the_list() {
    let mut recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);

    recent.insert(0, 3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent.as_slice(), [3, 1, 2]);
}

#[rstest]
fn test_untriggered_insert_respects_the_requested_index() {
    let mut recent = MruList::with_initial(5, Triggers::NONE, [1, 2, 3]);

    recent.insert(1, 9);
    assert_eq!(recent.as_slice(), [1, 9, 2, 3]);
}

// =============================================================================
// Set Dispatch
// =============================================================================

// All reachable (trigger flags, presence) pairs for `set`, starting from
// [1, 2, 3] with capacity 5 and writing slot 2 (which holds 3). Item 1 is
// already present elsewhere; item 9 is new.
#[rstest]
#[case::no_triggers_absent(false, false, 9, &[1, 2, 9])]
#[case::no_triggers_present(false, false, 1, &[1, 2, 1])]
#[case::promote_new_only_absent(true, false, 9, &[9, 1, 2, 3])]
#[case::promote_new_only_present(true, false, 1, &[2, 3, 1])]
#[case::promote_existing_only_absent(false, true, 9, &[1, 2, 9, 3])]
#[case::promote_existing_only_present(false, true, 1, &[1, 2, 3])]
#[case::both_triggers_absent(true, true, 9, &[9, 1, 2, 3])]
#[case::both_triggers_present(true, true, 1, &[1, 2, 3])]
fn test_set_dispatch(
    #[case] new_item_set: bool,
    #[case] existing_item_set: bool,
    #[case] item: i32,
    #[case] expected: &[i32],
) {
    let triggers = Triggers::NONE
        .with_new_item_set(new_item_set)
        .with_existing_item_set(existing_item_set);
    let mut recent = MruList::with_initial(5, triggers, [1, 2, 3]);

    recent.set(2, item);
    assert_eq!(recent.as_slice(), expected);
}

#[rstest]
fn test_setting_the_current_occupant_is_a_no_op() {
    let mut recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);

    recent.set(2, 3);
    assert_eq!(recent.as_slice(), [1, 2, 3]);
}

// =============================================================================
// Promoting Reads
// =============================================================================

#[rstest]
fn test_get_promotes_the_read_item() {
    let mut recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);

    assert_eq!(recent.get(2), Some(&3));
    assert_eq!(recent.as_slice(), [3, 1, 2]);
}

#[rstest]
fn test_get_without_the_access_trigger_reads_in_place() {
    let triggers = Triggers::ALL.with_item_accessed(false);
    let mut recent = MruList::with_initial(4, triggers, [1, 2, 3]);

    assert_eq!(recent.get(2), Some(&3));
    assert_eq!(recent.as_slice(), [1, 2, 3]);
}

#[rstest]
fn test_get_out_of_bounds_is_none() {
    let mut recent = MruList::with_initial(4, Triggers::ALL, [1, 2]);
    assert_eq!(recent.get(2), None);
}

#[rstest]
fn test_peek_never_reorders() {
    let recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);

    assert_eq!(recent.peek(2), Some(&3));
    assert_eq!(recent.peek(9), None);
    assert_eq!(recent.as_slice(), [1, 2, 3]);
}

// =============================================================================
// Eviction
// =============================================================================

#[rstest]
fn test_inserting_into_a_full_list_evicts_the_tail() {
    let mut recent = MruList::with_initial(3, Triggers::ALL, [1, 2, 3]);

    recent.insert(0, 4);
    assert_eq!(recent.as_slice(), [4, 1, 2]);
    assert_eq!(recent.len(), 3);
}

#[rstest]
fn test_setting_a_new_item_into_a_full_list_evicts_the_tail() {
    let mut recent = MruList::with_initial(3, Triggers::ALL, [1, 2, 3]);

    recent.set(0, 4);
    assert_eq!(recent.as_slice(), [4, 1, 2]);
}

#[rstest]
fn test_shrinking_the_capacity_evicts_least_recently_used_items() {
    let mut recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3, 4]);

    recent.set_capacity(2);
    assert_eq!(recent.as_slice(), [1, 2]);
}

#[rstest]
fn test_growing_the_capacity_keeps_all_items() {
    let mut recent = MruList::with_initial(2, Triggers::ALL, [1, 2]);

    recent.set_capacity(5);
    assert_eq!(recent.as_slice(), [1, 2]);
    assert_eq!(recent.capacity(), 5);
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
fn test_remove_returns_the_item_and_closes_the_gap() {
    let mut recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);

    assert_eq!(recent.remove(1), Some(2));
    assert_eq!(recent.as_slice(), [1, 3]);
}

#[rstest]
fn test_remove_out_of_bounds_is_none() {
    let mut recent = MruList::with_initial(4, Triggers::ALL, [1]);
    assert_eq!(recent.remove(1), None);
}

#[rstest]
fn test_clear_keeps_the_configuration() {
    let mut recent = MruList::with_initial(4, Triggers::NONE, [1, 2, 3]);

    recent.clear();
    assert!(recent.is_empty());
    assert_eq!(recent.capacity(), 4);
    assert_eq!(recent.triggers(), Triggers::NONE);
}

// =============================================================================
// Views and Iteration
// =============================================================================

#[rstest]
fn test_first_and_last_bracket_the_recency_order() {
    let mut recent = MruList::new(3);
    recent.insert(0, 1);
    recent.insert(0, 2);
    recent.insert(0, 3);

    assert_eq!(recent.first(), Some(&3));
    assert_eq!(recent.last(), Some(&1));
}

#[rstest]
fn test_contains_and_position_search_without_promoting() {
    let recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);

    assert!(recent.contains(&3));
    assert_eq!(recent.position(&3), Some(2));
    assert_eq!(recent.position(&9), None);
    assert_eq!(recent.as_slice(), [1, 2, 3]);
}

#[rstest]
fn test_borrowing_iteration_walks_front_to_tail() {
    let recent = MruList::with_initial(4, Triggers::ALL, [1, 2, 3]);

    let collected: Vec<&i32> = recent.iter().collect();
    assert_eq!(collected, [&1, &2, &3]);

    let referenced: Vec<&i32> = (&recent).into_iter().collect();
    assert_eq!(referenced, collected);
}

// =============================================================================
// Workload Scenario
// =============================================================================

#[rstest]
fn test_recently_touched_distinct_item_stays_in_front() {
    let mut recent = MruList::new(3);

    recent.insert(0, "alpha");
    recent.insert(0, "beta");
    assert_eq!(recent.first(), Some(&"beta"));

    recent.insert(0, "gamma");
    recent.insert(0, "alpha");
    assert_eq!(recent.first(), Some(&"alpha"));
    assert_eq!(recent.as_slice(), ["alpha", "gamma", "beta"]);

    assert_eq!(recent.get(2), Some(&"beta"));
    assert_eq!(recent.first(), Some(&"beta"));

    recent.set(1, "delta");
    assert_eq!(recent.first(), Some(&"delta"));
    assert_eq!(recent.len(), 3);
}
