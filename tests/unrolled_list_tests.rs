//! Unit tests for UnrolledList.
//!
//! These tests verify the correctness of the UnrolledList implementation:
//! construction, queries, mutation-as-construction operations, iteration,
//! and the std/typeclass trait surface.

use unrolled::persistent::{DEFAULT_CHUNK_CAPACITY, UnrolledList, ZeroChunkCapacity};
use unrolled::typeclass::{Foldable, Functor, Monoid, Semigroup};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: UnrolledList<i32> = UnrolledList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.head(), None);
    assert_eq!(list.chunk_capacity(), DEFAULT_CHUNK_CAPACITY);
}

#[rstest]
fn test_with_chunk_capacity_sets_capacity() {
    let list: UnrolledList<i32> = UnrolledList::with_chunk_capacity(7);
    assert!(list.is_empty());
    assert_eq!(list.chunk_capacity(), 7);
}

#[rstest]
fn test_try_with_chunk_capacity_zero_fails() {
    let result: Result<UnrolledList<i32>, ZeroChunkCapacity> =
        UnrolledList::try_with_chunk_capacity(0);
    assert_eq!(result, Err(ZeroChunkCapacity));
}

#[rstest]
fn test_singleton_creates_single_element_list() {
    let list = UnrolledList::singleton(42);
    assert_eq!(list.head(), Some(&42));
    assert_eq!(list.len(), 1);
}

#[rstest]
fn test_from_slice_preserves_order() {
    let list = UnrolledList::from_slice(&[1, 2, 3, 4, 5]);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.len(), 5);
}

#[rstest]
#[case::capacity_one(1)]
#[case::capacity_two(2)]
#[case::capacity_three(3)]
#[case::capacity_larger_than_input(100)]
fn test_from_slice_round_trips_at_any_capacity(#[case] capacity: usize) {
    let elements = vec![1, 2, 3, 4, 5, 6, 7];
    let list = UnrolledList::from_slice_with_capacity(&elements, capacity);
    assert_eq!(list.to_vec(), elements);
    assert_eq!(list.len(), elements.len());
    assert_eq!(list.chunk_capacity(), capacity);
}

#[rstest]
fn test_from_slice_empty_input_yields_empty_list() {
    let list: UnrolledList<i32> = UnrolledList::from_slice_with_capacity(&[], 3);
    assert!(list.is_empty());
    assert_eq!(list.chunk_capacity(), 3);
}

#[rstest]
fn test_from_iter_collects_in_order() {
    let list: UnrolledList<i32> = (1..=5).collect();
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.chunk_capacity(), DEFAULT_CHUNK_CAPACITY);
}

// =============================================================================
// cons
// =============================================================================

#[rstest]
fn test_cons_adds_element_to_front() {
    let list = UnrolledList::new().cons(1);
    assert_eq!(list.head(), Some(&1));
    assert_eq!(list.len(), 1);
}

#[rstest]
fn test_cons_chain_builds_list_in_reverse_order() {
    let list = UnrolledList::new().cons(3).cons(2).cons(1);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_cons_does_not_modify_original() {
    let list1 = UnrolledList::new().cons(1);
    let list2 = list1.cons(2);
    assert_eq!(list1.len(), 1);
    assert_eq!(list1.head(), Some(&1));
    assert_eq!(list2.len(), 2);
    assert_eq!(list2.head(), Some(&2));
}

#[rstest]
fn test_cons_past_full_head_keeps_all_elements() {
    // Default capacity 4: the fifth cons starts a fresh head node.
    let list = (0..10).fold(UnrolledList::new(), |list, index| list.cons(index));
    assert_eq!(list.to_vec(), vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(list.len(), 10);
}

#[rstest]
fn test_cons_preserves_chunk_capacity() {
    let list = UnrolledList::with_chunk_capacity(2).cons(1).cons(2).cons(3);
    assert_eq!(list.chunk_capacity(), 2);
    assert_eq!(list.to_vec(), vec![3, 2, 1]);
}

// =============================================================================
// tail / uncons
// =============================================================================

#[rstest]
fn test_tail_of_non_empty_list() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let tail = list.tail();
    assert_eq!(tail.to_vec(), vec![2, 3]);
}

#[rstest]
fn test_tail_of_empty_list_is_empty() {
    let list: UnrolledList<i32> = UnrolledList::new();
    assert!(list.tail().is_empty());
}

#[rstest]
fn test_tail_crosses_node_boundary() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 1);
    assert_eq!(list.tail().to_vec(), vec![2, 3]);
    assert_eq!(list.tail().tail().to_vec(), vec![3]);
    assert!(list.tail().tail().tail().is_empty());
}

#[rstest]
fn test_uncons_non_empty() {
    let list = UnrolledList::from_slice(&[1, 2]);
    let (head, tail) = list.uncons().unwrap();
    assert_eq!(*head, 1);
    assert_eq!(tail.to_vec(), vec![2]);
}

#[rstest]
fn test_uncons_empty() {
    let list: UnrolledList<i32> = UnrolledList::new();
    assert!(list.uncons().is_none());
}

// =============================================================================
// get / contains / find
// =============================================================================

#[rstest]
fn test_get_spans_node_boundaries() {
    let list = UnrolledList::from_slice_with_capacity(&[10, 20, 30, 40, 50], 2);
    assert_eq!(list.get(0), Some(&10));
    assert_eq!(list.get(2), Some(&30));
    assert_eq!(list.get(4), Some(&50));
    assert_eq!(list.get(5), None);
}

#[rstest]
fn test_contains_uses_value_equality() {
    let list = UnrolledList::from_slice(&[String::from("a"), String::from("b")]);
    assert!(list.contains(&String::from("a")));
    assert!(!list.contains(&String::from("c")));
}

#[rstest]
fn test_contains_on_empty_list() {
    let list: UnrolledList<i32> = UnrolledList::new();
    assert!(!list.contains(&1));
}

#[rstest]
fn test_find_first_even() {
    let list = UnrolledList::from_slice(&[1, 2, 3, 4]);
    assert_eq!(list.find(|element| element % 2 == 0), Some(&2));
}

#[rstest]
fn test_find_on_empty_list_is_none() {
    let list: UnrolledList<i32> = UnrolledList::new();
    assert_eq!(list.find(|_| true), None);
}

#[rstest]
fn test_find_continues_into_later_nodes() {
    // Capacity 2: the match sits in the third node.
    let list = UnrolledList::from_slice_with_capacity(&[1, 3, 5, 7, 9, 8], 2);
    assert_eq!(list.find(|element| element % 2 == 0), Some(&8));
}

#[rstest]
fn test_find_distinguishes_absent_element_value_from_not_found() {
    // A list whose elements are themselves Options: finding a None element
    // yields Some(&None), while no match at all yields None.
    let list: UnrolledList<Option<i32>> = UnrolledList::from_slice(&[Some(1), None, Some(2)]);
    assert_eq!(list.find(|element| element.is_none()), Some(&None));
    assert_eq!(list.find(|element| *element == Some(9)), None);
}

#[rstest]
fn test_find_index() {
    let list = UnrolledList::from_slice(&[1, 2, 3, 4, 5]);
    assert_eq!(list.find_index(|element| *element > 3), Some(3));
    assert_eq!(list.find_index(|element| *element > 10), None);
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_iter_yields_flattened_chain_order() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
    let collected: Vec<&i32> = list.iter().collect();
    assert_eq!(collected, vec![&1, &2, &3]);
}

#[rstest]
fn test_iter_is_restartable() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let first_pass: Vec<&i32> = list.iter().collect();
    let second_pass: Vec<&i32> = list.iter().collect();
    assert_eq!(first_pass, second_pass);
}

#[rstest]
fn test_iter_stays_exhausted() {
    let list = UnrolledList::from_slice(&[1]);
    let mut iterator = list.iter();
    assert_eq!(iterator.next(), Some(&1));
    assert_eq!(iterator.next(), None);
    assert_eq!(iterator.next(), None);
}

#[rstest]
fn test_iter_is_exact_size() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5], 2);
    let mut iterator = list.iter();
    assert_eq!(iterator.len(), 5);
    iterator.next();
    assert_eq!(iterator.len(), 4);
    assert_eq!(iterator.size_hint(), (4, Some(4)));
}

#[rstest]
fn test_into_iter_yields_owned_elements() {
    let list: UnrolledList<i32> = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
    let collected: Vec<i32> = list.into_iter().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[rstest]
fn test_for_loop_over_reference() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let mut sum = 0;
    for element in &list {
        sum += element;
    }
    assert_eq!(sum, 6);
}

// =============================================================================
// remove_first
// =============================================================================

#[rstest]
fn test_remove_first_removes_only_first_occurrence() {
    let list = UnrolledList::from_slice(&[1, 2, 2, 3]);
    let removed = list.remove_first(&2);
    assert_eq!(removed.to_vec(), vec![1, 2, 3]);
    assert_eq!(removed.len(), 3);
}

#[rstest]
fn test_remove_first_missing_value_is_noop() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let unchanged = list.remove_first(&9);
    assert_eq!(unchanged, list);
    assert_eq!(unchanged.len(), 3);
}

#[rstest]
fn test_remove_first_does_not_modify_original() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let _ = list.remove_first(&2);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_remove_first_elides_emptied_node() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 1);
    let removed = list.remove_first(&2);
    assert_eq!(removed.to_vec(), vec![1, 3]);
    assert_eq!(removed.len(), 2);
}

#[rstest]
fn test_remove_first_in_later_node() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5, 6], 2);
    let removed = list.remove_first(&5);
    assert_eq!(removed.to_vec(), vec![1, 2, 3, 4, 6]);
}

#[rstest]
fn test_remove_first_from_empty_list() {
    let list: UnrolledList<i32> = UnrolledList::new();
    let removed = list.remove_first(&1);
    assert!(removed.is_empty());
}

// =============================================================================
// reverse
// =============================================================================

#[rstest]
fn test_reverse_reverses_flattened_order() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5], 2);
    assert_eq!(list.reverse().to_vec(), vec![5, 4, 3, 2, 1]);
}

#[rstest]
fn test_reverse_twice_is_identity() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5], 3);
    assert_eq!(list.reverse().reverse(), list);
}

#[rstest]
fn test_reverse_empty_is_empty() {
    let list: UnrolledList<i32> = UnrolledList::new();
    assert!(list.reverse().is_empty());
}

#[rstest]
fn test_reverse_preserves_length_and_capacity() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
    let reversed = list.reverse();
    assert_eq!(reversed.len(), 3);
    assert_eq!(reversed.chunk_capacity(), 2);
}

// =============================================================================
// append
// =============================================================================

#[rstest]
fn test_append_concatenates_in_order() {
    let list1 = UnrolledList::from_slice(&[1, 2]);
    let list2 = UnrolledList::from_slice(&[3, 4]);
    assert_eq!(list1.append(&list2).to_vec(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_append_empty_identities() {
    let list = UnrolledList::from_slice(&[1, 2]);
    let empty: UnrolledList<i32> = UnrolledList::new();
    assert_eq!(list.append(&empty), list);
    assert_eq!(empty.append(&list), list);
}

#[rstest]
fn test_append_length_is_additive() {
    let list1 = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
    let list2 = UnrolledList::from_slice_with_capacity(&[4, 5], 3);
    assert_eq!(list1.append(&list2).len(), 5);
}

#[rstest]
fn test_append_across_capacities_keeps_left_capacity() {
    let list1 = UnrolledList::from_slice_with_capacity(&[1, 2], 2);
    let list2 = UnrolledList::from_slice_with_capacity(&[3, 4, 5], 3);
    let combined = list1.append(&list2);
    assert_eq!(combined.chunk_capacity(), 2);
    assert_eq!(combined.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_append_does_not_modify_operands() {
    let list1 = UnrolledList::from_slice(&[1, 2]);
    let list2 = UnrolledList::from_slice(&[3, 4]);
    let _ = list1.append(&list2);
    assert_eq!(list1.to_vec(), vec![1, 2]);
    assert_eq!(list2.to_vec(), vec![3, 4]);
}

// =============================================================================
// filter / map / intersection
// =============================================================================

#[rstest]
fn test_filter_keeps_matching_elements_in_order() {
    let list = UnrolledList::from_slice(&[1, 2, 3, 4, 5, 6]);
    let evens = list.filter(|element| element % 2 == 0);
    assert_eq!(evens.to_vec(), vec![2, 4, 6]);
}

#[rstest]
fn test_filter_nothing_matches_yields_empty() {
    let list = UnrolledList::from_slice(&[1, 3, 5]);
    let evens = list.filter(|element| element % 2 == 0);
    assert!(evens.is_empty());
    assert_eq!(evens.chunk_capacity(), list.chunk_capacity());
}

#[rstest]
fn test_filter_does_not_modify_original() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let _ = list.filter(|element| *element > 1);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_map_transforms_every_element() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
    let doubled = list.map(|element| element * 2);
    assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    assert_eq!(doubled.len(), 3);
    assert_eq!(doubled.chunk_capacity(), 2);
}

#[rstest]
fn test_map_can_change_element_type() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let rendered = list.map(|element| element.to_string());
    assert_eq!(
        rendered.to_vec(),
        vec![String::from("1"), String::from("2"), String::from("3")]
    );
}

#[rstest]
fn test_map_applies_in_chain_order() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5], 2);
    let mut seen = Vec::new();
    let _ = list.map(|element| seen.push(*element));
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_intersection_keeps_left_order() {
    let list1 = UnrolledList::from_slice(&[1, 2, 3, 4]);
    let list2 = UnrolledList::from_slice(&[3, 4, 5, 6]);
    assert_eq!(list1.intersection(&list2).to_vec(), vec![3, 4]);
}

#[rstest]
fn test_intersection_preserves_left_duplicates() {
    let list1 = UnrolledList::from_slice(&[2, 1, 2, 3]);
    let list2 = UnrolledList::from_slice(&[2]);
    assert_eq!(list1.intersection(&list2).to_vec(), vec![2, 2]);
}

#[rstest]
fn test_intersection_with_empty_operand_is_empty() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let empty: UnrolledList<i32> = UnrolledList::new();
    assert!(list.intersection(&empty).is_empty());
    assert!(empty.intersection(&list).is_empty());
}

// =============================================================================
// rebalance
// =============================================================================

#[rstest]
fn test_rebalance_preserves_content() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5, 6, 7], 3);
    let balanced = list.rebalance();
    assert_eq!(balanced, list);
    assert_eq!(balanced.len(), list.len());
}

#[rstest]
fn test_rebalance_is_idempotent() {
    let list = UnrolledList::from_slice(&[9, 8])
        .append(&UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5], 1));
    let once = list.rebalance();
    let twice = once.rebalance();
    assert_eq!(once, twice);
}

#[rstest]
fn test_rebalance_of_empty_list() {
    let list: UnrolledList<i32> = UnrolledList::new();
    assert!(list.rebalance().is_empty());
}

// =============================================================================
// Folds
// =============================================================================

#[rstest]
fn test_fold_left_sums_in_order() {
    let list = UnrolledList::from_slice(&[1, 2, 3, 4]);
    assert_eq!(
        list.fold_left(0, |accumulator, element| accumulator + element),
        10
    );
}

#[rstest]
fn test_fold_left_on_empty_returns_initial() {
    let list: UnrolledList<i32> = UnrolledList::new();
    assert_eq!(
        list.fold_left(0, |accumulator, element| accumulator + element),
        0
    );
}

#[rstest]
fn test_fold_left_is_left_associative() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let rendered = list.fold_left(String::from("0"), |accumulator, element| {
        format!("({accumulator}-{element})")
    });
    assert_eq!(rendered, "(((0-1)-2)-3)");
}

#[rstest]
fn test_fold_right_is_right_associative() {
    let list = UnrolledList::from_slice(&[1, 2, 3, 4]);
    // 1 - (2 - (3 - 4)) = -2
    assert_eq!(
        list.fold_right(0, |element, accumulator| element - accumulator),
        -2
    );
}

// =============================================================================
// Typeclass surface
// =============================================================================

#[rstest]
fn test_fmap_transforms_elements() {
    let list: UnrolledList<i32> = UnrolledList::from_slice(&[1, 2, 3]);
    let doubled = list.fmap(|element| element * 2);
    assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
}

#[rstest]
fn test_fmap_ref_leaves_original_usable() {
    let list: UnrolledList<i32> = UnrolledList::from_slice(&[1, 2, 3]);
    let incremented = list.fmap_ref(|element| element + 1);
    assert_eq!(incremented.to_vec(), vec![2, 3, 4]);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_semigroup_combine_appends() {
    let list1 = UnrolledList::from_slice(&[1, 2]);
    let list2 = UnrolledList::from_slice(&[3, 4]);
    assert_eq!(list1.combine(list2).to_vec(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_monoid_empty_is_identity() {
    let list = UnrolledList::from_slice(&[1, 2, 3]);
    let empty: UnrolledList<i32> = UnrolledList::empty();
    assert_eq!(empty.combine(list.clone()), list);
    assert_eq!(list.clone().combine(UnrolledList::empty()), list);
}

// =============================================================================
// Equality / rendering
// =============================================================================

#[rstest]
fn test_eq_is_content_equality() {
    let list1: UnrolledList<i32> = (1..=3).collect();
    let list2 = UnrolledList::from_slice_with_capacity(&[1, 2, 3], 2);
    let list3: UnrolledList<i32> = (1..=4).collect();
    assert_eq!(list1, list2);
    assert_ne!(list1, list3);
}

#[rstest]
fn test_debug_rendering() {
    let list: UnrolledList<i32> = (1..=3).collect();
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
}

#[rstest]
fn test_display_rendering() {
    let list = UnrolledList::from_slice_with_capacity(&[1, 2, 3, 4, 5], 2);
    assert_eq!(format!("{list}"), "[1, 2, 3, 4, 5]");
    let empty: UnrolledList<i32> = UnrolledList::new();
    assert_eq!(format!("{empty}"), "[]");
}

// =============================================================================
// Scenarios with absence-like element values
// =============================================================================

#[rstest]
fn test_option_elements_render_and_remove() {
    let empty: UnrolledList<Option<i32>> = UnrolledList::new();
    let list = empty.cons(Some(1)).cons(None);
    assert_eq!(list.to_vec(), vec![None, Some(1)]);
    assert_eq!(format!("{list:?}"), "[None, Some(1)]");

    let without_none = list.remove_first(&None);
    assert_eq!(without_none.to_vec(), vec![Some(1)]);

    let without_one = list.remove_first(&Some(1));
    assert_eq!(without_one.to_vec(), vec![None]);
}

#[rstest]
fn test_option_elements_membership() {
    let list: UnrolledList<Option<i32>> = UnrolledList::from_slice(&[None, Some(1)]);
    assert!(list.contains(&None));
    assert!(list.contains(&Some(1)));
    assert!(!list.contains(&Some(2)));
}
