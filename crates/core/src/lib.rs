//! Ford-Johnson merge-insertion sort.
//!
//! The pipeline runs in four stages, each exposed as its own module so the
//! intermediate sequences can be inspected:
//!
//! 1. [`pairs`]: order adjacent elements into pairs.
//! 2. [`merge`]: merge-sort the pairs by their larger element.
//! 3. [`chain`]: split pairs into the sorted main chain and the pend list.
//! 4. [`insert`]: binary-insert the pend list in Jacobsthal order.

pub mod bound;
pub mod chain;
pub mod insert;
pub mod jacobsthal;
pub mod merge;
pub mod pairs;

pub use bound::{comparison_bound, ford_johnson_bound};

/// Sorts `items` in non-decreasing order with merge-insertion.
///
/// Empty and single-element inputs come back unchanged without a single
/// comparison.
///
/// ```
/// assert_eq!(mergeinsert::sort(vec![6, 1, 9, 2, 4]), vec![1, 2, 4, 6, 9]);
/// ```
#[must_use]
pub fn sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    sort_by(items, |a, b| a < b)
}

/// Sorts `items` using the Ford-Johnson merge-insertion algorithm,
/// which is designed to minimize the number of calls to `is_less`.
///
/// # Comparator contract
///
/// `is_less(a, b)` must define a strict weak ordering over the items
/// (irreflexive, transitive, and consistent). Results are undefined if
/// this contract is violated, but every item is still returned exactly once.
///
/// # Panics
///
/// Cannot panic. The inserter's internal `expect` is guarded by construction.
#[must_use]
pub fn sort_by<T, F>(mut items: Vec<T>, mut is_less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let n = items.len();
    if n <= 1 {
        return items;
    }

    pairs::sort_within_pairs(&mut items, &mut is_less);
    let (split, leftover) = pairs::into_pairs(items);
    let sorted_pairs = merge::merge_sort_pairs(split, &mut is_less);
    let chains = chain::extract(sorted_pairs, leftover);
    tracing::trace!(
        len = n,
        main = chains.main.len(),
        pend = chains.pend.len(),
        "chains extracted"
    );

    insert::ChainInserter::new(chains).finish(&mut is_less)
}
