use crate::insert::{InsertionPlan, Window};

/// Returns the worst-case number of comparisons [`crate::sort`] performs on
/// `n` elements.
///
/// This is exact, not an estimate: `n / 2` pair comparisons, the worst case of
/// merge-sorting `n / 2` pairs, and `ceil(log2(w + 1))` for every insertion
/// whose search window spans `w` chain elements.
#[must_use]
pub fn comparison_bound(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }

    let num_pairs = n / 2;
    let mut total = num_pairs + merge_sort_bound(num_pairs);

    let mut chain_len = num_pairs;
    for insertion in InsertionPlan::new(n - num_pairs) {
        let span = match insertion.window {
            Window::Front => 0,
            Window::Prefix { end } => end + 1,
            Window::Whole => chain_len,
        };
        if span > 0 {
            total += ceil_log2(span + 1);
        }
        chain_len += 1;
    }

    total
}

/// The classic Ford-Johnson worst case, `sum(ceil(log2(3k / 4)))` for
/// `k = 1..=n`.
///
/// For `n <= 9` this matches [`comparison_bound`]; beyond that merge-sorting
/// the pairs costs a few more comparisons than recursing would.
#[must_use]
pub fn ford_johnson_bound(n: usize) -> usize {
    // ceil(log2(3k / 4)) == ceil(log2(3k)) - 2, floored at zero.
    (1..=n).map(|k| ceil_log2(3 * k).saturating_sub(2)).sum()
}

fn merge_sort_bound(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let left = len.div_ceil(2);
    merge_sort_bound(left) + merge_sort_bound(len - left) + len - 1
}

fn ceil_log2(value: usize) -> usize {
    if value <= 1 {
        return 0;
    }
    (usize::BITS - (value - 1).leading_zeros()) as usize
}
