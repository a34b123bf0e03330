use crate::pairs::Pair;

/// Sorts pairs by their `large` element with a top-down merge sort.
///
/// Pairs move as whole units; `small` is never looked at. On equal keys the
/// pair from the left run comes first, so the sort is stable. The left run of
/// every split holds `ceil(len / 2)` pairs.
#[must_use]
pub fn merge_sort_pairs<T, F>(mut pairs: Vec<Pair<T>>, is_less: &mut F) -> Vec<Pair<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    if pairs.len() <= 1 {
        return pairs;
    }

    let right = pairs.split_off(pairs.len().div_ceil(2));
    let left = merge_sort_pairs(pairs, is_less);
    let right = merge_sort_pairs(right, is_less);
    merge_runs(left, right, is_less)
}

fn merge_runs<T, F>(left: Vec<Pair<T>>, right: Vec<Pair<T>>, is_less: &mut F) -> Vec<Pair<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if is_less(&r.large, &l.large) {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}
