/// Two adjacent input elements after splitting, ordered so `small` never
/// ranks after `large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<T> {
    pub small: T,
    pub large: T,
}

/// Orders every adjacent slot pair `(2i, 2i + 1)` in place so the second
/// element is the larger one. An odd trailing element is left untouched.
///
/// Performs exactly `v.len() / 2` comparisons.
pub fn sort_within_pairs<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for pair in v.chunks_exact_mut(2) {
        if is_less(&pair[1], &pair[0]) {
            pair.swap(0, 1);
        }
    }
}

/// Groups a sequence already passed through [`sort_within_pairs`] into
/// explicit pairs, returning the leftover singleton for odd lengths.
#[must_use]
pub fn into_pairs<T>(v: Vec<T>) -> (Vec<Pair<T>>, Option<T>) {
    let mut pairs = Vec::with_capacity(v.len() / 2);
    let mut iter = v.into_iter();
    let leftover = loop {
        match (iter.next(), iter.next()) {
            (Some(small), Some(large)) => pairs.push(Pair { small, large }),
            (straggler, _) => break straggler,
        }
    };
    (pairs, leftover)
}

#[cfg(test)]
mod tests {
    use super::{Pair, into_pairs, sort_within_pairs};

    #[test]
    fn orders_each_pair_and_skips_leftover() {
        let mut v = vec![24, 10, 10, 97, 42, 32, 11];
        let mut count = 0usize;
        sort_within_pairs(&mut v, &mut |a: &i32, b: &i32| {
            count += 1;
            a < b
        });
        assert_eq!(v, vec![10, 24, 10, 97, 32, 42, 11]);
        assert_eq!(count, 3);
    }

    #[test]
    fn short_inputs_are_untouched() {
        let mut empty: Vec<i32> = Vec::new();
        sort_within_pairs(&mut empty, &mut |a: &i32, b: &i32| a < b);
        assert!(empty.is_empty());

        let mut single = vec![7];
        sort_within_pairs(&mut single, &mut |a: &i32, b: &i32| a < b);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn equal_elements_keep_their_slots() {
        let mut v = vec![(5, 'a'), (5, 'b')];
        sort_within_pairs(&mut v, &mut |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        assert_eq!(v, vec![(5, 'a'), (5, 'b')]);
    }

    #[test]
    fn groups_even_and_odd_lengths() {
        let (pairs, leftover) = into_pairs(vec![1, 2, 3, 4]);
        assert_eq!(
            pairs,
            vec![Pair { small: 1, large: 2 }, Pair { small: 3, large: 4 }]
        );
        assert_eq!(leftover, None);

        let (pairs, leftover) = into_pairs(vec![1, 2, 9]);
        assert_eq!(pairs, vec![Pair { small: 1, large: 2 }]);
        assert_eq!(leftover, Some(9));

        let (pairs, leftover) = into_pairs(Vec::<i32>::new());
        assert!(pairs.is_empty());
        assert_eq!(leftover, None);
    }
}
