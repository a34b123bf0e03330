use crate::pairs::Pair;

/// The two sequences the inserter works on.
///
/// `main` holds the larger element of every pair, already ascending.
/// `pend[i]` is the partner of `main[i]`; an odd leftover is appended last and
/// has no partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chains<T> {
    pub main: Vec<T>,
    pub pend: Vec<T>,
}

/// Projects merge-sorted pairs into the main chain and the pend list.
/// No comparisons are made.
#[must_use]
pub fn extract<T>(pairs: Vec<Pair<T>>, leftover: Option<T>) -> Chains<T> {
    let mut main = Vec::with_capacity(pairs.len());
    let mut pend = Vec::with_capacity(pairs.len() + 1);
    for Pair { small, large } in pairs {
        main.push(large);
        pend.push(small);
    }
    pend.extend(leftover);
    Chains { main, pend }
}

#[cfg(test)]
mod tests {
    use super::{Chains, extract};
    use crate::pairs::Pair;

    #[test]
    fn splits_pairs_and_appends_leftover() {
        let pairs = vec![
            Pair { small: 10, large: 23 },
            Pair { small: 26, large: 29 },
            Pair { small: 13, large: 57 },
        ];
        assert_eq!(
            extract(pairs, Some(11)),
            Chains {
                main: vec![23, 29, 57],
                pend: vec![10, 26, 13, 11],
            }
        );
    }

    #[test]
    fn even_input_has_matching_lengths() {
        let chains = extract(vec![Pair { small: 1, large: 2 }], None);
        assert_eq!(chains.main.len(), chains.pend.len());
    }

    #[test]
    fn nothing_in_nothing_out() {
        let chains = extract(Vec::<Pair<u8>>::new(), None);
        assert!(chains.main.is_empty());
        assert!(chains.pend.is_empty());
    }
}
