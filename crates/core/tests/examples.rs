use mergeinsert::chain::{self, Chains};
use mergeinsert::insert::{ChainInserter, InsertionPlan};
use mergeinsert::jacobsthal::jacobsthal;
use mergeinsert::{merge, pairs, sort};
use rstest::rstest;

#[rstest]
#[case(vec![], vec![])]
#[case(vec![7], vec![7])]
#[case(vec![2, 1], vec![1, 2])]
#[case(vec![5, 5, 5, 1], vec![1, 5, 5, 5])]
#[case(vec![5, 3, 2, 8, 1, 9, 4, 7], vec![1, 2, 3, 4, 5, 7, 8, 9])]
#[case(vec![6, 1, 9, 2, 4], vec![1, 2, 4, 6, 9])]
#[case(vec![15, -1, 3, -1, -3, -1, 7], vec![-3, -1, -1, -1, 3, 7, 15])]
#[case(vec![i32::MAX, i32::MIN, 0], vec![i32::MIN, 0, i32::MAX])]
fn sorts_known_inputs(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(sort(input), expected);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(2, 1)]
#[case(3, 3)]
#[case(4, 5)]
#[case(5, 11)]
#[case(6, 21)]
#[case(7, 43)]
#[case(10, 341)]
fn jacobsthal_terms(#[case] k: u32, #[case] expected: usize) {
    assert_eq!(jacobsthal(k), expected);
}

#[rstest]
#[case::ascending((0..64).collect())]
#[case::descending((0..64).rev().collect())]
#[case::all_equal(vec![66; 64])]
#[case::saw((0..64).map(|i| i % 8).collect())]
#[case::odd_length((0..65).map(|i| (i * 37) % 65).collect())]
fn sorts_patterns(#[case] input: Vec<i32>) {
    let mut expected = input.clone();
    expected.sort();
    assert_eq!(sort(input), expected);
}

#[test]
fn stages_on_nineteen_elements() {
    let mut v = vec![
        24, 10, 10, 97, 42, 32, 40, 84, 29, 26, 66, 96, 57, 13, 46, 30, 91, 48, 11,
    ];
    let mut is_less = |a: &i32, b: &i32| a < b;

    pairs::sort_within_pairs(&mut v, &mut is_less);
    assert_eq!(
        v,
        vec![10, 24, 10, 97, 32, 42, 40, 84, 26, 29, 66, 96, 13, 57, 30, 46, 48, 91, 11]
    );

    let (split, leftover) = pairs::into_pairs(v);
    let sorted_pairs = merge::merge_sort_pairs(split, &mut is_less);
    let chains = chain::extract(sorted_pairs, leftover);
    assert_eq!(
        chains,
        Chains {
            main: vec![24, 29, 42, 46, 57, 84, 91, 96, 97],
            pend: vec![10, 26, 32, 30, 13, 40, 48, 66, 10, 11],
        }
    );

    let order: Vec<usize> = InsertionPlan::new(chains.pend.len())
        .map(|ins| ins.pend_index)
        .collect();
    assert_eq!(order, vec![0, 2, 1, 4, 3, 9, 8, 7, 6, 5]);

    let sorted = ChainInserter::new(chains).finish(&mut is_less);
    assert_eq!(
        sorted,
        vec![10, 10, 11, 13, 24, 26, 29, 30, 32, 40, 42, 46, 48, 57, 66, 84, 91, 96, 97]
    );
}

#[test]
fn inserter_steps_keep_the_chain_sorted() {
    let mut v: Vec<i32> = (0..41).map(|i| (i * 17) % 41).collect();
    let mut is_less = |a: &i32, b: &i32| a < b;
    pairs::sort_within_pairs(&mut v, &mut is_less);
    let (split, leftover) = pairs::into_pairs(v);
    let chains = chain::extract(merge::merge_sort_pairs(split, &mut is_less), leftover);

    let mut inserter = ChainInserter::new(chains);
    let mut steps = 0usize;
    while let Some(step) = inserter.step(&mut is_less) {
        steps += 1;
        let chain = inserter.main_chain();
        assert!(chain.windows(2).all(|w| w[0] <= w[1]), "after step {steps}");
        if let Some(end) = step.window_end {
            assert!(step.position <= end + 1);
        }
    }
    assert_eq!(steps, 21);
    assert_eq!(inserter.remaining().count(), 0);
    assert_eq!(inserter.main_chain(), (0..41).collect::<Vec<_>>().as_slice());
}
