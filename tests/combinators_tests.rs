use chained_sequence::{Arg, ChainError, ChainedSequence, ForwardingMode, IntoChained};
use quickcheck::quickcheck;

#[test]
fn test_cycle() {
    assert_eq!(vec![1, 2].chained().cycle().take(5).list(), vec![1, 2, 1, 2, 1]);
    assert_eq!(std::iter::once(7).chained().cycle().take(3).list(), vec![7, 7, 7]);
    assert_eq!(Vec::<i32>::new().chained().cycle().list(), Vec::<i32>::new());
}

#[test]
fn test_accumulate() {
    let running = (1..4).chained().accumulate(|a, b| a + b, Arg::Omitted).unwrap();
    assert_eq!(running.list(), vec![1, 3, 6]);

    let seeded = (1..4)
        .chained()
        .accumulate_with_mode(ForwardingMode::Modern, |a, b| a + b, Arg::Present(10))
        .unwrap();
    assert_eq!(seeded.list(), vec![10, 11, 13, 16]);

    let seeded_empty = Vec::<i32>::new()
        .chained()
        .accumulate_with_mode(ForwardingMode::Modern, |a, b| a + b, Arg::Present(10))
        .unwrap();
    assert_eq!(seeded_empty.list(), vec![10]);

    let running_max = vec![3, 1, 4, 1, 5]
        .chained()
        .accumulate(std::cmp::max, Arg::Omitted)
        .unwrap();
    assert_eq!(running_max.list(), vec![3, 3, 4, 4, 5]);
}

#[test]
fn test_accumulate_initial_rejected_in_legacy_mode() {
    let result = (1..4).chained().accumulate_with_mode(
        ForwardingMode::Legacy,
        |a, b| a + b,
        Arg::Present(10),
    );
    assert!(matches!(result, Err(ChainError::InvalidArgument(_))));

    // omitting the initial value is fine in both modes
    let result = (1..4)
        .chained()
        .accumulate_with_mode(ForwardingMode::Legacy, |a, b| a + b, Arg::Omitted)
        .unwrap();
    assert_eq!(result.list(), vec![1, 3, 6]);
}

#[test]
fn test_chain_compress() {
    assert_eq!((1..3).chained().chain(vec![9, 8]).list(), vec![1, 2, 9, 8]);
    assert_eq!(
        "ABCDEF".chars().chained().compress(vec![true, false, true, false, true, true]).list(),
        vec!['A', 'C', 'E', 'F']
    );
    assert_eq!(
        (1..10).chained().compress(vec![true, true]).list(),
        vec![1, 2]
    );
}

#[test]
fn test_dropwhile_takewhile_filterfalse() {
    let values = || vec![1, 4, 6, 4, 1].chained();
    assert_eq!(values().dropwhile(|x| *x < 5).list(), vec![6, 4, 1]);
    assert_eq!(values().takewhile(|x| *x < 5).list(), vec![1, 4]);
    assert_eq!((0..10).chained().filterfalse(|x| x % 3 == 0).list(), vec![1, 2, 4, 5, 7, 8]);
}

#[test]
fn test_groupby() {
    let groups = "AAAABBBCCDAABBB"
        .chars()
        .chained()
        .groupby(|c| *c)
        .map(|(key, group)| (key, group.len()))
        .list();
    assert_eq!(
        groups,
        vec![('A', 4), ('B', 3), ('C', 2), ('D', 1), ('A', 2), ('B', 3)]
    );

    let by_parity = vec![2, 4, 1, 3, 6]
        .chained()
        .groupby(|x| x % 2 == 0)
        .list();
    assert_eq!(
        by_parity,
        vec![(true, vec![2, 4]), (false, vec![1, 3]), (true, vec![6])]
    );
}

#[test]
fn test_starmap() {
    let result = vec![(1, 2), (3, 4)]
        .chained()
        .starmap(|a: i32, b: i32| a * 10 + b)
        .list();
    assert_eq!(result, vec![12, 34]);
}

#[test]
fn test_tee() {
    let mut branches = (1..4).chained().tee(2);
    let mut first = branches.next().unwrap();
    let second = branches.next().unwrap();
    assert!(branches.next().is_none());

    assert_eq!(first.next(), Some(1));
    assert_eq!(second.list(), vec![1, 2, 3]);
    assert_eq!(first.list(), vec![2, 3]);
}

#[test]
fn test_zip_longest() {
    let result = (1..4).chained().zip_longest(vec!['a']).list();
    assert_eq!(
        result,
        vec![(Some(1), Some('a')), (Some(2), None), (Some(3), None)]
    );
}

#[test]
fn test_products() {
    assert_eq!(
        vec![1, 2].chained().product(vec!['a', 'b']).list(),
        vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
    );
    assert_eq!(
        vec![0, 1].chained().product_repeat(2).list(),
        vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
    );
}

#[test]
fn test_permutations_combinations() {
    assert_eq!(
        vec![1, 2, 3].chained().permutations(Some(2)).list(),
        vec![
            vec![1, 2],
            vec![1, 3],
            vec![2, 1],
            vec![2, 3],
            vec![3, 1],
            vec![3, 2]
        ]
    );
    assert_eq!(vec![1, 2, 3].chained().permutations(None).len(), 6);
    assert_eq!(
        vec![1, 2, 3].chained().combinations(2).list(),
        vec![vec![1, 2], vec![1, 3], vec![2, 3]]
    );
    assert_eq!(
        vec![1, 2].chained().combinations_with_replacement(2).list(),
        vec![vec![1, 1], vec![1, 2], vec![2, 2]]
    );
}

#[test]
fn test_infinite_sources_chain_lazily() {
    let result = ChainedSequence::count(0, 1)
        .filter(|x| x % 7 == 0)
        .map(|x| x * 2)
        .take(3)
        .list();
    assert_eq!(result, vec![0, 14, 28]);
}

#[test]
fn prop_chain_concatenates() {
    fn property(xs: Vec<i32>, ys: Vec<i32>) -> bool {
        let mut expected = xs.clone();
        expected.extend(ys.iter().copied());
        xs.chained().chain(ys).list() == expected
    }
    quickcheck(property as fn(Vec<i32>, Vec<i32>) -> bool);
}

#[test]
fn prop_groupby_preserves_elements() {
    fn property(xs: Vec<u8>) -> bool {
        let regrouped: Vec<u8> = xs
            .clone()
            .chained()
            .groupby(|x| x / 64)
            .map(|(_, group)| group)
            .flatten()
            .list();
        regrouped == xs
    }
    quickcheck(property as fn(Vec<u8>) -> bool);
}
