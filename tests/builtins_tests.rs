use std::collections::{BTreeSet, HashMap, HashSet};

use chained_sequence::{Arg, ChainError, ChainedSequence, ForwardingMode, IntoChained};
use quickcheck::quickcheck;

#[test]
fn test_all_any() {
    assert!(vec![true, true].chained().all());
    assert!(!vec![true, false].chained().all());
    assert!(Vec::<bool>::new().chained().all());

    assert!(vec![false, true].chained().any());
    assert!(!Vec::<bool>::new().chained().any());

    assert!((1..5).chained().map(|x| x > 0).all());
}

#[test]
fn test_collections() {
    assert_eq!((1..4).chained().list(), vec![1, 2, 3]);
    assert_eq!(&*(1..4).chained().tuple(), &[1, 2, 3]);
    assert_eq!(
        vec![1, 2, 2, 3].chained().set(),
        [1, 2, 3].into_iter().collect::<HashSet<_>>()
    );
    assert_eq!(
        vec![3, 1, 3].chained().frozenset(),
        [1, 3].into_iter().collect::<BTreeSet<_>>()
    );

    let dict = vec![("a", 1), ("b", 2), ("a", 3)].chained().dict();
    let expected: HashMap<_, _> = [("a", 3), ("b", 2)].into_iter().collect();
    assert_eq!(dict, expected);
}

#[test]
fn test_enumerate_filter_map() {
    assert_eq!(
        vec!["a", "b"].chained().enumerate(1).list(),
        vec![(1, "a"), (2, "b")]
    );
    assert_eq!((1..7).chained().filter(|x| x % 2 == 0).list(), vec![2, 4, 6]);
    assert_eq!(ChainedSequence::new(vec![1, 2, 3]).map(|x| x * 2).list(), vec![2, 4, 6]);
}

#[test]
fn test_max_min() {
    assert_eq!(vec![3, 9, 2].chained().max(Arg::Omitted), Ok(9));
    assert_eq!(vec![3, 9, 2].chained().min(Arg::Omitted), Ok(2));

    let empty = || Vec::<i32>::new().chained();
    assert_eq!(empty().max(Arg::Omitted), Err(ChainError::EmptySequence));
    assert_eq!(empty().min(Arg::Omitted), Err(ChainError::EmptySequence));
    assert_eq!(empty().max(Arg::Present(7)), Ok(7));
    assert_eq!(empty().min(Arg::Present(-7)), Ok(-7));

    // the default is ignored when there are elements
    assert_eq!(vec![1].chained().max(Arg::Present(100)), Ok(1));
}

#[test]
fn test_max_min_ties_keep_the_first() {
    let pairs = || vec![(1, 'a'), (3, 'b'), (3, 'c'), (1, 'd')].chained();
    assert_eq!(pairs().max_by_key(|p| p.0, Arg::Omitted), Ok((3, 'b')));
    assert_eq!(pairs().min_by_key(|p| p.0, Arg::Omitted), Ok((1, 'a')));
}

#[test]
fn test_nullable_key_follows_forwarding_mode() {
    let values = || vec![4, 8, 1].chained();
    let no_key = None::<fn(&i32) -> i32>;

    assert_eq!(
        values().max_with_mode(ForwardingMode::Modern, no_key, Arg::Omitted),
        Ok(8)
    );
    assert_eq!(
        values().min_with_mode(ForwardingMode::Modern, no_key, Arg::Omitted),
        Ok(1)
    );

    let legacy = values().max_with_mode(ForwardingMode::Legacy, no_key, Arg::Omitted);
    assert!(matches!(legacy, Err(ChainError::InvalidArgument(_))));
    let legacy = values().min_with_mode(ForwardingMode::Legacy, no_key, Arg::Omitted);
    assert!(matches!(legacy, Err(ChainError::InvalidArgument(_))));

    // a real key works in either mode
    let negated = Some(|x: &i32| -x);
    assert_eq!(
        values().max_with_mode(ForwardingMode::Legacy, negated, Arg::Omitted),
        Ok(1)
    );
    assert_eq!(values().max_with(negated, Arg::Omitted), Ok(1));
}

#[test]
fn test_reversed() {
    assert_eq!((0..3).chained().reversed().list(), vec![2, 1, 0]);
    assert_eq!(vec!['a', 'b'].chained().reversed().list(), vec!['b', 'a']);
}

#[test]
fn test_sorted() {
    assert_eq!(ChainedSequence::new(vec![3, 1, 2]).sorted(), vec![1, 2, 3]);

    let words = || vec!["bb", "a", "cc", "d"].chained();
    assert_eq!(words().sorted_by_key(|w| w.len(), false), vec!["a", "d", "bb", "cc"]);
    assert_eq!(words().sorted_by_key(|w| w.len(), true), vec!["bb", "cc", "a", "d"]);
}

#[test]
fn test_sum() {
    assert_eq!((1..4).chained().sum(Arg::Omitted), 6);
    assert_eq!((1..4).chained().sum(Arg::Present(10)), 16);
    assert_eq!(Vec::<i32>::new().chained().sum(Arg::Omitted), 0);
    assert_eq!(vec![0.5, 0.25].chained().sum(Arg::Present(1.0)), 1.75);
}

#[test]
fn test_zip_unzip() {
    assert_eq!(
        (1..4).chained().zip(vec!['a', 'b']).list(),
        vec![(1, 'a'), (2, 'b')]
    );

    let columns = vec![vec![1, 2], vec![3, 4], vec![5, 6]].chained().unzip().list();
    assert_eq!(columns, vec![vec![1, 3, 5], vec![2, 4, 6]]);

    let ragged = vec![vec![1, 2, 3], vec![4]].chained().unzip().list();
    assert_eq!(ragged, vec![vec![1, 4]]);

    assert_eq!(Vec::<Vec<i32>>::new().chained().unzip().list(), Vec::<Vec<i32>>::new());
}

#[test]
fn prop_sorted_matches_std() {
    fn property(xs: Vec<i32>) -> bool {
        let mut expected = xs.clone();
        expected.sort();
        xs.chained().sorted() == expected
    }
    quickcheck(property as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_max_matches_std() {
    fn property(xs: Vec<i64>) -> bool {
        match xs.iter().max() {
            Some(expected) => xs.clone().chained().max(Arg::Omitted) == Ok(*expected),
            None => xs.chained().max(Arg::Omitted) == Err(ChainError::EmptySequence),
        }
    }
    quickcheck(property as fn(Vec<i64>) -> bool);
}
