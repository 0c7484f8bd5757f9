use chained_sequence::{Arg, ChainError, ChainedSequence, IntoChained};
use quickcheck::quickcheck;

#[derive(Debug, PartialEq)]
enum SumError {
    Chain(ChainError),
    Overflow,
}

impl From<ChainError> for SumError {
    fn from(e: ChainError) -> Self {
        SumError::Chain(e)
    }
}

fn checked(a: i8, b: i8) -> Result<i8, SumError> {
    a.checked_add(b).ok_or(SumError::Overflow)
}

#[test]
fn test_reduce() {
    assert_eq!((1..5).chained().reduce(|a, b| a * b, Arg::Omitted), Ok(24));
    assert_eq!((1..5).chained().reduce(|a, b| a * b, Arg::Present(10)), Ok(240));
    assert_eq!(vec![7].chained().reduce(|a, b| a + b, Arg::Omitted), Ok(7));
}

#[test]
fn test_reduce_empty() {
    let empty = || Vec::<i32>::new().chained();
    assert_eq!(
        empty().reduce(|a, b| a + b, Arg::Omitted),
        Err(ChainError::EmptySequence)
    );
    assert_eq!(empty().reduce(|a, b| a + b, Arg::Present(3)), Ok(3));
}

#[test]
fn test_try_reduce_propagates_fold_errors() {
    assert_eq!(vec![1i8, 2, 3].chained().try_reduce(checked, Arg::Omitted), Ok(6));
    assert_eq!(
        vec![100i8, 100].chained().try_reduce(checked, Arg::Omitted),
        Err(SumError::Overflow)
    );
    assert_eq!(
        Vec::<i8>::new().chained().try_reduce(checked, Arg::Omitted),
        Err(SumError::Chain(ChainError::EmptySequence))
    );
    assert_eq!(Vec::<i8>::new().chained().try_reduce(checked, Arg::Present(4)), Ok(4));
}

#[test]
fn test_nth() {
    assert_eq!((10..20).chained().nth(3), Some(13));
    assert_eq!((10..20).chained().nth(30), None);
    assert_eq!((10..20).chained().nth_or(30, -1), -1);
    assert_eq!((10..20).chained().nth_or(0, -1), 10);
}

#[test]
fn test_last_on_infinite_prefix() {
    assert_eq!(ChainedSequence::count(0, 2).take(4).last(), Ok(6));
}

#[test]
fn prop_reduce_matches_fold() {
    fn property(xs: Vec<i32>, init: i32) -> bool {
        let expected = xs.iter().fold(init as i64, |acc, x| acc + *x as i64);
        xs.chained()
            .map(i64::from)
            .reduce(|a, b| a + b, Arg::Present(init as i64))
            == Ok(expected)
    }
    quickcheck(property as fn(Vec<i32>, i32) -> bool);
}

#[test]
fn prop_last_matches_std() {
    fn property(xs: Vec<u16>) -> bool {
        match xs.last() {
            Some(expected) => xs.clone().chained().last() == Ok(*expected),
            None => xs.chained().last() == Err(ChainError::EmptySequence),
        }
    }
    quickcheck(property as fn(Vec<u16>) -> bool);
}
