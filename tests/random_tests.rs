use chained_sequence::{ChainError, IntoChained};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_random_permutation_is_a_permutation() {
    let mut shuffled = (0..20).chained().random_permutation_with_rng(None, &mut rng()).unwrap();
    assert_eq!(shuffled.len(), 20);
    shuffled.sort();
    assert_eq!(shuffled, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_random_permutation_of_length_r() {
    let picked = (0..20).chained().random_permutation_with_rng(Some(5), &mut rng()).unwrap();
    assert_eq!(picked.len(), 5);
    let mut distinct = picked.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), 5);

    let too_many = (0..3).chained().random_permutation_with_rng(Some(4), &mut rng());
    assert!(matches!(too_many, Err(ChainError::InvalidArgument(_))));
}

#[test]
fn test_random_combination_keeps_order() {
    let picked = (0..50).chained().random_combination_with_rng(6, &mut rng()).unwrap();
    assert_eq!(picked.len(), 6);
    assert!(picked.windows(2).all(|w| w[0] < w[1]));
    assert!(picked.iter().all(|x| (0..50).contains(x)));

    let too_many = (0..3).chained().random_combination_with_rng(4, &mut rng());
    assert!(matches!(too_many, Err(ChainError::InvalidArgument(_))));
}

#[test]
fn test_random_combination_with_replacement() {
    let picked = (0..3)
        .chained()
        .random_combination_with_replacement_with_rng(8, &mut rng())
        .unwrap();
    assert_eq!(picked.len(), 8);
    assert!(picked.windows(2).all(|w| w[0] <= w[1]));
    assert!(picked.iter().all(|x| (0..3).contains(x)));

    let empty = Vec::<i32>::new()
        .chained()
        .random_combination_with_replacement_with_rng(1, &mut rng());
    assert!(empty.is_err());
    let nothing = Vec::<i32>::new()
        .chained()
        .random_combination_with_replacement_with_rng(0, &mut rng());
    assert_eq!(nothing, Ok(vec![]));
}

#[test]
fn test_random_product() {
    let picked = vec![1, 2]
        .chained()
        .random_product_with_rng(vec![vec![10, 20, 30]], 2, &mut rng())
        .unwrap();
    assert_eq!(picked.len(), 4);
    for (position, value) in picked.iter().enumerate() {
        if position % 2 == 0 {
            assert!([1, 2].contains(value));
        } else {
            assert!([10, 20, 30].contains(value));
        }
    }

    let empty_pool = vec![1].chained().random_product_with_rng(vec![vec![]], 1, &mut rng());
    assert!(matches!(empty_pool, Err(ChainError::InvalidArgument(_))));
}

#[test]
fn test_same_seed_same_sample() {
    let a = (0..100).chained().random_permutation_with_rng(Some(10), &mut rng());
    let b = (0..100).chained().random_permutation_with_rng(Some(10), &mut rng());
    assert_eq!(a, b);
}

#[test]
fn test_thread_rng_variants() {
    assert_eq!((0..10).chained().random_permutation(None).unwrap().len(), 10);
    assert_eq!((0..10).chained().random_combination(3).unwrap().len(), 3);
    assert_eq!(
        (0..10).chained().random_combination_with_replacement(3).unwrap().len(),
        3
    );

    let picked = (0..10).chained().random_product(vec![vec![-1]], 1).unwrap();
    assert_eq!(picked.len(), 2);
    assert!((0..10).contains(&picked[0]));
    assert_eq!(picked[1], -1);
}
