//! The forwarded-operation catalog.
//!
//! Free functions with fixed positional signatures, in the style of the
//! itertools recipes: some take the sequence first (`chain(it, other)`),
//! some take it later (`take(n, it)`). `ChainedSequence` binds each of them
//! through the argument router, naming the slot its sequence belongs in.
//!
//! | Function | Slot | Description |
//! |----------|------|-------------|
//! | `enumerate` | 0 | Pairs with a running index from `start` |
//! | `filter` / `filterfalse` | 1 | Keep elements matching / failing a predicate |
//! | `map` / `starmap` | 1 | Apply a function / apply it to tuple items |
//! | `zip` / `chain` / `compress` | 0 | Combine with a second sequence |
//! | `dropwhile` / `takewhile` | 1 | Prefix handling |
//! | `take` / `tail` / `prepend` | 1 | Bounded prefix, eager suffix, one extra head |
//! | `consume` | 0 | Advance and return the rest |
//! | `nth` / `quantify` / `all_equal` / `first_true` / `dotproduct` | 0 | Terminal recipes |
//! | `padnone` / `ncycles` / `flatten` / `pairwise` / `grouper` | 0 | Shape changes |
//! | `partition` | 1 | Split by predicate into two lazy halves |
//! | `powerset` / `roundrobin` / `unique_*` | 0 | Set-like recipes |
//! | `random_*` / `nth_combination` | 0 | Sampling and direct combination lookup |

use std::collections::VecDeque;
use std::hash::Hash;
use std::iter::{Chain, Filter, Flatten, Map, Once, SkipWhile, Take, TakeWhile, Zip};
use std::ops::Mul;

use itertools::{
    Combinations, CombinationsWithReplacement, EitherOrBoth, Interleave, Itertools,
    MultiProduct, Permutations, Powerset, Product, TupleWindows, Unique, UniqueBy, ZipLongest,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::adaptors::{
    self, Accumulate, Compress, Cycle, EnumerateFrom, FilterFalse, GroupBy, Grouper, ISlice,
    PadNone, StarMap, Tee, Transpose, UniqueJustSeenBy,
};
use crate::error::{ChainError, ChainResult};
use crate::router::CallMut;

type Item<I> = <I as IntoIterator>::Item;

// ================================
// Built-in style functions
// ================================

pub fn enumerate<I: IntoIterator>(iterable: I, start: usize) -> EnumerateFrom<I::IntoIter> {
    EnumerateFrom { iter: iterable.into_iter(), index: start }
}

pub fn filter<P, I>(pred: P, iterable: I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&Item<I>) -> bool,
{
    iterable.into_iter().filter(pred)
}

pub fn filterfalse<P, I>(pred: P, iterable: I) -> FilterFalse<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&Item<I>) -> bool,
{
    FilterFalse { iter: iterable.into_iter(), pred }
}

pub fn map<F, I, U>(f: F, iterable: I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(Item<I>) -> U,
{
    iterable.into_iter().map(f)
}

pub fn zip<I, J>(iterable: I, other: J) -> Zip<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator,
{
    iterable.into_iter().zip(other)
}

/// Transpose rows into columns, stopping at the shortest row.
pub fn unzip<I>(rows: I) -> Transpose<<Item<I> as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    Item<I>: IntoIterator,
{
    Transpose::new(rows.into_iter().map(IntoIterator::into_iter).collect())
}

// ================================
// itertools
// ================================

pub fn accumulate<I, F>(iterable: I, f: F, initial: Option<Item<I>>) -> Accumulate<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(Item<I>, Item<I>) -> Item<I>,
{
    Accumulate::new(iterable.into_iter(), f, initial)
}

pub fn chain<I, J>(iterable: I, other: J) -> Chain<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator<Item = Item<I>>,
{
    iterable.into_iter().chain(other)
}

pub fn compress<I, J>(iterable: I, selectors: J) -> Compress<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator<Item = bool>,
{
    Compress { iter: iterable.into_iter(), selectors: selectors.into_iter() }
}

pub fn cycle<I: IntoIterator>(iterable: I) -> Cycle<I::IntoIter> {
    Cycle::new(iterable.into_iter())
}

pub fn dropwhile<P, I>(pred: P, iterable: I) -> SkipWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&Item<I>) -> bool,
{
    iterable.into_iter().skip_while(pred)
}

pub fn takewhile<P, I>(pred: P, iterable: I) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&Item<I>) -> bool,
{
    iterable.into_iter().take_while(pred)
}

pub fn groupby<I, F, K>(iterable: I, key: F) -> GroupBy<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&Item<I>) -> K,
{
    GroupBy::new(iterable.into_iter(), key)
}

pub fn islice<I>(
    iterable: I,
    start: usize,
    stop: Option<usize>,
    step: usize,
) -> ChainResult<ISlice<I::IntoIter>>
where
    I: IntoIterator,
{
    ISlice::new(iterable.into_iter(), start, stop, step)
}

pub fn starmap<F, I>(f: F, iterable: I) -> StarMap<I::IntoIter, F>
where
    I: IntoIterator,
    F: CallMut<Item<I>>,
{
    StarMap { iter: iterable.into_iter(), f }
}

pub fn tee<I: IntoIterator>(iterable: I, n: usize) -> Vec<Tee<I::IntoIter>> {
    adaptors::tee(iterable.into_iter(), n)
}

/// Splits a `zip_longest` pair into two options.
pub type LeftAndRight<T, U> = fn(EitherOrBoth<T, U>) -> (Option<T>, Option<U>);

pub fn zip_longest<I, J>(
    iterable: I,
    other: J,
) -> Map<ZipLongest<I::IntoIter, J::IntoIter>, LeftAndRight<Item<I>, Item<J>>>
where
    I: IntoIterator,
    J: IntoIterator,
{
    iterable
        .into_iter()
        .zip_longest(other)
        .map(EitherOrBoth::left_and_right as LeftAndRight<Item<I>, Item<J>>)
}

pub fn product<I, J>(iterable: I, other: J) -> Product<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
    J: IntoIterator,
    J::IntoIter: Clone,
{
    iterable.into_iter().cartesian_product(other)
}

/// Cartesian product of the sequence with itself, `repeat` times.
pub fn product_repeat<I>(iterable: I, repeat: usize) -> MultiProduct<std::vec::IntoIter<Item<I>>>
where
    I: IntoIterator,
    Item<I>: Clone,
{
    let pool: Vec<_> = iterable.into_iter().collect();
    std::iter::repeat(pool)
        .take(repeat)
        .map(Vec::into_iter)
        .multi_cartesian_product()
}

/// Permutations of length `r`, or of the full length when `r` is `None`.
pub fn permutations<I>(iterable: I, r: Option<usize>) -> Permutations<std::vec::IntoIter<Item<I>>>
where
    I: IntoIterator,
    Item<I>: Clone,
{
    let pool: Vec<_> = iterable.into_iter().collect();
    let r = r.unwrap_or(pool.len());
    pool.into_iter().permutations(r)
}

pub fn combinations<I>(iterable: I, r: usize) -> Combinations<I::IntoIter>
where
    I: IntoIterator,
    Item<I>: Clone,
{
    iterable.into_iter().combinations(r)
}

pub fn combinations_with_replacement<I>(
    iterable: I,
    r: usize,
) -> CombinationsWithReplacement<I::IntoIter>
where
    I: IntoIterator,
    Item<I>: Clone,
{
    iterable.into_iter().combinations_with_replacement(r)
}

// ================================
// itertools recipes
// ================================

pub fn take<I: IntoIterator>(n: usize, iterable: I) -> Take<I::IntoIter> {
    iterable.into_iter().take(n)
}

pub fn prepend<I: IntoIterator>(value: Item<I>, iterable: I) -> Chain<Once<Item<I>>, I::IntoIter> {
    std::iter::once(value).chain(iterable)
}

/// The last `n` elements. Consumes the whole source.
pub fn tail<I: IntoIterator>(n: usize, iterable: I) -> std::collections::vec_deque::IntoIter<Item<I>> {
    let mut window = VecDeque::new();
    if n > 0 {
        for item in iterable {
            if window.len() == n {
                window.pop_front();
            }
            window.push_back(item);
        }
    }
    window.into_iter()
}

/// Advance `n` steps, or to the end when `n` is `None`, and return the rest.
pub fn consume<I: IntoIterator>(iterator: I, n: Option<usize>) -> I::IntoIter {
    let mut iter = iterator.into_iter();
    match n {
        Some(0) => {}
        Some(n) => {
            iter.nth(n - 1);
        }
        None => iter.by_ref().for_each(drop),
    }
    iter
}

pub fn nth<I: IntoIterator>(iterable: I, n: usize, default: Option<Item<I>>) -> Option<Item<I>> {
    iterable.into_iter().nth(n).or(default)
}

pub fn all_equal<I>(iterable: I) -> bool
where
    I: IntoIterator,
    Item<I>: PartialEq,
{
    iterable.into_iter().all_equal()
}

pub fn quantify<I, P>(iterable: I, mut pred: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&Item<I>) -> bool,
{
    iterable.into_iter().filter(|item| pred(item)).count()
}

pub fn padnone<I: IntoIterator>(iterable: I) -> PadNone<I::IntoIter> {
    PadNone { iter: iterable.into_iter(), done: false }
}

/// The sequence repeated `n` times. The source is read once up front.
pub fn ncycles<I>(iterable: I, n: usize) -> Take<std::iter::Cycle<std::vec::IntoIter<Item<I>>>>
where
    I: IntoIterator,
    Item<I>: Clone,
{
    let saved: Vec<_> = iterable.into_iter().collect();
    let total = saved.len().saturating_mul(n);
    saved.into_iter().cycle().take(total)
}

pub fn dotproduct<I, J, T>(vec1: I, vec2: J) -> T
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    T: Mul<Output = T> + std::iter::Sum,
{
    vec1.into_iter().zip(vec2).map(|(a, b)| a * b).sum()
}

pub fn flatten<I>(list_of_lists: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    Item<I>: IntoIterator,
{
    list_of_lists.into_iter().flatten()
}

pub fn pairwise<I>(iterable: I) -> TupleWindows<I::IntoIter, (Item<I>, Item<I>)>
where
    I: IntoIterator,
    Item<I>: Clone,
{
    iterable.into_iter().tuple_windows()
}

pub fn grouper<I>(iterable: I, n: usize, fillvalue: Option<Item<I>>) -> Grouper<I::IntoIter>
where
    I: IntoIterator,
    Item<I>: Clone,
{
    Grouper::new(iterable.into_iter(), n, fillvalue)
}

/// Split into `(failing, passing)` lazy halves sharing one source.
#[allow(clippy::type_complexity)]
pub fn partition<P, I>(
    pred: P,
    iterable: I,
) -> (FilterFalse<Tee<I::IntoIter>, P>, Filter<Tee<I::IntoIter>, P>)
where
    I: IntoIterator,
    Item<I>: Clone,
    P: FnMut(&Item<I>) -> bool + Clone,
{
    let (failing, passing) = adaptors::tee_pair(iterable.into_iter());
    (FilterFalse { iter: failing, pred: pred.clone() }, passing.filter(pred))
}

pub fn powerset<I>(iterable: I) -> Powerset<I::IntoIter>
where
    I: IntoIterator,
    Item<I>: Clone,
{
    iterable.into_iter().powerset()
}

pub fn roundrobin<I, J>(iterable: I, other: J) -> Interleave<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator<Item = Item<I>>,
{
    iterable.into_iter().interleave(other)
}

pub fn unique_everseen<I>(iterable: I) -> Unique<I::IntoIter>
where
    I: IntoIterator,
    Item<I>: Clone + Eq + Hash,
{
    iterable.into_iter().unique()
}

pub fn unique_everseen_by<I, F, K>(iterable: I, key: F) -> UniqueBy<I::IntoIter, K, F>
where
    I: IntoIterator,
    F: FnMut(&Item<I>) -> K,
    K: Eq + Hash,
{
    iterable.into_iter().unique_by(key)
}

pub fn unique_justseen<I>(iterable: I) -> itertools::Dedup<I::IntoIter>
where
    I: IntoIterator,
    Item<I>: PartialEq,
{
    iterable.into_iter().dedup()
}

pub fn unique_justseen_by<I, F, K>(iterable: I, key: F) -> UniqueJustSeenBy<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&Item<I>) -> K,
    K: PartialEq,
{
    UniqueJustSeenBy::new(iterable.into_iter(), key)
}

pub fn first_true<I, P>(iterable: I, default: Item<I>, mut pred: P) -> Item<I>
where
    I: IntoIterator,
    P: FnMut(&Item<I>) -> bool,
{
    iterable.into_iter().find(|item| pred(item)).unwrap_or(default)
}

// ================================
// Random sampling
// ================================

fn choose<T: Clone, R: Rng + ?Sized>(pool: &[T], rng: &mut R) -> ChainResult<T> {
    pool.choose(rng)
        .cloned()
        .ok_or_else(|| ChainError::invalid("Cannot choose from an empty sequence"))
}

/// One random element from each pool, the pools repeated `repeat` times.
pub fn random_product<I, R>(
    iterable: I,
    others: Vec<Vec<Item<I>>>,
    repeat: usize,
    rng: &mut R,
) -> ChainResult<Vec<Item<I>>>
where
    I: IntoIterator,
    Item<I>: Clone,
    R: Rng + ?Sized,
{
    let mut pools = Vec::with_capacity(others.len() + 1);
    pools.push(iterable.into_iter().collect::<Vec<_>>());
    pools.extend(others);
    let mut picked = Vec::with_capacity(pools.len() * repeat);
    for _ in 0..repeat {
        for pool in &pools {
            picked.push(choose(pool, rng)?);
        }
    }
    Ok(picked)
}

/// A random ordering of `r` distinct elements (all of them when `r` is `None`).
pub fn random_permutation<I, R>(iterable: I, r: Option<usize>, rng: &mut R) -> ChainResult<Vec<Item<I>>>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut pool: Vec<_> = iterable.into_iter().collect();
    let r = r.unwrap_or(pool.len());
    if r > pool.len() {
        return Err(ChainError::invalid("Sample larger than population or is negative"));
    }
    pool.shuffle(rng);
    pool.truncate(r);
    Ok(pool)
}

/// `r` distinct elements in their original relative order.
pub fn random_combination<I, R>(iterable: I, r: usize, rng: &mut R) -> ChainResult<Vec<Item<I>>>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let pool: Vec<_> = iterable.into_iter().collect();
    if r > pool.len() {
        return Err(ChainError::invalid("Sample larger than population or is negative"));
    }
    let mut indices = rand::seq::index::sample(rng, pool.len(), r).into_vec();
    indices.sort_unstable();
    let mut slots: Vec<Option<_>> = pool.into_iter().map(Some).collect();
    Ok(indices.into_iter().filter_map(|i| slots[i].take()).collect())
}

/// `r` elements drawn with replacement, in original relative order.
pub fn random_combination_with_replacement<I, R>(
    iterable: I,
    r: usize,
    rng: &mut R,
) -> ChainResult<Vec<Item<I>>>
where
    I: IntoIterator,
    Item<I>: Clone,
    R: Rng + ?Sized,
{
    let pool: Vec<_> = iterable.into_iter().collect();
    if pool.is_empty() && r > 0 {
        return Err(ChainError::invalid("Cannot choose from an empty sequence"));
    }
    let mut indices: Vec<usize> = (0..r).map(|_| rng.gen_range(0..pool.len())).collect();
    indices.sort_unstable();
    Ok(indices.into_iter().map(|i| pool[i].clone()).collect())
}

fn binomial(n: usize, k: usize) -> Option<u128> {
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(result)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// `c * num / den` where the division is known to be exact and the result is
// at most `c`. Reducing by the gcd first keeps the product from overflowing.
fn scale_exact(c: u128, num: u128, den: u128) -> u128 {
    let g = gcd(num, den);
    c / (den / g) * (num / g)
}

/// The combination at `index` in lexicographic order; negative indices
/// count from the end.
pub fn nth_combination<I>(iterable: I, r: usize, index: i128) -> ChainResult<Vec<Item<I>>>
where
    I: IntoIterator,
{
    let pool: Vec<_> = iterable.into_iter().collect();
    let n = pool.len();
    if r > n {
        return Err(ChainError::invalid(format!("r must be at most {}; got {}", n, r)));
    }
    let total = binomial(n, r)
        .ok_or_else(|| ChainError::invalid("number of combinations overflows"))?;
    let total = i128::try_from(total)
        .map_err(|_| ChainError::invalid("number of combinations overflows"))?;
    let index = if index < 0 { index + total } else { index };
    if index < 0 || index >= total {
        return Err(ChainError::IndexOutOfRange);
    }

    let mut index = index as u128;
    let mut c = total as u128;
    let (mut n_left, mut r_left) = (n as u128, r as u128);
    let mut positions = Vec::with_capacity(r);
    while r_left > 0 {
        c = scale_exact(c, r_left, n_left);
        n_left -= 1;
        r_left -= 1;
        while index >= c {
            index -= c;
            c = scale_exact(c, n_left - r_left, n_left);
            n_left -= 1;
        }
        positions.push(n - 1 - n_left as usize);
    }

    let mut slots: Vec<Option<_>> = pool.into_iter().map(Some).collect();
    Ok(positions.into_iter().filter_map(|i| slots[i].take()).collect())
}
