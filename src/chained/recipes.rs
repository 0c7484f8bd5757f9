//! Bindings for the itertools-recipe catalog, including random sampling.

use std::collections::vec_deque;
use std::hash::Hash;
use std::iter::{Chain, Filter, Flatten, Once, Sum, Take};
use std::ops::Mul;

use itertools::{Dedup, Interleave, Powerset, TupleWindows, Unique, UniqueBy};
use rand::Rng;

use super::ChainedSequence;
use crate::adaptors::{FilterFalse, Grouper, PadNone, Tee, UniqueJustSeenBy};
use crate::error::ChainResult;
use crate::recipes;
use crate::router::{self, At};
use crate::sentinel::Arg;

impl<I: Iterator> ChainedSequence<I> {
    pub fn take(self, n: usize) -> ChainedSequence<Take<I>> {
        self.pipe(recipes::take::<I>, (n,), At::<1>)
    }

    pub fn prepend(self, value: I::Item) -> ChainedSequence<Chain<Once<I::Item>, I>> {
        self.pipe(recipes::prepend::<I>, (value,), At::<1>)
    }

    /// The last `n` elements. Reads the whole source when first advanced.
    pub fn tail(self, n: usize) -> ChainedSequence<vec_deque::IntoIter<I::Item>> {
        self.pipe(recipes::tail::<I>, (n,), At::<1>)
    }

    /// Skip `n` elements, or all of them when `n` is `None`, and keep the rest.
    pub fn consume(self, n: Option<usize>) -> ChainedSequence<I> {
        self.pipe(recipes::consume::<I>, (n,), At::<0>)
    }

    pub fn all_equal(self) -> bool
    where
        I::Item: PartialEq,
    {
        router::route(recipes::all_equal::<I>, (), self.iter, At::<0>)
    }

    /// How many elements satisfy `pred`.
    pub fn quantify<P>(self, pred: P) -> usize
    where
        P: FnMut(&I::Item) -> bool,
    {
        router::route(recipes::quantify::<I, P>, (pred,), self.iter, At::<0>)
    }

    pub fn padnone(self) -> ChainedSequence<PadNone<I>> {
        self.pipe(recipes::padnone::<I>, (), At::<0>)
    }

    pub fn ncycles(
        self,
        n: usize,
    ) -> ChainedSequence<Take<std::iter::Cycle<std::vec::IntoIter<I::Item>>>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::ncycles::<I>, (n,), At::<0>)
    }

    pub fn dotproduct<J>(self, other: J) -> I::Item
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: Mul<Output = I::Item> + Sum,
    {
        router::route(recipes::dotproduct::<I, J, I::Item>, (other,), self.iter, At::<0>)
    }

    pub fn flatten(self) -> ChainedSequence<Flatten<I>>
    where
        I::Item: IntoIterator,
    {
        self.pipe(recipes::flatten::<I>, (), At::<0>)
    }

    /// Overlapping pairs of neighbours.
    pub fn pairwise(self) -> ChainedSequence<TupleWindows<I, (I::Item, I::Item)>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::pairwise::<I>, (), At::<0>)
    }

    /// Non-overlapping groups of `n`. The last group is padded with
    /// `fillvalue` when one is given and left short otherwise.
    pub fn grouper(self, n: usize, fillvalue: Arg<I::Item>) -> ChainedSequence<Grouper<I>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::grouper::<I>, (n, fillvalue.into_option()), At::<0>)
    }

    /// Split into the elements failing `pred` and the elements passing it.
    ///
    /// Both halves read from one shared buffer and stay on this thread.
    #[allow(clippy::type_complexity)]
    pub fn partition<P>(
        self,
        pred: P,
    ) -> (ChainedSequence<FilterFalse<Tee<I>, P>>, ChainedSequence<Filter<Tee<I>, P>>)
    where
        I::Item: Clone,
        P: FnMut(&I::Item) -> bool + Clone,
    {
        let (failing, passing) = router::route(recipes::partition::<P, I>, (pred,), self.iter, At::<1>);
        (ChainedSequence::new(failing), ChainedSequence::new(passing))
    }

    /// Every subset, shortest first.
    pub fn powerset(self) -> ChainedSequence<Powerset<I>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::powerset::<I>, (), At::<0>)
    }

    pub fn roundrobin<J>(self, other: J) -> ChainedSequence<Interleave<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        self.pipe(recipes::roundrobin::<I, J>, (other,), At::<0>)
    }

    /// Elements never seen before, by hash equality.
    pub fn unique_everseen(self) -> ChainedSequence<Unique<I>>
    where
        I::Item: Clone + Eq + Hash,
    {
        self.pipe(recipes::unique_everseen::<I>, (), At::<0>)
    }

    pub fn unique_everseen_by<F, K>(self, key: F) -> ChainedSequence<UniqueBy<I, K, F>>
    where
        F: FnMut(&I::Item) -> K,
        K: Eq + Hash,
    {
        self.pipe(recipes::unique_everseen_by::<I, F, K>, (key,), At::<0>)
    }

    /// Drop elements equal to their predecessor.
    pub fn unique_justseen(self) -> ChainedSequence<Dedup<I>>
    where
        I::Item: PartialEq,
    {
        self.pipe(recipes::unique_justseen::<I>, (), At::<0>)
    }

    pub fn unique_justseen_by<F, K>(self, key: F) -> ChainedSequence<UniqueJustSeenBy<I, F, K>>
    where
        F: FnMut(&I::Item) -> K,
        K: PartialEq,
    {
        self.pipe(recipes::unique_justseen_by::<I, F, K>, (key,), At::<0>)
    }

    /// The first element satisfying `pred`, or `default`.
    pub fn first_true<P>(self, default: I::Item, pred: P) -> I::Item
    where
        P: FnMut(&I::Item) -> bool,
    {
        router::route(recipes::first_true::<I, P>, (default, pred), self.iter, At::<0>)
    }

    pub fn random_product(self, others: Vec<Vec<I::Item>>, repeat: usize) -> ChainResult<Vec<I::Item>>
    where
        I::Item: Clone,
    {
        self.random_product_with_rng(others, repeat, &mut rand::thread_rng())
    }

    pub fn random_product_with_rng<R>(
        self,
        others: Vec<Vec<I::Item>>,
        repeat: usize,
        rng: &mut R,
    ) -> ChainResult<Vec<I::Item>>
    where
        I::Item: Clone,
        R: Rng + ?Sized,
    {
        router::route(recipes::random_product::<I, R>, (others, repeat, rng), self.iter, At::<0>)
    }

    pub fn random_permutation(self, r: Option<usize>) -> ChainResult<Vec<I::Item>> {
        self.random_permutation_with_rng(r, &mut rand::thread_rng())
    }

    pub fn random_permutation_with_rng<R>(self, r: Option<usize>, rng: &mut R) -> ChainResult<Vec<I::Item>>
    where
        R: Rng + ?Sized,
    {
        router::route(recipes::random_permutation::<I, R>, (r, rng), self.iter, At::<0>)
    }

    pub fn random_combination(self, r: usize) -> ChainResult<Vec<I::Item>> {
        self.random_combination_with_rng(r, &mut rand::thread_rng())
    }

    pub fn random_combination_with_rng<R>(self, r: usize, rng: &mut R) -> ChainResult<Vec<I::Item>>
    where
        R: Rng + ?Sized,
    {
        router::route(recipes::random_combination::<I, R>, (r, rng), self.iter, At::<0>)
    }

    pub fn random_combination_with_replacement(self, r: usize) -> ChainResult<Vec<I::Item>>
    where
        I::Item: Clone,
    {
        self.random_combination_with_replacement_with_rng(r, &mut rand::thread_rng())
    }

    pub fn random_combination_with_replacement_with_rng<R>(
        self,
        r: usize,
        rng: &mut R,
    ) -> ChainResult<Vec<I::Item>>
    where
        I::Item: Clone,
        R: Rng + ?Sized,
    {
        router::route(
            recipes::random_combination_with_replacement::<I, R>,
            (r, rng),
            self.iter,
            At::<0>,
        )
    }

    /// The combination of length `r` at `index` in lexicographic order,
    /// computed without enumerating the ones before it. Negative indices
    /// count from the end.
    pub fn nth_combination(self, r: usize, index: i128) -> ChainResult<Vec<I::Item>> {
        router::route(recipes::nth_combination::<I>, (r, index), self.iter, At::<0>)
    }
}
