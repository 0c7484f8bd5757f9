//! Lazy combinators in the style of Python's `itertools`.

use std::iter::{Chain, Map, SkipWhile, TakeWhile};

use itertools::{
    Combinations, CombinationsWithReplacement, MultiProduct, Permutations, Product, ZipLongest,
};

use super::{Cached, ChainedSequence};
use crate::adaptors::{Accumulate, Compress, Cycle, FilterFalse, GroupBy, StarMap, Tee};
use crate::config::{forwarding_mode, ForwardingMode};
use crate::error::ChainResult;
use crate::recipes::{self, LeftAndRight};
use crate::router::{At, CallMut};
use crate::sentinel::Arg;

impl<I: Iterator> ChainedSequence<I> {
    /// Repeat the sequence forever. The first pass is saved, so one-shot
    /// sources cycle too; an empty sequence stays empty.
    pub fn cycle(self) -> ChainedSequence<Cycle<I>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::cycle::<I>, (), At::<0>)
    }

    /// Running fold. With an initial value, that value is emitted first.
    ///
    /// Supplying an initial value needs the modern forwarding mode.
    pub fn accumulate<F>(
        self,
        f: F,
        initial: Arg<I::Item>,
    ) -> ChainResult<ChainedSequence<Accumulate<I, F>>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let mode = match initial {
            Arg::Present(_) => forwarding_mode()?,
            Arg::Omitted => ForwardingMode::default(),
        };
        self.accumulate_with_mode(mode, f, initial)
    }

    pub fn accumulate_with_mode<F>(
        self,
        mode: ForwardingMode,
        f: F,
        initial: Arg<I::Item>,
    ) -> ChainResult<ChainedSequence<Accumulate<I, F>>>
    where
        I::Item: Clone,
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        if initial.is_present() {
            mode.check_initial("accumulate")?;
        }
        Ok(self.pipe(recipes::accumulate::<I, F>, (f, initial.into_option()), At::<0>))
    }

    pub fn chain<J>(self, other: J) -> ChainedSequence<Chain<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        self.pipe(recipes::chain::<I, J>, (other,), At::<0>)
    }

    /// Keep the elements whose selector is `true`; stops at the shorter side.
    pub fn compress<J>(self, selectors: J) -> ChainedSequence<Compress<I, J::IntoIter>>
    where
        J: IntoIterator<Item = bool>,
    {
        self.pipe(recipes::compress::<I, J>, (selectors,), At::<0>)
    }

    pub fn dropwhile<P>(self, pred: P) -> ChainedSequence<SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.pipe(recipes::dropwhile::<P, I>, (pred,), At::<1>)
    }

    pub fn takewhile<P>(self, pred: P) -> ChainedSequence<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.pipe(recipes::takewhile::<P, I>, (pred,), At::<1>)
    }

    /// Keep the elements for which `pred` is false.
    pub fn filterfalse<P>(self, pred: P) -> ChainedSequence<FilterFalse<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.pipe(recipes::filterfalse::<P, I>, (pred,), At::<1>)
    }

    /// Runs of consecutive elements with equal keys, as `(key, group)`.
    pub fn groupby<F, K>(self, key: F) -> ChainedSequence<GroupBy<I, F, K>>
    where
        F: FnMut(&I::Item) -> K,
        K: PartialEq,
    {
        self.pipe(recipes::groupby::<I, F, K>, (key,), At::<0>)
    }

    /// Apply `f` to each element, spreading tuple elements over its
    /// parameters: `[(2, 5), (3, 2)].starmap(pow)`.
    pub fn starmap<F>(self, f: F) -> ChainedSequence<StarMap<I, F>>
    where
        F: CallMut<I::Item>,
    {
        self.pipe(recipes::starmap::<F, I>, (f,), At::<1>)
    }

    /// Split into `n` independent sequences over the same source.
    ///
    /// Elements are buffered until every branch has read them.
    pub fn tee(self, n: usize) -> Cached<ChainedSequence<Tee<I>>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::tee::<I>, (n,), At::<0>)
            .map(ChainedSequence::new)
            .cache()
    }

    /// Zip to the longer side, padding the shorter with `None`.
    pub fn zip_longest<J>(
        self,
        other: J,
    ) -> ChainedSequence<Map<ZipLongest<I, J::IntoIter>, LeftAndRight<I::Item, J::Item>>>
    where
        J: IntoIterator,
    {
        self.pipe(recipes::zip_longest::<I, J>, (other,), At::<0>)
    }

    pub fn product<J>(self, other: J) -> ChainedSequence<Product<I, J::IntoIter>>
    where
        I::Item: Clone,
        J: IntoIterator,
        J::IntoIter: Clone,
    {
        self.pipe(recipes::product::<I, J>, (other,), At::<0>)
    }

    /// Cartesian product of the sequence with itself, as `Vec` rows.
    pub fn product_repeat(
        self,
        repeat: usize,
    ) -> ChainedSequence<MultiProduct<std::vec::IntoIter<I::Item>>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::product_repeat::<I>, (repeat,), At::<0>)
    }

    /// Ordered arrangements of length `r`, or of every element when `r` is
    /// `None`.
    pub fn permutations(
        self,
        r: Option<usize>,
    ) -> ChainedSequence<Permutations<std::vec::IntoIter<I::Item>>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::permutations::<I>, (r,), At::<0>)
    }

    pub fn combinations(self, r: usize) -> ChainedSequence<Combinations<I>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::combinations::<I>, (r,), At::<0>)
    }

    pub fn combinations_with_replacement(
        self,
        r: usize,
    ) -> ChainedSequence<CombinationsWithReplacement<I>>
    where
        I::Item: Clone,
    {
        self.pipe(recipes::combinations_with_replacement::<I>, (r,), At::<0>)
    }
}
