//! Built-in style operations: collecting, ordering and the basic
//! element-wise adaptors.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use std::iter::{Filter, Map, Rev, Sum, Zip};
use std::ops::Add;

use super::ChainedSequence;
use crate::adaptors::{EnumerateFrom, Transpose};
use crate::config::{forwarding_mode, ForwardingMode};
use crate::error::{ChainError, ChainResult};
use crate::recipes;
use crate::router::At;
use crate::sentinel::Arg;

/// The first element that no later element beats. A challenger replaces the
/// incumbent only when it compares as `prefer`, so ties keep the earlier one.
fn first_extremum<I>(iter: I, prefer: Ordering) -> Option<I::Item>
where
    I: Iterator,
    I::Item: Ord,
{
    let mut best = None;
    for item in iter {
        let replace = match &best {
            Some(incumbent) => item.cmp(incumbent) == prefer,
            None => true,
        };
        if replace {
            best = Some(item);
        }
    }
    best
}

fn first_extremum_by_key<I, F, K>(iter: I, mut key: F, prefer: Ordering) -> Option<I::Item>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Ord,
{
    let mut best: Option<(K, I::Item)> = None;
    for item in iter {
        let k = key(&item);
        let replace = match &best {
            Some((incumbent, _)) => k.cmp(incumbent) == prefer,
            None => true,
        };
        if replace {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}

fn or_default<T>(found: Option<T>, default: Arg<T>) -> ChainResult<T> {
    found.or(default.into_option()).ok_or(ChainError::EmptySequence)
}

impl<I: Iterator> ChainedSequence<I> {
    pub fn all(mut self) -> bool
    where
        I: Iterator<Item = bool>,
    {
        self.iter.all(|flag| flag)
    }

    pub fn any(mut self) -> bool
    where
        I: Iterator<Item = bool>,
    {
        self.iter.any(|flag| flag)
    }

    pub fn list(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    pub fn tuple(self) -> Box<[I::Item]> {
        self.iter.collect()
    }

    pub fn set(self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.iter.collect()
    }

    /// Immutable, ordered set of the elements.
    pub fn frozenset(self) -> BTreeSet<I::Item>
    where
        I::Item: Ord,
    {
        self.iter.collect()
    }

    /// Collect key/value pairs; later pairs overwrite earlier ones.
    pub fn dict<K, V>(self) -> HashMap<K, V>
    where
        I: Iterator<Item = (K, V)>,
        K: Eq + Hash,
    {
        self.iter.collect()
    }

    /// Pair each element with a running index beginning at `start`.
    pub fn enumerate(self, start: usize) -> ChainedSequence<EnumerateFrom<I>> {
        self.pipe(recipes::enumerate::<I>, (start,), At::<0>)
    }

    pub fn filter<P>(self, pred: P) -> ChainedSequence<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.pipe(recipes::filter::<P, I>, (pred,), At::<1>)
    }

    pub fn map<F, U>(self, f: F) -> ChainedSequence<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        self.pipe(recipes::map::<F, I, U>, (f,), At::<1>)
    }

    /// The largest element; the first one wins a tie.
    ///
    /// An empty sequence yields `default` when one is given and
    /// `EmptySequence` otherwise.
    pub fn max(self, default: Arg<I::Item>) -> ChainResult<I::Item>
    where
        I::Item: Ord,
    {
        or_default(first_extremum(self.iter, Ordering::Greater), default)
    }

    pub fn min(self, default: Arg<I::Item>) -> ChainResult<I::Item>
    where
        I::Item: Ord,
    {
        or_default(first_extremum(self.iter, Ordering::Less), default)
    }

    /// The element with the largest key; the first one wins a tie.
    pub fn max_by_key<F, K>(self, key: F, default: Arg<I::Item>) -> ChainResult<I::Item>
    where
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        or_default(first_extremum_by_key(self.iter, key, Ordering::Greater), default)
    }

    pub fn min_by_key<F, K>(self, key: F, default: Arg<I::Item>) -> ChainResult<I::Item>
    where
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        or_default(first_extremum_by_key(self.iter, key, Ordering::Less), default)
    }

    /// `max` with a key that may be passed explicitly as `None`.
    ///
    /// How a `None` key is treated depends on the process forwarding mode;
    /// see [`max_with_mode`](Self::max_with_mode).
    pub fn max_with<F, K>(self, key: Option<F>, default: Arg<I::Item>) -> ChainResult<I::Item>
    where
        I::Item: Ord,
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        match key {
            Some(key) => self.max_by_key(key, default),
            None => self.max_with_mode(forwarding_mode()?, None::<F>, default),
        }
    }

    /// `max` with a nullable key under an explicit forwarding mode. The
    /// modern convention compares the elements themselves when the key is
    /// `None`; the legacy one rejects it.
    pub fn max_with_mode<F, K>(
        self,
        mode: ForwardingMode,
        key: Option<F>,
        default: Arg<I::Item>,
    ) -> ChainResult<I::Item>
    where
        I::Item: Ord,
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        match key {
            Some(key) => self.max_by_key(key, default),
            None => {
                mode.check_null_key("max")?;
                self.max(default)
            }
        }
    }

    pub fn min_with<F, K>(self, key: Option<F>, default: Arg<I::Item>) -> ChainResult<I::Item>
    where
        I::Item: Ord,
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        match key {
            Some(key) => self.min_by_key(key, default),
            None => self.min_with_mode(forwarding_mode()?, None::<F>, default),
        }
    }

    pub fn min_with_mode<F, K>(
        self,
        mode: ForwardingMode,
        key: Option<F>,
        default: Arg<I::Item>,
    ) -> ChainResult<I::Item>
    where
        I::Item: Ord,
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        match key {
            Some(key) => self.min_by_key(key, default),
            None => {
                mode.check_null_key("min")?;
                self.min(default)
            }
        }
    }

    pub fn reversed(self) -> ChainedSequence<Rev<I>>
    where
        I: DoubleEndedIterator,
    {
        self.pipe(<I as Iterator>::rev, (), At::<0>)
    }

    pub fn sorted(self) -> Vec<I::Item>
    where
        I::Item: Ord,
    {
        let mut items = self.list();
        items.sort();
        items
    }

    /// Stable sort by key. With `reverse`, equal keys still keep their
    /// original relative order.
    pub fn sorted_by_key<F, K>(self, mut key: F, reverse: bool) -> Vec<I::Item>
    where
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        let mut items = self.list();
        if reverse {
            items.sort_by_cached_key(|item| Reverse(key(item)));
        } else {
            items.sort_by_cached_key(key);
        }
        items
    }

    /// Sum of the elements, starting from `start` when given.
    pub fn sum(self, start: Arg<I::Item>) -> I::Item
    where
        I::Item: Sum + Add<Output = I::Item>,
    {
        match start {
            Arg::Omitted => self.iter.sum(),
            Arg::Present(start) => self.iter.fold(start, |total, item| total + item),
        }
    }

    pub fn zip<J>(self, other: J) -> ChainedSequence<Zip<I, J::IntoIter>>
    where
        J: IntoIterator,
    {
        self.pipe(recipes::zip::<I, J>, (other,), At::<0>)
    }

    /// Turn a sequence of rows into a sequence of columns, stopping at the
    /// shortest row.
    pub fn unzip(self) -> ChainedSequence<Transpose<<I::Item as IntoIterator>::IntoIter>>
    where
        I::Item: IntoIterator,
    {
        self.pipe(recipes::unzip::<I>, (), At::<0>)
    }
}
