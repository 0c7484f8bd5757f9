use std::fmt::Debug;

use super::ChainedSequence;
use crate::error::{ChainError, ChainResult};
use crate::recipes;
use crate::router::{self, At};
use crate::sentinel::Arg;

fn second<T>(_: T, item: T) -> T {
    item
}

impl<I: Iterator> ChainedSequence<I> {
    /// Left fold.
    ///
    /// Without an initial value the first element seeds the fold, and an
    /// empty sequence is an `EmptySequence` error.
    pub fn reduce<F>(self, f: F, initial: Arg<I::Item>) -> ChainResult<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let mut iter = self.iter;
        let seed = match initial {
            Arg::Present(value) => value,
            Arg::Omitted => iter.next().ok_or(ChainError::EmptySequence)?,
        };
        Ok(iter.fold(seed, f))
    }

    /// Left fold with a fallible step. The first error from `f` is returned
    /// as is.
    pub fn try_reduce<F, E>(self, mut f: F, initial: Arg<I::Item>) -> Result<I::Item, E>
    where
        F: FnMut(I::Item, I::Item) -> Result<I::Item, E>,
        E: From<ChainError>,
    {
        let mut iter = self.iter;
        let mut acc = match initial {
            Arg::Present(value) => value,
            Arg::Omitted => iter.next().ok_or(ChainError::EmptySequence)?,
        };
        for item in iter {
            acc = f(acc, item)?;
        }
        Ok(acc)
    }

    pub fn first(self) -> ChainResult<I::Item> {
        self.get(0).map_err(|e| match e {
            ChainError::IndexOutOfRange => ChainError::EmptySequence,
            other => other,
        })
    }

    pub fn last(self) -> ChainResult<I::Item> {
        self.reduce(second, Arg::Omitted)
    }

    /// Number of elements. Consumes the sequence.
    pub fn len(self) -> usize {
        self.enumerate(1).map(|(position, _)| position).last().unwrap_or(0)
    }

    /// True when there is no first element. Consumes at most one.
    pub fn is_empty(mut self) -> bool {
        self.iter.next().is_none()
    }

    /// The only element.
    ///
    /// Looks at no more than two elements, so it terminates on infinite
    /// sequences that have at least two. The multiple-elements error shows
    /// the first two elements in their `Debug` form, so strings appear
    /// quoted.
    pub fn one(self) -> ChainResult<I::Item>
    where
        I::Item: Debug,
    {
        let mut head = self.take(2);
        match (head.next(), head.next()) {
            (None, _) => Err(ChainError::EmptySequence),
            (Some(only), None) => Ok(only),
            (Some(first), Some(second)) => Err(ChainError::multiple(&first, &second)),
        }
    }

    pub fn nth(self, n: usize) -> Option<I::Item> {
        router::route(recipes::nth::<I>, (n, None), self.iter, At::<0>)
    }

    pub fn nth_or(self, n: usize, default: I::Item) -> I::Item {
        self.nth(n).unwrap_or(default)
    }
}
