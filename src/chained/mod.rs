//! The `ChainedSequence` wrapper.
//!
//! A `ChainedSequence<I>` owns exactly one iterator. Chaining methods take
//! the wrapper by value and return a new wrapper around a lazily derived
//! iterator; terminal methods drive the iterator and return a concrete
//! value. Nothing is evaluated until a terminal method runs.
//!
//! # One-shot sources
//!
//! The wrapper does not make its source restartable. When it wraps a
//! single-pass cursor, the elements consumed by one terminal operation are
//! gone for the next. [`ChainedSequence::by_ref`] exposes that behaviour
//! deliberately:
//!
//! ```
//! use chained_sequence::ChainedSequence;
//!
//! let mut seq = ChainedSequence::new(vec![1, 2, 3, 4]);
//! assert_eq!(seq.by_ref().take(2).list(), vec![1, 2]);
//! assert_eq!(seq.list(), vec![3, 4]);
//! ```
//!
//! Wrappers over cloneable iterators (for example after
//! [`ChainedSequence::cache`]) are repeatable: they compare with `==` and
//! can be cloned before each traversal.
//!
//! Advancing the same wrapper from two places at once is not guarded
//! against; the wrapper holds no locks.

mod builtins;
mod combinators;
mod constructors;
mod functools;
mod recipes;
mod statistics;

use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::adaptors::ISlice;
use crate::error::{ChainError, ChainResult};
use crate::router::{self, At, Call, Splice};
use crate::sentinel::{drop_omitted, Arg};

/// Fluent wrapper around a single lazy iterator.
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct ChainedSequence<I> {
    iter: I,
}

/// A repeatable, materialized sequence.
pub type Cached<T> = ChainedSequence<std::vec::IntoIter<T>>;

impl<I: Iterator> ChainedSequence<I> {
    /// Wrap anything iterable. No elements are consumed.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        ChainedSequence { iter: source.into_iter() }
    }

    /// Unwrap the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }

    /// Borrow the underlying cursor as a new wrapper.
    ///
    /// Elements consumed through the borrowed wrapper are consumed from this
    /// one too.
    pub fn by_ref(&mut self) -> ChainedSequence<&mut I> {
        ChainedSequence { iter: &mut self.iter }
    }

    /// Splice the underlying iterator into argument slot `N` of `f` and wrap
    /// what `f` returns.
    ///
    /// `args` holds the other positional arguments in order; the sequence is
    /// inserted before `args.N`.
    ///
    /// ```
    /// use chained_sequence::{recipes, At, ChainedSequence};
    ///
    /// // recipes::take(n, iterable) expects the sequence second
    /// let first_two = ChainedSequence::new(vec![1, 2, 3])
    ///     .pipe(recipes::take, (2,), At::<1>)
    ///     .list();
    /// assert_eq!(first_two, vec![1, 2]);
    /// ```
    pub fn pipe<F, A, const N: usize>(
        self,
        f: F,
        args: A,
        slot: At<N>,
    ) -> ChainedSequence<<F::Output as IntoIterator>::IntoIter>
    where
        A: Splice<I, N>,
        F: Call<A::Output>,
        F::Output: IntoIterator,
    {
        ChainedSequence::new(router::route(f, args, self.iter, slot))
    }

    /// Like [`pipe`](Self::pipe), for functions that can reject their
    /// arguments.
    pub fn try_pipe<F, A, R, const N: usize>(
        self,
        f: F,
        args: A,
        slot: At<N>,
    ) -> ChainResult<ChainedSequence<R::IntoIter>>
    where
        A: Splice<I, N>,
        F: Call<A::Output, Output = ChainResult<R>>,
        R: IntoIterator,
    {
        router::route(f, args, self.iter, slot).map(ChainedSequence::new)
    }

    /// Compare element-wise with any iterable, consuming both.
    pub fn seq_eq<J>(self, other: J) -> bool
    where
        J: IntoIterator,
        I::Item: PartialEq<J::Item>,
    {
        self.iter.eq(other)
    }

    /// The element at `index`, found by consuming up to it.
    ///
    /// Negative indices and indices above `isize::MAX` are rejected with
    /// their own errors; running out of elements first is a plain
    /// `IndexOutOfRange`.
    pub fn get(self, index: i128) -> ChainResult<I::Item> {
        if index < 0 {
            return Err(ChainError::NegativeIndex(index));
        }
        let max = isize::MAX as i128;
        if index > max {
            return Err(ChainError::IndexTooLarge { index, max });
        }
        router::route(crate::recipes::nth::<I>, (index as usize, None), self.iter, At::<0>)
            .ok_or(ChainError::IndexOutOfRange)
    }

    /// Python-style `islice`.
    ///
    /// With `stop` and `step` omitted, `start` is the stop. `stop` may be
    /// given as `None` for an unbounded slice. A zero step is rejected.
    pub fn islice(
        self,
        start: usize,
        stop: Arg<Option<usize>>,
        step: Arg<usize>,
    ) -> ChainResult<ChainedSequence<ISlice<I>>> {
        let args = drop_omitted([Arg::Present(Some(start)), stop, step.map(Some)]);
        let (start, stop, step) = match args.as_slice() {
            [stop] => (0, *stop, 1),
            [start, stop] => (start.unwrap_or(0), *stop, 1),
            [start, stop, step] => (start.unwrap_or(0), *stop, step.unwrap_or(1)),
            _ => return Err(ChainError::invalid("islice expected 1 to 3 arguments")),
        };
        self.try_pipe(crate::recipes::islice::<I>, (start, stop, step), At::<0>)
    }

    /// Slice by a range of positions: `seq.slice(2..5)`, `seq.slice(..3)`.
    pub fn slice<R: RangeBounds<usize>>(self, range: R) -> ChainedSequence<ISlice<I>> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => Some(e.saturating_add(1)),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => None,
        };
        ChainedSequence::new(ISlice::contiguous(self.iter, start, stop))
    }

    /// Materialize into a repeatable sequence.
    pub fn cache(self) -> Cached<I::Item> {
        let items: Vec<_> = self.iter.collect();
        log::trace!("cached {} elements", items.len());
        ChainedSequence::new(items)
    }
}

impl<T: 'static> Cached<T> {
    /// Wrap a runtime-typed value, checking that it iterates over `T`.
    ///
    /// Accepts `Vec<T>`, `VecDeque<T>`, `Box<[T]>`, `Option<T>` and
    /// `Cached<T>`. Anything else, including collections of another element
    /// type, fails with [`ChainError::NotIterable`] naming the value's type.
    pub fn try_from_any<V: Any>(value: V) -> ChainResult<Self> {
        let boxed: Box<dyn Any> = Box::new(value);
        let boxed = match boxed.downcast::<Vec<T>>() {
            Ok(items) => return Ok(ChainedSequence::new(*items)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<VecDeque<T>>() {
            Ok(items) => return Ok(ChainedSequence::new(Vec::from(*items))),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<Box<[T]>>() {
            Ok(items) => return Ok(ChainedSequence::new(items.into_vec())),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<Option<T>>() {
            Ok(item) => return Ok(ChainedSequence::new(item.into_iter().collect::<Vec<_>>())),
            Err(other) => other,
        };
        match boxed.downcast::<Cached<T>>() {
            Ok(seq) => Ok(*seq),
            Err(_) => Err(ChainError::NotIterable {
                type_name: std::any::type_name::<V>().to_string(),
            }),
        }
    }
}

impl<T> From<Vec<T>> for Cached<T> {
    fn from(items: Vec<T>) -> Self {
        ChainedSequence::new(items)
    }
}

impl<I: Iterator> Iterator for ChainedSequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for ChainedSequence<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<I: fmt::Debug> fmt::Debug for ChainedSequence<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChainedSequence").field(&self.iter).finish()
    }
}

impl<I: fmt::Debug> fmt::Display for ChainedSequence<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainedSequence({:?})", self.iter)
    }
}

fn elementwise_eq<I, T, U>(mut left: I, right: &[U]) -> bool
where
    I: Iterator<Item = T>,
    T: PartialEq<U>,
{
    let mut right = right.iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == *b => {}
            _ => return false,
        }
    }
}

impl<I, J> PartialEq<ChainedSequence<J>> for ChainedSequence<I>
where
    I: Iterator + Clone,
    J: Iterator + Clone,
    I::Item: PartialEq<J::Item>,
{
    fn eq(&self, other: &ChainedSequence<J>) -> bool {
        self.iter.clone().eq(other.iter.clone())
    }
}

impl<I, U> PartialEq<Vec<U>> for ChainedSequence<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        elementwise_eq(self.iter.clone(), other)
    }
}

impl<I, U, const N: usize> PartialEq<[U; N]> for ChainedSequence<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        elementwise_eq(self.iter.clone(), other)
    }
}

/// Extension trait wrapping any iterable in a [`ChainedSequence`]
pub trait IntoChained: IntoIterator + Sized {
    fn chained(self) -> ChainedSequence<Self::IntoIter> {
        ChainedSequence::new(self)
    }
}

impl<T: IntoIterator> IntoChained for T {}
