//! Iterator adaptors backing the chaining operations that `std::iter` and
//! `itertools` do not provide with the right semantics: Python-style
//! ranges and slices, caching cycles, shared-buffer tees, consecutive
//! grouping, running folds, and the lazy factory producers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use num_traits::CheckedAdd;

use crate::error::{ChainError, ChainResult};
use crate::router::CallMut;

// EnumerateFrom
#[derive(Debug, Clone)]
pub struct EnumerateFrom<I> {
    pub(crate) iter: I,
    pub(crate) index: usize,
}

impl<I: Iterator> Iterator for EnumerateFrom<I> {
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let idx = self.index;
        self.index = self.index.saturating_add(1);
        Some((idx, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

// FilterFalse
#[derive(Clone)]
pub struct FilterFalse<I, P> {
    pub(crate) iter: I,
    pub(crate) pred: P,
}

impl<I: fmt::Debug, P> fmt::Debug for FilterFalse<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterFalse").field("iter", &self.iter).finish()
    }
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let pred = &mut self.pred;
        self.iter.find(|item| !pred(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

// Compress
#[derive(Debug, Clone)]
pub struct Compress<I, J> {
    pub(crate) iter: I,
    pub(crate) selectors: J,
}

impl<I, J> Iterator for Compress<I, J>
where
    I: Iterator,
    J: Iterator<Item = bool>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.selectors.next()? {
                return Some(item);
            }
        }
    }
}

// StarMap
#[derive(Clone)]
pub struct StarMap<I, F> {
    pub(crate) iter: I,
    pub(crate) f: F,
}

impl<I: fmt::Debug, F> fmt::Debug for StarMap<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarMap").field("iter", &self.iter).finish()
    }
}

impl<I, F> Iterator for StarMap<I, F>
where
    I: Iterator,
    F: CallMut<I::Item>,
{
    type Item = F::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let args = self.iter.next()?;
        Some(self.f.call_mut(args))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Python-style `islice`: elements at `start, start + step, ...` below `stop`.
#[derive(Debug, Clone)]
pub struct ISlice<I> {
    iter: I,
    next_index: usize,
    consumed: usize,
    stop: Option<usize>,
    step: usize,
    done: bool,
}

impl<I> ISlice<I> {
    pub fn new(iter: I, start: usize, stop: Option<usize>, step: usize) -> ChainResult<Self> {
        if step == 0 {
            return Err(ChainError::invalid(
                "Step for islice() must be a positive integer or None.",
            ));
        }
        Ok(Self::contiguous(iter, start, stop).with_step(step))
    }

    /// Unit-step slice `start..stop`.
    pub fn contiguous(iter: I, start: usize, stop: Option<usize>) -> Self {
        Self { iter, next_index: start, consumed: 0, stop, step: 1, done: false }
    }

    fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }
}

impl<I: Iterator> Iterator for ISlice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(stop) = self.stop {
            if self.next_index >= stop {
                self.done = true;
                return None;
            }
        }
        match self.iter.nth(self.next_index - self.consumed) {
            Some(item) => {
                self.consumed = self.next_index + 1;
                match self.next_index.checked_add(self.step) {
                    Some(next) => self.next_index = next,
                    None => self.done = true,
                }
                Some(item)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Python-style integer range with a signed, non-zero step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSeq {
    start: i128,
    step: i128,
    len: u128,
}

impl RangeSeq {
    pub fn new(start: i64, stop: i64, step: i64) -> ChainResult<Self> {
        if step == 0 {
            return Err(ChainError::invalid("range() arg 3 must not be zero"));
        }
        let (start, stop, step) = (start as i128, stop as i128, step as i128);
        let len = if step > 0 && start < stop {
            ((stop - start - 1) / step + 1) as u128
        } else if step < 0 && start > stop {
            ((start - stop - 1) / -step + 1) as u128
        } else {
            0
        };
        Ok(Self { start, step, len })
    }

    fn value_at(&self, offset: u128) -> i64 {
        // Every in-bounds offset lands between start and stop, both i64.
        (self.start + self.step * offset as i128) as i64
    }
}

impl Iterator for RangeSeq {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.len == 0 {
            return None;
        }
        let value = self.value_at(0);
        self.start += self.step;
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.len) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for RangeSeq {
    fn next_back(&mut self) -> Option<i64> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.value_at(self.len))
    }
}

/// Types [`Count`] can step through.
///
/// Integers stop at the last value that fits instead of overflowing;
/// floats never stop.
pub trait CountStep: Clone {
    fn checked_step(&self, step: &Self) -> Option<Self>;
}

macro_rules! impl_count_step_checked {
    ($($t:ty),*) => {
        $(
            impl CountStep for $t {
                fn checked_step(&self, step: &Self) -> Option<Self> {
                    CheckedAdd::checked_add(self, step)
                }
            }
        )*
    };
}

impl_count_step_checked!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CountStep for f32 {
    fn checked_step(&self, step: &Self) -> Option<Self> {
        Some(self + step)
    }
}

impl CountStep for f64 {
    fn checked_step(&self, step: &Self) -> Option<Self> {
        Some(self + step)
    }
}

/// Arithmetic progression, unbounded unless the element type runs out.
#[derive(Debug, Clone)]
pub struct Count<T> {
    pub(crate) current: Option<T>,
    pub(crate) step: T,
}

impl<T: CountStep> Iterator for Count<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.current.take()?;
        self.current = current.checked_step(&self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

/// A value repeated forever or `times` times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    pub(crate) value: T,
    pub(crate) remaining: Option<usize>,
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.remaining.as_mut() {
            None => Some(self.value.clone()),
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(self.value.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            None => (usize::MAX, None),
            Some(n) => (n, Some(n)),
        }
    }
}

/// `f(start), f(start + 1), ...`
#[derive(Clone)]
pub struct Tabulate<F> {
    pub(crate) f: F,
    pub(crate) counter: Option<i64>,
}

impl<F> fmt::Debug for Tabulate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tabulate").field("counter", &self.counter).finish()
    }
}

impl<F, T> Iterator for Tabulate<F>
where
    F: FnMut(i64) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let counter = self.counter?;
        self.counter = counter.checked_add(1);
        Some((self.f)(counter))
    }
}

/// Repeatedly call a function with a fixed argument tuple.
#[derive(Clone)]
pub struct RepeatFunc<F, A> {
    pub(crate) f: F,
    pub(crate) args: A,
    pub(crate) remaining: Option<usize>,
}

impl<F, A: fmt::Debug> fmt::Debug for RepeatFunc<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatFunc")
            .field("args", &self.args)
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<F, A> Iterator for RepeatFunc<F, A>
where
    F: CallMut<A>,
    A: Clone,
{
    type Item = F::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(n) = self.remaining.as_mut() {
            if *n == 0 {
                return None;
            }
            *n -= 1;
        }
        Some(self.f.call_mut(self.args.clone()))
    }
}

/// Call a fallible function until it fails.
pub struct IterExcept<F> {
    pub(crate) f: F,
    pub(crate) done: bool,
}

impl<F> fmt::Debug for IterExcept<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterExcept").field("done", &self.done).finish()
    }
}

impl<F, T, E> Iterator for IterExcept<F>
where
    F: FnMut() -> Result<T, E>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match (self.f)() {
            Ok(value) => Some(value),
            Err(_) => {
                self.done = true;
                None
            }
        }
    }
}

/// Cycle that saves the first pass, so one-shot sources can be cycled.
#[derive(Debug, Clone)]
pub struct Cycle<I: Iterator> {
    iter: I,
    saved: Vec<I::Item>,
    index: usize,
    exhausted: bool,
}

impl<I: Iterator> Cycle<I> {
    pub fn new(iter: I) -> Self {
        Self { iter, saved: Vec::new(), index: 0, exhausted: false }
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.exhausted {
            if let Some(item) = self.iter.next() {
                self.saved.push(item.clone());
                return Some(item);
            }
            self.exhausted = true;
        }
        let item = self.saved.get(self.index)?.clone();
        self.index = (self.index + 1) % self.saved.len();
        Some(item)
    }
}

/// Running fold, optionally seeded with an initial value.
#[derive(Clone)]
pub struct Accumulate<I: Iterator, F> {
    iter: I,
    f: F,
    acc: Option<I::Item>,
    initial: Option<I::Item>,
}

impl<I: Iterator, F> Accumulate<I, F> {
    pub fn new(iter: I, f: F, initial: Option<I::Item>) -> Self {
        Self { iter, f, acc: None, initial }
    }
}

impl<I, F> fmt::Debug for Accumulate<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulate")
            .field("iter", &self.iter)
            .field("acc", &self.acc)
            .finish()
    }
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(initial) = self.initial.take() {
            self.acc = Some(initial.clone());
            return Some(initial);
        }
        let item = self.iter.next()?;
        let next = match self.acc.take() {
            Some(acc) => (self.f)(acc, item),
            None => item,
        };
        self.acc = Some(next.clone());
        Some(next)
    }
}

/// Consecutive elements sharing a key, emitted as `(key, group)`.
pub struct GroupBy<I: Iterator, F, K> {
    iter: I,
    key: F,
    pending: Option<(K, I::Item)>,
}

impl<I: Iterator, F, K> GroupBy<I, F, K> {
    pub fn new(iter: I, key: F) -> Self {
        Self { iter, key, pending: None }
    }
}

impl<I: Iterator + fmt::Debug, F, K> fmt::Debug for GroupBy<I, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupBy").field("iter", &self.iter).finish()
    }
}

impl<I, F, K> Iterator for GroupBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, first) = match self.pending.take() {
            Some(pending) => pending,
            None => {
                let item = self.iter.next()?;
                ((self.key)(&item), item)
            }
        };
        let mut group = vec![first];
        for item in self.iter.by_ref() {
            let item_key = (self.key)(&item);
            if item_key == key {
                group.push(item);
            } else {
                self.pending = Some((item_key, item));
                break;
            }
        }
        Some((key, group))
    }
}

/// Consecutive duplicates removed by key.
pub struct UniqueJustSeenBy<I, F, K> {
    iter: I,
    key: F,
    last: Option<K>,
}

impl<I, F, K> UniqueJustSeenBy<I, F, K> {
    pub fn new(iter: I, key: F) -> Self {
        Self { iter, key, last: None }
    }
}

impl<I: fmt::Debug, F, K> fmt::Debug for UniqueJustSeenBy<I, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueJustSeenBy").field("iter", &self.iter).finish()
    }
}

impl<I, F, K> Iterator for UniqueJustSeenBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            let key = (self.key)(&item);
            if self.last.as_ref() != Some(&key) {
                self.last = Some(key);
                return Some(item);
            }
        }
    }
}

/// Columns of a sequence of rows, stopping at the shortest row.
#[derive(Debug, Clone)]
pub struct Transpose<J> {
    rows: Vec<J>,
}

impl<J> Transpose<J> {
    pub fn new(rows: Vec<J>) -> Self {
        Self { rows }
    }
}

impl<J: Iterator> Iterator for Transpose<J> {
    type Item = Vec<J::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rows.is_empty() {
            return None;
        }
        self.rows.iter_mut().map(Iterator::next).collect()
    }
}

/// Elements wrapped in `Some`, followed by `None` forever.
#[derive(Debug, Clone)]
pub struct PadNone<I> {
    pub(crate) iter: I,
    pub(crate) done: bool,
}

impl<I: Iterator> Iterator for PadNone<I> {
    type Item = Option<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.done {
            if let Some(item) = self.iter.next() {
                return Some(Some(item));
            }
            self.done = true;
        }
        Some(None)
    }
}

/// Fixed-length groups; the last group is padded when a fill value is given.
#[derive(Debug, Clone)]
pub struct Grouper<I: Iterator> {
    iter: I,
    n: usize,
    fill: Option<I::Item>,
}

impl<I: Iterator> Grouper<I> {
    pub fn new(iter: I, n: usize, fill: Option<I::Item>) -> Self {
        Self { iter, n, fill }
    }
}

impl<I> Iterator for Grouper<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.n == 0 {
            return None;
        }
        let mut group = Vec::new();
        group.push(self.iter.next()?);
        while group.len() < self.n {
            match self.iter.next() {
                Some(item) => group.push(item),
                None => {
                    if let Some(fill) = &self.fill {
                        group.resize(self.n, fill.clone());
                    }
                    break;
                }
            }
        }
        Some(group)
    }
}

struct TeeBuffer<I: Iterator> {
    source: I,
    queues: Vec<VecDeque<I::Item>>,
}

/// One of several independent cursors over a single source.
///
/// Elements are buffered until every cursor has seen them. The buffer is
/// shared through `Rc`, so tees stay on the thread that created them.
pub struct Tee<I: Iterator> {
    shared: Rc<RefCell<TeeBuffer<I>>>,
    index: usize,
}

fn tee_buffer<I: Iterator>(iter: I, n: usize) -> Rc<RefCell<TeeBuffer<I>>> {
    Rc::new(RefCell::new(TeeBuffer {
        source: iter,
        queues: (0..n).map(|_| VecDeque::new()).collect(),
    }))
}

/// Split `iter` into `n` independent cursors.
pub fn tee<I: Iterator>(iter: I, n: usize) -> Vec<Tee<I>> {
    let shared = tee_buffer(iter, n);
    (0..n).map(|index| Tee { shared: Rc::clone(&shared), index }).collect()
}

pub fn tee_pair<I: Iterator>(iter: I) -> (Tee<I>, Tee<I>) {
    let shared = tee_buffer(iter, 2);
    (Tee { shared: Rc::clone(&shared), index: 0 }, Tee { shared, index: 1 })
}

impl<I: Iterator> fmt::Debug for Tee<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tee").field("index", &self.index).finish()
    }
}

impl<I> Iterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut guard = self.shared.borrow_mut();
        let buffer = &mut *guard;
        if let Some(item) = buffer.queues[self.index].pop_front() {
            return Some(item);
        }
        let item = buffer.source.next()?;
        for (index, queue) in buffer.queues.iter_mut().enumerate() {
            if index != self.index {
                queue.push_back(item.clone());
            }
        }
        Some(item)
    }
}
