//! Factory constructors. Each lives in an impl block for the producer it
//! builds, so `ChainedSequence::range(..)` and `ChainedSequence::count(..)`
//! read the same as the other associated functions.

use super::ChainedSequence;
use crate::adaptors::{Count, CountStep, IterExcept, RangeSeq, Repeat, RepeatFunc, Tabulate};
use crate::error::{ChainError, ChainResult};
use crate::router::CallMut;
use crate::sentinel::{drop_omitted, Arg};

impl ChainedSequence<RangeSeq> {
    /// Integer range with Python's argument conventions.
    ///
    /// Omitted arguments are dropped before the call, so the supplied ones
    /// are read positionally: one value is the stop, two are start and stop,
    /// three add the step. `range(5, Omitted, Present(2))` is therefore
    /// `range(5, 2)`, which is empty. A zero step is rejected.
    pub fn range(start: i64, stop: Arg<i64>, step: Arg<i64>) -> ChainResult<Self> {
        let args = drop_omitted([Arg::Present(start), stop, step]);
        let (start, stop, step) = match args.as_slice() {
            [stop] => (0, *stop, 1),
            [start, stop] => (*start, *stop, 1),
            [start, stop, step] => (*start, *stop, *step),
            _ => return Err(ChainError::invalid("range expected 1 to 3 arguments")),
        };
        Ok(ChainedSequence::new(RangeSeq::new(start, stop, step)?))
    }
}

impl<T: CountStep> ChainedSequence<Count<T>> {
    /// `start, start + step, start + 2 * step, ...`
    ///
    /// Integer counts end after the last value representable in `T`.
    pub fn count(start: T, step: T) -> Self {
        ChainedSequence { iter: Count { current: Some(start), step } }
    }
}

impl<T: Clone> ChainedSequence<Repeat<T>> {
    /// `value` forever, or `times` times.
    pub fn repeat(value: T, times: Option<usize>) -> Self {
        ChainedSequence { iter: Repeat { value, remaining: times } }
    }
}

impl<F> ChainedSequence<Tabulate<F>> {
    /// `f(start), f(start + 1), ...`
    pub fn tabulate<T>(f: F, start: i64) -> Self
    where
        F: FnMut(i64) -> T,
    {
        ChainedSequence { iter: Tabulate { f, counter: Some(start) } }
    }
}

impl<F, A> ChainedSequence<RepeatFunc<F, A>> {
    /// Call `f` with `args` spread over its parameters, forever or `times`
    /// times.
    pub fn repeatfunc(f: F, times: Option<usize>, args: A) -> Self
    where
        F: CallMut<A>,
        A: Clone,
    {
        ChainedSequence { iter: RepeatFunc { f, args, remaining: times } }
    }
}

impl<F> ChainedSequence<IterExcept<F>> {
    /// Call `f` until it returns an error; the error ends the sequence and
    /// is discarded.
    pub fn iter_except<T, E>(f: F) -> Self
    where
        F: FnMut() -> Result<T, E>,
    {
        ChainedSequence { iter: IterExcept { f, done: false } }
    }
}
