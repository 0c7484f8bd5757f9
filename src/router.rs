//! Argument routing for `ChainedSequence::pipe`.
//!
//! Catalog functions do not agree on where the sequence goes: `take(n, it)`
//! wants it second, `chain(it, other)` wants it first. A router call names
//! the slot with [`At`], passes the remaining arguments as a tuple, and the
//! [`Splice`] impl for that tuple/slot pair builds the real argument list:
//! arguments before the slot keep their order, the sequence is inserted,
//! the rest follow. [`Call`] then invokes the function with the spliced
//! tuple as ordinary positional arguments.
//!
//! Splices exist for up to four extra arguments at every valid slot; asking
//! for a slot past the end of the tuple does not compile.

/// Positional slot marker: `At::<0>` is the first argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct At<const N: usize>;

/// Insert a sequence into slot `N` of an argument tuple.
pub trait Splice<S, const N: usize> {
    /// The argument tuple with the sequence inserted
    type Output;

    fn splice(self, seq: S) -> Self::Output;
}

macro_rules! impl_splice {
    ($slot:literal; $($B:ident $b:ident),*; $($A:ident $a:ident),*) => {
        impl<S, $($B,)* $($A,)*> Splice<S, $slot> for ($($B,)* $($A,)*) {
            type Output = ($($B,)* S, $($A,)*);

            fn splice(self, seq: S) -> Self::Output {
                let ($($b,)* $($a,)*) = self;
                ($($b,)* seq, $($a,)*)
            }
        }
    };
}

impl_splice!(0; ; );

impl_splice!(0; ; A0 a0);
impl_splice!(1; A0 a0; );

impl_splice!(0; ; A0 a0, A1 a1);
impl_splice!(1; A0 a0; A1 a1);
impl_splice!(2; A0 a0, A1 a1; );

impl_splice!(0; ; A0 a0, A1 a1, A2 a2);
impl_splice!(1; A0 a0; A1 a1, A2 a2);
impl_splice!(2; A0 a0, A1 a1; A2 a2);
impl_splice!(3; A0 a0, A1 a1, A2 a2; );

impl_splice!(0; ; A0 a0, A1 a1, A2 a2, A3 a3);
impl_splice!(1; A0 a0; A1 a1, A2 a2, A3 a3);
impl_splice!(2; A0 a0, A1 a1; A2 a2, A3 a3);
impl_splice!(3; A0 a0, A1 a1, A2 a2; A3 a3);
impl_splice!(4; A0 a0, A1 a1, A2 a2, A3 a3; );

/// Call a function once with a tuple spread over its parameters.
pub trait Call<Args> {
    type Output;

    fn call(self, args: Args) -> Self::Output;
}

/// Call a function repeatedly with a tuple spread over its parameters.
pub trait CallMut<Args> {
    type Output;

    fn call_mut(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_call {
    ($($A:ident $a:ident),*) => {
        impl<F, R, $($A,)*> Call<($($A,)*)> for F
        where
            F: FnOnce($($A),*) -> R,
        {
            type Output = R;

            fn call(self, args: ($($A,)*)) -> R {
                let ($($a,)*) = args;
                self($($a),*)
            }
        }

        impl<F, R, $($A,)*> CallMut<($($A,)*)> for F
        where
            F: FnMut($($A),*) -> R,
        {
            type Output = R;

            fn call_mut(&mut self, args: ($($A,)*)) -> R {
                let ($($a,)*) = args;
                self($($a),*)
            }
        }
    };
}

impl_call!();
impl_call!(A0 a0);
impl_call!(A0 a0, A1 a1);
impl_call!(A0 a0, A1 a1, A2 a2);
impl_call!(A0 a0, A1 a1, A2 a2, A3 a3);
impl_call!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);

/// Splice `seq` into slot `N` of `args` and call `f` with the result.
pub fn route<S, F, A, const N: usize>(f: F, args: A, seq: S, _slot: At<N>) -> F::Output
where
    A: Splice<S, N>,
    F: Call<A::Output>,
{
    log::trace!("routing sequence into argument slot {}", N);
    f.call(args.splice(seq))
}
