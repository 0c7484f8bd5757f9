//! The "argument omitted" marker.
//!
//! Some primitives behave differently when an optional argument is left out
//! than when it is passed explicitly as a zero or null value (`sum` with and
//! without a start value, `max` with a default of `None`, `range(5)` versus
//! `range(5, 10)`). `Arg<T>` keeps those two cases apart: `Arg::Omitted` is
//! distinct from every `Arg::Present(v)`, including `Arg::Present(None)`.

/// An optional positional argument that remembers whether it was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arg<T> {
    /// The caller did not pass this argument
    #[default]
    Omitted,
    /// The caller passed this value, whatever it is
    Present(T),
}

impl<T> Arg<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, Arg::Omitted)
    }

    pub fn is_present(&self) -> bool {
        !self.is_omitted()
    }

    /// Convert into an `Option`, losing the omitted/present-null distinction
    /// only when `T` itself is not optional.
    pub fn into_option(self) -> Option<T> {
        match self {
            Arg::Omitted => None,
            Arg::Present(value) => Some(value),
        }
    }

    pub fn as_ref(&self) -> Arg<&T> {
        match self {
            Arg::Omitted => Arg::Omitted,
            Arg::Present(value) => Arg::Present(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Arg<U> {
        match self {
            Arg::Omitted => Arg::Omitted,
            Arg::Present(value) => Arg::Present(f(value)),
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Arg::Omitted => fallback,
            Arg::Present(value) => value,
        }
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, fallback: F) -> T {
        match self {
            Arg::Omitted => fallback(),
            Arg::Present(value) => value,
        }
    }
}

impl<T> From<T> for Arg<T> {
    fn from(value: T) -> Self {
        Arg::Present(value)
    }
}

/// Strip omitted arguments, keeping the supplied ones in positional order.
///
/// The underlying primitive then sees exactly the arguments the caller
/// passed, so `[Present(5), Omitted, Omitted]` is the one-argument call and
/// `[Present(5), Omitted, Present(2)]` is the two-argument call `(5, 2)`.
pub fn drop_omitted<T, A>(args: A) -> Vec<T>
where
    A: IntoIterator<Item = Arg<T>>,
{
    args.into_iter().filter_map(Arg::into_option).collect()
}
