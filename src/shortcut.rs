//! Early-exit propagation for the two unions.
//!
//! A function opts in by choosing a return type that implements
//! [`FromResidual`] for the residual of the value being unwrapped. Inside
//! such a function, `propagate!(expr)` evaluates to the positive payload of
//! `expr`, or returns the negative variant out of the whole function.
//! Using the accessor anywhere else is rejected at compile time with a
//! missing `FromResidual` impl, so a forgotten opt-in can never be
//! mistaken for an ordinary failure value.

use std::convert::Infallible;
use std::ops::ControlFlow;

use crate::option::{Absent, Option, Present};
use crate::result::{Failure, Result, Success};

/// Splits a union into "continue with the payload" or "break with a
/// residual". The residual types are uninhabited on their positive side,
/// so a residual provably carries only the absent/failure case.
pub trait ShortCircuit {
    type Output;
    type Residual;

    fn short_circuit(self) -> ControlFlow<Self::Residual, Self::Output>;
}

/// The opt-in half of the protocol: rebuilds a full return value from a
/// residual that crossed the `return` inside [`propagate!`].
pub trait FromResidual<R> {
    fn from_residual(residual: R) -> Self;
}

impl<T> ShortCircuit for Option<T> {
    type Output = T;
    type Residual = Option<Infallible>;

    fn short_circuit(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Present(value) => ControlFlow::Continue(value),
            Absent => ControlFlow::Break(Absent),
        }
    }
}

impl<T> FromResidual<Option<Infallible>> for Option<T> {
    fn from_residual(residual: Option<Infallible>) -> Self {
        match residual {
            Absent => Absent,
            Present(never) => match never {},
        }
    }
}

impl<T, E> ShortCircuit for Result<T, E> {
    type Output = T;
    type Residual = Result<Infallible, E>;

    fn short_circuit(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Success(value) => ControlFlow::Continue(value),
            Failure(error) => ControlFlow::Break(Failure(error)),
        }
    }
}

// The error payload is converted on the way out, never dropped, so a
// propagated failure may widen into the caller's error type.
impl<T, E, F> FromResidual<Result<Infallible, E>> for Result<T, F>
where
    F: From<E>,
{
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Failure(error) => Failure(F::from(error)),
            Success(never) => match never {},
        }
    }
}

/// Unwraps a positive variant or returns the negative one out of the
/// enclosing function.
///
/// ```
/// use dichotomy::{propagate, Failure, Result, Success};
///
/// fn halve(x: i64) -> Result<i64, &'static str> {
///     if x % 2 == 0 {
///         Success(x / 2)
///     } else {
///         Failure("odd")
///     }
/// }
///
/// fn quarter(x: i64) -> Result<i64, &'static str> {
///     let half = propagate!(halve(x));
///     halve(half)
/// }
///
/// assert_eq!(quarter(8), Success(2));
/// assert_eq!(quarter(6), Failure("odd"));
/// ```
#[macro_export]
macro_rules! propagate {
    ($expr:expr) => {
        match $crate::ShortCircuit::short_circuit($expr) {
            ::std::ops::ControlFlow::Continue(value) => value,
            ::std::ops::ControlFlow::Break(residual) => {
                return $crate::FromResidual::from_residual(residual)
            }
        }
    };
}
