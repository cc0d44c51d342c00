//! Two-variant value algebra: an optional-value union, a fallible-result
//! union, a combinator set over both, and early-exit propagation for
//! functions that opt in through their return type.

mod lift;
mod option;
mod result;
mod shortcut;

pub use lift::{lift_to_option, lift_to_result, lift_to_result_of, CaughtPanic, SliceExt, Wrap};
pub use option::{Absent, Option, Present};
pub use result::{Failure, Result, Success};
pub use shortcut::{FromResidual, ShortCircuit};
