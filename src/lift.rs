//! Adapters between plain fallible code and the two unions: unwind-catching
//! lifts, conversions at the std boundary, and postfix constructors.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::option::{Absent, Option, Present};
use crate::result::{Failure, Result, Success};

/// Error carried by [`lift_to_result`] when the lifted call panics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("lifted call panicked: {message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("opaque panic payload")
        };
        Self { message }
    }
}

/// Lifts `f` into a function that signals absence instead of unwinding.
/// Whatever `f` panics with is discarded.
pub fn lift_to_option<A, T>(f: impl Fn(A) -> T) -> impl Fn(A) -> Option<T> {
    move |arg| match panic::catch_unwind(AssertUnwindSafe(|| f(arg))) {
        Ok(value) => Present(value),
        Err(_) => Absent,
    }
}

/// Lifts `f` into a function that converts any unwind into a
/// [`CaughtPanic`] failure carrying the rendered panic message.
pub fn lift_to_result<A, T>(f: impl Fn(A) -> T) -> impl Fn(A) -> Result<T, CaughtPanic> {
    move |arg| match panic::catch_unwind(AssertUnwindSafe(|| f(arg))) {
        Ok(value) => Success(value),
        Err(payload) => Failure(CaughtPanic::from_payload(payload.as_ref())),
    }
}

/// Like [`lift_to_result`], but only a panic payload of type `E` converts
/// to a failure; any other payload resumes unwinding untouched.
pub fn lift_to_result_of<E, A, T>(f: impl Fn(A) -> T) -> impl Fn(A) -> Result<T, E>
where
    E: 'static,
{
    move |arg| match panic::catch_unwind(AssertUnwindSafe(|| f(arg))) {
        Ok(value) => Success(value),
        Err(payload) => match payload.downcast::<E>() {
            Ok(error) => Failure(*error),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

// The std boundary. Inside this crate the union names shadow the prelude,
// so the std types are spelled in full here.

impl<T> Option<T> {
    pub fn from_std(opt: std::option::Option<T>) -> Self {
        match opt {
            Some(value) => Present(value),
            None => Absent,
        }
    }

    pub fn into_std(self) -> std::option::Option<T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(opt: std::option::Option<T>) -> Self {
        Option::from_std(opt)
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(opt: Option<T>) -> Self {
        opt.into_std()
    }
}

impl<T, E> Result<T, E> {
    pub fn from_std(res: std::result::Result<T, E>) -> Self {
        match res {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }

    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(res: std::result::Result<T, E>) -> Self {
        Result::from_std(res)
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(res: Result<T, E>) -> Self {
        res.into_std()
    }
}

/// Postfix constructors for chaining, so a finished value can be wrapped
/// without breaking the expression flow.
pub trait Wrap: Sized {
    fn present(self) -> Option<Self> {
        Present(self)
    }

    fn success<E>(self) -> Result<Self, E> {
        Success(self)
    }
}

impl<T> Wrap for T {}

/// Bounds-checked indexing that signals absence instead of panicking.
pub trait SliceExt<T> {
    fn lookup(&self, index: usize) -> Option<&T>;
}

impl<T> SliceExt<T> for [T] {
    fn lookup(&self, index: usize) -> Option<&T> {
        Option::from_std(self.get(index))
    }
}
