//! The fallible-result half of the algebra. Mirrors the optional-value
//! union, with the negative variant carrying an error payload.

use std::fmt;

use crate::option::{Absent, Option, Present};

/// Either a success carrying `T`, or a failure carrying `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    Success(T),
    Failure(E),
}

pub use self::Result::{Failure, Success};

impl<T, E> Result<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    pub fn is_success_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Success(value) => f(value),
            Failure(_) => false,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    pub fn is_failure_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Success(_) => false,
            Failure(error) => f(error),
        }
    }

    /// Discards the error, keeping the success value as an option.
    pub fn ok(self) -> Option<T> {
        match self {
            Success(value) => Present(value),
            Failure(_) => Absent,
        }
    }

    /// Discards the success value, keeping the error as an option.
    pub fn err(self) -> Option<E> {
        match self {
            Success(_) => Absent,
            Failure(error) => Present(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    /// The fallback receives the error, so one call can fold both variants.
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Success(value) => f(value),
            Failure(error) => default(error),
        }
    }

    /// Transforms only the failure payload, leaving a success untouched.
    pub fn map_err<F>(self, op: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(op(error)),
        }
    }

    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the success value.
    ///
    /// Panics with exactly `msg` if the receiver is a `Failure`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Success(value) => value,
            Failure(_) => panic!("{msg}"),
        }
    }

    /// Returns the success value, panicking with the error on `Failure`.
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => panic!("unwrap called on a Failure value: {error:?}"),
        }
    }

    /// Returns the error payload.
    ///
    /// Panics with `msg` and the success value if the receiver is a `Success`.
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Success(value) => panic!("{msg}: {value:?}"),
            Failure(error) => error,
        }
    }

    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Success(value) => panic!("unwrap_err called on a Success value: {value:?}"),
            Failure(error) => error,
        }
    }

    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Success(_) => res,
            Failure(error) => Failure(error),
        }
    }

    pub fn and_then<U>(self, op: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            Success(value) => op(value),
            Failure(error) => Failure(error),
        }
    }

    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(_) => res,
        }
    }

    pub fn or_else<F>(self, op: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => op(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    pub fn unwrap_or_else(self, op: impl FnOnce(E) -> T) -> T {
        match self {
            Success(value) => value,
            Failure(error) => op(error),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Success(value) => value == x,
            Failure(_) => false,
        }
    }

    pub fn contains_err(&self, e: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Success(_) => false,
            Failure(error) => error == e,
        }
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// `Success(Absent)` is read as "no result at all" and maps to `Absent`.
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Success(Present(value)) => Present(Success(value)),
            Success(Absent) => Absent,
            Failure(error) => Present(Failure(error)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    enum FaultKind {
        NotFound,
        PermissionDenied,
    }

    #[test]
    fn exactly_one_predicate_holds() {
        let x: Result<i32, &str> = Success(-3);
        assert!(x.is_success());
        assert!(!x.is_failure());

        let y: Result<i32, &str> = Failure("some error message");
        assert!(!y.is_success());
        assert!(y.is_failure());
    }

    #[test]
    fn variant_predicates_with_payload_checks() {
        let x: Result<i32, &str> = Success(2);
        assert!(x.is_success_and(|v| v > 1));
        assert!(!Success::<_, &str>(0).is_success_and(|v: i32| v > 1));
        let y: Result<i32, &str> = Failure("hey");
        assert!(!y.is_success_and(|v| v > 1));

        let e: Result<i32, FaultKind> = Failure(FaultKind::NotFound);
        assert!(e.is_failure_and(|k| k == FaultKind::NotFound));
        let p: Result<i32, FaultKind> = Failure(FaultKind::PermissionDenied);
        assert!(!p.is_failure_and(|k| k == FaultKind::NotFound));
        let s: Result<i32, FaultKind> = Success(123);
        assert!(!s.is_failure_and(|k| k == FaultKind::NotFound));
    }

    #[test]
    fn ok_and_err_discard_the_other_side() {
        let x: Result<i32, &str> = Success(2);
        assert_eq!(x.ok(), Present(2));
        assert_eq!(x.err(), Absent);

        let y: Result<i32, &str> = Failure("nothing here");
        assert_eq!(y.ok(), Absent);
        assert_eq!(y.err(), Present("nothing here"));
    }

    #[test]
    fn map_touches_only_the_success_side() {
        let x: Result<i32, &str> = Success(5);
        assert_eq!(x.map(|v| v * v), Success(25));

        let y: Result<i32, &str> = Failure("nan");
        assert_eq!(y.map(|v| v * v), Failure("nan"));
    }

    #[test]
    fn map_err_touches_only_the_failure_side() {
        let stringify = |code: i32| format!("error code: {code}");

        let x: Result<i32, i32> = Success(2);
        assert_eq!(x.map_err(stringify), Success(2));

        let y: Result<i32, i32> = Failure(13);
        assert_eq!(y.map_err(stringify), Failure(String::from("error code: 13")));
    }

    #[test]
    fn map_or_eager_and_lazy() {
        let x: Result<&str, &str> = Success("foo");
        assert_eq!(x.map_or(42, |v| v.len()), 3);
        let y: Result<&str, &str> = Failure("bar");
        assert_eq!(y.map_or(42, |v| v.len()), 42);

        let k = 21;
        assert_eq!(x.map_or_else(|_| k * 2, |v| v.len()), 3);
        assert_eq!(y.map_or_else(|_| k * 2, |v| v.len()), 42);
        // the fallback sees the error payload
        assert_eq!(y.map_or_else(|e| e.len(), |v| v.len()), 3);
    }

    #[test]
    fn inspect_observes_without_changing() {
        let mut values = Vec::new();
        let mut errors = Vec::new();

        let x: Result<i32, &str> = Success(4);
        assert_eq!(x.inspect(|v| values.push(*v)), Success(4));
        assert_eq!(x.inspect_err(|e| errors.push(*e)), Success(4));

        let y: Result<i32, &str> = Failure("boom");
        assert_eq!(y.inspect(|v| values.push(*v)), Failure("boom"));
        assert_eq!(y.inspect_err(|e| errors.push(*e)), Failure("boom"));

        assert_eq!(values, vec![4]);
        assert_eq!(errors, vec!["boom"]);
    }

    #[test]
    fn expect_returns_the_success_value() {
        let x: Result<i32, &str> = Success(42);
        assert_eq!(x.expect("should succeed"), 42);
    }

    #[test]
    #[should_panic(expected = "testing expect")]
    fn expect_panics_with_the_given_message() {
        let x: Result<i32, &str> = Failure("emergency failure");
        x.expect("testing expect");
    }

    #[test]
    fn unwrap_family() {
        let x: Result<i32, &str> = Success(2);
        assert_eq!(x.unwrap(), 2);
        assert_eq!(x.unwrap_or(7), 2);
        assert_eq!(x.unwrap_or_else(|e| e.len() as i32), 2);
        assert_eq!(x.unwrap_or_default(), 2);

        let y: Result<i32, &str> = Failure("four");
        assert_eq!(y.unwrap_or(7), 7);
        assert_eq!(y.unwrap_or_else(|e| e.len() as i32), 4);
        assert_eq!(y.unwrap_or_default(), 0);
    }

    #[test]
    #[should_panic(expected = "emergency failure")]
    fn unwrap_panics_with_the_error() {
        let x: Result<i32, &str> = Failure("emergency failure");
        x.unwrap();
    }

    #[test]
    fn expect_err_returns_the_error() {
        let x: Result<i32, &str> = Failure("error message");
        assert_eq!(x.expect_err("should fail"), "error message");
        assert_eq!(x.unwrap_err(), "error message");
    }

    #[test]
    #[should_panic(expected = "testing expect_err: 10")]
    fn expect_err_panics_with_message_and_value() {
        let x: Result<i32, &str> = Success(10);
        x.expect_err("testing expect_err");
    }

    #[test]
    #[should_panic(expected = "2")]
    fn unwrap_err_panics_with_the_value() {
        let x: Result<i32, &str> = Success(2);
        x.unwrap_err();
    }

    #[test]
    fn and_takes_the_earliest_failure() {
        let a: Result<i32, &str> = Success(2);
        let b: Result<&str, &str> = Failure("late error");
        assert_eq!(a.and(b), Failure("late error"));

        let c: Result<i32, &str> = Failure("early error");
        let d: Result<&str, &str> = Success("foo");
        assert_eq!(c.and(d), Failure("early error"));

        let e: Result<i32, &str> = Failure("not a 2");
        let f: Result<&str, &str> = Failure("late error");
        assert_eq!(e.and(f), Failure("not a 2"));

        let g: Result<i32, &str> = Success(2);
        let h: Result<&str, &str> = Success("different result type");
        assert_eq!(g.and(h), Success("different result type"));
    }

    #[test]
    fn and_then_is_associative() {
        let halve = |v: i32| {
            if v % 2 == 0 {
                Success(v / 2)
            } else {
                Failure("odd")
            }
        };
        let stringify = |v: i32| {
            if v >= 0 {
                Success(v.to_string())
            } else {
                Failure("negative")
            }
        };

        for x in [Success(12), Success(7), Failure("input")] {
            assert_eq!(
                x.and_then(halve).and_then(stringify),
                x.and_then(|v| halve(v).and_then(stringify))
            );
        }
    }

    #[test]
    fn or_takes_the_earliest_success() {
        let a: Result<i32, &str> = Success(2);
        let b: Result<i32, &str> = Failure("late error");
        assert_eq!(a.or(b), Success(2));
        assert_eq!(b.or(a), Success(2));

        let c: Result<i32, &str> = Failure("early");
        let d: Result<i32, &str> = Failure("late");
        assert_eq!(c.or(d), Failure("late"));

        assert_eq!(a.or_else(|_| Failure::<i32, &str>("nope")), Success(2));
        assert_eq!(c.or_else(|e| Success::<_, &str>(e.len() as i32)), Success(5));
    }

    #[test]
    fn contains_checks_the_matching_side_only() {
        let x: Result<i32, &str> = Success(2);
        assert!(x.contains(&2));
        assert!(!x.contains(&3));
        assert!(!x.contains_err(&"2"));

        let y: Result<i32, &str> = Failure("boom");
        assert!(y.contains_err(&"boom"));
        assert!(!y.contains_err(&"fizzle"));
        assert!(!y.contains(&2));
    }

    #[test]
    fn transpose_round_trips() {
        let success_present: Result<Option<i32>, &str> = Success(Present(5));
        assert_eq!(success_present.transpose(), Present(Success(5)));
        assert_eq!(success_present.transpose().transpose(), success_present);

        let success_absent: Result<Option<i32>, &str> = Success(Absent);
        assert_eq!(success_absent.transpose(), Absent);
        assert_eq!(success_absent.transpose().transpose(), success_absent);

        let failure: Result<Option<i32>, &str> = Failure("oops");
        assert_eq!(failure.transpose(), Present(Failure("oops")));
        assert_eq!(failure.transpose().transpose(), failure);
    }

    #[test]
    fn as_ref_borrows_either_side() {
        let x: Result<String, String> = Success(String::from("hi"));
        assert_eq!(x.as_ref().map(|s| s.len()), Success(2));
        assert!(x.is_success());

        let y: Result<String, String> = Failure(String::from("boom"));
        assert_eq!(y.as_ref().map_err(|e| e.len()), Failure(4));
    }
}
