//! Chained checked math over the result algebra, plus pulling a result
//! out of an option with `transpose`.

use dichotomy::{propagate, Failure, Option, Result, SliceExt, Success};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone, Copy)]
enum MathError {
    #[error("attempted to divide by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    #[error("logarithm of a non-positive number")]
    NonPositiveLogarithm,
}

fn div(x: f64, y: f64) -> Result<f64, MathError> {
    if y == 0.0 {
        Failure(MathError::DivisionByZero)
    } else {
        Success(x / y)
    }
}

fn sqrt(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        Failure(MathError::NegativeSquareRoot)
    } else {
        Success(x.sqrt())
    }
}

fn ln(x: f64) -> Result<f64, MathError> {
    if x <= 0.0 {
        Failure(MathError::NonPositiveLogarithm)
    } else {
        Success(x.ln())
    }
}

// ln(sqrt(x / y)), bailing out at the first failed step
fn op(x: f64, y: f64) -> Result<f64, MathError> {
    let ratio = propagate!(div(x, y));
    let root = propagate!(sqrt(ratio));
    ln(root)
}

fn describe(result: Result<f64, MathError>) -> String {
    match result {
        Success(value) => format!("{value}"),
        Failure(error) => format!("error: {error}"),
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
#[error("invalid numeral: {0}")]
struct ParseFault(String);

fn parse(s: &str) -> Result<i64, ParseFault> {
    Result::from_std(s.parse::<i64>()).map_err(|_| ParseFault(s.to_owned()))
}

/// Doubles the first numeral of the list. The element may be missing and
/// the parse may fail, so the nested `Option<Result<..>>` is transposed
/// into a single fallible answer.
fn double_first(items: &[&str]) -> Result<Option<i64>, ParseFault> {
    items
        .lookup(0)
        .map(|s| parse(s).map(|n| 2 * n))
        .transpose()
}

fn main() {
    println!("ln(sqrt(100 / 4)) = {}", describe(op(100.0, 4.0)));
    println!("ln(sqrt(-1 / 4)) = {}", describe(op(-1.0, 4.0)));
    println!("ln(sqrt(1 / 0)) = {}", describe(op(1.0, 0.0)));

    let numerals = ["42", "93", "18"];
    let strings = ["tofu", "93", "18"];
    let empty: [&str; 0] = [];

    println!("first doubled: {:?}", double_first(&numerals));
    println!("first doubled: {:?}", double_first(&strings));
    println!("first doubled: {:?}", double_first(&empty));
}
