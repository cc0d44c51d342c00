//! Calculator over checked integer arithmetic: parse errors surface from
//! the parser, division by zero and overflow surface from the evaluator.

use dichotomy::{propagate, Failure, Result, Success};
use nom::{
    branch::alt,
    character::complete::{char, multispace0, one_of},
    combinator::{map, recognize, value},
    error::ParseError,
    multi::{fold_many0, many1},
    sequence::{delimited, pair},
    Finish, IResult, Parser,
};
use thiserror::Error;

/// evaluate an arithmetic expression with checked division
#[derive(argh::FromArgs)]
struct Cli {
    /// expression to evaluate, e.g. "1 + 8 / (3 - 1)"
    #[argh(positional)]
    expr: String,
}

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Lit(i64),
    Bin(Box<Expr>, Op, Box<Expr>),
}

impl Expr {
    fn boxed(self) -> Box<Expr> {
        Box::new(self)
    }

    fn bin(lhs: Expr, op: Op, rhs: Expr) -> Expr {
        Expr::Bin(lhs.boxed(), op, rhs.boxed())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    Overflow,
}

fn ws<'a, F: 'a, O, E>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, E>,
    E: ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_int(i: &str) -> IResult<&str, Expr> {
    map(recognize(many1(one_of("0123456789"))), |s: &str| {
        Expr::Lit(s.parse::<i64>().unwrap())
    })(i)
}

fn parse_op<'a, E>(op_str: char, op: Op) -> impl FnMut(&'a str) -> IResult<&'a str, Op, E>
where
    E: ParseError<&'a str>,
{
    value(op, char(op_str))
}

fn parse_atom(i: &str) -> IResult<&str, Expr> {
    alt((
        ws(parse_int),
        delimited(ws(char('(')), parse_sum, ws(char(')'))),
    ))
    .parse(i)
}

fn parse_mul(i: &str) -> IResult<&str, Expr> {
    let (i, init) = parse_atom(i)?;
    let mul = parse_op('*', Op::Mul);
    let div = parse_op('/', Op::Div);
    fold_many0(
        pair(ws(alt((mul, div))), parse_atom),
        move || init.clone(),
        |lhs, (op, rhs)| Expr::bin(lhs, op, rhs),
    )(i)
}

fn parse_sum(i: &str) -> IResult<&str, Expr> {
    let (i, init) = parse_mul(i)?;
    let add = parse_op('+', Op::Add);
    let sub = parse_op('-', Op::Sub);
    fold_many0(
        pair(ws(alt((add, sub))), parse_mul),
        move || init.clone(),
        |lhs, (op, rhs)| Expr::bin(lhs, op, rhs),
    )(i)
}

fn parse(input: &str) -> std::result::Result<Expr, String> {
    let (rest, expr) = parse_sum(input).finish().map_err(|e| e.to_string())?;
    if !rest.trim().is_empty() {
        return Err(format!("trailing input: `{rest}`"));
    }
    Ok(expr)
}

fn apply(lhs: i64, op: Op, rhs: i64) -> Result<i64, EvalError> {
    if op == Op::Div && rhs == 0 {
        return Failure(EvalError::DivisionByZero);
    }
    let checked = match op {
        Op::Add => lhs.checked_add(rhs),
        Op::Sub => lhs.checked_sub(rhs),
        Op::Mul => lhs.checked_mul(rhs),
        Op::Div => lhs.checked_div(rhs),
    };
    Result::from_std(checked.ok_or(EvalError::Overflow))
}

fn eval(expr: &Expr) -> Result<i64, EvalError> {
    match expr {
        Expr::Lit(n) => Success(*n),
        Expr::Bin(lhs, op, rhs) => {
            let l = propagate!(eval(lhs));
            let r = propagate!(eval(rhs));
            apply(l, *op, r)
        }
    }
}

fn main() {
    let cli: Cli = argh::from_env();

    let expr = parse(&cli.expr).unwrap_or_else(|e| {
        eprintln!("failed to parse `{}`: {e}", cli.expr);
        std::process::exit(-1);
    });

    match eval(&expr) {
        Success(result) => println!("{result}"),
        Failure(error) => {
            eprintln!("{error}");
            std::process::exit(-1);
        }
    }
}
