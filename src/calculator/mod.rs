//! Arithmetic helpers.
//!
//! `add`, `subtract` and `multiply` are generic over any operand type
//! implementing the matching `std::ops` trait and cannot fail. `divide`
//! always produces an `f64` quotient and rejects a zero divisor.

use std::ops::{Add, Mul, Sub};

use num_traits::ToPrimitive;
use strum::{Display, EnumString};
use thiserror::Error;
use tracing::debug;

/// Errors from arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("{0}")]
    InvalidArgument(String),
}

/// Message carried by [`CalculatorError::InvalidArgument`] for a zero divisor.
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// Return `a + b`.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Return `a - b`.
pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

/// Return `a * b`.
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// Return `a / b` as a floating-point quotient.
///
/// Integer operands are converted to `f64` first, so `divide(7, 2)` is
/// `3.5`. Fails when `b` is zero (either sign).
pub fn divide<A: ToPrimitive, B: ToPrimitive>(a: A, b: B) -> Result<f64, CalculatorError> {
    let a = to_f64(&a)?;
    let b = to_f64(&b)?;
    if b == 0.0 {
        return Err(CalculatorError::InvalidArgument(DIVIDE_BY_ZERO.to_string()));
    }
    Ok(a / b)
}

fn to_f64<T: ToPrimitive>(value: &T) -> Result<f64, CalculatorError> {
    value.to_f64().ok_or_else(|| {
        CalculatorError::InvalidArgument("operand is not representable as f64".to_string())
    })
}

/// One of the four supported operations, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Infix symbol used when printing an expression.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

/// Apply `op` to two `f64` operands.
pub fn evaluate(op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
    debug!(%op, a, b, "evaluating");
    match op {
        Operation::Add => Ok(add(a, b)),
        Operation::Subtract => Ok(subtract(a, b)),
        Operation::Multiply => Ok(multiply(a, b)),
        Operation::Divide => divide(a, b),
    }
}
