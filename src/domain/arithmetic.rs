use crate::utils::error::{DemoError, Result};
use std::ops::{Add, Mul};

pub const CONSTANT_VALUE: i64 = 5;

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// True division: integer operands are widened, so `divide(7, 2)` is `3.5`.
pub fn divide<T: Into<f64>>(a: T, b: T) -> Result<f64> {
    let (a, b) = (a.into(), b.into());
    // -0.0 == 0.0, so both zeroes are rejected
    if b == 0.0 {
        return Err(DemoError::DivisionByZero);
    }
    Ok(a / b)
}
