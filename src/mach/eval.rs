use super::Var;
use crate::error;
use crate::lang::ast::{Comparison, Expression};
use crate::lang::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluation
///
/// Integers are 32-bit signed. Every operation is checked; a result that
/// does not fit is an `OVERFLOW` error instead of wrapping around.
/// Both operands are always evaluated, left before right.

impl Expression {
    pub fn evaluate(&self, var: &Var) -> Result<i32> {
        use Expression::*;
        match self {
            Integer(_, n) => Ok(*n),
            Expression::Var(col, name) => var.fetch(name, col),
            Add(col, lhs, rhs) => {
                let (lhs, rhs) = (lhs.evaluate(var)?, rhs.evaluate(var)?);
                overflow(lhs.checked_add(rhs), col)
            }
            Subtract(col, lhs, rhs) => {
                let (lhs, rhs) = (lhs.evaluate(var)?, rhs.evaluate(var)?);
                overflow(lhs.checked_sub(rhs), col)
            }
            Multiply(col, lhs, rhs) => {
                let (lhs, rhs) = (lhs.evaluate(var)?, rhs.evaluate(var)?);
                overflow(lhs.checked_mul(rhs), col)
            }
            Divide(col, lhs, rhs) => {
                let (lhs, rhs) = (lhs.evaluate(var)?, rhs.evaluate(var)?);
                if rhs == 0 {
                    return Err(error!(DivisionByZero, ..col));
                }
                overflow(lhs.checked_div(rhs), col)
            }
        }
    }
}

fn overflow(result: Option<i32>, col: &Column) -> Result<i32> {
    match result {
        Some(n) => Ok(n),
        None => Err(error!(Overflow, ..col)),
    }
}

impl Comparison {
    pub fn evaluate(&self, var: &Var) -> Result<bool> {
        use Comparison::*;
        Ok(match self {
            Equal(lhs, rhs) => lhs.evaluate(var)? == rhs.evaluate(var)?,
            Less(lhs, rhs) => lhs.evaluate(var)? < rhs.evaluate(var)?,
            Greater(lhs, rhs) => lhs.evaluate(var)? > rhs.evaluate(var)?,
        })
    }
}
