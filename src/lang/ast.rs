use super::Column;
use std::rc::Rc;

/// A stored program line parses into exactly one `Statement`.
#[derive(Debug, PartialEq)]
pub enum Statement {
    Rem(Column),
    Let(Column, Variable, Expression),
    Print(Column, Expression),
    Input(Column, Variable),
    End(Column),
    Goto(Column, u16),
    /// The condition is kept as text and scanned again on every execution.
    If(Column, Condition, u16),
}

/// What a direct (unnumbered) line asks the machine to do.
#[derive(Debug, PartialEq)]
pub enum Command {
    Clear,
    Help,
    List,
    Quit,
    Run,
    Statement(Statement),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Variable(pub Column, pub Rc<str>);

/// Source text of an `IF` condition and where it sits in the line.
#[derive(Debug, PartialEq, Clone)]
pub struct Condition(pub Column, pub String);

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(Column, i32),
    Var(Column, Rc<str>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq)]
pub enum Comparison {
    Equal(Expression, Expression),
    Less(Expression, Expression),
    Greater(Expression, Expression),
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Integer(_, n) => write!(f, "{}", n),
            Var(_, name) => write!(f, "{}", name),
            Add(_, lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Subtract(_, lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Multiply(_, lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Divide(_, lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
        }
    }
}
