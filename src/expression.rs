use std::fmt;

use crate::common::{StatementError, StatementResult};
use crate::symbol_table::SymbolTable;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Xor,
}

impl Operator {
    /// Anything that isn't one of the arithmetic symbols is exclusive-or.
    pub fn from_token(token: &str) -> Self {
        match token {
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "%" => Self::Modulo,
            _ => Self::Xor,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> StatementResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(StatementError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Modulo => (lhs as i64)
                .checked_rem(rhs as i64)
                .map(|r| r as f64)
                .ok_or(StatementError::ModuloByZero),
            Self::Xor => Ok(((lhs as i64) ^ (rhs as i64)) as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a> {
    Literal(f64),
    Variable(&'a str),
}

/// A token is a number when it starts with a digit, or with `-` and a digit.
pub fn looks_numeric(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some('-') => chars.next().map_or(false, |c| c.is_ascii_digit()),
        Some(c) => c.is_ascii_digit(),
        None => false,
    }
}

pub fn parse_number(token: &str) -> StatementResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(StatementError::BadNumber(token.to_string())),
    }
}

impl<'a> Operand<'a> {
    pub fn parse(token: &'a str) -> StatementResult<Self> {
        if looks_numeric(token) {
            parse_number(token).map(Operand::Literal)
        } else {
            Ok(Operand::Variable(token))
        }
    }

    pub fn resolve(&self, symbols: &SymbolTable) -> StatementResult<f64> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::Variable(name) => symbols
                .lookup(name)
                .map(|record| record.value)
                .ok_or_else(|| StatementError::Undefined(name.to_string())),
        }
    }
}

/// `<operand> <op> <operand>` along with the tokens it was written as.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression<'a> {
    pub tokens: [&'a str; 3],
    pub lhs: Operand<'a>,
    pub operator: Operator,
    pub rhs: Operand<'a>,
}

impl<'a> Expression<'a> {
    pub fn parse(lhs: &'a str, operator: &'a str, rhs: &'a str) -> StatementResult<Self> {
        Ok(Self {
            tokens: [lhs, operator, rhs],
            lhs: Operand::parse(lhs)?,
            operator: Operator::from_token(operator),
            rhs: Operand::parse(rhs)?,
        })
    }

    /// Resolves the left operand before the right one, so an undefined left
    /// name is the one reported.
    pub fn evaluate(&self, symbols: &SymbolTable) -> StatementResult<f64> {
        let lhs = self.lhs.resolve(symbols)?;
        let rhs = self.rhs.resolve(symbols)?;
        self.operator.apply(lhs, rhs)
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
