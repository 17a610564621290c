use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("could not read script: {0}")]
    File(#[source] io::Error),
    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
}

pub type InterpretResult = Result<(), InterpretError>;

/// Failure of a single statement. None of these stop the interpreter.
#[derive(Debug, Error, PartialEq)]
pub enum StatementError {
    #[error("{0} IS UNDEFINED")]
    Undefined(String),
    #[error("{0}")]
    Parse(String),
    #[error("malformed number '{0}'")]
    BadNumber(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("FINISH without matching START")]
    UnbalancedFinish,
}

pub type StatementResult<T> = Result<T, StatementError>;
