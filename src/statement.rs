//! Splits a source line into whitespace-delimited words and classifies it by
//! its first word.

use crate::common::{StatementError, StatementResult};
use crate::expression::{parse_number, Expression};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Empty,
    Comment,
    Start,
    Finish,
    Var { name: &'a str, value: f64 },
    Print(&'a str),
    PrintExpression(Expression<'a>),
    Increment(&'a str),
    Decrement(&'a str),
    /// The value is left unparsed so an undefined name is reported before a
    /// malformed right-hand side.
    Assign { name: &'a str, value: Option<&'a str> },
}

impl<'a> Statement<'a> {
    pub fn parse(line: &'a str) -> StatementResult<Self> {
        let mut words = line.split_whitespace();
        let first = match words.next() {
            Some(word) => word,
            None => return Ok(Statement::Empty),
        };

        match first {
            "COM" => Ok(Statement::Comment),
            "START" => Ok(Statement::Start),
            "FINISH" => Ok(Statement::Finish),
            "VAR" => {
                let (name, value) = match (words.next(), words.next(), words.next()) {
                    (Some(name), Some("="), Some(value)) => (name, value),
                    _ => return Err(parse_error("expected 'VAR <name> = <number>'")),
                };
                Ok(Statement::Var {
                    name,
                    value: parse_number(value)?,
                })
            }
            "PRINT" => {
                let operands: Vec<&str> = words.collect();
                match operands.as_slice() {
                    [name] => Ok(Statement::Print(*name)),
                    [lhs, operator, rhs] => {
                        Expression::parse(*lhs, *operator, *rhs).map(Statement::PrintExpression)
                    }
                    _ => Err(parse_error(
                        "expected 'PRINT <name>' or 'PRINT <operand> <op> <operand>'",
                    )),
                }
            }
            word => {
                if let Some(index) = word.find('+') {
                    Ok(Statement::Increment(&word[..index]))
                } else if let Some(index) = word.find('-') {
                    Ok(Statement::Decrement(&word[..index]))
                } else {
                    let value = match (words.next(), words.next()) {
                        (Some("="), value) => value,
                        _ => None,
                    };
                    Ok(Statement::Assign { name: word, value })
                }
            }
        }
    }
}

fn parse_error(message: &str) -> StatementError {
    StatementError::Parse(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{Operand, Operator};

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(Statement::parse(""), Ok(Statement::Empty));
        assert_eq!(Statement::parse("   \t "), Ok(Statement::Empty));
    }

    #[test]
    fn keywords() {
        assert_eq!(Statement::parse("COM ANOTHER COMMENT"), Ok(Statement::Comment));
        assert_eq!(Statement::parse("  START"), Ok(Statement::Start));
        assert_eq!(Statement::parse("FINISH  "), Ok(Statement::Finish));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            Statement::parse("start"),
            Ok(Statement::Assign {
                name: "start",
                value: None
            })
        );
    }

    #[test]
    fn var_declaration() {
        assert_eq!(
            Statement::parse("    VAR TUV = 15.5"),
            Ok(Statement::Var {
                name: "TUV",
                value: 15.5
            })
        );
        assert_eq!(
            Statement::parse("VAR N = -3"),
            Ok(Statement::Var {
                name: "N",
                value: -3.0
            })
        );
    }

    #[test]
    fn malformed_var_is_a_parse_error() {
        assert!(matches!(
            Statement::parse("VAR ABC"),
            Err(StatementError::Parse(_))
        ));
        assert!(matches!(
            Statement::parse("VAR ABC 25"),
            Err(StatementError::Parse(_))
        ));
        assert_eq!(
            Statement::parse("VAR ABC = twelve"),
            Err(StatementError::BadNumber("twelve".to_string()))
        );
    }

    #[test]
    fn print_forms() {
        assert_eq!(Statement::parse("PRINT GHI"), Ok(Statement::Print("GHI")));
        let expr = match Statement::parse("PRINT 2 * GHI") {
            Ok(Statement::PrintExpression(expr)) => expr,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(expr.lhs, Operand::Literal(2.0));
        assert_eq!(expr.operator, Operator::Multiply);
        assert_eq!(expr.rhs, Operand::Variable("GHI"));
        assert!(matches!(
            Statement::parse("PRINT"),
            Err(StatementError::Parse(_))
        ));
        assert!(matches!(
            Statement::parse("PRINT A +"),
            Err(StatementError::Parse(_))
        ));
    }

    #[test]
    fn increment_and_decrement_take_text_before_operator() {
        assert_eq!(Statement::parse("MNO++"), Ok(Statement::Increment("MNO")));
        assert_eq!(Statement::parse("MNO--"), Ok(Statement::Decrement("MNO")));
        assert_eq!(Statement::parse("A-B+"), Ok(Statement::Increment("A-B")));
    }

    #[test]
    fn assignment() {
        assert_eq!(
            Statement::parse("DEF = 26"),
            Ok(Statement::Assign {
                name: "DEF",
                value: Some("26")
            })
        );
        assert_eq!(
            Statement::parse("DEF = -2"),
            Ok(Statement::Assign {
                name: "DEF",
                value: Some("-2")
            })
        );
        assert_eq!(
            Statement::parse("DEF 26"),
            Ok(Statement::Assign {
                name: "DEF",
                value: None
            })
        );
    }
}
