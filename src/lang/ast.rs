/*!
# Program Model

Immutable statement and expression nodes produced by the parser. Every
type serializes with `serde` so a parsed program can be handed to an
external backend without that backend linking the parser.

*/

use crate::{LineNumber, Number};
use serde::{Deserialize, Serialize};

/// One parsed, line-numbered statement.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Line {
    pub number: LineNumber,
    pub statement: Statement,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Statement {
    Let {
        var: char,
        expr: Expression,
    },
    Print(Vec<PrintItem>),
    Input(char),
    If {
        lhs: Expression,
        relop: Relop,
        rhs: Expression,
        then_line: LineNumber,
    },
    For {
        var: char,
        from: Expression,
        to: Expression,
        step: Expression,
    },
    Next(char),
    Goto(LineNumber),
    Gosub(LineNumber),
    Return,
    End,
}

/// A numeric-valued expression. `Arithmetic` chains are flat by
/// construction: operands are never themselves `Arithmetic`, and
/// `operators.len() == operands.len() - 1`. Evaluation is strictly
/// left to right.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Expression {
    Variable(char),
    Literal(Number),
    Arithmetic {
        operands: Vec<Expression>,
        operators: Vec<AriOp>,
    },
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum PrintItem {
    Text(String),
    Expr(Expression),
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum AriOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Relop {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Relop {
    pub fn holds(&self, lhs: Number, rhs: Number) -> bool {
        use Relop::*;
        match self {
            Equal => lhs == rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.statement)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Let { var, expr } => write!(f, "LET {} = {}", var, expr),
            Print(items) => {
                write!(f, "PRINT ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Input(var) => write!(f, "INPUT {}", var),
            If {
                lhs,
                relop,
                rhs,
                then_line,
            } => write!(f, "IF {} {} {} THEN {}", lhs, relop, rhs, then_line),
            For {
                var,
                from,
                to,
                step,
            } => write!(f, "FOR {} = {} TO {} STEP {}", var, from, to, step),
            Next(var) => write!(f, "NEXT {}", var),
            Goto(line) => write!(f, "GOTO {}", line),
            Gosub(line) => write!(f, "GOSUB {}", line),
            Return => write!(f, "RETURN"),
            End => write!(f, "END"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Variable(var) => write!(f, "{}", var),
            Literal(n) => write!(f, "{}", n),
            Arithmetic {
                operands,
                operators,
            } => {
                write!(f, "{}", operands[0])?;
                for (op, operand) in operators.iter().zip(&operands[1..]) {
                    write!(f, " {} {}", op, operand)?;
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for PrintItem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PrintItem::Text(s) => write!(f, "\"{}\"", s),
            PrintItem::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

impl std::fmt::Display for AriOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use AriOp::*;
        match self {
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for Relop {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relop::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_display() {
        let line = Line {
            number: 10,
            statement: Statement::Let {
                var: 'A',
                expr: Expression::Arithmetic {
                    operands: vec![Expression::Literal(1), Expression::Variable('B')],
                    operators: vec![AriOp::Add],
                },
            },
        };
        assert_eq!(line.to_string(), "10 LET A = 1 + B");
    }

    #[test]
    fn test_relop_holds() {
        assert!(Relop::LessEqual.holds(3, 3));
        assert!(Relop::NotEqual.holds(3, 4));
        assert!(!Relop::Greater.holds(3, 4));
    }
}
