use super::ast::{AriOp, Expression, Line, PrintItem, Relop, Statement};
use super::lex::lex;
use super::token::{Operator, Token, Word};
use super::Error;
use crate::{LineNumber, Number};

type Result<T> = std::result::Result<T, Error>;

/// Parses complete source text into an ordered list of numbered
/// statements.
///
/// Blank lines are skipped. Lines consisting solely of one quoted
/// string are whole-line comments and are skipped too. `REM` lines are
/// validated for a well-formed line-number prefix, then dropped.
/// Parsing stops at the first grammar violation; the returned failure
/// names the offending raw line.
pub fn parse(source: &str) -> Result<Vec<Line>> {
    let mut lines: Vec<Line> = vec![];
    for raw in source.lines() {
        let raw = raw.trim();
        if raw.is_empty() || is_quoted_comment(raw) {
            continue;
        }
        match Parser::line(raw) {
            Ok(Some(line)) => lines.push(line),
            Ok(None) => {}
            Err(error) => return Err(error.in_line(raw)),
        }
    }
    Ok(lines)
}

fn is_quoted_comment(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"') && !s[1..s.len() - 1].contains('"')
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Parses one physical line. `Ok(None)` is a remark.
    fn line(raw: &str) -> Result<Option<Line>> {
        let tokens = lex(raw);
        let mut parse = Parser {
            tokens: &tokens,
            pos: 0,
        };
        let number = parse.line_number()?;
        let word = match parse.next() {
            Some(Token::Word(word)) => *word,
            _ => return Err(Error::new("EXPECTED STATEMENT")),
        };
        if word == Word::Rem {
            return Ok(None);
        }
        let statement = Statement::for_word(&mut parse, word)?;
        parse.finish()?;
        Ok(Some(Line { number, statement }))
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consumes every remaining token of the line.
    fn rest(&mut self) -> &'a [Token] {
        let rest = &self.tokens[self.pos..];
        self.pos = self.tokens.len();
        rest
    }

    fn finish(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(_) => Err(Error::new("UNEXPECTED TOKEN")),
        }
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(Token::Number(s)) => {
                let number = s
                    .parse::<LineNumber>()
                    .map_err(|e| Error::new("INVALID LINE NUMBER").because(e))?;
                if number < 1 {
                    return Err(Error::new("INVALID LINE NUMBER"));
                }
                Ok(number)
            }
            _ => Err(Error::new("INVALID LINE NUMBER")),
        }
    }

    /// A jump target after GOTO, GOSUB, or THEN.
    fn target_line(&mut self) -> Result<LineNumber> {
        match self.peek() {
            Some(Token::Number(_)) => self.line_number(),
            _ => Err(Error::new("EXPECTED LINE NUMBER")),
        }
    }

    fn variable(&mut self) -> Result<char> {
        if let Some(Token::Ident(s)) = self.next() {
            let mut chars = s.chars();
            if let (Some(var), None) = (chars.next(), chars.next()) {
                return Ok(var);
            }
        }
        Err(Error::new("EXPECTED VARIABLE"))
    }

    fn expect_operator(&mut self, operator: Operator) -> Result<()> {
        match self.next() {
            Some(Token::Operator(op)) if *op == operator => Ok(()),
            _ => Err(Error::new("EXPECTED EQUALS")),
        }
    }

    fn expect_word(&mut self, word: Word) -> Result<()> {
        match self.next() {
            Some(Token::Word(w)) if *w == word => Ok(()),
            _ => Err(match word {
                Word::To => Error::new("EXPECTED TO"),
                _ => Error::new("EXPECTED RESERVED WORD"),
            }),
        }
    }

    /// A bare literal or variable; FOR bounds admit nothing richer.
    fn simple(&mut self) -> Result<Expression> {
        match self.next() {
            Some(token) => value(token),
            None => Err(Error::new("EXPECTED EXPRESSION")),
        }
    }
}

/// A single value token: an all-digits literal or a one-letter
/// variable.
fn value(token: &Token) -> Result<Expression> {
    match token {
        Token::Number(s) => {
            let n = s
                .parse::<Number>()
                .map_err(|e| Error::new("INVALID LITERAL").because(e))?;
            Ok(Expression::Literal(n))
        }
        Token::Ident(s) => {
            let mut chars = s.chars();
            if let (Some(var), None) = (chars.next(), chars.next()) {
                Ok(Expression::Variable(var))
            } else {
                Err(Error::new("EXPECTED VARIABLE"))
            }
        }
        _ => Err(Error::new("EXPECTED EXPRESSION")),
    }
}

/// Parses a token run into a value expression. A lone token is a
/// literal or variable; a longer run must alternate value, operator,
/// value and collapses into one flat left-to-right `Arithmetic` chain.
fn expression(tokens: &[Token]) -> Result<Expression> {
    match tokens {
        [] => Err(Error::new("EXPECTED EXPRESSION")),
        [token] => value(token),
        _ => {
            let mut operands = vec![value(&tokens[0])?];
            let mut operators: Vec<AriOp> = vec![];
            let mut i = 1;
            while i < tokens.len() {
                match &tokens[i] {
                    Token::Operator(op) if op.is_arithmetic() => operators.push(ari_op(op)),
                    _ => return Err(Error::new("EXPECTED ARITHMETIC OPERATOR")),
                }
                match tokens.get(i + 1) {
                    Some(token) => operands.push(value(token)?),
                    None => return Err(Error::new("EXPECTED EXPRESSION")),
                }
                i += 2;
            }
            Ok(Expression::Arithmetic {
                operands,
                operators,
            })
        }
    }
}

fn ari_op(operator: &Operator) -> AriOp {
    use Operator::*;
    match operator {
        Plus => AriOp::Add,
        Minus => AriOp::Subtract,
        Multiply => AriOp::Multiply,
        Divide => AriOp::Divide,
        Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
            unreachable!("relational operator in arithmetic position")
        }
    }
}

fn rel_op(operator: &Operator) -> Relop {
    use Operator::*;
    match operator {
        Equal => Relop::Equal,
        NotEqual => Relop::NotEqual,
        Less => Relop::Less,
        LessEqual => Relop::LessEqual,
        Greater => Relop::Greater,
        GreaterEqual => Relop::GreaterEqual,
        Plus | Minus | Multiply | Divide => {
            unreachable!("arithmetic operator in relational position")
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Let => Self::r#let(parse),
            Print => Self::print(parse),
            Input => Ok(Statement::Input(parse.variable()?)),
            If => Self::r#if(parse),
            For => Self::r#for(parse),
            Next => Ok(Statement::Next(parse.variable()?)),
            Goto => Ok(Statement::Goto(parse.target_line()?)),
            Gosub => Ok(Statement::Gosub(parse.target_line()?)),
            Return => Ok(Statement::Return),
            End => Ok(Statement::End),
            Rem | Then | To | Step => Err(Error::new("EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect_operator(Operator::Equal)?;
        let expr = expression(parse.rest())?;
        Ok(Statement::Let { var, expr })
    }

    fn print(parse: &mut Parser) -> Result<Statement> {
        let mut items: Vec<PrintItem> = vec![];
        for segment in parse.rest().split(|t| *t == Token::Comma) {
            match segment {
                [Token::String(s)] => items.push(PrintItem::Text(s.clone())),
                _ => items.push(PrintItem::Expr(expression(segment)?)),
            }
        }
        Ok(Statement::Print(items))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let rest = parse.rest();
        let then_at = rest
            .iter()
            .position(|t| *t == Token::Word(Word::Then))
            .ok_or_else(|| Error::new("EXPECTED THEN"))?;
        let condition = &rest[..then_at];
        let relop_at = condition
            .iter()
            .position(|t| match t {
                Token::Operator(op) => op.is_relational(),
                _ => false,
            })
            .ok_or_else(|| Error::new("EXPECTED RELATIONAL OPERATOR"))?;
        let relop = match &condition[relop_at] {
            Token::Operator(op) => rel_op(op),
            _ => return Err(Error::new("EXPECTED RELATIONAL OPERATOR")),
        };
        let lhs = expression(&condition[..relop_at])?;
        let rhs = expression(&condition[relop_at + 1..])?;
        let mut tail = Parser {
            tokens: &rest[then_at + 1..],
            pos: 0,
        };
        let then_line = tail.target_line()?;
        tail.finish()?;
        Ok(Statement::If {
            lhs,
            relop,
            rhs,
            then_line,
        })
    }

    fn r#for(parse: &mut Parser) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect_operator(Operator::Equal)?;
        let from = parse.simple()?;
        parse.expect_word(Word::To)?;
        let to = parse.simple()?;
        let step = match parse.peek() {
            Some(Token::Word(Word::Step)) => {
                parse.next();
                parse.simple()?
            }
            _ => Expression::Literal(1),
        };
        Ok(Statement::For {
            var,
            from,
            to,
            step,
        })
    }
}
