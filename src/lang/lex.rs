use super::token::{Operator, Token, Word};

/// Splits one source line into lexical tokens.
///
/// Recognized, in priority order at each scan position: double-quoted
/// strings, runs of uppercase letters, runs of digits, two-character
/// relational operators before single-character ones, arithmetic
/// operators, and punctuation. Whitespace separates tokens and yields
/// nothing. Anything else is skipped silently; structural problems are
/// the parser's to report.
pub fn lex(s: &str) -> Vec<Token> {
    Lexer { line: s, pos: 0 }.collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

struct Lexer<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn string(&mut self) -> Option<Token> {
        match self.rest()[1..].find('"') {
            Some(close) => {
                let s = &self.rest()[1..1 + close];
                self.pos += close + 2;
                Some(Token::String(s.to_string()))
            }
            None => {
                // An unclosed quote is not a string literal. Drop the
                // quote character and keep scanning.
                self.pos += 1;
                None
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let len = self
            .rest()
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or_else(|| self.rest().len());
        let run = &self.rest()[..len];
        self.pos += len;
        match Word::from_string(run) {
            Some(word) => Token::Word(word),
            None => Token::Ident(run.to_string()),
        }
    }

    fn number(&mut self) -> Token {
        let len = self
            .rest()
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or_else(|| self.rest().len());
        let run = &self.rest()[..len];
        self.pos += len;
        Token::Number(run.to_string())
    }

    fn minutia(&mut self, ch: char) -> Option<Token> {
        use Operator::*;
        for (symbol, op) in &[("<=", LessEqual), (">=", GreaterEqual), ("<>", NotEqual)] {
            if self.rest().starts_with(*symbol) {
                self.pos += 2;
                return Some(Token::Operator(*op));
            }
        }
        let token = match ch {
            '=' => Some(Token::Operator(Equal)),
            '<' => Some(Token::Operator(Less)),
            '>' => Some(Token::Operator(Greater)),
            '+' => Some(Token::Operator(Plus)),
            '-' => Some(Token::Operator(Minus)),
            '*' => Some(Token::Operator(Multiply)),
            '/' => Some(Token::Operator(Divide)),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            ',' => Some(Token::Comma),
            _ => None,
        };
        self.pos += ch.len_utf8();
        token
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ch = self.rest().chars().next()?;
            if is_basic_whitespace(ch) {
                self.pos += 1;
                continue;
            }
            if ch == '"' {
                match self.string() {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }
            if ch.is_ascii_uppercase() {
                return Some(self.alphabetic());
            }
            if ch.is_ascii_digit() {
                return Some(self.number());
            }
            match self.minutia(ch) {
                Some(token) => return Some(token),
                None => continue,
            }
        }
    }
}
