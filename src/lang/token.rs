use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<String, Word> = Word::ALL
        .iter()
        .map(|w| (w.to_string(), *w))
        .collect();
);

/// One lexical token from a single source line. Number and string
/// literals stay textual here; numeric conversion and range checks
/// belong to the parser.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(String),
    String(String),
    Word(Word),
    Ident(String),
    Operator(Operator),
    LParen,
    RParen,
    Comma,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
            Word(w) => write!(f, "{}", w),
            Ident(s) => write!(f, "{}", s),
            Operator(op) => write!(f, "{}", op),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
        }
    }
}

/// Reserved words: the ten statement keywords plus the IF/FOR
/// connectives.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Rem,
    Let,
    Print,
    Input,
    If,
    Then,
    For,
    To,
    Step,
    Next,
    Goto,
    Gosub,
    Return,
    End,
}

impl Word {
    const ALL: [Word; 14] = [
        Word::Rem,
        Word::Let,
        Word::Print,
        Word::Input,
        Word::If,
        Word::Then,
        Word::For,
        Word::To,
        Word::Step,
        Word::Next,
        Word::Goto,
        Word::Gosub,
        Word::Return,
        Word::End,
    ];

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(s).copied())
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Rem => write!(f, "REM"),
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            If => write!(f, "IF"),
            Then => write!(f, "THEN"),
            For => write!(f, "FOR"),
            To => write!(f, "TO"),
            Step => write!(f, "STEP"),
            Next => write!(f, "NEXT"),
            Goto => write!(f, "GOTO"),
            Gosub => write!(f, "GOSUB"),
            Return => write!(f, "RETURN"),
            End => write!(f, "END"),
        }
    }
}

/// Relational and arithmetic operator tokens. The lexer emits the
/// two-character forms before the single-character ones.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn is_relational(&self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Plus | Minus | Multiply | Divide => false,
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        !self.is_relational()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let w = Word::from_string("GOSUB");
        assert_eq!(w, Some(Word::Gosub));
        let w = Word::from_string("PICKLES");
        assert_eq!(w, None);
    }

    #[test]
    fn test_operator_classes() {
        assert!(Operator::LessEqual.is_relational());
        assert!(Operator::Divide.is_arithmetic());
        assert!(!Operator::Equal.is_arithmetic());
    }
}
