/*!
# Language Module

Lexical analysis and parsing of Tiny BASIC source text.

*/

mod error;
mod lex;
mod parse;
mod token;

pub use error::Error;
pub use lex::lex;
pub use parse::parse;
pub use token::{Operator, Token, Word};

pub mod ast;
