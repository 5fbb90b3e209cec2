//! # Tiny BASIC
//!
//! A front end and tree-walking interpreter for the classic line-numbered
//! Tiny BASIC dialect: ten statement kinds, single-letter integer
//! variables, left-to-right arithmetic.
//!
//! The [`lang`] module lexes and parses source text into an immutable
//! program model. The [`mach`] module executes that model against a
//! mutable variable store, loop records, and an explicit return stack.
//!
//! ```
//! use tinybasic::lang::parse;
//! use tinybasic::mach::{Program, Runtime};
//!
//! let program = Program::new(parse("10 PRINT \"HELLO\"\n20 END").unwrap());
//! let mut output = Vec::new();
//! let mut runtime = Runtime::new(
//!     &program,
//!     || 0,
//!     |s| output.push(s.to_string()),
//!     || {},
//! );
//! runtime.run().unwrap();
//! drop(runtime);
//! assert_eq!(output, vec!["HELLO"]);
//! ```

pub mod lang;
pub mod mach;

/// A BASIC line number. Always 1 or greater in a parsed program.
pub type LineNumber = u32;

/// The numeric type of all BASIC variables and literals.
pub type Number = i32;
