/*!
## Machine Module

Execution engine for parsed Tiny BASIC programs.

*/

mod error;
mod program;
mod runtime;
mod stack;

pub use error::Error;
pub use error::ErrorCode;
pub use program::Program;
pub use runtime::Runtime;
pub use stack::Stack;

#[cfg(test)]
mod tests;
