use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Size-limited stack
///
/// Backs the GOSUB return stack. Depth is bounded by this explicit
/// limit, never by the host call stack, so deep subroutine nesting
/// fails with a reportable error instead of exhausting the process.
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }

    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }

    pub fn clear(&mut self) {
        self.vec.clear()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        if self.vec.len() > self.max_len() {
            Err(error!(OutOfMemory))
        } else {
            Ok(())
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack: Stack<u32> = Stack::new();
        stack.push(10).unwrap();
        stack.push(20).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), None);
    }
}
