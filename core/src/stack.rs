use core::fmt;
use thiserror::Error;

/// Misuse of a [`BoundedStack`].
///
/// Well-formed expressions never trigger these; they surface only if the
/// evaluators' bookkeeping is wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Popping from an empty stack")]
    Empty,

    #[error("Stack is full (capacity {capacity})")]
    Full { capacity: usize },
}

/// A LIFO stack with a fixed maximum size.
///
/// Both evaluators size their operand and operator stacks to an upper bound on
/// the number of tokens in the expression, so the bound is never hit in
/// practice. Unlike a `Vec`, a full stack refuses new elements instead of
/// growing, and reading from an empty stack is an error rather than `None`.
///
/// # Examples
///
/// ```
/// use decicalc_core::stack::BoundedStack;
///
/// let mut stack = BoundedStack::new(2);
/// assert!(stack.push(42));
/// assert!(stack.push(17));
/// assert!(!stack.push(3)); // full
/// assert_eq!(stack.pop(), Ok(17));
/// assert_eq!(stack.peek(), Ok(&42));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct BoundedStack<T> {
    items: Vec<T>,
    max_size: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack holding at most `max_size` elements.
    ///
    /// Pre-allocates at most 256 slots; the rest is allocated on demand.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size.min(256)),
            max_size,
        }
    }

    /// Pushes a value, returning `false` (and dropping nothing else) if the
    /// stack is already full.
    #[inline]
    #[must_use = "a full stack rejects the value"]
    pub fn push(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Like [`push`](Self::push), but reports a full stack as an error.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), StackError> {
        if self.push(value) {
            Ok(())
        } else {
            Err(StackError::Full {
                capacity: self.max_size,
            })
        }
    }

    /// Removes and returns the top value.
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Returns a reference to the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    /// Returns the maximum number of elements the stack accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Iterates from bottom to top.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("capacity", &self.max_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack() {
        let stack: BoundedStack<i32> = BoundedStack::new(100);
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), 100);
        assert!(stack.is_empty());
        assert!(!stack.is_full());
    }

    #[test]
    fn test_push_pop() {
        let mut stack = BoundedStack::new(100);
        assert!(stack.push(1));
        assert!(stack.push(2));
        assert!(stack.push(3));

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_peek() {
        let mut stack = BoundedStack::new(100);
        assert_eq!(stack.peek(), Err(StackError::Empty));

        assert!(stack.push(42));
        assert_eq!(stack.peek(), Ok(&42));
        assert_eq!(stack.len(), 1); // Peek doesn't remove

        assert!(stack.push(17));
        assert_eq!(stack.peek(), Ok(&17));
    }

    #[test]
    fn test_push_when_full_is_rejected() {
        let mut stack = BoundedStack::new(2);
        assert!(stack.push(1));
        assert!(stack.push(2));
        assert!(stack.is_full());

        assert!(!stack.push(3));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Ok(&2));
    }

    #[test]
    fn test_try_push_reports_full() {
        let mut stack = BoundedStack::new(1);
        assert_eq!(stack.try_push(1), Ok(()));
        assert_eq!(stack.try_push(2), Err(StackError::Full { capacity: 1 }));
    }

    #[test]
    fn test_zero_capacity() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_full());
        assert!(stack.is_empty());
        assert!(!stack.push('x'));
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_iter() {
        let mut stack = BoundedStack::new(100);
        for i in 1..=3 {
            assert!(stack.push(i));
        }

        let items: Vec<_> = stack.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_large_stack() {
        let mut stack = BoundedStack::new(10000);
        for i in 0..1000 {
            assert!(stack.push(i));
        }

        assert_eq!(stack.len(), 1000);

        for i in (0..1000).rev() {
            assert_eq!(stack.pop(), Ok(i));
        }
        assert!(stack.is_empty());
    }
}
