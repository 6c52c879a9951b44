use crate::symbol::Symbol;

/// Allocator for synthetic symbol ids.
///
/// Ids are handed out contiguously from `first`, never reused and never
/// skipped, so allocation order equals training order.
#[derive(Debug, Clone)]
pub(crate) struct IdGenerator {
    first: u32,
    next: u32,
}

impl IdGenerator {
    /// Creates a generator whose first id is `first`.
    pub(crate) fn starting_at(first: u32) -> Self {
        Self { first, next: first }
    }

    /// Returns the id the next call to `get` will hand out.
    pub(crate) fn peek(&self) -> Symbol {
        Symbol::new(self.next)
    }

    /// Allocates the next id.
    ///
    /// Callers allocate at most `merge_count` ids, and config validation keeps
    /// `vocab_size + merge_count` within `u32`, so overflow here is a bug.
    pub(crate) fn get(&mut self) -> Symbol {
        let id = self.next;
        self.next = self
            .next
            .checked_add(1)
            .expect("synthetic symbol id space exhausted");
        Symbol::new(id)
    }

    /// Number of ids allocated so far.
    pub(crate) fn allocated(&self) -> usize {
        (self.next - self.first) as usize
    }

    /// Forgets every allocation.
    pub(crate) fn reset(&mut self) {
        self.next = self.first;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_allocation() {
        let mut gen = IdGenerator::starting_at(256);
        assert_eq!(gen.get().id(), 256);
        assert_eq!(gen.get().id(), 257);
        assert_eq!(gen.get().id(), 258);
        assert_eq!(gen.allocated(), 3);
    }

    #[test]
    fn test_peek_does_not_allocate() {
        let mut gen = IdGenerator::starting_at(512);
        assert_eq!(gen.peek().id(), 512);
        assert_eq!(gen.peek().id(), 512);
        assert_eq!(gen.get().id(), 512);
        assert_eq!(gen.peek().id(), 513);
    }

    #[test]
    fn test_reset_restarts_at_first() {
        let mut gen = IdGenerator::starting_at(10);
        gen.get();
        gen.get();
        gen.reset();
        assert_eq!(gen.allocated(), 0);
        assert_eq!(gen.get().id(), 10);
    }

    #[test]
    #[should_panic(expected = "synthetic symbol id space exhausted")]
    fn test_overflow_panics() {
        let mut gen = IdGenerator::starting_at(u32::MAX);
        gen.get();
    }
}
