//! Append-only writer for the staging buffer.

use crate::error::ArenaError;

/// Write access to the staging buffer during a step.
///
/// Cells are appended in row-major order, one per slot. A slot cannot be
/// rewritten and the buffer cannot grow past the grid's cell count, so
/// each cell's next state is written exactly once.
#[derive(Debug)]
pub struct StagingWriter<'a, S> {
    buf: &'a mut Vec<S>,
    capacity: usize,
}

impl<'a, S> StagingWriter<'a, S> {
    pub(crate) fn new(buf: &'a mut Vec<S>, capacity: usize) -> Self {
        debug_assert!(buf.is_empty(), "staging must be cleared before a step");
        Self { buf, capacity }
    }

    /// Append the next cell in row-major order.
    pub fn push(&mut self, state: S) -> Result<(), ArenaError> {
        if self.buf.len() >= self.capacity {
            return Err(ArenaError::StagingOverflow {
                capacity: self.capacity,
            });
        }
        self.buf.push(state);
        Ok(())
    }

    /// Number of cells written so far.
    pub fn written(&self) -> usize {
        self.buf.len()
    }

    /// Whether every cell has been written.
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    /// Total number of cells this step must write.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_until_full() {
        let mut buf = Vec::new();
        let mut w = StagingWriter::new(&mut buf, 2);
        assert!(!w.is_full());
        w.push(1u8).unwrap();
        w.push(2u8).unwrap();
        assert!(w.is_full());
        assert_eq!(w.written(), 2);
        assert_eq!(w.push(3u8), Err(ArenaError::StagingOverflow { capacity: 2 }));
        assert_eq!(buf, vec![1, 2]);
    }
}
