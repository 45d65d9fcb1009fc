//! Cursor views over a shared `i32` slice.
//!
//! `IntBuf` is a minimal NIO-style int buffer: a position, an optional
//! mark, and relative/absolute accessors over one backing slice. Backing
//! storage is `&[Cell<i32>]`, so several cursors can hold overlapping
//! views of the same array at once (see [`IntBuf::slice`]).

use std::cell::Cell;

#[derive(Clone, Copy)]
pub struct IntBuf<'a> {
    cells: &'a [Cell<i32>],
    pos: usize,
    mark: Option<usize>,
}

impl<'a> IntBuf<'a> {
    /// Wrap a mutable slice in a single cursor starting at position 0.
    pub fn wrap(x: &'a mut [i32]) -> Self {
        Self::over(Cell::from_mut(x).as_slice_of_cells())
    }

    /// Cursor over an already-shared cell slice. Lets callers build
    /// several overlapping cursors from one `as_slice_of_cells` borrow.
    pub fn over(cells: &'a [Cell<i32>]) -> Self {
        IntBuf {
            cells,
            pos: 0,
            mark: None,
        }
    }

    /// Independent cursor over the remainder of this buffer, with its own
    /// position starting at 0. Both cursors read and write the same cells.
    pub fn slice(&self) -> IntBuf<'a> {
        IntBuf::over(&self.cells[self.pos..])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an absolute position. A mark beyond the new
    /// position is discarded.
    pub fn set_position(&mut self, p: usize) {
        assert!(p <= self.cells.len(), "position {p} out of bounds");
        self.pos = p;
        if self.mark.is_some_and(|m| m > p) {
            self.mark = None;
        }
    }

    pub fn remaining(&self) -> usize {
        self.cells.len() - self.pos
    }

    pub fn has_remaining(&self) -> bool {
        self.pos < self.cells.len()
    }

    /// Remember the current position for a later [`IntBuf::reset`].
    pub fn mark(&mut self) -> &mut Self {
        self.mark = Some(self.pos);
        self
    }

    /// Rewind to the marked position. Panics if no mark is set.
    pub fn reset(&mut self) -> &mut Self {
        self.pos = self.mark.expect("reset called without a mark");
        self
    }

    /// Read at the current position, then advance.
    pub fn get(&mut self) -> i32 {
        let v = self.cells[self.pos].get();
        self.pos += 1;
        v
    }

    /// Write at the current position, then advance.
    pub fn put(&mut self, v: i32) -> &mut Self {
        self.cells[self.pos].set(v);
        self.pos += 1;
        self
    }

    /// Absolute read; the cursor position is untouched.
    pub fn get_at(&self, i: usize) -> i32 {
        self.cells[i].get()
    }

    /// Absolute write; the cursor position is untouched.
    pub fn put_at(&self, i: usize, v: i32) {
        self.cells[i].set(v)
    }
}
