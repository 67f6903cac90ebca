// SPDX-License-Identifier: MPL-2.0
//! Wrapping cursor over an ordered list.

/// Selected position in a list of `len` items.
///
/// All movement wraps modulo `len`. An empty cursor (`len == 0`) has no
/// position and every movement is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Creates a cursor at the first item of a list of `len` items.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Returns the selected index, or `None` for an empty list.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Moves forward by one, wrapping from the last item to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Moves backward by one, wrapping from the first item to the last.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Moves to the first item.
    pub fn home(&mut self) {
        self.index = 0;
    }

    /// Moves to `index` if it is in range. Returns whether the cursor moved.
    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// One-based position and total, as shown in "Image 3 of 10".
    #[must_use]
    pub fn position(self) -> Option<(usize, usize)> {
        self.index().map(|index| (index + 1, self.len))
    }
}
