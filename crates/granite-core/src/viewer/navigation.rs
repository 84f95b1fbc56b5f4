use crate::error::{GraniteError, Result};

/// Current position inside an image list of fixed length.
///
/// Out-of-range requests are ignored rather than reported: the UI hides or
/// disables the affordances that would produce them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    index: usize,
    len: usize,
}

impl NavigationState {
    pub fn new(len: usize, initial: usize) -> Result<Self> {
        if initial >= len {
            return Err(GraniteError::IndexOutOfRange {
                index: initial,
                total: len,
            });
        }
        Ok(Self {
            index: initial,
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the index changed.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Returns true if the index changed.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Returns true if `index` was in range. Jumping to the current index
    /// still counts as a successful navigation.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// One-based "current / total" label shown in the viewer header.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}
