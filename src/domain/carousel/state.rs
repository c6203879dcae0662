// SPDX-License-Identifier: MPL-2.0
//! Index arithmetic for carousel navigation.
//!
//! The state only knows how many items exist, never the items themselves.
//! Navigation wraps in both directions so the items form a ring.

use std::fmt;

/// Position of the displayed item within a list of `len` items.
///
/// Invariant: `current_index < len` whenever `len > 0`, and
/// `current_index == 0` when the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
}

/// Rejected jump target for [`CarouselState::go_to_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// Requested index.
    pub index: usize,
    /// Number of items at the time of the request.
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slide index {} is out of range for {} item(s)",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

impl CarouselState {
    /// Creates the state for `len` items, showing the first one.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            current_index: 0,
            len,
        }
    }

    /// Index of the displayed item.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of items the state indexes into.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true when navigation controls and indicators should be shown.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    /// Moves one item back, wrapping from the first item to the last.
    pub fn go_to_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current_index = if self.current_index == 0 {
            self.len - 1
        } else {
            self.current_index - 1
        };
    }

    /// Moves one item forward, wrapping from the last item to the first.
    pub fn go_to_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current_index = if self.current_index == self.len - 1 {
            0
        } else {
            self.current_index + 1
        };
    }

    /// Jumps directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] and leaves the state untouched when
    /// `index >= len`.
    pub fn go_to_index(&mut self, index: usize) -> Result<(), IndexOutOfRange> {
        if index >= self.len {
            return Err(IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current_index = index;
        Ok(())
    }
}
