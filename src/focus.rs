//! Focus ring for hosts with several pickers
//!
//! Tracks which slot has keyboard focus and moves it with Tab/Shift-Tab. The
//! host forwards the reported change to the components' `on_blur`/`on_focus`.
//!
//! # Example
//!
//! ```
//! use mkui_calendar::focus::{FocusDirection, FocusRing};
//!
//! let mut ring = FocusRing::new(3);
//! assert_eq!(ring.move_focus(FocusDirection::Next), Some((None, 0)));
//! assert_eq!(ring.move_focus(FocusDirection::Previous), Some((Some(0), 2)));
//! assert!(ring.is_focused(2));
//! ```

/// Focus ring navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Tab
    Next,
    /// Shift+Tab
    Previous,
}

/// Focus position over a fixed number of slots
#[derive(Debug, Clone)]
pub struct FocusRing {
    len: usize,
    focused: Option<usize>,
    /// Whether focus wraps around at boundaries
    wrap_around: bool,
}

impl FocusRing {
    /// Create a ring over `len` slots with nothing focused
    pub fn new(len: usize) -> Self {
        Self {
            len,
            focused: None,
            wrap_around: true,
        }
    }

    pub fn with_wrap_around(mut self, wrap: bool) -> Self {
        self.wrap_around = wrap;
        self
    }

    /// Focus a specific slot; out-of-range indices are ignored
    pub fn focus(&mut self, index: usize) -> Option<(Option<usize>, usize)> {
        if index >= self.len {
            return None;
        }
        let previous = self.focused.replace(index);
        Some((previous, index))
    }

    /// Clear focus
    pub fn blur(&mut self) -> Option<usize> {
        self.focused.take()
    }

    /// Move focus; returns the previously focused slot and the new one
    pub fn move_focus(&mut self, direction: FocusDirection) -> Option<(Option<usize>, usize)> {
        if self.len == 0 {
            return None;
        }
        let forward = direction == FocusDirection::Next;
        let next = match self.focused {
            None if forward => Some(0),
            None => Some(self.len - 1),
            Some(idx) if forward && idx + 1 < self.len => Some(idx + 1),
            Some(idx) if !forward && idx > 0 => Some(idx - 1),
            Some(_) if self.wrap_around && forward => Some(0),
            Some(_) if self.wrap_around => Some(self.len - 1),
            Some(_) => None,
        }?;
        let previous = self.focused.replace(next);
        tracing::trace!(?previous, next, "focus moved");
        Some((previous, next))
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
