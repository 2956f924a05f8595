//! Cell-grid geometry for hit testing and placement

/// Rectangle bounds in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Create rectangle from terminal dimensions (fills entire screen)
    pub fn fullscreen(cols: u16, rows: u16) -> Self {
        Rect::new(0, 0, cols, rows)
    }

    /// Get right edge x-coordinate
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get bottom edge y-coordinate
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// A rectangle of the given size placed directly under this one
    pub fn below(&self, width: u16, height: u16) -> Rect {
        Rect::new(self.x, self.bottom(), width, height)
    }

    /// Create a subrect with padding applied
    pub fn inner(&self, padding: u16) -> Self {
        let padding2 = padding.saturating_mul(2);
        Rect {
            x: self.x.saturating_add(padding),
            y: self.y.saturating_add(padding),
            width: self.width.saturating_sub(padding2),
            height: self.height.saturating_sub(padding2),
        }
    }
}
