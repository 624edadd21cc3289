//! Viewport overflow detection for a candidate position.

use geometry::{Position, Size, Viewport};
use placement::Side;

/// Which padded viewport edges a candidate position violates.
///
/// The four checks are independent; content larger than the viewport can
/// overflow opposite edges at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    /// Content crosses the top padding line.
    pub top: bool,
    /// Content crosses the bottom padding line.
    pub bottom: bool,
    /// Content crosses the left padding line.
    pub left: bool,
    /// Content crosses the right padding line.
    pub right: bool,
}

impl Overflow {
    /// Whether any edge is violated.
    #[must_use]
    pub const fn any(self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    /// Whether the edge matching `side` is violated.
    #[must_use]
    pub const fn on_side(self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Report which viewport edges the content would escape at `position`,
/// keeping `padding` pixels of margin on every edge.
#[must_use]
pub fn detect_overflow(
    position: Position,
    content: Size,
    viewport: Viewport,
    padding: f32,
) -> Overflow {
    Overflow {
        top: position.top < padding,
        bottom: position.top + content.height > viewport.height - padding,
        left: position.left < padding,
        right: position.left + content.width > viewport.width - padding,
    }
}
