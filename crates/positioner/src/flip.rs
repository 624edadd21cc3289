//! Side flipping when the requested placement runs out of room.

use crate::compute::compute_position;
use crate::overflow::detect_overflow;
use geometry::{Position, Rect, Size, Viewport};
use log::{debug, trace};
use placement::Placement;

/// Outcome of flip resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipResult {
    /// The computed position, for the final placement.
    pub position: Position,
    /// The placement actually used.
    pub placement: Placement,
    /// True when the requested side was swapped for its opposite.
    pub flipped: bool,
}

/// Place the content, flipping to the opposite side of the anchor when the
/// primary axis overflows the padded viewport.
///
/// Exactly one flip attempt is made. Only the edge named by the placement's
/// side can trigger it: secondary-axis overflow is left for the viewport
/// clamp, since swapping sides cannot fix it. If the opposite side overflows
/// as well, the flipped placement is still reported and the clamp provides
/// the final safety net.
#[must_use]
pub fn apply_flip(
    anchor: Rect,
    content: Size,
    placement: Placement,
    offset: f32,
    align_offset: f32,
    viewport: Viewport,
    padding: f32,
) -> FlipResult {
    let candidate = compute_position(anchor, content, placement, offset, align_offset);
    let overflow = detect_overflow(candidate, content, viewport, padding);
    trace!(
        "candidate for {placement}: top={}, left={}, overflow={overflow:?}",
        candidate.top, candidate.left
    );

    if overflow.on_side(placement.side) {
        let opposite = placement.flipped();
        debug!("{} edge out of room, flipping {placement} to {opposite}", placement.side);
        let position = compute_position(anchor, content, opposite, offset, align_offset);
        return FlipResult {
            position,
            placement: opposite,
            flipped: true,
        };
    }

    FlipResult {
        position: candidate,
        placement,
        flipped: false,
    }
}
