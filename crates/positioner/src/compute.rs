//! Pure geometric placement of content against an anchor.
//!
//! No viewport awareness lives here; overflow handling and clamping are the
//! concern of the later pipeline stages.

use geometry::{Position, Rect, Size};
use placement::{Alignment, Placement, Side};

/// Compute the content's top-left corner for a placement.
///
/// The primary axis runs perpendicular to the anchor edge named by the
/// placement's side: the content sits `offset` pixels away from that edge.
/// The secondary axis runs parallel to it and is governed by the alignment:
///
/// - `center`: content midpoint coincides with the anchor midpoint
/// - `start`: content is flush with the anchor's near edge, shifted by
///   `align_offset` toward the far edge
/// - `end`: content is flush with the anchor's far edge, shifted by
///   `align_offset` back toward the near edge
///
/// `start` and `end` mirror each other around `center`, with `align_offset`
/// always pulling the content toward the anchor's middle.
#[must_use]
pub fn compute_position(
    anchor: Rect,
    content: Size,
    placement: Placement,
    offset: f32,
    align_offset: f32,
) -> Position {
    match placement.side {
        Side::Top | Side::Bottom => {
            let top = match placement.side {
                Side::Top => anchor.y - content.height - offset,
                _ => anchor.bottom() + offset,
            };
            let left = align_along_axis(
                anchor.x,
                anchor.width,
                content.width,
                placement.alignment,
                align_offset,
            );
            Position { top, left }
        }
        Side::Left | Side::Right => {
            let left = match placement.side {
                Side::Left => anchor.x - content.width - offset,
                _ => anchor.right() + offset,
            };
            let top = align_along_axis(
                anchor.y,
                anchor.height,
                content.height,
                placement.alignment,
                align_offset,
            );
            Position { top, left }
        }
    }
}

/// Position along the secondary axis, given the anchor's origin and extent on
/// that axis.
fn align_along_axis(
    origin: f32,
    anchor_extent: f32,
    content_extent: f32,
    alignment: Alignment,
    align_offset: f32,
) -> f32 {
    match alignment {
        Alignment::Center => origin + (anchor_extent - content_extent) / 2.0,
        Alignment::Start => origin + align_offset,
        Alignment::End => origin + anchor_extent - content_extent - align_offset,
    }
}
