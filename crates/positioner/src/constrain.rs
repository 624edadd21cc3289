//! Final clamp of a position into the padded viewport.

use geometry::{Position, Size, Viewport};

/// Clamp `value` to `[lo, hi]`, applying the lower bound first. When
/// `hi < lo` the result is `hi`, not a panic, which is why this is not
/// `f32::clamp`.
fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// Force a position into the viewport so the content, inclusive of padding,
/// stays visible. Runs unconditionally after flip resolution and is
/// idempotent.
///
/// When the content is larger than the padded viewport the valid range is
/// inverted and the clamp collapses to its upper bound: the content pins to
/// the bottom/right padding line and overhangs the top/left edge. That is
/// the accepted policy for the degenerate case, not an accident.
#[must_use]
pub fn constrain_to_viewport(
    position: Position,
    content: Size,
    viewport: Viewport,
    padding: f32,
) -> Position {
    Position {
        top: clamp(
            position.top,
            padding,
            viewport.height - content.height - padding,
        ),
        left: clamp(
            position.left,
            padding,
            viewport.width - content.width - padding,
        ),
    }
}
