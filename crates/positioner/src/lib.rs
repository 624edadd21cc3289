//! Floating-content positioning engine.
//!
//! Computes where a floating content box (a tooltip, menu, popover) goes
//! relative to an anchor rectangle, then keeps it on screen: detect which
//! viewport edges the candidate position violates, flip to the opposite side
//! of the anchor when the primary axis overflows, and finally clamp the
//! result into the padded viewport.
//!
//! Every function here is pure and synchronous. The caller owns measurement
//! (anchor and content rects, viewport size) and re-invokes the pipeline on
//! each layout, resize, or scroll pass; the engine holds no state between
//! calls.

pub mod compute;
pub mod constrain;
pub mod flip;
pub mod overflow;

pub use compute::compute_position;
pub use constrain::constrain_to_viewport;
pub use flip::{FlipResult, apply_flip};
pub use geometry::{Position, Rect, Size, Viewport};
pub use overflow::{Overflow, detect_overflow};
pub use placement::{Alignment, Placement, Side};

/// Consolidated arguments for a full positioning pass.
#[derive(Debug, Clone, Copy)]
pub struct ResolveArgs {
    /// Measured bounds of the anchor element.
    pub anchor: Rect,
    /// Measured size of the floating content.
    pub content: Size,
    /// Requested placement.
    pub placement: Placement,
    /// Gap between the anchor edge and the content, along the primary axis.
    pub offset: f32,
    /// Shift along the secondary axis for start/end alignments.
    pub align_offset: f32,
    /// Region the content must remain inside.
    pub viewport: Viewport,
    /// Minimum distance kept from every viewport edge.
    pub padding: f32,
}

/// Final outcome of a positioning pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    /// Where to render the content's top-left corner.
    pub position: Position,
    /// The placement actually used, possibly the flipped one.
    pub placement: Placement,
    /// Whether the requested side was swapped for its opposite.
    pub flipped: bool,
}

/// Run the whole pipeline once: place, flip if the primary axis overflows,
/// then clamp into the padded viewport.
///
/// The individual stages stay public for callers composing their own policy;
/// this is the entry point for the common case.
#[must_use]
pub fn resolve(args: &ResolveArgs) -> Resolved {
    let flip = apply_flip(
        args.anchor,
        args.content,
        args.placement,
        args.offset,
        args.align_offset,
        args.viewport,
        args.padding,
    );
    let position = constrain_to_viewport(flip.position, args.content, args.viewport, args.padding);
    Resolved {
        position,
        placement: flip.placement,
        flipped: flip.flipped,
    }
}
