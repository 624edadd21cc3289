use geometry::{Rect, Size};
use placement::{Alignment, Placement, Side};
use positioner::compute_position;

const ANCHOR: Rect = Rect::new(100.0, 200.0, 80.0, 40.0);
const CONTENT: Size = Size::new(120.0, 60.0);

#[test]
fn start_alignment_is_flush_with_the_near_edge() {
    let position = compute_position(
        ANCHOR,
        CONTENT,
        Placement::new(Side::Top, Alignment::Start),
        8.0,
        0.0,
    );
    assert_eq!(position.left, 100.0);
}

#[test]
fn end_alignment_is_flush_with_the_far_edge() {
    let position = compute_position(
        ANCHOR,
        CONTENT,
        Placement::new(Side::Top, Alignment::End),
        8.0,
        0.0,
    );
    assert_eq!(position.left, 60.0);
}

#[test]
fn center_is_the_midpoint_of_start_and_end() {
    let start = compute_position(
        ANCHOR,
        CONTENT,
        Placement::new(Side::Top, Alignment::Start),
        8.0,
        0.0,
    );
    let end = compute_position(
        ANCHOR,
        CONTENT,
        Placement::new(Side::Top, Alignment::End),
        8.0,
        0.0,
    );
    let center = compute_position(ANCHOR, CONTENT, Placement::from_side(Side::Top), 8.0, 0.0);
    assert_eq!(center.left, (start.left + end.left) / 2.0);
}

#[test]
fn align_offset_shifts_start_toward_the_far_edge() {
    let position = compute_position(
        ANCHOR,
        CONTENT,
        Placement::new(Side::Top, Alignment::Start),
        8.0,
        10.0,
    );
    assert_eq!(position.left, 110.0);
}

#[test]
fn align_offset_shifts_end_back_by_the_same_amount() {
    // Start and end stay mirror images of each other for a given offset.
    let start = compute_position(
        ANCHOR,
        CONTENT,
        Placement::new(Side::Top, Alignment::Start),
        8.0,
        10.0,
    );
    let end = compute_position(
        ANCHOR,
        CONTENT,
        Placement::new(Side::Top, Alignment::End),
        8.0,
        10.0,
    );
    let center = compute_position(ANCHOR, CONTENT, Placement::from_side(Side::Top), 8.0, 0.0);
    assert_eq!(end.left, 50.0);
    assert_eq!(center.left, (start.left + end.left) / 2.0);
}

#[test]
fn vertical_sides_align_on_the_vertical_axis() {
    let anchor = Rect::new(100.0, 100.0, 80.0, 40.0);
    let content = Size::new(60.0, 120.0);

    let start = compute_position(
        anchor,
        content,
        Placement::new(Side::Right, Alignment::Start),
        8.0,
        0.0,
    );
    assert_eq!(start.top, 100.0);
    assert_eq!(start.left, 188.0);

    let end = compute_position(
        anchor,
        content,
        Placement::new(Side::Right, Alignment::End),
        8.0,
        0.0,
    );
    assert_eq!(end.top, 20.0);

    let end_pulled_back = compute_position(
        anchor,
        content,
        Placement::new(Side::Right, Alignment::End),
        8.0,
        10.0,
    );
    assert_eq!(end_pulled_back.top, 10.0);
}
