//! Tests for tooltip/placement

use super::*;
use proptest::prelude::*;

const TARGET: Offset = Offset::new(100.0, 100.0);
const TARGET_SIZE: Size = Size::new(50.0, 20.0);
const OVERLAY_SIZE: Size = Size::new(80.0, 30.0);

fn offset_for(placement: Placement) -> Offset {
    compute_offset(
        placement,
        TARGET,
        TARGET_SIZE,
        OVERLAY_SIZE,
        &PlacementMetrics::default(),
    )
}

#[test]
fn test_top_centers_above_target() {
    // (100 - 30 - 30, 100 + (50 - 80) / 2)
    assert_eq!(offset_for(Placement::Top), Offset::new(40.0, 85.0));
}

#[test]
fn test_left_of_target() {
    // (100, 100 - 80 - 10)
    assert_eq!(offset_for(Placement::Left), Offset::new(100.0, 10.0));
}

#[test]
fn test_right_of_target() {
    // (100, 100 + 50 + 10)
    assert_eq!(offset_for(Placement::Right), Offset::new(100.0, 160.0));
}

#[test]
fn test_bottom_builds_on_top_offset() {
    // top offset 40, then + 20 + 30 + 50; left keeps the centered value
    assert_eq!(offset_for(Placement::Bottom), Offset::new(140.0, 85.0));
}

#[test]
fn test_top_keeps_half_cells() {
    let offset = compute_offset(
        Placement::Top,
        Offset::new(10.0, 10.0),
        Size::new(5.0, 1.0),
        Size::new(8.0, 3.0),
        &PlacementMetrics::TERMINAL,
    );
    assert_eq!(offset, Offset::new(6.0, 8.5));
}

#[test]
fn test_terminal_bottom_leaves_one_row_for_pointer() {
    let offset = compute_offset(
        Placement::Bottom,
        Offset::new(10.0, 10.0),
        Size::new(5.0, 3.0),
        Size::new(8.0, 3.0),
        &PlacementMetrics::TERMINAL,
    );
    // target rows 10..13, pointer row 13, bubble starts at 14
    assert_eq!(offset.top, 14.0);
}

#[test]
fn test_from_name_known_sides() {
    assert_eq!(Placement::from_name("top"), Placement::Top);
    assert_eq!(Placement::from_name("Bottom"), Placement::Bottom);
    assert_eq!(Placement::from_name(" left "), Placement::Left);
    assert_eq!(Placement::from_name("RIGHT"), Placement::Right);
}

#[test]
fn test_from_name_unknown_falls_back_to_top() {
    assert_eq!(Placement::from_name("diagonal"), Placement::Top);
    assert_eq!(Placement::from_name(""), Placement::Top);
}

#[test]
fn test_class_name_and_display() {
    for placement in Placement::ALL {
        assert_eq!(placement.to_string(), placement.class_name());
        assert_eq!(Placement::from_name(placement.class_name()), placement);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_bottom_is_top_shifted(
        top in -500i32..500,
        left in -500i32..500,
        tw in 0u16..200,
        th in 0u16..200,
        ow in 0u16..200,
        oh in 0u16..200,
    ) {
        let target = Offset::new(top as f64, left as f64);
        let target_size = Size::new(tw as f64, th as f64);
        let overlay_size = Size::new(ow as f64, oh as f64);
        let metrics = PlacementMetrics::default();

        let above = compute_offset(Placement::Top, target, target_size, overlay_size, &metrics);
        let below = compute_offset(Placement::Bottom, target, target_size, overlay_size, &metrics);

        prop_assert_eq!(below.left, above.left);
        prop_assert_eq!(below.top, above.top + target_size.height + overlay_size.height + 50.0);
    }

    #[test]
    fn prop_side_placements_align_with_target_top(
        top in -500i32..500,
        left in -500i32..500,
        tw in 0u16..200,
        ow in 0u16..200,
    ) {
        let target = Offset::new(top as f64, left as f64);
        let target_size = Size::new(tw as f64, 10.0);
        let overlay_size = Size::new(ow as f64, 10.0);
        let metrics = PlacementMetrics::default();

        let left_of = compute_offset(Placement::Left, target, target_size, overlay_size, &metrics);
        let right_of = compute_offset(Placement::Right, target, target_size, overlay_size, &metrics);

        prop_assert_eq!(left_of.top, target.top);
        prop_assert_eq!(right_of.top, target.top);
        prop_assert_eq!(left_of.left + overlay_size.width + 10.0, target.left);
        prop_assert_eq!(right_of.left - 10.0, target.left + target_size.width);
    }
}
