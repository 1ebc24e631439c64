//! Tests for dom/fade

use super::*;

const FADE: Duration = Duration::from_millis(250);

#[test]
fn test_resting_opacity() {
    let now = Instant::now();
    assert_eq!(Visibility::Shown.opacity(now), 1.0);
    assert_eq!(Visibility::Hidden.opacity(now), 0.0);
}

#[test]
fn test_fade_in_is_linear() {
    let start = Instant::now();
    let vis = Visibility::Hidden.fade_to(true, FADE, start);

    assert_eq!(vis.opacity(start), 0.0);
    let half = vis.opacity(start + Duration::from_millis(125));
    assert!((half - 0.5).abs() < 1e-4, "got {half}");
    assert_eq!(vis.opacity(start + FADE), 1.0);
    assert_eq!(vis.opacity(start + FADE * 4), 1.0);
}

#[test]
fn test_fade_out_settles_hidden() {
    let start = Instant::now();
    let vis = Visibility::Shown.fade_to(false, FADE, start);

    assert!(vis.is_animating(start + Duration::from_millis(100)));
    assert_eq!(vis.settle(start + FADE), Visibility::Hidden);
}

#[test]
fn test_fade_to_current_state_is_noop() {
    let now = Instant::now();
    assert_eq!(Visibility::Hidden.fade_to(false, FADE, now), Visibility::Hidden);
    assert_eq!(Visibility::Shown.fade_to(true, FADE, now), Visibility::Shown);
}

#[test]
fn test_repeated_fade_keeps_original_start() {
    let start = Instant::now();
    let first = Visibility::Hidden.fade_to(true, FADE, start);
    let second = first.fade_to(true, FADE, start + Duration::from_millis(100));

    assert_eq!(first, second);
}

#[test]
fn test_reversal_starts_from_current_opacity() {
    let start = Instant::now();
    let fading_in = Visibility::Hidden.fade_to(true, FADE, start);
    let mid = start + Duration::from_millis(125);
    let fading_out = fading_in.fade_to(false, FADE, mid);

    let opacity = fading_out.opacity(mid);
    assert!((opacity - 0.5).abs() < 1e-4, "got {opacity}");
    assert_eq!(fading_out.opacity(mid + FADE), 0.0);
}

#[test]
fn test_zero_duration_jumps() {
    let now = Instant::now();
    assert_eq!(Visibility::Hidden.fade_to(true, Duration::ZERO, now), Visibility::Shown);
    assert_eq!(Visibility::Shown.fade_to(false, Duration::ZERO, now), Visibility::Hidden);
}
