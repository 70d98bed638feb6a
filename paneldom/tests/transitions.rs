use std::collections::HashSet;
use std::time::Duration;

use paneldom::animation::{
    AnimationState, PropertyValue, TransitionProperty, collect_element_ids, lerp_color, lerp_u16,
};
use paneldom::{Color, Easing, Element, Size, Style, Transitions};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    assert_eq!(Easing::EaseIn.apply(0.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseIn.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_out() {
    assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in_out() {
    assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

// =============================================================================
// Interpolation Tests
// =============================================================================

#[test]
fn test_lerp_u16() {
    assert_eq!(lerp_u16(0, 10, 0.0), 0);
    assert_eq!(lerp_u16(0, 10, 0.5), 5);
    assert_eq!(lerp_u16(0, 10, 1.0), 10);
    // Decreasing ranges interpolate too.
    assert_eq!(lerp_u16(10, 0, 0.5), 5);
}

#[test]
fn test_lerp_color_endpoints() {
    let from = Color::oklch(0.2, 0.1, 30.0);
    let to = Color::oklch(0.8, 0.2, 90.0);

    assert_eq!(lerp_color(&from, &to, 0.0), from);
    assert_eq!(lerp_color(&from, &to, 1.0), to);
}

#[test]
fn test_lerp_color_hue_shortest_path() {
    // 350 -> 10 should pass through 0, not wrap the long way.
    let from = Color::oklch(0.5, 0.1, 350.0);
    let to = Color::oklch(0.5, 0.1, 10.0);
    let Color::Oklch { h, .. } = lerp_color(&from, &to, 0.5) else {
        panic!("expected oklch");
    };
    assert!((h - 0.0).abs() < 0.001 || (h - 360.0).abs() < 0.001);
}

#[test]
fn test_lerp_color_mixed_spaces() {
    // RGB endpoints are converted to OKLCH before interpolation.
    let from = Color::rgb(255, 0, 0);
    let to = Color::rgb(0, 0, 255);
    let mid = lerp_color(&from, &to, 0.5);
    assert!(matches!(mid, Color::Oklch { .. }));
}

// =============================================================================
// Transitions Config Tests
// =============================================================================

#[test]
fn test_transitions_builder() {
    let transitions = Transitions::new()
        .height(Duration::from_millis(200), Easing::EaseInOut)
        .colors(Duration::from_millis(150), Easing::EaseOut);

    assert!(transitions.height.is_some());
    assert!(transitions.background.is_some());
    assert!(transitions.foreground.is_some());
    assert!(transitions.has_any());
}

#[test]
fn test_transitions_default_empty() {
    assert!(!Transitions::default().has_any());
}

// =============================================================================
// Animation State Tests
// =============================================================================

fn animated_box(height: u16) -> Element {
    Element::box_()
        .id("panel")
        .height(Size::Fixed(height))
        .transitions(Transitions::new().height(Duration::from_secs(1), Easing::Linear))
}

#[test]
fn test_height_change_starts_transition() {
    let mut state = AnimationState::new();

    state.update(&animated_box(0));
    assert!(!state.has_active_transitions());

    state.update(&animated_box(10));
    assert!(state.has_active_transitions());

    let value = state.get_interpolated("panel", TransitionProperty::Height);
    let Some(PropertyValue::U16(height)) = value else {
        panic!("expected an in-flight height");
    };
    assert!(height <= 10);
}

#[test]
fn test_unchanged_height_starts_nothing() {
    let mut state = AnimationState::new();
    state.update(&animated_box(5));
    state.update(&animated_box(5));
    assert!(!state.has_active_transitions());
}

#[test]
fn test_no_transition_without_config() {
    let mut state = AnimationState::new();
    let before = Element::box_().id("plain").height(Size::Fixed(0));
    let after = Element::box_().id("plain").height(Size::Fixed(10));

    state.update(&before);
    state.update(&after);
    assert!(!state.has_active_transitions());
}

#[test]
fn test_reduced_motion_skips_transitions() {
    let mut state = AnimationState::new();
    state.set_reduced_motion(true);

    state.update(&animated_box(0));
    state.update(&animated_box(10));
    assert!(!state.has_active_transitions());
}

#[test]
fn test_color_change_starts_transition() {
    let styled = |color| {
        Element::box_()
            .id("swatch")
            .style(Style::new().background(color))
            .transitions(Transitions::new().colors(Duration::from_secs(1), Easing::Linear))
    };
    let mut state = AnimationState::new();
    state.update(&styled(Color::rgb(10, 10, 10)));
    state.update(&styled(Color::rgb(200, 200, 200)));

    assert!(
        state
            .get_interpolated("swatch", TransitionProperty::Background)
            .is_some()
    );
    assert!(
        state
            .get_interpolated("swatch", TransitionProperty::Foreground)
            .is_none()
    );
}

#[test]
fn test_cleanup_drops_removed_elements() {
    let mut state = AnimationState::new();
    state.update(&animated_box(0));
    state.update(&animated_box(10));
    assert!(state.has_active_transitions());

    state.cleanup(&HashSet::new());
    assert!(!state.has_active_transitions());
}

#[test]
fn test_collect_element_ids() {
    let tree = Element::col()
        .id("root")
        .child(Element::text("a").id("a"))
        .child(Element::row().id("row").child(Element::text("b").id("b")));

    let ids = collect_element_ids(&tree);
    for id in ["root", "a", "row", "b"] {
        assert!(ids.contains(id));
    }
    assert_eq!(ids.len(), 4);
}
