use std::time::{Duration, Instant};

use louver::components::collapse::{Collapse, CollapseItem, FoldEdge, FoldPhase, FoldTransition};
use paneldom::transitions::{Easing, TransitionConfig};

fn linear(ms: u64) -> FoldTransition {
    FoldTransition::with_config(TransitionConfig::new(
        Duration::from_millis(ms),
        Easing::Linear,
    ))
}

// =============================================================================
// Phase Machine Tests
// =============================================================================

#[test]
fn test_open_walks_through_entering() {
    let base = Instant::now();
    let mut fold = linear(100);
    assert_eq!(fold.phase(), FoldPhase::Collapsed);
    assert!(fold.hidden());

    assert_eq!(fold.open(10, base), Some(FoldEdge::Enter));
    assert_eq!(fold.phase(), FoldPhase::Entering);
    assert!(!fold.hidden());

    // Mid-animation: no completion yet.
    assert_eq!(fold.tick(base + Duration::from_millis(50)), None);
    assert_eq!(fold.phase(), FoldPhase::Entering);

    assert_eq!(
        fold.tick(base + Duration::from_millis(100)),
        Some(FoldEdge::Entered)
    );
    assert_eq!(fold.phase(), FoldPhase::Expanded);
}

#[test]
fn test_close_walks_through_exiting() {
    let base = Instant::now();
    let mut fold = FoldTransition::expanded_with(TransitionConfig::new(
        Duration::from_millis(100),
        Easing::Linear,
    ));

    assert_eq!(fold.close(10, base), Some(FoldEdge::Exit));
    assert_eq!(fold.phase(), FoldPhase::Exiting);
    assert!(!fold.hidden());

    assert_eq!(
        fold.tick(base + Duration::from_millis(100)),
        Some(FoldEdge::Exited)
    );
    assert_eq!(fold.phase(), FoldPhase::Collapsed);
    assert!(fold.hidden());
}

#[test]
fn test_redundant_transitions_are_noops() {
    let base = Instant::now();
    let mut fold = linear(100);

    // Closing while collapsed does nothing.
    assert_eq!(fold.close(10, base), None);
    assert_eq!(fold.phase(), FoldPhase::Collapsed);

    fold.open(10, base);
    fold.tick(base + Duration::from_millis(100));
    // Opening while expanded does nothing.
    assert_eq!(fold.open(10, base + Duration::from_millis(200)), None);
    assert_eq!(fold.phase(), FoldPhase::Expanded);
}

// =============================================================================
// Height Interpolation Tests
// =============================================================================

#[test]
fn test_height_pinned_during_enter() {
    let base = Instant::now();
    let mut fold = linear(100);
    fold.open(10, base);

    assert_eq!(fold.height(base), Some(0));
    assert_eq!(fold.height(base + Duration::from_millis(50)), Some(5));
    assert_eq!(fold.height(base + Duration::from_millis(100)), Some(10));
}

#[test]
fn test_height_released_when_expanded() {
    let base = Instant::now();
    let mut fold = linear(100);
    fold.open(10, base);
    fold.tick(base + Duration::from_millis(100));

    // Expanded content reports natural height.
    assert_eq!(fold.height(base + Duration::from_millis(150)), None);
}

#[test]
fn test_height_zero_when_collapsed() {
    let fold = linear(100);
    assert_eq!(fold.height(Instant::now()), Some(0));
}

#[test]
fn test_exit_counts_down_from_natural() {
    let base = Instant::now();
    let mut fold = FoldTransition::expanded_with(TransitionConfig::new(
        Duration::from_millis(100),
        Easing::Linear,
    ));
    fold.close(8, base);

    assert_eq!(fold.height(base), Some(8));
    assert_eq!(fold.height(base + Duration::from_millis(50)), Some(4));
    assert_eq!(fold.height(base + Duration::from_millis(100)), Some(0));
}

// =============================================================================
// Interruption Tests
// =============================================================================

#[test]
fn test_interrupted_enter_reverses_from_current_height() {
    let base = Instant::now();
    let mut fold = linear(100);
    fold.open(10, base);

    // Halfway up (height 5), the user collapses again.
    let mid = base + Duration::from_millis(50);
    assert_eq!(fold.close(10, mid), Some(FoldEdge::Exit));
    assert_eq!(fold.phase(), FoldPhase::Exiting);
    assert_eq!(fold.height(mid), Some(5));

    // The exit runs 5 -> 0 over a fresh duration.
    assert_eq!(fold.height(mid + Duration::from_millis(50)), Some(3));
    assert_eq!(fold.height(mid + Duration::from_millis(100)), Some(0));
}

#[test]
fn test_interrupted_exit_resumes_upward() {
    let base = Instant::now();
    let mut fold = FoldTransition::expanded_with(TransitionConfig::new(
        Duration::from_millis(100),
        Easing::Linear,
    ));
    fold.close(10, base);

    let mid = base + Duration::from_millis(50);
    assert_eq!(fold.open(10, mid), Some(FoldEdge::Enter));
    assert_eq!(fold.phase(), FoldPhase::Entering);
    // Resumes from 5, not from zero.
    assert_eq!(fold.height(mid), Some(5));
    assert_eq!(fold.height(mid + Duration::from_millis(100)), Some(10));
}

#[test]
fn test_open_while_entering_retargets() {
    let base = Instant::now();
    let mut fold = linear(100);
    fold.open(10, base);

    // Content grew while animating; no new edge, same clock.
    let mid = base + Duration::from_millis(50);
    assert_eq!(fold.open(20, mid), None);
    assert_eq!(fold.phase(), FoldPhase::Entering);
    assert_eq!(fold.height(base + Duration::from_millis(100)), Some(20));
}

// =============================================================================
// Reduced Motion Tests
// =============================================================================

#[test]
fn test_reduced_motion_completes_immediately() {
    let base = Instant::now();
    let mut fold = linear(100);
    fold.set_reduced_motion(true);

    fold.open(10, base);
    assert_eq!(fold.tick(base), Some(FoldEdge::Entered));
    assert_eq!(fold.phase(), FoldPhase::Expanded);

    fold.close(10, base);
    assert_eq!(fold.tick(base), Some(FoldEdge::Exited));
    assert_eq!(fold.phase(), FoldPhase::Collapsed);
}

#[test]
fn test_zero_duration_completes_immediately() {
    let base = Instant::now();
    let mut fold = FoldTransition::with_config(TransitionConfig::new(
        Duration::ZERO,
        Easing::EaseInOut,
    ));
    fold.open(10, base);
    assert_eq!(fold.tick(base), Some(FoldEdge::Entered));
}

// =============================================================================
// Item Sync Tests
// =============================================================================

#[test]
fn test_sync_emits_edges_in_order() {
    let group = Collapse::new();
    let item = CollapseItem::new(&group, "panel", "Panel").with_content("body");
    item.set_reduced_motion(true);

    assert!(item.sync(20, Instant::now()).is_empty());

    group.toggle("panel");
    // Reduced motion folds Enter and Entered into one frame.
    assert_eq!(
        item.sync(20, Instant::now()),
        vec![FoldEdge::Enter, FoldEdge::Entered]
    );
    assert_eq!(item.phase(), FoldPhase::Expanded);

    group.toggle("panel");
    assert_eq!(
        item.sync(20, Instant::now()),
        vec![FoldEdge::Exit, FoldEdge::Exited]
    );
    assert_eq!(item.phase(), FoldPhase::Collapsed);
}

#[test]
fn test_sync_measures_wrapped_content() {
    let group = Collapse::new().with_active_keys(vec!["panel"]);
    let item = CollapseItem::new(&group, "panel", "Panel").with_content("alpha beta gamma delta");

    // 10 columns wraps the content onto three rows.
    assert_eq!(item.natural_height(10), 3);
}

#[test]
fn test_sync_marks_item_dirty() {
    let group = Collapse::new();
    let item = CollapseItem::new(&group, "panel", "Panel").with_content("body");
    item.set_reduced_motion(true);
    item.clear_dirty();

    group.toggle("panel");
    item.sync(20, Instant::now());
    assert!(item.is_dirty());
}
