use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::{Content, Element};
use crate::transitions::{Easing, TransitionConfig};
use crate::types::{Color, Size};

/// Which property is being transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    Height,
    Background,
    Foreground,
}

/// A property value that can be interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    U16(u16),
    Color(Color),
}

/// Snapshot of an element's transitionable properties.
#[derive(Debug, Clone, Copy, Default)]
struct ElementSnapshot {
    height: Option<u16>,
    background: Option<Color>,
    foreground: Option<Color>,
}

impl ElementSnapshot {
    fn get(&self, property: TransitionProperty) -> Option<PropertyValue> {
        match property {
            TransitionProperty::Height => self.height.map(PropertyValue::U16),
            TransitionProperty::Background => self.background.map(PropertyValue::Color),
            TransitionProperty::Foreground => self.foreground.map(PropertyValue::Color),
        }
    }
}

/// A single active transition.
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    from: PropertyValue,
    to: PropertyValue,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

/// Manages animation state across frames.
///
/// Each frame the host calls `update` with the current element tree.
/// Property changes against the previous snapshot start transitions;
/// `get_interpolated` yields the in-flight value to render instead of
/// the target.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Previous frame's property values per element.
    snapshots: HashMap<String, ElementSnapshot>,
    /// Currently active transitions: (element_id, property) -> transition.
    active: HashMap<(String, TransitionProperty), ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, all transitions complete instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any transition is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    /// Update animation state based on current element tree.
    /// Detects property changes, starts new transitions, and prunes completed ones.
    pub fn update(&mut self, root: &Element) {
        let now = Instant::now();

        // Prune completed transitions
        self.active
            .retain(|_, transition| now.duration_since(transition.start) < transition.duration);

        self.update_element(root, now);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        let current = Self::snapshot_element(element);

        if let Some(prev) = self.snapshots.get(&element.id).copied() {
            for (property, config) in [
                (TransitionProperty::Height, element.transitions.height),
                (TransitionProperty::Background, element.transitions.background),
                (TransitionProperty::Foreground, element.transitions.foreground),
            ] {
                self.check_and_start(
                    &element.id,
                    property,
                    prev.get(property),
                    current.get(property),
                    config,
                    now,
                );
            }
        }

        self.snapshots.insert(element.id.clone(), current);

        if let Content::Children(children) = &element.content {
            for child in children {
                self.update_element(child, now);
            }
        }
    }

    fn check_and_start(
        &mut self,
        id: &str,
        property: TransitionProperty,
        prev: Option<PropertyValue>,
        current: Option<PropertyValue>,
        config: Option<TransitionConfig>,
        now: Instant,
    ) {
        let Some(config) = config else { return };
        let Some(prev_val) = prev else { return };
        let Some(curr_val) = current else { return };

        if prev_val == curr_val {
            return;
        }

        if self.reduced_motion {
            return;
        }

        let key = (id.to_string(), property);

        // An in-flight transition resumes from its current interpolated
        // value, so an interrupted animation reverses smoothly.
        let from = if let Some(existing) = self.active.get(&key) {
            interpolate_value(
                existing.from,
                existing.to,
                existing.start,
                existing.duration,
                existing.easing,
                now,
            )
        } else {
            prev_val
        };

        log::trace!("transition start: {id} {property:?}");
        self.active.insert(
            key,
            ActiveTransition {
                from,
                to: curr_val,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    fn snapshot_element(element: &Element) -> ElementSnapshot {
        ElementSnapshot {
            height: match element.height {
                Size::Fixed(h) => Some(h),
                _ => None,
            },
            background: element.style.background,
            foreground: element.style.foreground,
        }
    }

    /// Get interpolated value for a property.
    /// Returns None if no active transition for this property.
    pub fn get_interpolated(
        &self,
        element_id: &str,
        property: TransitionProperty,
    ) -> Option<PropertyValue> {
        let key = (element_id.to_string(), property);
        let transition = self.active.get(&key)?;
        let now = Instant::now();

        Some(interpolate_value(
            transition.from,
            transition.to,
            transition.start,
            transition.duration,
            transition.easing,
            now,
        ))
    }

    /// Remove transitions and snapshots for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|(id, _), _| current_ids.contains(id));
    }
}

fn interpolate_value(
    from: PropertyValue,
    to: PropertyValue,
    start: Instant,
    duration: Duration,
    easing: Easing,
    now: Instant,
) -> PropertyValue {
    let elapsed = now.duration_since(start);
    let progress = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    };
    let eased = easing.apply(progress);

    match (from, to) {
        (PropertyValue::U16(from_val), PropertyValue::U16(to_val)) => {
            PropertyValue::U16(lerp_u16(from_val, to_val, eased))
        }
        (PropertyValue::Color(from_color), PropertyValue::Color(to_color)) => {
            PropertyValue::Color(lerp_color(&from_color, &to_color, eased))
        }
        _ => to, // Mismatched types, just use target
    }
}

/// Linear interpolation for u16 values.
pub fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}

/// Interpolate colors in OKLCH space.
pub fn lerp_color(from: &Color, to: &Color, t: f32) -> Color {
    let (from_l, from_c, from_h) = color_to_oklch(from);
    let (to_l, to_c, to_h) = color_to_oklch(to);

    let l = from_l + (to_l - from_l) * t;
    let c = from_c + (to_c - from_c) * t;

    // Hue interpolation (shortest path around the circle)
    let mut dh = to_h - from_h;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }
    let h = (from_h + dh * t).rem_euclid(360.0);

    Color::oklch(l, c, h)
}

fn color_to_oklch(color: &Color) -> (f32, f32, f32) {
    match color {
        Color::Oklch { l, c, h } => (*l, *c, *h),
        Color::Rgb { r, g, b } => {
            use palette::{IntoColor, Oklch, Srgb};
            let srgb = Srgb::new(*r as f32 / 255.0, *g as f32 / 255.0, *b as f32 / 255.0);
            let oklch: Oklch = srgb.into_color();
            (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
        }
    }
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_ids_recursive(child, ids);
        }
    }
}
