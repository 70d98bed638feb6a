//! Click and key handling for collapse items.
//!
//! The header is split into named sub-regions (icon, title, the row
//! itself) and the group's trigger region decides which of them toggle
//! expansion. Regions nest: the icon sits inside the title area, which
//! sits inside the row, so a trigger of `Header` accepts clicks on the
//! icon as well. The extra slot always swallows clicks without
//! toggling, so action buttons placed there never fold the panel.

use paneldom::element::Element;
use paneldom::event::{Event, Key, MouseButton};
use paneldom::hit::path_to;

use crate::components::events::{ComponentEvents, EventResult};
use crate::keybinds::KeyCombo;

use super::item::CollapseItem;
use super::state::TriggerRegion;

/// Named sub-region of a collapse item's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRegion {
    Icon,
    Title,
    Row,
}

impl HeaderRegion {
    /// Nesting depth of the region, innermost first.
    fn level(self) -> u8 {
        match self {
            HeaderRegion::Icon => 0,
            HeaderRegion::Title => 1,
            HeaderRegion::Row => 2,
        }
    }
}

fn trigger_level(region: TriggerRegion) -> u8 {
    match region {
        TriggerRegion::Icon => 0,
        TriggerRegion::Header => 1,
        TriggerRegion::Row => 2,
    }
}

impl CollapseItem {
    /// Map a clicked element id to the header region it belongs to.
    pub fn region_for_target(&self, target: &str) -> Option<HeaderRegion> {
        let base = self.element_id();
        let suffix = target.strip_prefix(base.as_str())?;
        match suffix {
            "-icon" => Some(HeaderRegion::Icon),
            "-title" => Some(HeaderRegion::Title),
            "-header" => Some(HeaderRegion::Row),
            _ => None,
        }
    }

    /// Handle a click that landed on `region`.
    ///
    /// Toggles when the clicked region matches the group's trigger
    /// region exactly, or when the trigger is `Header` and the click
    /// landed on the icon or the title. Disabled items consume the
    /// click without toggling.
    pub fn handle_region_click(&self, region: HeaderRegion) -> EventResult {
        if self.disabled() {
            log::trace!("collapse item {:?}: click ignored, disabled", self.name());
            return EventResult::Ignored;
        }
        let trigger = self.group().trigger_region();
        let fires = match trigger {
            TriggerRegion::Header => region.level() <= trigger_level(trigger),
            _ => region.level() == trigger_level(trigger),
        };
        if fires {
            self.group().toggle(self.name());
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Route a substrate event to this item.
    ///
    /// Left clicks bubble through the rendered tree; key events apply
    /// when they target this item's header. Everything else is left
    /// for other handlers.
    pub fn handle_event(&self, root: &Element, event: &Event) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => self.dispatch_click(root, target),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == format!("{}-header", self.element_id()) => {
                self.on_key(&KeyCombo::new(*key, *modifiers))
            }
            _ => EventResult::Ignored,
        }
    }

    /// Dispatch a click through the rendered tree, bubbling from the
    /// target element toward the root until a handler consumes it.
    pub fn dispatch_click(&self, root: &Element, target: &str) -> EventResult {
        let Some(path) = path_to(root, target) else {
            return EventResult::Ignored;
        };
        for element in path {
            let result = self.on_click(&element.id);
            if result.is_handled() {
                return result;
            }
        }
        EventResult::Ignored
    }
}

impl ComponentEvents for CollapseItem {
    fn on_click(&self, target: &str) -> EventResult {
        // The extra slot stops propagation without toggling.
        if target == format!("{}-extra", self.element_id()) {
            return EventResult::Consumed;
        }
        match self.region_for_target(target) {
            Some(region) => self.handle_region_click(region),
            None => EventResult::Ignored,
        }
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        if key.key != Key::Enter || key.modifiers.shift || key.modifiers.ctrl || key.modifiers.alt
        {
            return EventResult::Ignored;
        }
        if self.disabled() {
            return EventResult::Ignored;
        }
        self.group().toggle(self.name());
        EventResult::Consumed
    }
}
