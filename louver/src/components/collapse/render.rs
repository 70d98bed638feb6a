//! Render a collapse item into an element tree.
//!
//! Ids are deterministic (`{item}-header`, `{item}-icon`, ...) so hit
//! testing can map a click back to its region. Class names, role and
//! aria attributes go into the element data map.

use std::time::{Duration, Instant};

use paneldom::element::Element;
use paneldom::transitions::{Easing, Transitions};
use paneldom::types::{Display, Overflow, Size, Style};

use super::item::CollapseItem;
use super::state::{ExpandIconPosition, TriggerRegion};
use super::transition::FoldPhase;

const PREFIX: &str = "collapse-item";

const ICON_COLLAPSED: &str = "▶";
const ICON_EXPANDED: &str = "▼";

/// Hover color transition on the header and icon.
const HOVER_FADE: Duration = Duration::from_millis(150);

fn class_list(classes: &[(&str, bool)]) -> String {
    classes
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

fn region_name(region: TriggerRegion) -> &'static str {
    match region {
        TriggerRegion::Icon => "icon",
        TriggerRegion::Header => "header",
        TriggerRegion::Row => "row",
    }
}

/// Build the element tree for one collapse item at the given frame time.
pub fn render(item: &CollapseItem, now: Instant) -> Element {
    let id = item.element_id();
    let expanded = item.expanded();
    let disabled = item.disabled();
    let has_icon = item.show_expand_icon();
    let icon_right = item.group().expand_icon_position() == ExpandIconPosition::Right;

    let user_class = item.class_name().unwrap_or_default();
    let root_class = class_list(&[
        (PREFIX, true),
        ("collapse-item-active", expanded),
        ("collapse-item-no-icon", !has_icon),
        ("collapse-item-disabled", disabled),
        (user_class.as_str(), !user_class.is_empty()),
    ]);

    let mut root = Element::col()
        .id(id.clone())
        .style(item.style())
        .data("class", root_class);

    root = root.child(render_header(item, &id, expanded, disabled, has_icon, icon_right));

    if item.content_mounted() {
        root = root.child(render_content(item, &id, expanded, now));
    }

    root
}

fn render_header(
    item: &CollapseItem,
    id: &str,
    expanded: bool,
    disabled: bool,
    has_icon: bool,
    icon_right: bool,
) -> Element {
    let header_class = class_list(&[
        ("collapse-item-header", true),
        ("collapse-item-header-left", !icon_right),
        ("collapse-item-header-right", icon_right),
        ("collapse-item-header-disabled", disabled),
    ]);

    let mut children = Vec::new();

    let icon = has_icon.then(|| {
        let glyph = item
            .custom_icon()
            .unwrap_or_else(|| {
                if expanded { ICON_EXPANDED } else { ICON_COLLAPSED }.to_string()
            });
        let icon_class = class_list(&[
            ("collapse-item-icon-hover", true),
            ("collapse-item-icon-hover-right", icon_right),
            ("collapse-item-header-icon", true),
            ("collapse-item-header-icon-down", expanded),
            ("collapse-item-header-icon-right", icon_right),
        ]);
        Element::text(glyph)
            .id(format!("{id}-icon"))
            .clickable(true)
            .data("class", icon_class)
            .transitions(Transitions::new().colors(HOVER_FADE, Easing::EaseOut))
    });

    if let (Some(icon), false) = (&icon, icon_right) {
        children.push(icon.clone());
    }

    children.push(
        Element::text(item.header())
            .id(format!("{id}-title"))
            .clickable(true)
            .style(Style::new().bold())
            .data("class", "collapse-item-header-title"),
    );

    if let Some(extra) = item.extra() {
        children.push(
            Element::text(extra)
                .id(format!("{id}-extra"))
                .clickable(true)
                .data("class", "collapse-item-header-extra"),
        );
    }

    if let (Some(icon), true) = (icon, icon_right) {
        children.push(icon);
    }

    Element::row()
        .id(format!("{id}-header"))
        .clickable(true)
        .focusable(!disabled)
        .disabled(disabled)
        .data("class", header_class)
        .data("role", "button")
        .data("aria-expanded", if expanded { "true" } else { "false" })
        .data("aria-disabled", if disabled { "true" } else { "false" })
        .data(
            "data-active-region",
            region_name(item.group().trigger_region()),
        )
        .transitions(Transitions::new().colors(HOVER_FADE, Easing::EaseOut))
        .children(children)
}

fn render_content(item: &CollapseItem, id: &str, expanded: bool, now: Instant) -> Element {
    let content_class = class_list(&[
        ("collapse-item-content", true),
        ("collapse-item-content-expanded", expanded && item.phase() == FoldPhase::Expanded),
    ]);

    let height = match item.fold_height(now) {
        Some(rows) => Size::Fixed(rows),
        None => Size::Auto,
    };
    let display = if item.fold_hidden() {
        Display::None
    } else {
        Display::Block
    };

    Element::box_()
        .id(format!("{id}-content"))
        .height(height)
        .display(display)
        .overflow_y(Overflow::Hidden)
        .data("class", content_class)
        .data("role", "region")
        .child(
            Element::text(item.content())
                .id(format!("{id}-content-box"))
                .style(item.content_style())
                .data("class", "collapse-item-content-box"),
        )
}
