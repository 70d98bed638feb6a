//! Collapse item state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use paneldom::text::measure_height;
use paneldom::transitions::TransitionConfig;
use paneldom::types::Style;

use super::state::Collapse;
use super::transition::{FoldEdge, FoldPhase, FoldTransition};

#[derive(Debug)]
struct ItemInner {
    header: String,
    extra: Option<String>,
    class_name: Option<String>,
    style: Style,
    content_style: Style,
    disabled: bool,
    /// Item-level override of the group's destroy-on-hide setting.
    destroy_on_hide: Option<bool>,
    /// Item-level expand icon override.
    expand_icon: Option<String>,
    show_expand_icon: bool,
    content: String,
    fold: FoldTransition,
    /// Whether the content has ever been shown (drives lazy mounting).
    has_shown: bool,
}

/// A single collapse panel.
///
/// The item derives its expanded state from the [`Collapse`] group it
/// was created with; it owns only its presentation props and the
/// height transition of its content region.
#[derive(Debug)]
pub struct CollapseItem {
    group: Collapse,
    /// Unique key of this item within its group.
    name: String,
    inner: Arc<RwLock<ItemInner>>,
    dirty: Arc<AtomicBool>,
}

impl CollapseItem {
    pub fn new(group: &Collapse, name: impl Into<String>, header: impl Into<String>) -> Self {
        let name = name.into();
        let expanded = group.is_expanded(&name);
        let fold = if expanded {
            FoldTransition::expanded()
        } else {
            FoldTransition::new()
        };
        Self {
            group: group.clone(),
            name,
            inner: Arc::new(RwLock::new(ItemInner {
                header: header.into(),
                extra: None,
                class_name: None,
                style: Style::default(),
                content_style: Style::default(),
                disabled: false,
                destroy_on_hide: None,
                expand_icon: None,
                show_expand_icon: true,
                content: String::new(),
                fold,
                has_shown: expanded,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn with_extra(self, extra: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.extra = Some(extra.into());
        }
        self
    }

    pub fn with_class_name(self, class_name: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.class_name = Some(class_name.into());
        }
        self
    }

    pub fn with_style(self, style: Style) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.style = style;
        }
        self
    }

    pub fn with_content_style(self, style: Style) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.content_style = style;
        }
        self
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
        self
    }

    /// Override the group's destroy-on-hide setting for this item.
    pub fn with_destroy_on_hide(self, destroy: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.destroy_on_hide = Some(destroy);
        }
        self
    }

    pub fn with_expand_icon(self, icon: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.expand_icon = Some(icon.into());
        }
        self
    }

    pub fn with_show_expand_icon(self, show: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.show_expand_icon = show;
        }
        self
    }

    pub fn with_content(self, content: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.content = content.into();
        }
        self
    }

    pub fn with_transition(self, config: TransitionConfig) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.fold = if guard.fold.phase() == FoldPhase::Expanded {
                FoldTransition::expanded_with(config)
            } else {
                FoldTransition::with_config(config)
            };
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &Collapse {
        &self.group
    }

    /// Element id of this item's root; sub-region ids are derived from it.
    pub fn element_id(&self) -> String {
        format!("{}-{}", self.group.id_string(), self.name)
    }

    /// Whether this item is expanded, derived from the group's active keys.
    pub fn expanded(&self) -> bool {
        self.group.is_expanded(&self.name)
    }

    pub fn disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    pub fn header(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.header.clone())
            .unwrap_or_default()
    }

    pub fn extra(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.extra.clone())
    }

    pub fn class_name(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.class_name.clone())
    }

    pub fn style(&self) -> Style {
        self.inner
            .read()
            .map(|guard| guard.style.clone())
            .unwrap_or_default()
    }

    pub fn content_style(&self) -> Style {
        self.inner
            .read()
            .map(|guard| guard.content_style.clone())
            .unwrap_or_default()
    }

    pub fn content(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.content.clone())
            .unwrap_or_default()
    }

    /// Whether an expand icon is shown at all.
    pub fn show_expand_icon(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.show_expand_icon)
            .unwrap_or(true)
    }

    /// Custom icon glyph: item override first, then the group's.
    pub fn custom_icon(&self) -> Option<String> {
        let item_icon = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.expand_icon.clone());
        item_icon.or_else(|| self.group.expand_icon())
    }

    /// Mount the content subtree only when first expanded.
    ///
    /// Item override, else the group's destroy-on-hide or lazyload flag.
    pub fn mount_on_enter(&self) -> bool {
        let item_override = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.destroy_on_hide);
        item_override.unwrap_or_else(|| self.group.destroy_on_hide() || self.group.lazyload())
    }

    /// Unmount the content subtree when the exit transition completes.
    ///
    /// Item override, else the group's destroy-on-hide flag.
    pub fn unmount_on_exit(&self) -> bool {
        let item_override = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.destroy_on_hide);
        item_override.unwrap_or_else(|| self.group.destroy_on_hide())
    }

    /// Whether the content subtree is currently in the element tree.
    pub fn content_mounted(&self) -> bool {
        let Ok(guard) = self.inner.read() else {
            return false;
        };
        if guard.fold.phase() != FoldPhase::Collapsed {
            return true;
        }
        if guard.has_shown {
            !self.unmount_on_exit()
        } else {
            !self.mount_on_enter()
        }
    }

    pub fn phase(&self) -> FoldPhase {
        self.inner
            .read()
            .map(|guard| guard.fold.phase())
            .unwrap_or_default()
    }

    /// Height to pin the content region at; None means natural height.
    pub fn fold_height(&self, now: Instant) -> Option<u16> {
        self.inner
            .read()
            .map(|guard| guard.fold.height(now))
            .unwrap_or(Some(0))
    }

    /// Whether the content region is fully hidden.
    pub fn fold_hidden(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.fold.hidden())
            .unwrap_or(true)
    }

    /// Natural height of the content when wrapped to `width`.
    pub fn natural_height(&self, width: u16) -> u16 {
        self.inner
            .read()
            .map(|guard| measure_height(&guard.content, width))
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    pub fn set_content(&self, content: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.content = content.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled != disabled {
                guard.disabled = disabled;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn set_reduced_motion(&self, enabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fold.set_reduced_motion(enabled);
        }
    }

    /// Drive the fold transition toward the group's expansion state.
    ///
    /// Call once per frame with the content width (for measuring the
    /// natural height) and the frame time. Returns the transition edges
    /// crossed this frame, in order.
    pub fn sync(&self, width: u16, now: Instant) -> Vec<FoldEdge> {
        let expanded = self.expanded();
        let mut edges = Vec::new();

        let Ok(mut guard) = self.inner.write() else {
            return edges;
        };

        let natural = measure_height(&guard.content, width);
        match (expanded, guard.fold.phase()) {
            (true, FoldPhase::Collapsed | FoldPhase::Exiting | FoldPhase::Entering) => {
                guard.has_shown = true;
                if let Some(edge) = guard.fold.open(natural, now) {
                    edges.push(edge);
                }
            }
            (false, FoldPhase::Expanded | FoldPhase::Entering) => {
                if let Some(edge) = guard.fold.close(natural, now) {
                    edges.push(edge);
                }
            }
            _ => {}
        }

        if let Some(edge) = guard.fold.tick(now) {
            edges.push(edge);
        }

        if !edges.is_empty() {
            self.dirty.store(true, Ordering::SeqCst);
        }
        edges
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for CollapseItem {
    fn clone(&self) -> Self {
        Self {
            group: self.group.clone(),
            name: self.name.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
