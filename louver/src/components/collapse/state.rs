//! Collapse group state.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};

use crate::components::events::{ComponentEvent, ComponentEventKind};

/// Unique identifier for a Collapse component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollapseId(usize);

impl CollapseId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CollapseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__collapse_{}", self.0)
    }
}

/// Which header sub-region toggles expansion when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerRegion {
    /// Only the expand icon toggles.
    Icon,
    /// The icon and the header title toggle.
    #[default]
    Header,
    /// Only a click on the header row itself toggles.
    Row,
}

/// Side of the header the expand icon is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandIconPosition {
    #[default]
    Left,
    Right,
}

/// Internal state for a Collapse group
#[derive(Debug)]
struct CollapseInner {
    /// Keys of currently expanded items.
    active_keys: Vec<String>,
    trigger_region: TriggerRegion,
    expand_icon_position: ExpandIconPosition,
    /// Group-level expand icon override.
    expand_icon: Option<String>,
    /// Unmount item content when hidden.
    destroy_on_hide: bool,
    /// Defer mounting item content until first expanded.
    lazyload: bool,
    /// Only one item may be expanded at a time.
    accordion: bool,
}

impl Default for CollapseInner {
    fn default() -> Self {
        Self {
            active_keys: Vec::new(),
            trigger_region: TriggerRegion::default(),
            expand_icon_position: ExpandIconPosition::default(),
            expand_icon: None,
            destroy_on_hide: false,
            lazyload: true,
            accordion: false,
        }
    }
}

/// A collapse group with reactive state.
///
/// The group owns the list of active (expanded) item keys and the
/// configuration shared by its items. Items read it through a cloned
/// handle; all clones share state.
#[derive(Debug)]
pub struct Collapse {
    /// Unique identifier for this group instance
    id: CollapseId,
    /// Internal state
    inner: Arc<RwLock<CollapseInner>>,
    /// Toggle notifications, drained by the host
    events: Arc<Mutex<VecDeque<ComponentEvent>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Collapse {
    /// Create a new empty collapse group
    pub fn new() -> Self {
        Self {
            id: CollapseId::new(),
            inner: Arc::new(RwLock::new(CollapseInner::default())),
            events: Arc::new(Mutex::new(VecDeque::new())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the trigger region
    pub fn with_trigger_region(self, region: TriggerRegion) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.trigger_region = region;
        }
        self
    }

    /// Set the expand icon position
    pub fn with_expand_icon_position(self, position: ExpandIconPosition) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.expand_icon_position = position;
        }
        self
    }

    /// Set a group-level expand icon
    pub fn with_expand_icon(self, icon: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.expand_icon = Some(icon.into());
        }
        self
    }

    /// Unmount item content subtrees when hidden
    pub fn with_destroy_on_hide(self, destroy: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.destroy_on_hide = destroy;
        }
        self
    }

    /// Defer mounting item content until first expanded (default true)
    pub fn with_lazyload(self, lazyload: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.lazyload = lazyload;
        }
        self
    }

    /// Only allow one expanded item at a time
    pub fn with_accordion(self, accordion: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.accordion = accordion;
        }
        self
    }

    /// Initially expanded item keys
    pub fn with_active_keys(self, keys: Vec<impl Into<String>>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.active_keys = keys.into_iter().map(|k| k.into()).collect();
        }
        self
    }

    /// Get the unique ID for this group
    pub fn id(&self) -> CollapseId {
        self.id
    }

    /// Get the ID as a string (for element binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Keys of the currently expanded items
    pub fn active_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.active_keys.clone())
            .unwrap_or_default()
    }

    /// Whether the item with the given key is expanded
    pub fn is_expanded(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.active_keys.iter().any(|k| k == key))
            .unwrap_or(false)
    }

    pub fn trigger_region(&self) -> TriggerRegion {
        self.inner
            .read()
            .map(|guard| guard.trigger_region)
            .unwrap_or_default()
    }

    pub fn expand_icon_position(&self) -> ExpandIconPosition {
        self.inner
            .read()
            .map(|guard| guard.expand_icon_position)
            .unwrap_or_default()
    }

    pub fn expand_icon(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.expand_icon.clone())
    }

    pub fn destroy_on_hide(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.destroy_on_hide)
            .unwrap_or(false)
    }

    pub fn lazyload(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.lazyload)
            .unwrap_or(true)
    }

    pub fn accordion(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.accordion)
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Toggle the expansion of an item and notify the host.
    ///
    /// In accordion mode, expanding an item collapses every other one.
    pub fn toggle(&self, key: &str) {
        if let Ok(mut guard) = self.inner.write() {
            let was_expanded = guard.active_keys.iter().any(|k| k == key);
            if was_expanded {
                guard.active_keys.retain(|k| k != key);
            } else if guard.accordion {
                guard.active_keys = vec![key.to_string()];
            } else {
                guard.active_keys.push(key.to_string());
            }
            log::debug!(
                "collapse {} toggled {key:?} -> expanded={}",
                self.id,
                !was_expanded
            );
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.push_event(
            ComponentEvent::new(ComponentEventKind::Toggle, self.id_string()).with_key(key),
        );
    }

    /// Replace the set of expanded keys
    pub fn set_active_keys(&self, keys: Vec<impl Into<String>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.active_keys = keys.into_iter().map(|k| k.into()).collect();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn set_trigger_region(&self, region: TriggerRegion) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.trigger_region != region {
                guard.trigger_region = region;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn set_expand_icon_position(&self, position: ExpandIconPosition) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.expand_icon_position != position {
                guard.expand_icon_position = position;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn set_destroy_on_hide(&self, destroy: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.destroy_on_hide = destroy;
        }
    }

    pub fn set_lazyload(&self, lazyload: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.lazyload = lazyload;
        }
    }

    // -------------------------------------------------------------------------
    // Event queue
    // -------------------------------------------------------------------------

    fn push_event(&self, event: ComponentEvent) {
        if let Ok(mut queue) = self.events.lock() {
            queue.push_back(event);
        }
    }

    /// Drain pending toggle notifications
    pub fn take_events(&self) -> Vec<ComponentEvent> {
        self.events
            .lock()
            .map(|mut queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the group state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Collapse {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            events: Arc::clone(&self.events),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Collapse {
    fn default() -> Self {
        Self::new()
    }
}
