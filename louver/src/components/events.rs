//! Component event handling types and traits.
//!
//! This module defines the core types for component-based event handling,
//! allowing each component to handle its own events while keeping the
//! host event loop as a thin dispatcher.

use crate::keybinds::KeyCombo;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Kind of notification a component pushes to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEventKind {
    /// An item's expansion was toggled.
    Toggle,
}

/// A notification from a component, drained by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEvent {
    pub kind: ComponentEventKind,
    /// Id of the component that emitted the event.
    pub source: String,
    /// Item key the event refers to, when applicable.
    pub key: Option<String>,
}

impl ComponentEvent {
    pub fn new(kind: ComponentEventKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            key: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Trait for components that can handle events.
///
/// Components implement this trait to handle mouse and keyboard events.
/// The event loop dispatches events to components through these methods.
///
/// # Default Implementations
///
/// All methods have default implementations that return `EventResult::Ignored`,
/// so components only need to implement the events they care about.
pub trait ComponentEvents {
    /// Handle a click on the element with the given id.
    ///
    /// The id comes from hit testing the rendered tree; dispatchers
    /// bubble from the clicked element toward the root until a handler
    /// consumes the event.
    fn on_click(&self, _target: &str) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key event when this component is focused.
    fn on_key(&self, _key: &KeyCombo) -> EventResult {
        EventResult::Ignored
    }
}
