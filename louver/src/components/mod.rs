//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `render.rs` - rendering logic
//! - `events.rs` - event handling
//! - `mod.rs` - public exports

pub mod collapse;
pub mod color_picker;
pub mod events;

pub use collapse::{Collapse, CollapseItem};
pub use color_picker::{ColorPickerMode, ModeSpec};
pub use events::{ComponentEvent, ComponentEventKind, ComponentEvents, EventResult};
