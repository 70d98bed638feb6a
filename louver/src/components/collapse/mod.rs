//! Collapse component: accordion-style panels with animated content.
//!
//! A [`Collapse`] group owns the expansion state (the list of active
//! item keys) and the shared configuration: which header sub-region
//! toggles an item, where the expand icon sits, and whether hidden
//! content is unmounted. [`CollapseItem`]s hold a clone of the group
//! handle and derive their expanded state from it; they never own it.
//!
//! # Example
//!
//! ```ignore
//! let group = Collapse::new().with_trigger_region(TriggerRegion::Header);
//! let item = CollapseItem::new(&group, "general", "General settings")
//!     .with_content("Settings body text");
//!
//! // Each frame:
//! let edges = item.sync(width, Instant::now());
//! let tree = render(&item, Instant::now());
//!
//! // On click (target comes from hit testing):
//! item.dispatch_click(&tree, &clicked_id);
//! for event in group.take_events() {
//!     // react to toggles
//! }
//! ```

mod events;
mod item;
mod render;
mod state;
mod transition;

pub use events::HeaderRegion;
pub use item::CollapseItem;
pub use render::render;
pub use state::{Collapse, CollapseId, ExpandIconPosition, TriggerRegion};
pub use transition::{FoldEdge, FoldPhase, FoldTransition};
