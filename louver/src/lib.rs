pub mod color;
pub mod components;
pub mod keybinds;

pub mod prelude {
    pub use crate::color::{ColorParseError, parse_hex};
    pub use crate::components::collapse::{
        Collapse, CollapseItem, ExpandIconPosition, FoldEdge, FoldPhase, FoldTransition,
        HeaderRegion, TriggerRegion, render,
    };
    pub use crate::components::color_picker::{
        ColorPickerMode, ColorValue, GradientStop, ModeSpec, initial_active_mode,
        is_gradient_mode, is_multi_mode, is_single_mode, mode_by_value, resolve_mode,
    };
    pub use crate::components::{ComponentEvent, ComponentEventKind, ComponentEvents, EventResult};
    pub use crate::keybinds::KeyCombo;

    pub use paneldom::{Easing, Element, Event, Key, Modifiers, MouseButton, TransitionConfig};
}
