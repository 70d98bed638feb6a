//! Color picker mode resolution.
//!
//! A color picker is configured with either a single mode or a list of
//! modes the user can switch between. These helpers normalize that
//! configuration and derive the active mode from the current value.

mod mode;
mod value;

pub use mode::{
    ColorPickerMode, ModeSpec, initial_active_mode, is_gradient_mode, is_multi_mode,
    is_single_mode, mode_by_value, resolve_mode,
};
pub use value::{ColorValue, GradientStop};
