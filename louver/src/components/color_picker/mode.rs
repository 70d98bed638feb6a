use serde::{Deserialize, Serialize};

use super::value::ColorValue;

/// Editing mode of a color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPickerMode {
    Single,
    Gradient,
}

/// Mode configuration: one fixed mode, or a list the user can switch
/// between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModeSpec {
    One(ColorPickerMode),
    Many(Vec<ColorPickerMode>),
}

impl From<ColorPickerMode> for ModeSpec {
    fn from(mode: ColorPickerMode) -> Self {
        Self::One(mode)
    }
}

impl From<Vec<ColorPickerMode>> for ModeSpec {
    fn from(modes: Vec<ColorPickerMode>) -> Self {
        Self::Many(modes)
    }
}

/// Normalize the configuration: a single-element list collapses to
/// that element.
pub fn resolve_mode(spec: &ModeSpec) -> ModeSpec {
    match spec {
        ModeSpec::Many(modes) if modes.len() == 1 => ModeSpec::One(modes[0]),
        other => other.clone(),
    }
}

pub fn is_single_mode(spec: &ModeSpec) -> bool {
    resolve_mode(spec) == ModeSpec::One(ColorPickerMode::Single)
}

pub fn is_gradient_mode(spec: &ModeSpec) -> bool {
    resolve_mode(spec) == ModeSpec::One(ColorPickerMode::Gradient)
}

/// Whether the user can switch between modes (more than one after
/// normalization).
pub fn is_multi_mode(spec: &ModeSpec) -> bool {
    matches!(resolve_mode(spec), ModeSpec::Many(_))
}

/// Mode to activate before any value is known. Switchable pickers
/// start in gradient mode.
pub fn initial_active_mode(spec: &ModeSpec) -> ColorPickerMode {
    match resolve_mode(spec) {
        ModeSpec::One(mode) => mode,
        ModeSpec::Many(_) => ColorPickerMode::Gradient,
    }
}

/// Derive the active mode from the controlled value, falling back to
/// the default value and then to the configuration.
///
/// A gradient value selects gradient mode even when its stop list is
/// empty; an empty color string carries no mode information and falls
/// through.
pub fn mode_by_value(
    value: Option<&ColorValue>,
    default_value: Option<&ColorValue>,
    spec: &ModeSpec,
) -> ColorPickerMode {
    for candidate in [value, default_value].into_iter().flatten() {
        match candidate {
            ColorValue::Gradient(_) => return ColorPickerMode::Gradient,
            ColorValue::Css(s) if !s.is_empty() => return ColorPickerMode::Single,
            ColorValue::Css(_) => {}
        }
    }
    initial_active_mode(spec)
}
