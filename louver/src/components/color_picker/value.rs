use serde::{Deserialize, Serialize};

use crate::color::{ColorParseError, parse_hex};

/// One stop of a gradient value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Hex color string, `#rgb` or `#rrggbb`.
    pub color: String,
    /// Position of the stop, 0 to 100.
    pub percent: f32,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, percent: f32) -> Self {
        Self {
            color: color.into(),
            percent,
        }
    }

    /// Parse the stop's color string.
    pub fn parse_color(&self) -> Result<paneldom::types::Color, ColorParseError> {
        parse_hex(&self.color)
    }
}

/// A color picker value: a plain color string or a gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Css(String),
    Gradient(Vec<GradientStop>),
}

impl ColorValue {
    pub fn css(s: impl Into<String>) -> Self {
        Self::Css(s.into())
    }
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<Vec<GradientStop>> for ColorValue {
    fn from(stops: Vec<GradientStop>) -> Self {
        Self::Gradient(stops)
    }
}
