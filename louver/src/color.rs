//! CSS-style hex color parsing for widget values.

use paneldom::types::Color;
use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Color string must start with '#': {0:?}")]
    MissingHash(String),
    #[error("Expected 3 or 6 hex digits, got {0}")]
    BadLength(usize),
    #[error("Invalid hex digit in color string: {0:?}")]
    BadDigit(String),
}

/// Parse `#rgb` or `#rrggbb` into a [`Color`].
pub fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
    let Some(digits) = s.strip_prefix('#') else {
        return Err(ColorParseError::MissingHash(s.to_string()));
    };

    // Slicing below is byte-indexed; hex digits are ASCII only.
    if !digits.is_ascii() {
        return Err(ColorParseError::BadDigit(s.to_string()));
    }

    let component = |part: &str| {
        u8::from_str_radix(part, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))
    };

    match digits.len() {
        3 => {
            let r = component(&digits[0..1])?;
            let g = component(&digits[1..2])?;
            let b = component(&digits[2..3])?;
            Ok(Color::rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = component(&digits[0..2])?;
            let g = component(&digits[2..4])?;
            let b = component(&digits[4..6])?;
            Ok(Color::rgb(r, g, b))
        }
        n => Err(ColorParseError::BadLength(n)),
    }
}
