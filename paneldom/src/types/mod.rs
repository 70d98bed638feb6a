mod color;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use enums::{Direction, Display, Overflow, Size, TextStyle};
pub use style::Style;
