use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Color representation.
///
/// Serialized as an `[r, g, b, a]` array, which is the form layer color accessors return.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Color used by default color accessors when a row carries no usable color columns:
    /// `[200, 30, 0, 160]`.
    pub const DEFAULT_LAYER: Color = Color::rgba(200, 30, 0, 160);
    /// Black color: `[0, 0, 0, 255]`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    /// Alpha value used when a row has color channels but no alpha channel.
    pub const OPAQUE_ALPHA: u8 = 255;

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into u8 array (RGBA).
    pub fn to_u8_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        value.to_u8_array()
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Array(value.to_u8_array().into_iter().map(Value::from).collect())
    }
}
