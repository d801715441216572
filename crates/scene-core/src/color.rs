use glam::Vec3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Linear RGB color with components nominally in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color string must be `#rrggbb`, got {0:?}")]
    Format(String),
    #[error("invalid hex digits in color {0:?}")]
    Digits(String),
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value; bits above 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    pub fn to_hex(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses the `#rrggbb` form produced by HTML color inputs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .filter(|d| d.len() == 6)
            .ok_or_else(|| ColorParseError::Format(s.to_string()))?;
        let hex = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::Digits(s.to_string()))?;
        Ok(Color::from_hex(hex))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}
