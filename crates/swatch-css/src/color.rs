//! Color parsing and normalisation to `#rrggbb`.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

/// Hex reported for any value the normaliser cannot read.
pub const UNKNOWN_HEX: &str = "#000000";

/// Name reported for any value the normaliser cannot read.
pub const UNKNOWN_NAME: &str = "Unknown";

/// An sRGB color with 8-bit channels.
///
/// Equality and hashing cover all four channels; the palette compares
/// opaque copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorValue {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity, 255 being opaque.
    pub a: u8,
}

impl ColorValue {
    /// `#000000`
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// `#ffffff`
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb()` or `rgba()`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::from_hex(value)
        } else {
            Self::from_rgb_function(value)
        }
    }

    /// [§ 5.2 The RGB Hexadecimal Notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The three-digit RGB notation (#RGB) is converted into six-digit form
    /// (#RRGGBB) by replicating digits, not by adding zeros."
    ///
    /// The four- and eight-digit forms carry alpha and are not accepted.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let nibbles: Vec<u8> = digits
            .chars()
            .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
            .collect::<Option<_>>()?;

        match *nibbles.as_slice() {
            // 0xf * 17 == 0xff
            [r, g, b] => Some(Self::rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Some(Self::rgb(
                (r1 << 4) | r2,
                (g1 << 4) | g2,
                (b1 << 4) | b2,
            )),
            _ => None,
        }
    }

    /// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    ///
    /// Reads `rgb()` and its alias `rgba()` in both the comma-separated legacy
    /// syntax and the space-separated syntax with an optional `/ <alpha>`.
    /// Channels may be numbers or percentages; out-of-range values clamp.
    #[must_use]
    pub fn from_rgb_function(value: &str) -> Option<Self> {
        let (name, rest) = value.trim().split_once('(')?;
        if !matches!(name.trim().to_ascii_lowercase().as_str(), "rgb" | "rgba") {
            return None;
        }
        let body = rest.strip_suffix(')')?;

        let components = body
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(Component::parse)
            .collect::<Option<Vec<_>>>()?;

        match *components.as_slice() {
            [r, g, b] => Some(Self::rgb(r.channel(), g.channel(), b.channel())),
            [r, g, b, a] => Some(Self {
                r: r.channel(),
                g: g.channel(),
                b: b.channel(),
                a: a.alpha(),
            }),
            _ => None,
        }
    }

    /// Canonical lowercase `#rrggbb`; alpha is not represented.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(R, G, B)` notation.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// ITU-R BT.601 luma: `0.299 R + 0.587 G + 0.114 B`.
    #[must_use]
    pub fn luma(&self) -> f64 {
        0.114f64.mul_add(
            f64::from(self.b),
            0.299f64.mul_add(f64::from(self.r), 0.587 * f64::from(self.g)),
        )
    }

    /// Squared Euclidean distance in RGB space.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> u32 {
        [(self.r, other.r), (self.g, other.g), (self.b, other.b)]
            .into_iter()
            .map(|(x, y)| u32::from(x.abs_diff(y)).pow(2))
            .sum()
    }
}

/// Normalise a color string to `#rrggbb`.
///
/// Unreadable input yields [`UNKNOWN_HEX`]; this never fails.
#[must_use]
pub fn to_hex(value: &str) -> String {
    ColorValue::parse(value).map_or_else(|| UNKNOWN_HEX.to_string(), |color| color.to_hex_string())
}

/// One numeric argument of `rgb()`.
#[derive(Debug, Clone, Copy)]
enum Component {
    Number(f64),
    Percent(f64),
}

impl Component {
    fn parse(token: &str) -> Option<Self> {
        match token.strip_suffix('%') {
            Some(percent) => percent.parse().ok().map(Self::Percent),
            None => token.parse().ok().map(Self::Number),
        }
    }

    /// As a color channel, where `100%` is 255.
    fn channel(self) -> u8 {
        match self {
            Self::Number(n) => clamp_to_u8(n),
            Self::Percent(p) => clamp_to_u8(p * 2.55),
        }
    }

    /// As an `<alpha-value>`, where `1` and `100%` are opaque.
    fn alpha(self) -> u8 {
        match self {
            Self::Number(n) => clamp_to_u8(n * 255.0),
            Self::Percent(p) => clamp_to_u8(p * 2.55),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
