//! Color specifications and their resolution to palette indices.
//!
//! Every color ends up as a single [`PaletteIndex`] in the 256-color ANSI
//! palette, no matter how it was written:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (the 8 base colors, indices 0–7)
//! - RGB hex: `"#ff6b35"`, `"ff6b35"` or `"#fff"` (3 or 6 digits)
//! - RGB tuple: `(255, 107, 53)`
//! - Palette index: `208`, passed through unchanged
//!
//! RGB values are mapped onto the 6×6×6 color cube (16–231) or the grayscale
//! ramp (232–255) by [`rgb_to_palette`].
//!
//! # Example
//!
//! ```rust
//! use standout_colorize::{resolve, BaseColor, ColorSpec};
//!
//! assert_eq!(resolve(&ColorSpec::Named(BaseColor::Cyan)).unwrap(), 6);
//! assert_eq!(resolve(&"#ff0000".into()).unwrap(), 196);
//! assert_eq!(resolve(&ColorSpec::Rgb(255, 0, 0)).unwrap(), 196);
//! assert!(resolve(&"1234".into()).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ColorizeError;

/// Canonical color representation: an index into the 256-color palette.
pub type PaletteIndex = u8;

/// The 8 base ANSI colors, in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BaseColor {
    /// All base colors, ordered by palette index.
    pub const ALL: [BaseColor; 8] = [
        BaseColor::Black,
        BaseColor::Red,
        BaseColor::Green,
        BaseColor::Yellow,
        BaseColor::Blue,
        BaseColor::Magenta,
        BaseColor::Cyan,
        BaseColor::White,
    ];

    /// Palette index of this color (0–7).
    pub fn index(self) -> PaletteIndex {
        self as PaletteIndex
    }

    /// Lowercase name, as accepted by [`BaseColor::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            BaseColor::Black => "black",
            BaseColor::Red => "red",
            BaseColor::Green => "green",
            BaseColor::Yellow => "yellow",
            BaseColor::Blue => "blue",
            BaseColor::Magenta => "magenta",
            BaseColor::Cyan => "cyan",
            BaseColor::White => "white",
        }
    }

    /// Looks up a base color by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for BaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BaseColor {
    type Err = ColorizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ColorizeError::UnknownAttribute(s.to_string()))
    }
}

/// An unresolved color, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// One of the 8 base colors.
    Named(BaseColor),
    /// Hex string with 3 or 6 digits, optionally prefixed with `#`.
    Hex(String),
    /// True color RGB, mapped to the nearest palette entry.
    Rgb(u8, u8, u8),
    /// Already a palette index.
    Index(PaletteIndex),
}

impl ColorSpec {
    /// Resolves this spec to a palette index. See [`resolve`].
    pub fn resolve(&self) -> Result<PaletteIndex, ColorizeError> {
        resolve(self)
    }

    /// Parses a color from a string: a base color name, or else a hex code.
    ///
    /// Hex validity is checked at resolution time, not here.
    pub fn parse_string(s: &str) -> Self {
        match BaseColor::from_name(s) {
            Some(color) => ColorSpec::Named(color),
            None => ColorSpec::Hex(s.to_string()),
        }
    }

    /// Parses a color definition from a YAML value.
    ///
    /// Supports:
    /// - Strings: named colors and hex codes
    /// - Numbers: 256-color palette indices
    /// - Sequences: RGB tuples `[r, g, b]`
    ///
    /// Any other value type is rejected.
    pub fn from_value(value: &serde_yaml::Value) -> Result<Self, ColorizeError> {
        match value {
            serde_yaml::Value::String(s) => Ok(Self::parse_string(s)),
            serde_yaml::Value::Number(n) => {
                let index = n
                    .as_u64()
                    .and_then(|i| PaletteIndex::try_from(i).ok())
                    .ok_or_else(|| {
                        ColorizeError::invalid_color(
                            n.to_string(),
                            "palette index must be an integer in 0-255",
                        )
                    })?;
                Ok(ColorSpec::Index(index))
            }
            serde_yaml::Value::Sequence(seq) => Self::parse_rgb_tuple(seq),
            other => Err(ColorizeError::invalid_color(
                format!("{:?}", other),
                "expected a color name, hex string, palette index or RGB sequence",
            )),
        }
    }

    fn parse_rgb_tuple(seq: &[serde_yaml::Value]) -> Result<Self, ColorizeError> {
        if seq.len() != 3 {
            return Err(ColorizeError::invalid_color(
                format!("{:?}", seq),
                format!("RGB sequence must have exactly 3 values, got {}", seq.len()),
            ));
        }

        let mut components = [0u8; 3];
        for (i, val) in seq.iter().enumerate() {
            components[i] = val
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| {
                    ColorizeError::invalid_color(
                        format!("{:?}", seq),
                        format!("RGB component {} is not an integer in 0-255", i),
                    )
                })?;
        }

        Ok(ColorSpec::Rgb(components[0], components[1], components[2]))
    }
}

impl From<BaseColor> for ColorSpec {
    fn from(color: BaseColor) -> Self {
        ColorSpec::Named(color)
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        ColorSpec::parse_string(s)
    }
}

impl From<String> for ColorSpec {
    fn from(s: String) -> Self {
        match BaseColor::from_name(&s) {
            Some(color) => ColorSpec::Named(color),
            None => ColorSpec::Hex(s),
        }
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from([r, g, b]: [u8; 3]) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<PaletteIndex> for ColorSpec {
    fn from(index: PaletteIndex) -> Self {
        ColorSpec::Index(index)
    }
}

/// Resolves a color specification to its palette index.
///
/// Fails with [`ColorizeError::InvalidColor`] for hex strings that are not 3 or
/// 6 hex digits long (after stripping a leading `#`).
pub fn resolve(spec: &ColorSpec) -> Result<PaletteIndex, ColorizeError> {
    let resolved = match spec {
        ColorSpec::Named(color) => Ok(color.index()),
        ColorSpec::Hex(code) => hex_to_palette(code),
        ColorSpec::Rgb(r, g, b) => Ok(rgb_to_palette(*r, *g, *b)),
        ColorSpec::Index(index) => Ok(*index),
    };
    if let Err(err) = &resolved {
        tracing::trace!(?spec, %err, "color did not resolve");
    }
    resolved
}

/// Converts a hex color code to a palette index.
///
/// The leading `#` is optional. Three-digit codes are expanded by doubling
/// every digit (`efc` → `eeffcc`).
///
/// # Example
///
/// ```rust
/// use standout_colorize::hex_to_palette;
///
/// assert_eq!(hex_to_palette("#ff0000").unwrap(), 196);
/// assert_eq!(hex_to_palette("f00").unwrap(), 196);
/// ```
pub fn hex_to_palette(code: &str) -> Result<PaletteIndex, ColorizeError> {
    let hex = code.strip_prefix('#').unwrap_or(code);

    let digits: Vec<char> = match hex.chars().count() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.chars().collect(),
        n => {
            return Err(ColorizeError::invalid_color(
                code,
                format!("hex code must have 3 or 6 digits, got {}", n),
            ))
        }
    };

    let mut rgb = [0u8; 3];
    for (i, pair) in digits.chunks(2).enumerate() {
        let hi = hex_digit(pair[0]).ok_or_else(|| not_hex(code))?;
        let lo = hex_digit(pair[1]).ok_or_else(|| not_hex(code))?;
        rgb[i] = hi * 16 + lo;
    }

    Ok(rgb_to_palette(rgb[0], rgb[1], rgb[2]))
}

fn hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

fn not_hex(code: &str) -> ColorizeError {
    ColorizeError::invalid_color(code, "not a hexadecimal number")
}

/// Maps an RGB triplet onto the 256-color palette.
///
/// Near-neutral colors land on the grayscale ramp (232–255), everything else
/// on the 6×6×6 cube (16–231). A color counts as gray when its largest
/// component falls below the first threshold (2.5, 45, 87.5, … in steps of
/// 42.5) that its smallest component falls below.
///
/// # Example
///
/// ```rust
/// use standout_colorize::rgb_to_palette;
///
/// assert_eq!(rgb_to_palette(255, 0, 0), 196);
/// assert_eq!(rgb_to_palette(0, 0, 0), 232);
/// assert_eq!(rgb_to_palette(255, 255, 255), 255);
/// ```
pub fn rgb_to_palette(r: u8, g: u8, b: u8) -> PaletteIndex {
    let lowest = f64::from(r.min(g).min(b));
    let highest = f64::from(r.max(g).max(b));

    // The last threshold, 257.5, lies above every u8, so this always settles.
    let mut step = 2.5;
    let grayscale = loop {
        if lowest < step {
            break highest < step;
        }
        step += 42.5;
    };

    if grayscale {
        let sum = u16::from(r) + u16::from(g) + u16::from(b);
        return 232 + (sum / 33) as u8;
    }

    let level = |c: u8| (6 * u16::from(c) / 256) as u8;
    16 + level(r) * 36 + level(g) * 6 + level(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    // =========================================================================
    // Named color tests
    // =========================================================================

    #[test]
    fn test_named_colors_resolve_in_order() {
        let indices: Vec<_> = BaseColor::ALL
            .iter()
            .map(|c| resolve(&ColorSpec::Named(*c)).unwrap())
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_base_color_from_name() {
        assert_eq!(BaseColor::from_name("magenta"), Some(BaseColor::Magenta));
        assert_eq!(BaseColor::from_name("purple"), None);
        // Names are lowercase keywords
        assert_eq!(BaseColor::from_name("Red"), None);
    }

    #[test]
    fn test_base_color_from_str_unknown() {
        let err = "orange".parse::<BaseColor>().unwrap_err();
        assert_eq!(err, ColorizeError::UnknownAttribute("orange".into()));
    }

    #[test]
    fn test_parse_string_prefers_names() {
        assert_eq!(ColorSpec::from("blue"), ColorSpec::Named(BaseColor::Blue));
        assert_eq!(ColorSpec::from("#00f"), ColorSpec::Hex("#00f".into()));
        assert_eq!(
            ColorSpec::from(String::from("white")),
            ColorSpec::Named(BaseColor::White)
        );
    }

    // =========================================================================
    // Hex tests
    // =========================================================================

    #[test]
    fn test_hex_6_digit() {
        assert_eq!(hex_to_palette("ff0000").unwrap(), 196);
        assert_eq!(hex_to_palette("#00ff00").unwrap(), 46);
        assert_eq!(hex_to_palette("0000ff").unwrap(), 21);
    }

    #[test]
    fn test_hex_3_digit_doubles_digits() {
        assert_eq!(
            hex_to_palette("efc").unwrap(),
            hex_to_palette("eeffcc").unwrap()
        );
        assert_eq!(hex_to_palette("#fff").unwrap(), 255);
    }

    #[test]
    fn test_hex_case_insensitive() {
        assert_eq!(
            hex_to_palette("FF6B35").unwrap(),
            hex_to_palette("ff6b35").unwrap()
        );
    }

    #[test]
    fn test_hex_invalid_digits() {
        assert!(matches!(
            hex_to_palette("zz0000"),
            Err(ColorizeError::InvalidColor { .. })
        ));
        // u8::from_str_radix would accept a sign; we must not
        assert!(hex_to_palette("+f0000").is_err());
    }

    #[test]
    fn test_hex_invalid_length() {
        for code in ["1234", "#12", "", "#", "1234567"] {
            assert!(
                matches!(hex_to_palette(code), Err(ColorizeError::InvalidColor { .. })),
                "{code} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_multibyte_does_not_panic() {
        assert!(hex_to_palette("ééé").is_err());
        assert!(hex_to_palette("中文字").is_err());
    }

    // =========================================================================
    // RGB mapping tests
    // =========================================================================

    #[test]
    fn test_rgb_extremes() {
        assert_eq!(rgb_to_palette(0, 0, 0), 232);
        assert_eq!(rgb_to_palette(255, 255, 255), 255);
    }

    #[test]
    fn test_rgb_primaries() {
        assert_eq!(rgb_to_palette(255, 0, 0), 196);
        assert_eq!(rgb_to_palette(0, 255, 0), 46);
        assert_eq!(rgb_to_palette(0, 0, 255), 21);
        assert_eq!(rgb_to_palette(255, 255, 0), 226);
    }

    #[test]
    fn test_rgb_grayscale_detection() {
        // min and max both below 45
        assert_eq!(rgb_to_palette(40, 40, 44), 235);
        // min below 45 but max is not: chromatic
        assert_eq!(rgb_to_palette(40, 200, 40), 16 + 4 * 6);
        // min crosses at 130, max 128 still below
        // sum 384 / 33 = 11
        assert_eq!(rgb_to_palette(128, 128, 128), 243);
    }

    #[test]
    fn test_rgb_chromatic_truncates() {
        // 6 * 42 / 256 = 0.98 → 0, never rounded up
        assert_eq!(rgb_to_palette(42, 0, 255), 16 + 5);
        // 6 * 43 / 256 = 1.007 → 1
        assert_eq!(rgb_to_palette(43, 0, 255), 16 + 36 + 5);
    }

    // =========================================================================
    // Resolution tests
    // =========================================================================

    #[test]
    fn test_resolve_index_passthrough() {
        assert_eq!(resolve(&ColorSpec::Index(200)).unwrap(), 200);
        assert_eq!(resolve(&ColorSpec::from(208u8)).unwrap(), 208);
    }

    #[test]
    fn test_resolve_hex_matches_rgb() {
        assert_eq!(
            resolve(&"#ff6b35".into()).unwrap(),
            resolve(&ColorSpec::from((255u8, 107u8, 53u8))).unwrap()
        );
        assert_eq!(
            resolve(&ColorSpec::from([255u8, 107, 53])).unwrap(),
            resolve(&ColorSpec::Rgb(255, 107, 53)).unwrap()
        );
    }

    // =========================================================================
    // YAML value tests
    // =========================================================================

    #[test]
    fn test_from_value_string() {
        let val = Value::String("red".into());
        assert_eq!(
            ColorSpec::from_value(&val).unwrap(),
            ColorSpec::Named(BaseColor::Red)
        );
        let val = Value::String("#abc".into());
        assert_eq!(
            ColorSpec::from_value(&val).unwrap(),
            ColorSpec::Hex("#abc".into())
        );
    }

    #[test]
    fn test_from_value_number() {
        let val = Value::Number(208.into());
        assert_eq!(ColorSpec::from_value(&val).unwrap(), ColorSpec::Index(208));

        let val = Value::Number(256.into());
        assert!(ColorSpec::from_value(&val).is_err());

        let val = Value::Number((-1).into());
        assert!(ColorSpec::from_value(&val).is_err());
    }

    #[test]
    fn test_from_value_sequence() {
        let val = Value::Sequence(vec![
            Value::Number(255.into()),
            Value::Number(107.into()),
            Value::Number(53.into()),
        ]);
        assert_eq!(
            ColorSpec::from_value(&val).unwrap(),
            ColorSpec::Rgb(255, 107, 53)
        );
    }

    #[test]
    fn test_from_value_sequence_invalid() {
        let short = Value::Sequence(vec![Value::Number(255.into()), Value::Number(0.into())]);
        assert!(ColorSpec::from_value(&short).is_err());

        let out_of_range = Value::Sequence(vec![
            Value::Number(256.into()),
            Value::Number(0.into()),
            Value::Number(0.into()),
        ]);
        assert!(ColorSpec::from_value(&out_of_range).is_err());

        let not_numbers = Value::Sequence(vec![
            Value::String("a".into()),
            Value::Number(0.into()),
            Value::Number(0.into()),
        ]);
        assert!(ColorSpec::from_value(&not_numbers).is_err());
    }

    #[test]
    fn test_from_value_unsupported_type() {
        assert!(matches!(
            ColorSpec::from_value(&Value::Bool(true)),
            Err(ColorizeError::InvalidColor { .. })
        ));
        assert!(ColorSpec::from_value(&Value::Null).is_err());
    }
}
