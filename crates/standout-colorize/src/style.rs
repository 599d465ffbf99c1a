//! Text styles and the closed set of named attributes.
//!
//! An [`Attribute`] is anything that can be applied to a
//! [`StyledText`](crate::StyledText) by name: a foreground color (`red`), a
//! background color (`red_bg`) or a style (`bold`). That gives 25 names in total.

use std::fmt;
use std::str::FromStr;

use crate::color::BaseColor;
use crate::error::ColorizeError;

/// SGR text styles. Each style's escape code is its position in
/// [`Style::ALL`] plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold = 1,
    Faint,
    Italic,
    Underline,
    Blink,
    Overline,
    Inverse,
    Conceal,
    Strike,
}

impl Style {
    /// All styles, ordered by code.
    pub const ALL: [Style; 9] = [
        Style::Bold,
        Style::Faint,
        Style::Italic,
        Style::Underline,
        Style::Blink,
        Style::Overline,
        Style::Inverse,
        Style::Conceal,
        Style::Strike,
    ];

    /// The SGR code (1–9).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as accepted by [`Style::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Faint => "faint",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Blink => "blink",
            Style::Overline => "overline",
            Style::Inverse => "inverse",
            Style::Conceal => "conceal",
            Style::Strike => "strike",
        }
    }

    /// Looks up a style by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ColorizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ColorizeError::UnknownAttribute(s.to_string()))
    }
}

/// A single nameable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Foreground color, named `<color>`.
    Fg(BaseColor),
    /// Background color, named `<color>_bg`.
    Bg(BaseColor),
    /// Text style, named `<style>`.
    Style(Style),
}

impl Attribute {
    /// Every attribute name that [`Attribute::from_name`] accepts.
    pub fn names() -> impl Iterator<Item = String> {
        let fg = BaseColor::ALL.into_iter().map(|c| c.name().to_string());
        let bg = BaseColor::ALL.into_iter().map(|c| format!("{}_bg", c.name()));
        let styles = Style::ALL.into_iter().map(|s| s.name().to_string());
        fg.chain(bg).chain(styles)
    }

    /// Looks up an attribute by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standout_colorize::{Attribute, BaseColor, Style};
    ///
    /// assert_eq!(Attribute::from_name("cyan_bg").unwrap(), Attribute::Bg(BaseColor::Cyan));
    /// assert_eq!(Attribute::from_name("strike").unwrap(), Attribute::Style(Style::Strike));
    /// assert!(Attribute::from_name("purple").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, ColorizeError> {
        if let Some(base) = name.strip_suffix("_bg") {
            return BaseColor::from_name(base)
                .map(Attribute::Bg)
                .ok_or_else(|| ColorizeError::UnknownAttribute(name.to_string()));
        }

        if let Some(color) = BaseColor::from_name(name) {
            return Ok(Attribute::Fg(color));
        }

        Style::from_name(name)
            .map(Attribute::Style)
            .ok_or_else(|| ColorizeError::UnknownAttribute(name.to_string()))
    }
}

impl FromStr for Attribute {
    type Err = ColorizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Fg(color) => write!(f, "{}", color),
            Attribute::Bg(color) => write!(f, "{}_bg", color),
            Attribute::Style(style) => write!(f, "{}", style),
        }
    }
}
