//! Styled text values and their rendering to ANSI escapes.
//!
//! A [`StyledText`] holds plain text plus an optional foreground, an optional
//! background and a list of styles. Attributes can be added fluently, either
//! through one method per attribute or by name:
//!
//! ```rust
//! use standout_colorize::{Capability, StyledText};
//!
//! let text = StyledText::new("ok").green().bold();
//! let same = StyledText::new("ok").apply_named("green")?.apply_named("bold")?;
//! assert_eq!(text, same);
//!
//! assert_eq!(
//!     text.render_with(Capability::BASIC),
//!     "\x1b[1m\x1b[32mok\x1b[0;39;49m\x1b[0;39;49m"
//! );
//! assert_eq!(text.render_with(Capability::NONE), "ok");
//! # Ok::<(), standout_colorize::ColorizeError>(())
//! ```
//!
//! # Wrapping
//!
//! [`StyledText::wrap`] builds a value around either plain text or an existing
//! `StyledText`. When wrapping a styled value, newly supplied colors win, missing
//! ones are inherited, and the two style lists are merged without duplicates.

use std::fmt;

use crate::capability::{capability, Capability};
use crate::color::{resolve, BaseColor, ColorSpec, PaletteIndex};
use crate::error::ColorizeError;
use crate::style::{Attribute, Style};

/// Resets every SGR attribute plus foreground and background.
pub const RESET: &str = "\x1b[0;39;49m";

/// Text with colors and styles attached.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    fgcolor: Option<PaletteIndex>,
    bgcolor: Option<PaletteIndex>,
    styles: Vec<Style>,
}

/// What a [`StyledText`] is built around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Unstyled text.
    Plain(String),
    /// An existing value whose attributes are merged with the new ones.
    Styled(StyledText),
}

impl From<&str> for TextSource {
    fn from(s: &str) -> Self {
        TextSource::Plain(s.to_string())
    }
}

impl From<String> for TextSource {
    fn from(s: String) -> Self {
        TextSource::Plain(s)
    }
}

impl From<&String> for TextSource {
    fn from(s: &String) -> Self {
        TextSource::Plain(s.clone())
    }
}

impl From<StyledText> for TextSource {
    fn from(text: StyledText) -> Self {
        TextSource::Styled(text)
    }
}

impl From<&StyledText> for TextSource {
    fn from(text: &StyledText) -> Self {
        TextSource::Styled(text.clone())
    }
}

/// Colors and styles to apply in [`StyledText::wrap`].
///
/// Unset fields are inherited from a styled source. Setting `styles`, even to
/// an empty list, merges them with the source's styles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    pub fgcolor: Option<ColorSpec>,
    pub bgcolor: Option<ColorSpec>,
    pub styles: Option<Vec<Style>>,
}

impl Attributes {
    /// No colors, no styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color to resolve.
    pub fn fg(mut self, color: impl Into<ColorSpec>) -> Self {
        self.fgcolor = Some(color.into());
        self
    }

    /// Sets the background color to resolve.
    pub fn bg(mut self, color: impl Into<ColorSpec>) -> Self {
        self.bgcolor = Some(color.into());
        self
    }

    /// Sets the styles to merge in.
    pub fn styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
        self.styles = Some(styles.into_iter().collect());
        self
    }
}

macro_rules! attribute_methods {
    ($( $fg:ident, $bg:ident => $color:ident; )* | $( $style:ident => $variant:ident; )*) => {
        impl StyledText {
            $(
                #[doc = concat!("Sets the foreground to ", stringify!($fg), ".")]
                pub fn $fg(self) -> Self {
                    self.fg(BaseColor::$color)
                }

                #[doc = concat!("Sets the background to ", stringify!($fg), ".")]
                pub fn $bg(self) -> Self {
                    self.bg(BaseColor::$color)
                }
            )*
            $(
                #[doc = concat!("Appends the ", stringify!($style), " style.")]
                pub fn $style(self) -> Self {
                    self.style(Style::$variant)
                }
            )*
        }
    };
}

attribute_methods! {
    black, black_bg => Black;
    red, red_bg => Red;
    green, green_bg => Green;
    yellow, yellow_bg => Yellow;
    blue, blue_bg => Blue;
    magenta, magenta_bg => Magenta;
    cyan, cyan_bg => Cyan;
    white, white_bg => White;
    |
    bold => Bold;
    faint => Faint;
    italic => Italic;
    underline => Underline;
    blink => Blink;
    overline => Overline;
    inverse => Inverse;
    conceal => Conceal;
    strike => Strike;
}

impl StyledText {
    /// Creates an unstyled value.
    pub fn new(text: impl Into<String>) -> Self {
        StyledText {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Builds a value around `source`, resolving any color specs in `attrs`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standout_colorize::{Attributes, Style, StyledText};
    ///
    /// let inner = StyledText::wrap("x", Attributes::new().fg("red").styles([Style::Bold]))?;
    /// let outer = StyledText::wrap(inner, Attributes::new().bg("#fff").styles([Style::Bold]))?;
    ///
    /// assert_eq!(outer.fgcolor(), Some(1));
    /// assert_eq!(outer.bgcolor(), Some(255));
    /// assert_eq!(outer.styles(), &[Style::Bold]);
    /// # Ok::<(), standout_colorize::ColorizeError>(())
    /// ```
    pub fn wrap(
        source: impl Into<TextSource>,
        attrs: Attributes,
    ) -> Result<Self, ColorizeError> {
        let fgcolor = attrs.fgcolor.as_ref().map(resolve).transpose()?;
        let bgcolor = attrs.bgcolor.as_ref().map(resolve).transpose()?;
        Ok(Self::wrap_resolved(
            source.into(),
            fgcolor,
            bgcolor,
            attrs.styles.as_deref(),
        ))
    }

    pub(crate) fn wrap_resolved(
        source: TextSource,
        fgcolor: Option<PaletteIndex>,
        bgcolor: Option<PaletteIndex>,
        styles: Option<&[Style]>,
    ) -> Self {
        match source {
            TextSource::Plain(text) => StyledText {
                text,
                fgcolor,
                bgcolor,
                styles: styles.map(<[Style]>::to_vec).unwrap_or_default(),
            },
            TextSource::Styled(inner) => {
                let styles = match styles {
                    None => inner.styles,
                    Some(added) => {
                        let mut merged = Vec::with_capacity(inner.styles.len() + added.len());
                        for style in inner.styles.iter().chain(added) {
                            if !merged.contains(style) {
                                merged.push(*style);
                            }
                        }
                        merged
                    }
                };
                StyledText {
                    text: inner.text,
                    fgcolor: fgcolor.or(inner.fgcolor),
                    bgcolor: bgcolor.or(inner.bgcolor),
                    styles,
                }
            }
        }
    }

    /// The raw text, without escapes.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Foreground palette index, if set.
    pub fn fgcolor(&self) -> Option<PaletteIndex> {
        self.fgcolor
    }

    /// Background palette index, if set.
    pub fn bgcolor(&self) -> Option<PaletteIndex> {
        self.bgcolor
    }

    /// Styles in the order they were applied.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Consumes the value, returning the raw text.
    pub fn into_text(self) -> String {
        self.text
    }

    pub(crate) fn with_fgcolor(mut self, index: PaletteIndex) -> Self {
        self.fgcolor = Some(index);
        self
    }

    pub(crate) fn with_styles(mut self, styles: Vec<Style>) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the foreground color.
    pub fn fg(mut self, color: BaseColor) -> Self {
        self.fgcolor = Some(color.index());
        self
    }

    /// Replaces the background color.
    pub fn bg(mut self, color: BaseColor) -> Self {
        self.bgcolor = Some(color.index());
        self
    }

    /// Appends a style. Repeats are kept.
    pub fn style(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    /// Replaces the foreground with an arbitrary color.
    pub fn fg_color(mut self, color: impl Into<ColorSpec>) -> Result<Self, ColorizeError> {
        self.fgcolor = Some(resolve(&color.into())?);
        Ok(self)
    }

    /// Replaces the background with an arbitrary color.
    pub fn bg_color(mut self, color: impl Into<ColorSpec>) -> Result<Self, ColorizeError> {
        self.bgcolor = Some(resolve(&color.into())?);
        Ok(self)
    }

    /// Applies a single attribute, like the matching fluent method.
    pub fn apply(self, attr: Attribute) -> Self {
        match attr {
            Attribute::Fg(color) => self.fg(color),
            Attribute::Bg(color) => self.bg(color),
            Attribute::Style(style) => self.style(style),
        }
    }

    /// Applies an attribute by name: `"red"`, `"red_bg"` or `"bold"`.
    pub fn apply_named(self, name: &str) -> Result<Self, ColorizeError> {
        Ok(self.apply(Attribute::from_name(name)?))
    }

    /// Renders using the process-wide [`capability`].
    pub fn render(&self) -> String {
        self.render_with(capability())
    }

    /// Renders for an explicit terminal capability.
    ///
    /// Background wraps outside foreground, and styles wrap outside both.
    /// Without the 256-color palette, colors above 7 are dropped.
    pub fn render_with(&self, cap: Capability) -> String {
        if !cap.color_supported() {
            return self.text.clone();
        }

        let mut decorated = self.text.clone();

        if cap.palette256_supported() {
            if let Some(fg) = self.fgcolor {
                decorated = format!("\x1b[38;5;{}m{}{}", fg, decorated, RESET);
            }
            if let Some(bg) = self.bgcolor {
                decorated = format!("\x1b[48;5;{}m{}{}", bg, decorated, RESET);
            }
        } else {
            if let Some(fg) = self.fgcolor.filter(|c| *c < 8) {
                decorated = format!("\x1b[{}m{}{}", 30 + fg, decorated, RESET);
            }
            if let Some(bg) = self.bgcolor.filter(|c| *c < 8) {
                decorated = format!("\x1b[{}m{}{}", 40 + bg, decorated, RESET);
            }
        }

        if !self.styles.is_empty() {
            let codes = self
                .styles
                .iter()
                .map(|s| s.code().to_string())
                .collect::<Vec<_>>()
                .join(";");
            decorated = format!("\x1b[{}m{}{}", codes, decorated, RESET);
        }

        decorated
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<u8> = self.styles.iter().map(|s| s.code()).collect();
        write!(
            f,
            "StyledText({:?}, fgcolor={:?}, bgcolor={:?}, styles={:?})",
            self.text, self.fgcolor, self.bgcolor, codes
        )
    }
}

impl From<&str> for StyledText {
    fn from(s: &str) -> Self {
        StyledText::new(s)
    }
}

impl From<String> for StyledText {
    fn from(s: String) -> Self {
        StyledText::new(s)
    }
}
