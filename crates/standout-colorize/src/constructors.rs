//! One-call constructors: a function per color, background and style.
//!
//! Each function takes plain text or an existing [`StyledText`] and sets a single
//! attribute, so they nest:
//!
//! ```rust
//! use standout_colorize::{bold, red, underline, Capability, Style};
//!
//! let alert = underline(bold(red("x")));
//! assert_eq!(alert.fgcolor(), Some(1));
//! assert_eq!(alert.styles(), &[Style::Bold, Style::Underline]);
//! assert_eq!(alert.render_with(Capability::NONE), "x");
//! ```
//!
//! Nesting follows the [`StyledText::wrap`] merge rules: an outer color replaces
//! an inner one of the same kind, and styles accumulate once each.

use crate::capability::{capability, Capability};
use crate::color::{resolve, BaseColor, ColorSpec, PaletteIndex};
use crate::error::ColorizeError;
use crate::style::Style;
use crate::text::{StyledText, TextSource};

/// Gray's index in the 256-color palette (bright black).
const GRAY: PaletteIndex = 8;

fn with_fg(source: impl Into<TextSource>, color: BaseColor) -> StyledText {
    StyledText::wrap_resolved(source.into(), Some(color.index()), None, None)
}

fn with_bg(source: impl Into<TextSource>, color: BaseColor) -> StyledText {
    StyledText::wrap_resolved(source.into(), None, Some(color.index()), None)
}

fn with_style(source: impl Into<TextSource>, style: Style) -> StyledText {
    StyledText::wrap_resolved(source.into(), None, None, Some(&[style]))
}

macro_rules! color_constructors {
    ($( $fg:ident, $bg:ident => $color:ident; )*) => {
        $(
            #[doc = concat!("Colors the foreground ", stringify!($fg), ".")]
            pub fn $fg(source: impl Into<TextSource>) -> StyledText {
                with_fg(source, BaseColor::$color)
            }

            #[doc = concat!("Colors the background ", stringify!($fg), ".")]
            pub fn $bg(source: impl Into<TextSource>) -> StyledText {
                with_bg(source, BaseColor::$color)
            }
        )*
    };
}

macro_rules! style_constructors {
    ($( $style:ident => $variant:ident; )*) => {
        $(
            #[doc = concat!("Adds the ", stringify!($style), " style.")]
            pub fn $style(source: impl Into<TextSource>) -> StyledText {
                with_style(source, Style::$variant)
            }
        )*
    };
}

color_constructors! {
    black, black_bg => Black;
    red, red_bg => Red;
    green, green_bg => Green;
    yellow, yellow_bg => Yellow;
    blue, blue_bg => Blue;
    magenta, magenta_bg => Magenta;
    cyan, cyan_bg => Cyan;
    white, white_bg => White;
}

style_constructors! {
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

/// Gray foreground, adapted to the process-wide [`capability`].
pub fn gray(source: impl Into<TextSource>) -> StyledText {
    gray_with(capability(), source)
}

/// Alias of [`gray`].
pub fn grey(source: impl Into<TextSource>) -> StyledText {
    gray(source)
}

/// Gray foreground for an explicit capability.
///
/// With the 256-color palette this is index 8. Without it, gray is approximated
/// as black plus the conceal style.
pub fn gray_with(cap: Capability, source: impl Into<TextSource>) -> StyledText {
    if cap.palette256_supported() {
        StyledText::wrap_resolved(source.into(), Some(GRAY), None, None)
    } else {
        // Conceal hides the text on most terminals; kept for output compatibility.
        StyledText::wrap_resolved(
            source.into(),
            Some(BaseColor::Black.index()),
            None,
            Some(&[Style::Conceal]),
        )
    }
}

/// Gray background, adapted to the process-wide [`capability`].
pub fn gray_bg(source: impl Into<TextSource>) -> StyledText {
    gray_bg_with(capability(), source)
}

/// Alias of [`gray_bg`].
pub fn grey_bg(source: impl Into<TextSource>) -> StyledText {
    gray_bg(source)
}

/// Gray background for an explicit capability.
///
/// With the 256-color palette this is index 8. Without it, a black background
/// plus bold.
pub fn gray_bg_with(cap: Capability, source: impl Into<TextSource>) -> StyledText {
    if cap.palette256_supported() {
        StyledText::wrap_resolved(source.into(), None, Some(GRAY), None)
    } else {
        StyledText::wrap_resolved(
            source.into(),
            None,
            Some(BaseColor::Black.index()),
            Some(&[Style::Bold]),
        )
    }
}

/// Either a style or a foreground color, for [`colorize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Colorant {
    Style(Style),
    Color(ColorSpec),
}

impl From<&str> for Colorant {
    /// Style names win; anything else is treated as a color.
    fn from(s: &str) -> Self {
        match Style::from_name(s) {
            Some(style) => Colorant::Style(style),
            None => Colorant::Color(ColorSpec::parse_string(s)),
        }
    }
}

impl From<Style> for Colorant {
    fn from(style: Style) -> Self {
        Colorant::Style(style)
    }
}

impl From<ColorSpec> for Colorant {
    fn from(spec: ColorSpec) -> Self {
        Colorant::Color(spec)
    }
}

impl From<BaseColor> for Colorant {
    fn from(color: BaseColor) -> Self {
        Colorant::Color(color.into())
    }
}

impl From<(u8, u8, u8)> for Colorant {
    fn from(rgb: (u8, u8, u8)) -> Self {
        Colorant::Color(rgb.into())
    }
}

impl From<[u8; 3]> for Colorant {
    fn from(rgb: [u8; 3]) -> Self {
        Colorant::Color(rgb.into())
    }
}

impl From<PaletteIndex> for Colorant {
    fn from(index: PaletteIndex) -> Self {
        Colorant::Color(index.into())
    }
}

/// Applies a single style or foreground color.
///
/// A style replaces whatever styles `source` carried; a color replaces its
/// foreground. Everything else is kept.
///
/// # Example
///
/// ```rust
/// use standout_colorize::{colorize, Capability};
///
/// let alert = colorize("alert", "ff0000")?;
/// assert_eq!(
///     alert.render_with(Capability::EXTENDED),
///     "\x1b[38;5;196malert\x1b[0;39;49m"
/// );
///
/// assert!(colorize("alert", "#ff00").is_err());
/// # Ok::<(), standout_colorize::ColorizeError>(())
/// ```
pub fn colorize(
    source: impl Into<TextSource>,
    colorant: impl Into<Colorant>,
) -> Result<StyledText, ColorizeError> {
    let base = StyledText::wrap_resolved(source.into(), None, None, None);
    match colorant.into() {
        Colorant::Style(style) => Ok(base.with_styles(vec![style])),
        Colorant::Color(spec) => {
            let index = resolve(&spec)?;
            Ok(base.with_fgcolor(index))
        }
    }
}
