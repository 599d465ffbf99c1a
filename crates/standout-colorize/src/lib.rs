//! # Standout Colorize - Composable Terminal Colors
//!
//! `standout-colorize` wraps text in ANSI escapes for colors and styles, and
//! degrades to plain text when the terminal can't show them.
//!
//! ## Core Concepts
//!
//! - [`StyledText`]: text plus an optional foreground, background and styles
//! - [`ColorSpec`]: a color as written by the caller (name, hex, RGB, index),
//!   resolved to a 256-color [`PaletteIndex`] by [`resolve`]
//! - [`Style`]: the 9 SGR text styles (bold through strike)
//! - [`Capability`]: what the terminal can display, detected once per process
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_colorize::{bold, colorize, red, underline, Capability};
//!
//! // Constructors nest, merging their attributes
//! let warning = underline(bold(red("careful")));
//!
//! // Display renders for the detected terminal
//! println!("{}", warning);
//!
//! // Or render for a known capability
//! assert_eq!(
//!     red("hi").render_with(Capability::BASIC),
//!     "\x1b[31mhi\x1b[0;39;49m"
//! );
//! assert_eq!(red("hi").render_with(Capability::NONE), "hi");
//!
//! // Any color format works through colorize
//! let alert = colorize("alert", "#ff0000").unwrap();
//! assert_eq!(alert.fgcolor(), Some(196));
//! ```
//!
//! ## Fluent Attributes
//!
//! ```rust
//! use standout_colorize::{Capability, StyledText};
//!
//! let text = StyledText::new("note").yellow().blue_bg().italic();
//! let by_name = StyledText::new("note")
//!     .apply_named("yellow")?
//!     .apply_named("blue_bg")?
//!     .apply_named("italic")?;
//! assert_eq!(text, by_name);
//! # Ok::<(), standout_colorize::ColorizeError>(())
//! ```
//!
//! ## Degradation
//!
//! Without color support every value renders as its plain text. Without the
//! 256-color palette, colors outside the base 8 are dropped and only styles
//! remain.

pub mod capability;
pub mod color;
pub mod constructors;
mod error;
pub mod style;
pub mod text;

// Error type
pub use error::ColorizeError;

// Capability exports
pub use capability::{
    capability, color_supported, init_capability, palette256_supported, Capability, Environment,
    ProcessEnvironment,
};

// Color exports
pub use color::{hex_to_palette, resolve, rgb_to_palette, BaseColor, ColorSpec, PaletteIndex};

// Style exports
pub use style::{Attribute, Style};

// Styled text exports
pub use text::{Attributes, StyledText, TextSource, RESET};

// Constructor exports
pub use constructors::{
    black, black_bg, blink, blue, blue_bg, bold, colorize, conceal, cyan, cyan_bg, faint, gray,
    gray_bg, gray_bg_with, gray_with, green, green_bg, grey, grey_bg, inverse, italic, magenta,
    magenta_bg, overline, red, red_bg, strike, underline, white, white_bg, yellow, yellow_bg,
    Colorant,
};
