//! Error types for color resolution and attribute lookup.
//!
//! Every fallible operation in this crate returns [`ColorizeError`]. Capability
//! detection never fails; it falls back to "no color" instead.

/// Error returned when a color cannot be resolved or an attribute name is unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorizeError {
    /// The color specification could not be turned into a palette index.
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The offending value, as written by the caller.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A color, background, or style was requested by a name that doesn't exist.
    #[error("StyledText has no attribute '{0}'")]
    UnknownAttribute(String),
}

impl ColorizeError {
    pub(crate) fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ColorizeError::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = ColorizeError::invalid_color("zz0000", "not a hex number");
        let msg = err.to_string();
        assert!(msg.contains("zz0000"));
        assert!(msg.contains("not a hex number"));
    }

    #[test]
    fn test_unknown_attribute_display() {
        let err = ColorizeError::UnknownAttribute("purple_bg".to_string());
        assert_eq!(err.to_string(), "StyledText has no attribute 'purple_bg'");
    }
}
