//! Terminal color capability detection.
//!
//! Decides whether stdout can show color at all, and whether it understands the
//! 256-color palette. The answer is computed once per process and cached.
//!
//! # Usage
//!
//! Detection is normally implicit: rendering a [`StyledText`](crate::StyledText)
//! through `Display` consults [`capability`]. To pin the result instead (for
//! tests, or a `--color=always` flag), install a value before anything renders:
//!
//! ```rust
//! use standout_colorize::{capability, init_capability, Capability};
//!
//! init_capability(Capability::EXTENDED).unwrap();
//! assert!(capability().palette256_supported());
//!
//! // Once fixed, the value can't be replaced
//! assert!(init_capability(Capability::NONE).is_err());
//! ```
//!
//! # Detection Policy
//!
//! 1. Not a TTY: no color.
//! 2. On Windows, color depends on enabling ANSI processing for the console.
//! 3. Elsewhere, color if `COLORTERM` is set, or if `TERM` is `xterm`, `linux`,
//!    or contains `color`.
//! 4. 256 colors additionally require `TERM` to contain `256`.
//!
//! A missing `TERM` counts as `dumb`.

use once_cell::sync::OnceCell;

/// What the output terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capability {
    color: bool,
    palette256: bool,
}

impl Capability {
    /// Plain text only.
    pub const NONE: Capability = Capability {
        color: false,
        palette256: false,
    };

    /// The 8 base colors.
    pub const BASIC: Capability = Capability {
        color: true,
        palette256: false,
    };

    /// The full 256-color palette.
    pub const EXTENDED: Capability = Capability {
        color: true,
        palette256: true,
    };

    /// Creates a capability. `palette256` is ignored when `color` is false.
    pub fn new(color: bool, palette256: bool) -> Self {
        Capability {
            color,
            palette256: color && palette256,
        }
    }

    pub fn color_supported(&self) -> bool {
        self.color
    }

    pub fn palette256_supported(&self) -> bool {
        self.palette256
    }

    /// Detects the capability of the current process's stdout.
    pub fn detect() -> Self {
        Self::detect_from(&ProcessEnvironment)
    }

    /// Detects the capability from an explicit environment.
    pub fn detect_from<E: Environment + ?Sized>(env: &E) -> Self {
        if !env.is_tty() {
            return Capability::NONE;
        }

        let term = env
            .var("TERM")
            .unwrap_or_else(|| "dumb".to_string())
            .to_lowercase();

        let color = if env.is_legacy_console() {
            env.enable_ansi()
        } else {
            env.has_var("COLORTERM")
                || term == "xterm"
                || term == "linux"
                || term.contains("color")
        };

        Capability::new(color, term.contains("256"))
    }
}

/// The inputs capability detection reads.
///
/// [`ProcessEnvironment`] is the real thing; tests supply their own.
pub trait Environment {
    /// Value of an environment variable, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether an environment variable is set, whatever its value.
    fn has_var(&self, key: &str) -> bool {
        self.var(key).is_some()
    }

    /// Whether the output stream is a terminal.
    fn is_tty(&self) -> bool;

    /// Whether this platform needs console setup before ANSI escapes work.
    fn is_legacy_console(&self) -> bool {
        false
    }

    /// Performs that setup, returning whether the console now accepts ANSI.
    fn enable_ansi(&self) -> bool {
        false
    }
}

/// The process environment and stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn has_var(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn is_tty(&self) -> bool {
        console::Term::stdout().is_term()
    }

    fn is_legacy_console(&self) -> bool {
        cfg!(windows)
    }

    fn enable_ansi(&self) -> bool {
        // console switches the Windows console into VT mode while answering this.
        console::Term::stdout().features().colors_supported()
    }
}

static CAPABILITY: OnceCell<Capability> = OnceCell::new();

/// Returns the process-wide capability, detecting it on first use.
pub fn capability() -> Capability {
    *CAPABILITY.get_or_init(|| {
        let detected = Capability::detect();
        tracing::debug!(
            color = detected.color,
            palette256 = detected.palette256,
            term = ?std::env::var("TERM").ok(),
            "detected terminal color capability"
        );
        detected
    })
}

/// Whether the process-wide capability allows color.
pub fn color_supported() -> bool {
    capability().color_supported()
}

/// Whether the process-wide capability allows the 256-color palette.
pub fn palette256_supported() -> bool {
    capability().palette256_supported()
}

/// Installs the process-wide capability, bypassing detection.
///
/// Succeeds only if nothing has read or installed the capability yet. Otherwise
/// the value already in place is returned as the error.
pub fn init_capability(cap: Capability) -> Result<(), Capability> {
    match CAPABILITY.set(cap) {
        Ok(()) => {
            tracing::debug!(
                color = cap.color,
                palette256 = cap.palette256,
                "installed terminal color capability"
            );
            Ok(())
        }
        Err(_) => {
            let current = capability();
            tracing::debug!(
                ?current,
                requested = ?cap,
                "terminal color capability already fixed"
            );
            Err(current)
        }
    }
}
