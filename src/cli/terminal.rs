//! Colored status lines for the `qualifying-offer` and `palindrome` binaries.
//!
//! Only stderr is styled; stdout stays plain so the answer can be piped.

use owo_colors::{OwoColorize, colors::css};

/// Whether stderr is a terminal that accepts ANSI colors
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

/// Styles a diagnostic line before it is written to stderr
pub trait Colorize {
    /// Green, for figures that were written
    fn success(&self) -> String;
    /// Amber, for the `Error:` prefix
    fn warning(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }
}
