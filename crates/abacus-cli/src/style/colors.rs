//! Semantic color palette for terminal output.

use owo_colors::{OwoColorize, Stream, Style};

/// Returns the style for error messages (red bold).
pub fn error_style() -> Style {
    Style::new().red().bold()
}

/// Returns the style for warning messages (yellow).
pub fn warning_style() -> Style {
    Style::new().yellow()
}

/// Returns the style for muted/secondary text (dimmed).
pub fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Returns the style for headers (bold).
pub fn header_style() -> Style {
    Style::new().bold()
}

/// Trait extension to apply semantic styles.
///
/// `error`/`warning` check stderr for color support, `muted`/`header` stdout.
pub trait SemanticStyle: Sized {
    /// Apply error styling (red bold).
    fn error(&self) -> String;
    /// Apply warning styling (yellow).
    fn warning(&self) -> String;
    /// Apply muted styling (dimmed).
    fn muted(&self) -> String;
    /// Apply header styling (bold).
    fn header(&self) -> String;
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn error(&self) -> String {
        styled(self, error_style(), Stream::Stderr)
    }

    fn warning(&self) -> String {
        styled(self, warning_style(), Stream::Stderr)
    }

    fn muted(&self) -> String {
        styled(self, muted_style(), Stream::Stdout)
    }

    fn header(&self) -> String {
        styled(self, header_style(), Stream::Stdout)
    }
}

/// Applies `style` only when `stream` is a color-capable terminal.
fn styled(value: &impl std::fmt::Display, style: Style, stream: Stream) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value
            .if_supports_color(stream, |text| text.style(style))
            .to_string()
    }
}
