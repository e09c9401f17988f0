//! Visual theme and styling.

use console::Style;

/// Terminal colors for check output.
///
/// Owned by whoever renders output; rules never see it.
#[derive(Debug, Clone)]
pub struct SanityTheme {
    /// Style for passing checks (bright green).
    pub pass: Style,
    /// Style for warnings and checks that could not run (bright yellow).
    pub warning: Style,
    /// Style for failing checks (bright red).
    pub fail: Style,
    /// Style for emphasized text (bold).
    pub bold: Style,
    /// Style for section headers (bold underline).
    pub header: Style,
    /// Style for secondary text (dim).
    pub dim: Style,
}

impl Default for SanityTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SanityTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            pass: Style::new().green().bright(),
            warning: Style::new().yellow().bright(),
            fail: Style::new().red().bright(),
            bold: Style::new().bold(),
            header: Style::new().bold().underlined(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            pass: Style::new(),
            warning: Style::new(),
            fail: Style::new(),
            bold: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.pass.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.fail.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
