//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, SanityTheme, UserInterface};

/// Terminal UI implementation.
///
/// Regular output goes to stdout; errors go to stderr so that machine
/// readable output on stdout stays clean.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: SanityTheme,
    mode: OutputMode,
    colors: bool,
}

impl TerminalUI {
    /// Create a new terminal UI, detecting color support.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_colors(mode, should_use_colors())
    }

    /// Create a new terminal UI with colors explicitly on or off.
    pub fn with_colors(mode: OutputMode, colors: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: SanityTheme::for_colors(colors),
            mode,
            colors,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn use_colors(&self) -> bool {
        self.colors
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
        }
    }
}
