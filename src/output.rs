//! Terminal output formatting for the poster CLI.
//!
//! Status lines go to stderr with a right-aligned coloured verb, the way
//! Cargo prints them. Stdout is reserved for machine-readable output.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal. A quiet printer drops
/// status lines but still formats text for diagnostics.
#[derive(Debug, Clone)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// A printer that suppresses status lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// e.g. "   Rendering blob x8 (pastel, off-white)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Error lines print even when quiet.
    pub fn error(&self, verb: &str, message: &str) {
        self.write_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a string as cyan (for paths).
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// Format a diagnostic severity label with colour.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        if !self.quiet {
            self.write_line(color, verb, message);
        }
    }

    fn write_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "layer", "layers")` → "1 layer".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "layer", "layers"), "1 layer");
        assert_eq!(plural(0, "layer", "layers"), "0 layers");
        assert_eq!(plural(12, "colour", "colours"), "12 colours");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/posters/out.png");
        assert_eq!(display_path(p), "/nonexistent/posters/out.png");
    }

    #[test]
    fn test_display_path_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd), ".");
        assert_eq!(display_path(&cwd.join("poster.png")), "poster.png");
    }

    #[test]
    fn test_plain_formatting_without_colour() {
        let printer = Printer {
            color: false,
            quiet: true,
        };
        assert_eq!(printer.dim("help:"), "help:");
        assert_eq!(printer.severity("error", true), "error");
    }
}
