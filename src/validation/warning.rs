//! Diagnostic types for validation results.

use std::fmt;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Machine-readable diagnostic code (e.g. "poster::validate::layers").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// The parameter the diagnostic is about, if any.
    pub field: Option<String>,
    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            field: None,
            help: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Attach the parameter name this diagnostic concerns.
    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Collects diagnostics from validation checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Check if there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// The first error, if any.
    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.diagnostics
            .iter()
            .find(|d| d.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert!(result.first_error().is_none());
    }

    #[test]
    fn test_counts() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::error("poster::test", "too many layers"));
        result.push(Diagnostic::warning("poster::test", "unknown palette"));
        result.push(Diagnostic::warning("poster::test", "unknown background"));

        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 2);
        assert_eq!(result.first_error().unwrap().message, "too many layers");
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationResult::new();
        a.push(Diagnostic::error("poster::a", "error a"));

        let mut b = ValidationResult::new();
        b.push(Diagnostic::warning("poster::b", "warning b"));

        a.merge(b);
        assert_eq!(a.error_count(), 1);
        assert_eq!(a.warning_count(), 1);
    }

    #[test]
    fn test_builder_methods() {
        let d = Diagnostic::warning("poster::test", "wobble is high")
            .for_field("wobble")
            .with_help("Try 0.15");
        assert_eq!(d.field.as_deref(), Some("wobble"));
        assert_eq!(d.help.as_deref(), Some("Try 0.15"));
        assert_eq!(d.severity.to_string(), "warning");
    }
}
