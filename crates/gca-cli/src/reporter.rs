use anyhow::{Context, Result};
use colored::Colorize;

use gca_common::{Diagnostic, DiagnosticCategory};

/// Renders diagnostics as text lines.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub const fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// One line per diagnostic, each terminated by a newline.
    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        out
    }

    /// `file(start,length): warning CA1304: message`
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let location = self.format_location(diagnostic);
        let category = self.format_category(diagnostic.category);
        let code = self.format_code(diagnostic);
        format!("{location}: {category} {code}: {}", diagnostic.message_text)
    }

    fn format_location(&self, diagnostic: &Diagnostic) -> String {
        let file = if diagnostic.file.is_empty() {
            "<unknown>"
        } else {
            diagnostic.file.as_str()
        };
        let location = format!("{file}({},{})", diagnostic.start, diagnostic.length);
        if self.color {
            location.cyan().to_string()
        } else {
            location
        }
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();
        if !self.color {
            return label.to_string();
        }
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion | DiagnosticCategory::Message => {
                label.blue().to_string()
            }
        }
    }

    fn format_code(&self, diagnostic: &Diagnostic) -> String {
        let code = diagnostic.rule_id();
        if self.color {
            code.bright_black().to_string()
        } else {
            code
        }
    }

    /// `Found 2 warnings.` style closing line; empty when nothing was reported.
    pub fn summary(&self, diagnostics: &[Diagnostic]) -> String {
        let errors = diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count();
        let warnings = diagnostics.len() - errors;
        let plural = |n: usize, word: &str| {
            if n == 1 {
                format!("{n} {word}")
            } else {
                format!("{n} {word}s")
            }
        };
        match (errors, warnings) {
            (0, 0) => String::new(),
            (0, w) => format!("Found {}.", plural(w, "warning")),
            (e, 0) => format!("Found {}.", plural(e, "error")),
            (e, w) => format!("Found {} and {}.", plural(e, "error"), plural(w, "warning")),
        }
    }
}

/// The diagnostics as a pretty-printed JSON array.
pub fn render_json(diagnostics: &[Diagnostic]) -> Result<String> {
    serde_json::to_string_pretty(diagnostics).context("failed to serialize diagnostics")
}
