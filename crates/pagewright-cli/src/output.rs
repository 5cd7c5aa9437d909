//! Status line output

use console::{style, Term};

/// Writes pass/fail/info lines to stderr
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    fn prefix(&self, colored: console::StyledObject<&str>, plain: &str) -> String {
        if self.use_color {
            colored.force_styling(true).bold().to_string()
        } else {
            plain.to_string()
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = self.prefix(style("✓").green(), "PASS");
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // failures print even in quiet mode
        let prefix = self.prefix(style("✗").red(), "FAIL");
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a skipped item
    pub fn skipped(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = self.prefix(style("-").yellow(), "SKIP");
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prefixes() {
        let reporter = Reporter::new(false, false);
        assert_eq!(reporter.prefix(style("✓").green(), "PASS"), "PASS");
    }

    #[test]
    fn test_colored_prefix_keeps_glyph() {
        let reporter = Reporter::new(true, true);
        assert!(reporter.prefix(style("✗").red(), "FAIL").contains('✗'));
    }
}
