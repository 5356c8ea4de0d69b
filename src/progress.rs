//! Progress output for user-facing status updates.
//!
//! In verbose mode, output is suppressed since tracing handles everything.
//! In normal mode, output is shown with colors to give per-file feedback.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stderr().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stderr
    pub fn new() -> Self {
        let colors_enabled = should_use_colors();
        Self {
            writer: Box::new(io::stderr()),
            silent: false,
            colors_enabled,
        }
    }

    /// Create a progress reporter that respects verbose mode
    /// When verbose=true, output is suppressed (tracing handles it)
    pub fn new_with_verbosity(verbose: bool) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled: should_use_colors(),
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled: false,
        }
    }

    /// Create a silent progress reporter (for testing or verbose mode)
    #[allow(dead_code)]
    pub fn silent() -> Self {
        Self {
            writer: Box::new(io::sink()),
            silent: true,
            colors_enabled: false,
        }
    }

    /// Report the start of a directory scan
    pub fn scan_start(&mut self, target: &Path) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Scanning {}...", target.display()).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "Scanning {}...", target.display());
        }
    }

    /// Report scan completion
    pub fn scan_complete(&mut self, count: usize) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer, "Found {} files", count);
    }

    /// Report a single rename
    pub fn renamed(&mut self, from: &str, to: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {} {}", from.dimmed(), "→".cyan(), to);
        } else {
            let _ = writeln!(self.writer, "Renamed '{}' to '{}'", from, to);
        }
    }

    /// Report a candidate that failed the pattern and was left alone
    pub fn skipped(&mut self, name: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "skip".yellow(),
                format!("'{}' does not match the expected pattern", name).dimmed()
            );
        } else {
            let _ = writeln!(
                self.writer,
                "Skipping file '{}' as it does not match the expected pattern",
                name
            );
        }
    }
}
