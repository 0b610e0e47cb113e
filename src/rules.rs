/*!
 * Folder naming rules
 *
 * Four independent boolean checks against a folder path string. Patterns
 * are compiled once at construction and the set is immutable for the rest
 * of the run. Each check is pure and order-independent.
 */

use std::path::Path;

use regex::Regex;

use crate::error::Result;
use crate::utils::title_case;

/// Compiled folder-name rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    date_marker: Regex,
    disc_marker: Regex,
}

impl RuleSet {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // A parenthesized 2-4 digit group anywhere, e.g. "(1999)"
            date_marker: Regex::new(r"\(\d{2,4}\)")?,
            // A cd/disk token, bracketed or not, with or without a number.
            // The boundary keeps "Creedence" from matching while "cd2" does.
            disc_marker: Regex::new(r"(?i)\b(cd|disk)(\b|\d)")?,
        })
    }

    /// True if the path contains a parenthesized 2-4 digit group
    pub fn has_date_marker(&self, path: &str) -> bool {
        self.date_marker.is_match(path)
    }

    /// True if the path contains "cd" or "disk" (case-insensitive),
    /// optionally bracketed or suffixed with a disc number
    pub fn has_disc_marker(&self, path: &str) -> bool {
        self.disc_marker.is_match(path)
    }

    /// True if the path starts or ends with a space, or contains two or
    /// more consecutive spaces
    pub fn has_irregular_spacing(&self, path: &str) -> bool {
        path.starts_with(' ') || path.ends_with(' ') || path.contains("  ")
    }

    /// True if the folder's own name (last path segment) equals its
    /// title-cased form exactly
    pub fn is_titlecased(&self, path: &str) -> bool {
        let name = Path::new(path).file_name().unwrap_or_default().to_string_lossy();
        name == title_case(&name)
    }
}
