/*!
 * Track filename validation
 *
 * A track filename must match one of two naming schemes built from the
 * track's own position in the tree:
 *
 * - Regular:     `<artist> - <album> - <disc>.<track> - <title>.<ext>`
 * - Compilation: `<album> - <disc>.<track> - <artist> - <title>.<ext>`
 *
 * Artist and album are taken from the grandparent and parent folder names.
 * Tag-derived names may legitimately contain characters the filesystem
 * cannot, so filesystem-illegal characters in those names are matched as
 * wildcards rather than literals.
 */

use std::path::Path;

use lofty::probe::Probe;
use regex::Regex;

/// Characters a filesystem path segment cannot carry; each one is matched
/// as a single wildcard in the schemes
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Validator for track filenames
#[derive(Debug, Clone, Default)]
pub struct TrackNameValidator {
    /// Also require the file to parse as audio (lofty probe)
    verify_audio: bool,
}

impl TrackNameValidator {
    pub fn new(verify_audio: bool) -> Self {
        Self { verify_audio }
    }

    /// Check a track's filename against both naming schemes.
    ///
    /// Fails closed: a path too shallow to carry artist and album
    /// segments, or with a non-UTF-8 name, is non-conforming.
    pub fn validate(&self, path: &Path) -> bool {
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let Some(album) = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
        else {
            return false;
        };
        let Some(artist) = path
            .parent()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
        else {
            return false;
        };

        if !matches_scheme(artist, album, filename) {
            return false;
        }

        if self.verify_audio && !probe_audio(path) {
            return false;
        }

        true
    }
}

/// Match a filename against the regular and compilation schemes; either
/// one suffices. Matching is case-insensitive and anchored at the start;
/// the title portion is deliberately unconstrained.
fn matches_scheme(artist: &str, album: &str, filename: &str) -> bool {
    let artist = escape_segment(artist);
    let album = escape_segment(album);

    let regular = format!(r"(?i)^{artist} - {album} - \d+\.\d+ - .*$");
    let compilation = format!(r"(?i)^{album} - \d+\.\d+ - {artist} - .*$");

    [regular, compilation].iter().any(|pattern| {
        Regex::new(pattern).map_or(false, |re| re.is_match(filename))
    })
}

/// Escape a folder name for literal use in a scheme pattern.
///
/// Filesystem-illegal characters become single-character wildcards. A
/// literal dot does too: a dot in a folder name is the usual on-disk
/// stand-in for a character the filesystem could not carry, so the
/// tag-derived filename may hold the original character in its place.
fn escape_segment(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch == '.' || ILLEGAL_CHARS.contains(&ch) {
            out.push('.');
        } else {
            out.push_str(&regex::escape(&ch.to_string()));
        }
    }
    out
}

/// Confirm the file opens and parses as audio. Used only when audio
/// verification is enabled; any probe error counts as a failure.
fn probe_audio(path: &Path) -> bool {
    Probe::open(path)
        .and_then(|probe| probe.read())
        .is_ok()
}
