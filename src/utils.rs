/*!
 * Utility functions for Muso
 */

use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use walkdir::WalkDir;

/// File names skipped entirely during audits. These are OS litter, not
/// library content, so they must not trip the folder-purity rules.
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".DS_Store",
        "Thumbs.db",
        "desktop.ini",
        "ehthumbs.db",
        ".directory",
    ]
});

/// Whether an entry is skipped outright: hidden (dot-prefixed) or on the
/// default ignore list
pub fn is_ignored_name(name: &str) -> bool {
    name.starts_with('.') || DEFAULT_IGNORE.iter().any(|&ignored| ignored == name)
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// List the direct file children of a directory, sorted by name.
///
/// Returns a fresh vector on every call so callers (and tests) can
/// enumerate repeatedly without exhaustion effects.
pub fn list_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    list_children(dir, false)
}

/// List the direct sub-directories of a directory, sorted by name
pub fn list_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    list_children(dir, true)
}

fn list_children(dir: &Path, want_dirs: bool) -> io::Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            e.into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk error"))
        })?;
        if entry.file_type().is_dir() != want_dirs {
            continue;
        }
        if is_ignored_name(&entry_name(entry.path())) {
            continue;
        }
        children.push(entry.path().to_path_buf());
    }
    children.sort();
    Ok(children)
}

/// Title-case a string: first letter of each whitespace-separated word
/// uppercased, the rest lowercased. Word separation is preserved as-is,
/// so irregular spacing survives the transformation and is caught by its
/// own rule instead.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Count artist and album folders for progress tracking
pub fn count_folders(root: &Path) -> io::Result<u64> {
    let mut count = 0;
    for artist in list_dirs(root)? {
        count += 1;
        count += list_dirs(&artist).map(|albums| albums.len() as u64).unwrap_or(0);
    }
    Ok(count)
}
