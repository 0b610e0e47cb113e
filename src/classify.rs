/*!
 * File classification for the audit engine
 *
 * Maps each file to a coarse category by extension lookup. MIME resolution
 * is delegated to `mime_guess`; a closed set of known-ignorable extensions
 * (cue sheets, rip logs, checksum files) is checked first so those files
 * never count as violations of the folder-purity rules.
 */

use std::collections::HashSet;
use std::path::Path;

use crate::types::Category;

/// Extensions always treated as `Ignorable`
const IGNORABLE_EXTENSIONS: &[&str] = &["cue", "log", "sfv"];

/// Extension-based file classifier.
///
/// Constructed once per audit run from the configuration; immutable
/// afterwards. Classification consults extension metadata only and never
/// opens file contents.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Lower-cased extensions resolved to `Ignorable`
    ignorable: HashSet<String>,
}

impl Classifier {
    /// Create a classifier, extending the built-in ignorable set with
    /// custom extensions (lower-cased, leading dots stripped)
    pub fn new(extra_ignorable: &[String]) -> Self {
        let ignorable = IGNORABLE_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .chain(
                extra_ignorable
                    .iter()
                    .map(|ext| ext.trim_start_matches('.').to_lowercase()),
            )
            .collect();
        Self { ignorable }
    }

    /// Classify a file by its extension.
    ///
    /// An unresolvable extension degrades to `Other`; this never fails.
    pub fn classify(&self, path: &Path) -> Category {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if self.ignorable.contains(&ext) {
            return Category::Ignorable;
        }

        match mime_guess::from_path(path).first() {
            Some(mime) if mime.type_() == mime_guess::mime::AUDIO => Category::Music,
            Some(mime) if mime.type_() == mime_guess::mime::IMAGE => Category::Image,
            _ => Category::Other,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&[])
    }
}

/// Whether a file name is the designated cover art for a folder
/// (`folder.jpg` / `folder.jpeg`, case-insensitive)
pub fn is_folder_art(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == "folder.jpg" || lower == "folder.jpeg"
}
