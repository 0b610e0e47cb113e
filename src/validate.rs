/*!
 * Album and artist folder validation
 *
 * Combines the classifier, the folder naming rules, and the track filename
 * validator into per-folder statuses. Validation is a pure function of the
 * current filesystem content; a non-directory target yields the all-false
 * default status instead of an error.
 */

use std::io;
use std::path::Path;

use crate::classify::{is_folder_art, Classifier};
use crate::config::Config;
use crate::error::Result;
use crate::rules::RuleSet;
use crate::track::TrackNameValidator;
use crate::types::{
    AlbumStatus, ArtistStatus, Category, Entry, EntryKind, FolderKind, FolderStatus,
};
use crate::utils::{list_dirs, list_files};

/// Folder validator for one audit run
#[derive(Debug, Clone)]
pub struct Validator {
    classifier: Classifier,
    rules: RuleSet,
    tracks: TrackNameValidator,
}

impl Validator {
    /// Build a validator from the run configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new(&config.extra_ignorable),
            rules: RuleSet::new()?,
            tracks: TrackNameValidator::new(config.verify_audio),
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Validate a folder according to its structural kind
    pub fn validate_folder(&self, path: &Path, kind: FolderKind) -> io::Result<FolderStatus> {
        match kind {
            FolderKind::Artist => self.validate_artist(path).map(FolderStatus::Artist),
            FolderKind::Album => self.validate_album(path).map(FolderStatus::Album),
        }
    }

    /// Derive the direct children of a folder as classified entries.
    ///
    /// Re-derived on every call; nothing is cached between runs.
    fn entries(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for path in list_dirs(dir)? {
            entries.push(Entry {
                name: segment_name(&path),
                kind: EntryKind::Directory,
                category: None,
                path,
            });
        }
        for path in list_files(dir)? {
            entries.push(Entry {
                name: segment_name(&path),
                kind: EntryKind::File,
                category: Some(self.classifier.classify(&path)),
                path,
            });
        }
        Ok(entries)
    }

    /// Validate an album folder.
    ///
    /// Only direct file children are considered; sub-directories are
    /// ignored since an album folder is expected to be flat. Directory
    /// listing errors propagate to the caller, which records the folder
    /// as unreadable.
    pub fn validate_album(&self, path: &Path) -> io::Result<AlbumStatus> {
        if !path.is_dir() {
            return Ok(AlbumStatus::default());
        }

        let mut status = AlbumStatus {
            only_contains_music: true,
            music_consistent: true,
            ..AlbumStatus::default()
        };

        for entry in self.entries(path)? {
            match entry.category {
                Some(Category::Music) => {
                    if !self.tracks.validate(&entry.path) {
                        // One bad track fails the whole album
                        status.music_consistent = false;
                    }
                }
                Some(Category::Image) => {
                    status.has_album_art = true;
                    if is_folder_art(&entry.name) {
                        status.has_folder_art = true;
                    }
                }
                Some(Category::Ignorable) => {}
                Some(Category::Other) => status.only_contains_music = false,
                // Sub-directories are not the album validator's concern
                None => {}
            }
        }

        let path_str = path.to_string_lossy();
        status.folder_has_date = self.rules.has_date_marker(&path_str);
        status.folder_has_cd = self.rules.has_disc_marker(&path_str);
        status.folder_has_spaces = self.rules.has_irregular_spacing(&path_str);
        status.folder_titlecase = self.rules.is_titlecased(&path_str);

        Ok(status)
    }

    /// Validate an artist folder.
    ///
    /// Direct children only; album folders are validated separately by
    /// the walker, not recursed into here.
    pub fn validate_artist(&self, path: &Path) -> io::Result<ArtistStatus> {
        if !path.is_dir() {
            return Ok(ArtistStatus::default());
        }

        let mut status = ArtistStatus {
            only_contains_folders: true,
            ..ArtistStatus::default()
        };

        for entry in self.entries(path)? {
            match entry.category {
                Some(Category::Image) => {
                    status.has_art = true;
                    if is_folder_art(&entry.name) {
                        status.has_folder_art = true;
                    }
                }
                Some(Category::Ignorable) | None => {}
                // Any flat file that isn't art or ignorable is a stray
                Some(Category::Music) | Some(Category::Other) => {
                    status.only_contains_folders = false
                }
            }
        }

        Ok(status)
    }
}

fn segment_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
