/*!
 * Core types and data structures for the Muso audit engine
 */

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use strum::Display;

/// Content category of a single file, decided by extension lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Recognized audio file (mp3, flac, ogg, ...)
    Music,
    /// Recognized image file (cover art candidates)
    Image,
    /// Non-music file explicitly exempted from purity checks (cue, log, sfv)
    Ignorable,
    /// Anything the resolver cannot place
    Other,
}

/// Kind of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    /// Directory containing other entries
    Directory,
    /// Regular file
    File,
}

/// A filesystem object observed during an audit run.
///
/// Entries are re-derived on every run; nothing is cached across runs.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Final path segment
    pub name: String,
    /// Absolute path
    pub path: PathBuf,
    /// Directory or file
    pub kind: EntryKind,
    /// File category (None for directories)
    pub category: Option<Category>,
}

/// Structural position of a folder relative to the library root.
///
/// Depth 1 is an artist, depth 2 an album. The kind is never inferred
/// from folder content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FolderKind {
    Artist,
    Album,
}

impl FolderKind {
    /// Kind of a folder at the given depth below the library root, if
    /// the depth is inside the audited range
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(FolderKind::Artist),
            2 => Some(FolderKind::Album),
            _ => None,
        }
    }
}

/// Status produced by validating a folder of either kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FolderStatus {
    Artist(ArtistStatus),
    Album(AlbumStatus),
}

/// Names of the rules evaluated against an album folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum AlbumRule {
    OnlyContainsMusic,
    HasAlbumArt,
    MusicConsistent,
    FolderHasDate,
    FolderHasCd,
    FolderHasSpaces,
    FolderTitlecase,
}

/// Names of the rules evaluated against an artist folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum ArtistRule {
    OnlyContainsFolders,
    HasArt,
}

/// Rule outcomes for one album folder.
///
/// `Default` is the all-false status used when the audit target is not
/// a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlbumStatus {
    /// Every non-image, non-ignorable child classifies as music
    pub only_contains_music: bool,
    /// At least one image child is present
    pub has_album_art: bool,
    /// An image named folder.jpg/folder.jpeg specifically is present
    pub has_folder_art: bool,
    /// Every music child passes the track filename check
    pub music_consistent: bool,
    /// Path contains a parenthesized 2-4 digit group, e.g. "(1999)"
    pub folder_has_date: bool,
    /// Path contains a cd/disk marker
    pub folder_has_cd: bool,
    /// Path has leading, trailing, or doubled spaces
    pub folder_has_spaces: bool,
    /// Folder name equals its title-cased form
    pub folder_titlecase: bool,
}

impl AlbumStatus {
    /// Logical AND of all rules, with the negative rules inverted.
    ///
    /// Cover art must be the specifically-named folder art, not just
    /// any image.
    pub fn ok(&self) -> bool {
        self.has_folder_art
            && self.only_contains_music
            && self.music_consistent
            && !self.folder_has_date
            && !self.folder_has_cd
            && !self.folder_has_spaces
            && self.folder_titlecase
    }

    /// Per-rule outcomes, each reported as pass (true) or fail (false).
    ///
    /// The reported `has_album_art` rule tracks `has_folder_art`: only the
    /// designated folder art satisfies the cover-art convention, so that is
    /// what the report grades. The looser `has_album_art` field records
    /// that some image was present.
    pub fn rules(&self) -> Vec<(AlbumRule, bool)> {
        vec![
            (AlbumRule::OnlyContainsMusic, self.only_contains_music),
            (AlbumRule::HasAlbumArt, self.has_folder_art),
            (AlbumRule::MusicConsistent, self.music_consistent),
            (AlbumRule::FolderHasDate, !self.folder_has_date),
            (AlbumRule::FolderHasCd, !self.folder_has_cd),
            (AlbumRule::FolderHasSpaces, !self.folder_has_spaces),
            (AlbumRule::FolderTitlecase, self.folder_titlecase),
        ]
    }

    /// Names of the rules this folder fails
    pub fn failed_rules(&self) -> Vec<AlbumRule> {
        self.rules()
            .into_iter()
            .filter_map(|(rule, passed)| (!passed).then_some(rule))
            .collect()
    }
}

/// Rule outcomes for one artist folder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArtistStatus {
    /// Every non-image, non-ignorable child is a directory
    pub only_contains_folders: bool,
    /// At least one image child is present
    pub has_art: bool,
    /// An image named folder.jpg/folder.jpeg specifically is present
    pub has_folder_art: bool,
}

impl ArtistStatus {
    pub fn ok(&self) -> bool {
        self.has_folder_art && self.only_contains_folders
    }

    /// Names of the rules this folder fails
    pub fn failed_rules(&self) -> Vec<ArtistRule> {
        let mut failed = Vec::new();
        if !self.only_contains_folders {
            failed.push(ArtistRule::OnlyContainsFolders);
        }
        if !self.has_folder_art {
            failed.push(ArtistRule::HasArt);
        }
        failed
    }
}

/// Outcome of auditing one folder: a status, or a note that the folder
/// could not be listed. Unreadable folders are recorded rather than
/// silently dropped so the report stays complete.
#[derive(Debug, Clone, Serialize)]
pub enum FolderAudit<S> {
    Audited(S),
    Unreadable(String),
}

impl<S> FolderAudit<S> {
    pub fn as_audited(&self) -> Option<&S> {
        match self {
            FolderAudit::Audited(status) => Some(status),
            FolderAudit::Unreadable(_) => None,
        }
    }
}

/// Audit outcome for a single album folder
#[derive(Debug, Clone, Serialize)]
pub struct AlbumReport {
    /// Album folder name
    pub name: String,
    /// Rule outcomes, or the listing error
    pub status: FolderAudit<AlbumStatus>,
}

impl AlbumReport {
    pub fn ok(&self) -> bool {
        matches!(&self.status, FolderAudit::Audited(s) if s.ok())
    }
}

/// Audit outcome for a single artist folder and its albums
#[derive(Debug, Clone, Serialize)]
pub struct ArtistReport {
    /// Artist folder name
    pub name: String,
    /// Artist-level rule outcomes, or the listing error
    pub status: FolderAudit<ArtistStatus>,
    /// Album outcomes, ordered by album name
    pub albums: Vec<AlbumReport>,
}

impl ArtistReport {
    /// True when the artist folder and every album pass
    pub fn ok(&self) -> bool {
        matches!(&self.status, FolderAudit::Audited(s) if s.ok())
            && self.albums.iter().all(AlbumReport::ok)
    }

    /// Albums of this artist that fail or are unreadable
    pub fn failing_albums(&self) -> impl Iterator<Item = &AlbumReport> {
        self.albums.iter().filter(|album| !album.ok())
    }
}

/// Aggregate counters for one audit run
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AuditCounts {
    /// Artist folders visited
    pub artists_scanned: usize,
    /// Album folders visited
    pub albums_scanned: usize,
    /// Album folders failing at least one rule
    pub albums_failing: usize,
    /// Folders that could not be listed
    pub unreadable: usize,
}

/// Complete result of one audit run, ordered by artist then album name.
/// Produced once per run; no state carries over between runs.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Library root that was audited
    pub root: PathBuf,
    /// Per-artist outcomes
    pub artists: Vec<ArtistReport>,
    /// Aggregate counters
    pub counts: AuditCounts,
    /// Wall-clock time of the run
    #[serde(skip)]
    pub duration: Duration,
}
