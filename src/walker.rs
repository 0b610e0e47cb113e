/*!
 * Collection walking
 *
 * Builds the two-level artist -> albums listing and drives the validators
 * over it. The walk is flat by design: artists at depth one, albums at
 * depth two, nothing deeper. Artist validation is parallelized with rayon;
 * ordered collection keeps the report deterministic.
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::types::{AlbumReport, ArtistReport, AuditCounts, AuditReport, FolderAudit};
use crate::utils::list_dirs;
use crate::validate::Validator;

/// Walks a library root and produces the audit report
pub struct CollectionWalker {
    config: Config,
    validator: Validator,
    progress: Arc<ProgressBar>,
}

impl CollectionWalker {
    /// Create a new walker for one audit run
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Result<Self> {
        let validator = Validator::new(&config)?;
        Ok(Self {
            config,
            validator,
            progress,
        })
    }

    /// Audit the whole library.
    ///
    /// An unreadable root is fatal and propagates; unreadable artist or
    /// album folders are recorded in the report and the walk continues.
    pub fn audit(&self) -> Result<AuditReport> {
        let start = Instant::now();
        let root = fs::canonicalize(&self.config.library_root)?;

        let artist_dirs = list_dirs(&root)
            .map_err(|e| crate::error!(Walk, "cannot list library root {}: {}", root.display(), e))?;

        let artists: Vec<ArtistReport> = artist_dirs
            .par_iter()
            .map(|dir| self.audit_artist(dir))
            .collect();

        let counts = tally(&artists);

        Ok(AuditReport {
            root,
            artists,
            counts,
            duration: start.elapsed(),
        })
    }

    /// Audit one artist folder and all of its albums
    fn audit_artist(&self, path: &Path) -> ArtistReport {
        let name = folder_name(path);
        self.progress.inc(1);
        self.progress.set_message(name.clone());

        let status = match self.validator.validate_artist(path) {
            Ok(status) => FolderAudit::Audited(status),
            Err(e) => {
                eprintln!("Error reading artist folder {}: {}", path.display(), e);
                return ArtistReport {
                    name,
                    status: FolderAudit::Unreadable(e.to_string()),
                    albums: Vec::new(),
                };
            }
        };

        let albums = match list_dirs(path) {
            Ok(album_dirs) => album_dirs
                .iter()
                .map(|dir| self.audit_album(dir))
                .collect(),
            Err(e) => {
                eprintln!("Error listing albums under {}: {}", path.display(), e);
                return ArtistReport {
                    name,
                    status: FolderAudit::Unreadable(e.to_string()),
                    albums: Vec::new(),
                };
            }
        };

        ArtistReport {
            name,
            status,
            albums,
        }
    }

    /// Audit one album folder
    fn audit_album(&self, path: &Path) -> AlbumReport {
        self.progress.inc(1);
        let name = folder_name(path);

        let status = match self.validator.validate_album(path) {
            Ok(status) => FolderAudit::Audited(status),
            Err(e) => {
                eprintln!("Error reading album folder {}: {}", path.display(), e);
                FolderAudit::Unreadable(e.to_string())
            }
        };

        AlbumReport { name, status }
    }
}

fn folder_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Accumulate the report counters
fn tally(artists: &[ArtistReport]) -> AuditCounts {
    let mut counts = AuditCounts {
        artists_scanned: artists.len(),
        ..AuditCounts::default()
    };

    for artist in artists {
        if matches!(artist.status, FolderAudit::Unreadable(_)) {
            counts.unreadable += 1;
        }
        for album in &artist.albums {
            counts.albums_scanned += 1;
            match &album.status {
                FolderAudit::Audited(status) if !status.ok() => counts.albums_failing += 1,
                FolderAudit::Unreadable(_) => counts.unreadable += 1,
                _ => {}
            }
        }
    }

    counts
}
