/*!
 * Muso - Audit a music collection against layout and naming conventions
 *
 * This library walks a music library laid out as root/artist/album/track
 * and reports, per artist and per album, which organizational conventions
 * are violated. It never mutates the filesystem.
 */

pub mod classify;
pub mod config;
pub mod error;
pub mod report;
pub mod rules;
pub mod track;
pub mod types;
pub mod utils;
pub mod validate;
pub mod walker;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use classify::Classifier;
pub use config::{Config, OutputFormat};
pub use error::{MusoError, Result};
pub use report::Reporter;
pub use rules::RuleSet;
pub use track::TrackNameValidator;
pub use types::{
    AlbumReport, AlbumRule, AlbumStatus, ArtistReport, ArtistRule, ArtistStatus, AuditCounts,
    AuditReport, Category, Entry, EntryKind, FolderAudit, FolderKind, FolderStatus,
};
pub use validate::Validator;
pub use walker::CollectionWalker;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
