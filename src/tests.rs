/*!
 * Tests for Muso functionality
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use crate::classify::{is_folder_art, Classifier};
use crate::config::{Config, OutputFormat};
use crate::rules::RuleSet;
use crate::track::TrackNameValidator;
use crate::types::{Category, FolderKind, FolderStatus};
use crate::utils::{is_ignored_name, list_dirs, list_files, title_case};
use crate::validate::Validator;

fn test_config(root: &Path) -> Config {
    Config {
        library_root: root.to_path_buf(),
        extra_ignorable: vec![],
        num_threads: 1,
        verify_audio: false,
        show_all: false,
        format: OutputFormat::Table,
    }
}

fn touch(path: &Path) -> io::Result<()> {
    File::create(path).map(|_| ())
}

// Helper to build a conforming album folder under an artist directory
fn setup_good_album(root: &Path) -> io::Result<PathBuf> {
    let album = root.join("Daft Punk").join("Discovery");
    fs::create_dir_all(&album)?;
    touch(&album.join("Daft Punk - Discovery - 1.01 - One More Time.mp3"))?;
    touch(&album.join("Daft Punk - Discovery - 1.02 - Aerodynamic.mp3"))?;
    touch(&album.join("folder.jpg"))?;
    Ok(album)
}

// --- Classifier ---

#[test]
fn test_classify_audio_extensions() {
    let classifier = Classifier::default();
    for name in ["track.mp3", "track.flac", "track.ogg", "track.MP3"] {
        assert_eq!(
            classifier.classify(Path::new(name)),
            Category::Music,
            "{name} should classify as music"
        );
    }
}

#[test]
fn test_classify_image_extensions() {
    let classifier = Classifier::default();
    for name in ["folder.jpg", "folder.jpeg", "cover.png", "scan.gif"] {
        assert_eq!(
            classifier.classify(Path::new(name)),
            Category::Image,
            "{name} should classify as an image"
        );
    }
}

#[test]
fn test_classify_ignorable_extensions() {
    let classifier = Classifier::default();
    for name in ["album.cue", "rip.log", "checksums.sfv", "RIP.LOG"] {
        assert_eq!(
            classifier.classify(Path::new(name)),
            Category::Ignorable,
            "{name} should classify as ignorable"
        );
    }
}

#[test]
fn test_classify_unknown_degrades_to_other() {
    let classifier = Classifier::default();
    assert_eq!(classifier.classify(Path::new("notes.txt")), Category::Other);
    assert_eq!(classifier.classify(Path::new("mystery.xyzzy")), Category::Other);
    assert_eq!(classifier.classify(Path::new("no_extension")), Category::Other);
}

#[test]
fn test_classify_custom_ignorable_registration() {
    let classifier = Classifier::new(&[".m3u".to_string(), "NFO".to_string()]);
    assert_eq!(classifier.classify(Path::new("playlist.m3u")), Category::Ignorable);
    assert_eq!(classifier.classify(Path::new("release.nfo")), Category::Ignorable);
    // The built-in set is still present
    assert_eq!(classifier.classify(Path::new("album.cue")), Category::Ignorable);
}

#[test]
fn test_folder_art_names() {
    assert!(is_folder_art("folder.jpg"));
    assert!(is_folder_art("folder.jpeg"));
    assert!(is_folder_art("FOLDER.JPG"));
    assert!(!is_folder_art("cover.jpg"));
    assert!(!is_folder_art("folder.png"));
}

// --- Folder name rules ---

#[test]
fn test_date_marker() {
    let rules = RuleSet::new().unwrap();
    assert!(rules.has_date_marker("Pink Floyd (1973)"));
    assert!(rules.has_date_marker("Best Of (99)"));
    assert!(!rules.has_date_marker("Pink Floyd"));
    assert!(!rules.has_date_marker("Blink (182 Songs)"));
}

#[test]
fn test_disc_marker() {
    let rules = RuleSet::new().unwrap();
    assert!(rules.has_disc_marker("Album [CD 1]"));
    assert!(rules.has_disc_marker("album [cd 1]"));
    assert!(rules.has_disc_marker("Album cd2"));
    assert!(rules.has_disc_marker("Live (Disk 2)"));
    assert!(!rules.has_disc_marker("Creedence Clearwater Revival"));
    assert!(!rules.has_disc_marker("Discovery"));
}

#[test]
fn test_irregular_spacing() {
    let rules = RuleSet::new().unwrap();
    assert!(rules.has_irregular_spacing(" Album"));
    assert!(rules.has_irregular_spacing("Album "));
    assert!(rules.has_irregular_spacing("Al  bum"));
    assert!(!rules.has_irregular_spacing("Album"));
    assert!(!rules.has_irregular_spacing("The Dark Side of the Moon"));
}

#[test]
fn test_titlecase_rule() {
    let rules = RuleSet::new().unwrap();
    assert!(rules.is_titlecased("/music/Daft Punk/Discovery"));
    assert!(rules.is_titlecased("Homework"));
    assert!(!rules.is_titlecased("/music/Daft Punk/discovery"));
    assert!(!rules.is_titlecased("/music/Daft Punk/DISCOVERY"));
}

#[test]
fn test_titlecase_rule_extracts_final_segment() {
    let rules = RuleSet::new().unwrap();
    // A trailing separator still resolves to the folder's own name
    assert!(rules.is_titlecased("/music/Daft Punk/Discovery/"));
    assert!(!rules.is_titlecased("/music/DAFT PUNK/discovery/"));
}

#[test]
fn test_title_case_transform() {
    assert_eq!(title_case("one more time"), "One More Time");
    assert_eq!(title_case("ONE MORE TIME"), "One More Time");
    assert_eq!(title_case("Discovery"), "Discovery");
    // Spacing is preserved so the spacing rule catches it separately
    assert_eq!(title_case("two  spaces"), "Two  Spaces");
    assert_eq!(title_case(""), "");
}

// --- Track filename validator ---

#[test]
fn test_track_regular_scheme() {
    let tracks = TrackNameValidator::default();
    let path = Path::new("/music/Daft Punk/Discovery/Daft Punk - Discovery - 1.03 - One More Time.mp3");
    assert!(tracks.validate(path));
}

#[test]
fn test_track_compilation_scheme() {
    let tracks = TrackNameValidator::default();
    let path = Path::new("/music/Daft Punk/Discovery/Discovery - 1.03 - Daft Punk - One More Time.mp3");
    assert!(tracks.validate(path));
}

#[test]
fn test_track_case_insensitive_match() {
    let tracks = TrackNameValidator::default();
    let path = Path::new("/music/Daft Punk/Discovery/daft punk - discovery - 1.03 - one more time.mp3");
    assert!(tracks.validate(path));
}

#[test]
fn test_track_missing_structure_fails() {
    let tracks = TrackNameValidator::default();
    let path = Path::new("/music/Daft Punk/Discovery/One More Time.mp3");
    assert!(!tracks.validate(path));
}

#[test]
fn test_track_wrong_disc_track_group_fails() {
    let tracks = TrackNameValidator::default();
    let path = Path::new("/music/Daft Punk/Discovery/Daft Punk - Discovery - 103 - One More Time.mp3");
    assert!(!tracks.validate(path));
}

#[test]
fn test_track_malformed_path_fails_closed() {
    let tracks = TrackNameValidator::default();
    // Too shallow to carry artist and album segments
    assert!(!tracks.validate(Path::new("/One More Time.mp3")));
}

#[test]
fn test_track_illegal_chars_match_as_wildcards() {
    let tracks = TrackNameValidator::default();
    // Folder name carries a "." where the tag-derived filename has a ":"
    let path = Path::new("/music/Mew/Frengers. Not Quite/Mew - Frengers: Not Quite - 1.01 - Am I Wry? No.mp3");
    assert!(tracks.validate(path));
}

#[test]
fn test_track_regex_metachars_in_names_are_literal() {
    let tracks = TrackNameValidator::default();
    let ok = Path::new("/music/Sigur Ros/( )/Sigur Ros - ( ) - 1.01 - Untitled.mp3");
    assert!(tracks.validate(ok));
    let other_album = Path::new("/music/Sigur Ros/( )/Sigur Ros - Takk - 1.01 - Untitled.mp3");
    assert!(!tracks.validate(other_album));
}

#[test]
fn test_verify_audio_probe_rejects_non_audio() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = temp_dir.path().join("Daft Punk").join("Discovery");
    fs::create_dir_all(&album)?;
    let track = album.join("Daft Punk - Discovery - 1.01 - One More Time.mp3");
    let mut file = File::create(&track)?;
    file.write_all(b"this is not audio data")?;

    // Filename matching alone is authoritative by default
    assert!(TrackNameValidator::new(false).validate(&track));
    // With verification on, a file that does not parse as audio fails
    assert!(!TrackNameValidator::new(true).validate(&track));
    Ok(())
}

// --- Album validator ---

#[test]
fn test_album_conforming_passes() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;

    assert!(status.only_contains_music);
    assert!(status.has_album_art);
    assert!(status.has_folder_art);
    assert!(status.music_consistent);
    assert!(!status.folder_has_date);
    assert!(!status.folder_has_cd);
    assert!(!status.folder_has_spaces);
    assert!(status.folder_titlecase);
    assert!(status.ok());
    Ok(())
}

#[test]
fn test_album_missing_art_fails_only_art_rule() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;
    fs::remove_file(album.join("folder.jpg"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;

    assert!(!status.ok());
    assert_eq!(
        status.failed_rules(),
        vec![crate::types::AlbumRule::HasAlbumArt]
    );
    Ok(())
}

#[test]
fn test_album_non_cover_image_counts_as_art_but_not_ok() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;
    fs::remove_file(album.join("folder.jpg"))?;
    touch(&album.join("back.jpg"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;

    assert!(status.has_album_art);
    assert!(!status.has_folder_art);
    assert!(!status.ok());
    // The reported cover-art rule grades the designated folder art, so
    // it fails here even though an image is present
    assert_eq!(
        status.failed_rules(),
        vec![crate::types::AlbumRule::HasAlbumArt]
    );
    Ok(())
}

#[test]
fn test_album_stray_file_breaks_purity() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;
    touch(&album.join("lyrics.txt"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;

    assert!(!status.only_contains_music);
    assert!(!status.ok());
    Ok(())
}

#[test]
fn test_album_ignorable_files_do_not_break_purity() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;
    touch(&album.join("Discovery.cue"))?;
    touch(&album.join("rip.log"))?;
    touch(&album.join("checksums.sfv"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;

    assert!(status.only_contains_music);
    assert!(status.ok());
    Ok(())
}

#[test]
fn test_album_one_bad_track_fails_whole_album() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;
    touch(&album.join("One More Time.mp3"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;

    assert!(!status.music_consistent);
    assert!(!status.ok());
    Ok(())
}

#[test]
fn test_album_subdirectories_are_ignored() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;
    fs::create_dir(album.join("Artwork"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;

    assert!(status.ok());
    Ok(())
}

#[test]
fn test_album_name_rules_applied() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = temp_dir.path().join("Daft Punk").join("Discovery (2001) [CD 1]");
    fs::create_dir_all(&album)?;
    touch(&album.join("folder.jpg"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;

    assert!(status.folder_has_date);
    assert!(status.folder_has_cd);
    assert!(!status.ok());
    Ok(())
}

#[test]
fn test_album_non_directory_yields_default_status() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let file = temp_dir.path().join("not_a_dir.mp3");
    touch(&file)?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&file)?;

    assert_eq!(status, crate::types::AlbumStatus::default());
    assert!(!status.ok());
    Ok(())
}

#[test]
fn test_album_validation_is_idempotent() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let first = validator.validate_album(&album)?;
    let second = validator.validate_album(&album)?;

    assert_eq!(first, second);
    Ok(())
}

// --- Artist validator ---

#[test]
fn test_artist_conforming_passes() -> io::Result<()> {
    let temp_dir = tempdir()?;
    setup_good_album(temp_dir.path())?;
    let artist = temp_dir.path().join("Daft Punk");
    touch(&artist.join("folder.jpg"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_artist(&artist)?;

    assert!(status.only_contains_folders);
    assert!(status.has_art);
    assert!(status.has_folder_art);
    assert!(status.ok());
    Ok(())
}

#[test]
fn test_artist_stray_file_fails() -> io::Result<()> {
    let temp_dir = tempdir()?;
    setup_good_album(temp_dir.path())?;
    let artist = temp_dir.path().join("Daft Punk");
    touch(&artist.join("folder.jpg"))?;
    touch(&artist.join("stray.mp3"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_artist(&artist)?;

    assert!(!status.only_contains_folders);
    assert!(!status.ok());
    Ok(())
}

#[test]
fn test_artist_non_cover_image_is_not_enough() -> io::Result<()> {
    let temp_dir = tempdir()?;
    setup_good_album(temp_dir.path())?;
    let artist = temp_dir.path().join("Daft Punk");
    touch(&artist.join("band.png"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_artist(&artist)?;

    assert!(status.has_art);
    assert!(!status.has_folder_art);
    assert!(!status.ok());
    Ok(())
}

#[test]
fn test_validate_folder_dispatches_on_kind() -> io::Result<()> {
    let temp_dir = tempdir()?;
    setup_good_album(temp_dir.path())?;
    let artist = temp_dir.path().join("Daft Punk");
    touch(&artist.join("folder.jpg"))?;

    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();

    let kind = FolderKind::from_depth(1).unwrap();
    match validator.validate_folder(&artist, kind)? {
        FolderStatus::Artist(status) => assert!(status.ok()),
        FolderStatus::Album(_) => panic!("depth 1 must validate as an artist"),
    }

    let kind = FolderKind::from_depth(2).unwrap();
    match validator.validate_folder(&artist.join("Discovery"), kind)? {
        FolderStatus::Album(status) => assert!(status.ok()),
        FolderStatus::Artist(_) => panic!("depth 2 must validate as an album"),
    }

    assert_eq!(FolderKind::from_depth(3), None);
    Ok(())
}

// --- Listing helpers ---

#[test]
fn test_listing_is_restartable_and_sorted() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;

    let first = list_files(&album)?;
    let second = list_files(&album)?;
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);

    let dirs = list_dirs(temp_dir.path())?;
    assert_eq!(dirs.len(), 1);
    Ok(())
}

#[test]
fn test_hidden_and_os_litter_skipped() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let album = setup_good_album(temp_dir.path())?;
    touch(&album.join(".DS_Store"))?;
    touch(&album.join("Thumbs.db"))?;
    fs::create_dir(temp_dir.path().join(".hidden"))?;

    assert!(is_ignored_name(".DS_Store"));
    assert!(is_ignored_name(".hidden"));
    assert!(!is_ignored_name("Daft Punk"));

    // Litter must not trip the purity rule either
    let validator = Validator::new(&test_config(temp_dir.path())).unwrap();
    let status = validator.validate_album(&album)?;
    assert!(status.only_contains_music);

    let dirs = list_dirs(temp_dir.path())?;
    assert_eq!(dirs.len(), 1, "hidden directories are not listed");
    Ok(())
}

// --- Configuration ---

#[test]
fn test_config_rejects_missing_root() {
    let config = test_config(Path::new("/nonexistent/music/library"));
    assert!(config.validate().is_err());
}

#[test]
fn test_config_accepts_existing_root() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let config = test_config(temp_dir.path());
    assert!(config.validate().is_ok());
    Ok(())
}
