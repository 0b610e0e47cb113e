/*!
 * Configuration handling for Muso
 */

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;

/// Output format for the audit report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console tables
    Table,
    /// Machine-readable JSON on stdout
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// Command-line arguments for Muso
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "muso",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audit a music collection against layout and naming conventions",
    long_about = "Audits a music library laid out as root/artist/album/track and reports, \
per artist and per album, which organizational conventions are violated. The library is \
never modified."
)]
pub struct Args {
    /// Library root to audit (defaults to the platform music directory)
    pub library_root: Option<String>,

    /// Comma-separated extra file extensions to treat as ignorable
    #[clap(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Number of threads to use for validation
    #[clap(long, default_value = "4")]
    pub threads: usize,

    /// Additionally verify that each track parses as audio
    #[clap(long)]
    pub verify_audio: bool,

    /// Include passing albums in the report
    #[clap(long)]
    pub all: bool,

    /// Report output format
    #[clap(long, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration, constructed once per run and immutable
/// afterwards
#[derive(Clone, Debug)]
pub struct Config {
    /// Library root to audit
    pub library_root: PathBuf,

    /// Extra extensions registered as ignorable
    pub extra_ignorable: Vec<String>,

    /// Number of threads to use for validation
    pub num_threads: usize,

    /// Whether to probe each track as audio
    pub verify_audio: bool,

    /// Whether to include passing albums in the report
    pub show_all: bool,

    /// Report output format
    pub format: OutputFormat,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            library_root: args
                .library_root
                .map(PathBuf::from)
                .unwrap_or_else(default_library_root),
            extra_ignorable: args.ignore,
            num_threads: args.threads,
            verify_audio: args.verify_audio,
            show_all: args.all,
            format: args.format,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.library_root.exists(),
            Config,
            "Library root not found: {}",
            self.library_root.display()
        );
        ensure!(
            self.library_root.is_dir(),
            Config,
            "Library root is not a directory: {}",
            self.library_root.display()
        );
        ensure!(self.num_threads > 0, Config, "Thread count must be non-zero");
        Ok(())
    }
}

/// The platform music directory, falling back to ~/Music
fn default_library_root() -> PathBuf {
    dirs::audio_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Music")))
        .unwrap_or_else(|| PathBuf::from("."))
}
