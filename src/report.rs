/*!
 * Reporting functionality for Muso
 *
 * Renders a finished `AuditReport` for the console using the tabled
 * library, or as JSON for machine consumption. Rendering lives entirely
 * here; the audit core never formats text.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::types::{AlbumReport, ArtistReport, AuditReport, FolderAudit};

/// Report generator for audit results
pub struct Reporter {
    format: OutputFormat,
    /// Also show passing albums
    show_all: bool,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: OutputFormat, show_all: bool) -> Self {
        Self { format, show_all }
    }

    /// Generate a report string from an audit run
    pub fn generate_report(&self, report: &AuditReport) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.generate_console_report(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &AuditReport) -> Result<()> {
        println!("{}", self.generate_report(report)?);
        Ok(())
    }

    // Render the per-artist sections followed by the run summary
    fn generate_console_report(&self, report: &AuditReport) -> String {
        let mut sections = Vec::new();

        for artist in &report.artists {
            if artist.ok() && !self.show_all {
                continue;
            }
            sections.push(self.create_artist_section(artist));
        }

        if sections.is_empty() {
            sections.push("✅  All artists and albums pass".to_string());
        }

        let summary = self.create_summary_table(report);
        format!("{}\n\n📊  AUDIT SUMMARY\n{}", sections.join("\n\n"), summary)
    }

    // One section per artist: artist-level findings plus an album table
    fn create_artist_section(&self, artist: &ArtistReport) -> String {
        let mut lines = vec![format!("🎵  [{}]", artist.name)];

        match &artist.status {
            FolderAudit::Audited(status) => {
                if !status.ok() {
                    let failed: Vec<String> = status
                        .failed_rules()
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    lines.push(format!("    artist folder fails: {}", failed.join(", ")));
                }
            }
            FolderAudit::Unreadable(reason) => {
                lines.push(format!("    unreadable: {}", reason));
            }
        }

        let albums: Vec<&AlbumReport> = if self.show_all {
            artist.albums.iter().collect()
        } else {
            artist.failing_albums().collect()
        };

        if !albums.is_empty() {
            lines.push(self.create_album_table(&albums));
        }

        lines.join("\n")
    }

    // Album table for one artist
    fn create_album_table(&self, albums: &[&AlbumReport]) -> String {
        #[derive(Tabled)]
        struct AlbumRow {
            #[tabled(rename = "Album")]
            name: String,

            #[tabled(rename = "Status")]
            status: String,

            #[tabled(rename = "Failed Rules")]
            failed: String,
        }

        let rows: Vec<AlbumRow> = albums
            .iter()
            .map(|album| match &album.status {
                FolderAudit::Audited(status) => AlbumRow {
                    name: album.name.clone(),
                    status: if status.ok() { "ok".into() } else { "fail".into() },
                    failed: status
                        .failed_rules()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                },
                FolderAudit::Unreadable(reason) => AlbumRow {
                    name: album.name.clone(),
                    status: "unreadable".into(),
                    failed: reason.clone(),
                },
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Run summary table
    fn create_summary_table(&self, report: &AuditReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Library Root".to_string(),
                value: report.root.display().to_string(),
            },
            SummaryRow {
                key: "⏱️ Audit Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "🎤 Artists Scanned".to_string(),
                value: report.counts.artists_scanned.to_string(),
            },
            SummaryRow {
                key: "💿 Albums Scanned".to_string(),
                value: report.counts.albums_scanned.to_string(),
            },
            SummaryRow {
                key: "❌ Albums Failing".to_string(),
                value: report.counts.albums_failing.to_string(),
            },
            SummaryRow {
                key: "⚠️ Unreadable Folders".to_string(),
                value: report.counts.unreadable.to_string(),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}
