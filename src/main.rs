/*!
 * Command-line interface for Muso
 */

use std::io;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;

use muso::config::{Args, Config};
use muso::error::Result;
use muso::report::Reporter;
use muso::utils::count_folders;
use muso::walker::CollectionWalker;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "muso", &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // Configure thread pool
    if let Err(e) = ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        eprintln!("Warning: Failed to set thread pool size: {}", e);
    }

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("🎧 Auditing");
    progress.set_message(format!("Library: {}", config.library_root.display()));

    // Count folders for progress tracking
    match count_folders(&config.library_root) {
        Ok(count) => progress.set_length(count),
        Err(e) => progress.set_message(format!("⚠️ Warning: Failed to count folders: {}", e)),
    }

    // Walk the collection
    let walker = CollectionWalker::new(config.clone(), Arc::new(progress.clone()))?;
    let report = walker.audit()?;

    // Clear the progress bar
    progress.finish_and_clear();

    // Render the report
    let reporter = Reporter::new(config.format, config.show_all);
    reporter.print_report(&report)?;

    Ok(())
}
