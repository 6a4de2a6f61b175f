//! coldsweep - finds expired files on shared filesystems.
//!
//! Usage:
//!   coldsweep scan PATH     Classify top-level entries, write the scan file
//!   coldsweep owners FILE   Roll a scan file up by owner
//!   coldsweep sweep PATH    Scan, then quarantine expired entries
//!   coldsweep --help        Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use coldsweep_core::{CancelToken, ExpiryConfig, FoldPolicy};
use coldsweep_report::{collect_creator_information, collect_file_information};

#[derive(Parser)]
#[command(
    name = "coldsweep",
    version,
    about = "Finds and reports expired files on shared filesystems",
    long_about = "coldsweep inventories the top-level entries of a shared folder, \
                  classifies each as expired (no access, change, or modification \
                  inside the window) or not, and attributes expired data to the \
                  users who own it."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify top-level entries of a root and write the scan file
    Scan {
        /// Root folder whose immediate children are classified
        path: PathBuf,

        /// Days without activity before an entry counts as expired
        #[arg(short, long, default_value = "30")]
        days: u32,

        /// Output file (defaults to file_information_<timestamp>.jsonl)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop folding a directory at its first fresh child
        #[arg(long)]
        short_circuit: bool,
    },

    /// Group expired records from a scan file by owner
    Owners {
        /// Scan file produced by `coldsweep scan`
        scan_file: PathBuf,

        /// Output file (defaults to creator_information_<timestamp>.jsonl)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scan, then move expired entries through a quarantine holding area
    Sweep {
        /// Root folder to scan and clean
        path: PathBuf,

        /// Days without activity before an entry counts as expired
        #[arg(short, long, default_value = "30")]
        days: u32,

        /// Where to create the holding area (defaults to the scanned root)
        #[arg(long)]
        holding: Option<PathBuf>,

        /// List what would be removed without touching anything
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            path,
            days,
            output,
            short_circuit,
        } => run_scan(path, days, output, short_circuit),
        Command::Owners { scan_file, output } => run_owners(&scan_file, output),
        Command::Sweep {
            path,
            days,
            holding,
            dry_run,
        } => run_sweep(path, days, holding, dry_run),
    }
}

fn build_config(path: PathBuf, days: u32, short_circuit: bool) -> Result<ExpiryConfig> {
    let fold_policy = if short_circuit {
        FoldPolicy::ShortCircuit
    } else {
        FoldPolicy::Exhaustive
    };
    Ok(ExpiryConfig::builder()
        .root(path)
        .days_for_expiry(days)
        .fold_policy(fold_policy)
        .build()?)
}

/// Run a scan and print a summary.
fn run_scan(
    path: PathBuf,
    days: u32,
    output: Option<PathBuf>,
    short_circuit: bool,
) -> Result<()> {
    let config = build_config(path, days, short_circuit)?;

    eprintln!("Scanning {}...", config.root.display());
    let outcome = collect_file_information(&config, output.as_deref(), CancelToken::new())
        .context("Scan failed")?;

    let expired = outcome.records.iter().filter(|r| r.expired).count();
    println!(
        "{} entries scanned, {} expired, {} skipped",
        outcome.records.len(),
        expired,
        outcome.skipped
    );
    println!("Report written to {}", outcome.report_path.display());
    Ok(())
}

/// Roll a scan file up by owner and print a summary.
fn run_owners(scan_file: &std::path::Path, output: Option<PathBuf>) -> Result<()> {
    let outcome = collect_creator_information(scan_file, output.as_deref())
        .context("Owner rollup failed")?;

    for aggregate in outcome.owners.values() {
        println!(
            "{} (uid {}): {} expired path(s)",
            aggregate.username,
            aggregate.uid,
            aggregate.paths.len()
        );
    }
    println!("Report written to {}", outcome.report_path.display());
    Ok(())
}

/// Scan, then quarantine everything expired.
fn run_sweep(
    path: PathBuf,
    days: u32,
    holding: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let config = build_config(path, days, false)?;

    eprintln!("Scanning {}...", config.root.display());
    let outcome =
        collect_file_information(&config, None, CancelToken::new()).context("Scan failed")?;
    let expired = outcome.expired_paths();

    if dry_run {
        for path in &expired {
            println!("would remove {}", path.display());
        }
        println!(
            "{} of {} entries expired",
            expired.len(),
            outcome.records.len()
        );
        return Ok(());
    }

    if expired.is_empty() {
        println!("Nothing expired under {}", config.root.display());
        return Ok(());
    }

    let base = holding.unwrap_or_else(|| config.root.clone());
    let summary = coldsweep_ops::sweep(&expired, &base).context("Sweep failed")?;

    println!("{} entries removed", summary.moved);
    for failure in &summary.failures {
        eprintln!(
            "left in place: {} ({})",
            failure.path.display(),
            failure.message
        );
    }
    Ok(())
}
