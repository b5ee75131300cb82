mod alerts;
mod collectors;
mod error;
mod logging;
mod models;
mod report;
mod status;
mod thresholds;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use error::CheckError;
use models::filesystem::FilesystemRecord;
use status::ExitStatus;

/// Check free space on every mounted disk against size-tiered thresholds.
///
/// Filesystems up to 200 GiB warn at 15% free and go critical at 10%; up to
/// ~1 TB at 10% and 5%; anything larger at 7% and 3%. Prints one status line
/// with performance data and exits 0 (OK), 1 (WARNING), 2 (CRITICAL),
/// 3 (no disks found, or the disk listing could not be read at all),
/// 4 (bad flag) or 5 (a disk's percent-used, size or used value is missing
/// or malformed).
#[derive(Parser, Debug)]
#[command(name = "diskcheck", version)]
struct Cli {
    /// Show the status of every filesystem, not just the alerting ones
    #[arg(short, long)]
    debug: bool,

    /// Read a captured `df -P -m` listing from FILE ("-" for stdin) instead of running df
    #[arg(short, long, value_name = "FILE", conflicts_with = "statvfs")]
    input: Option<String>,

    /// Read /proc/mounts and call statvfs directly instead of running df
    #[arg(long)]
    statvfs: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            flag_error_status(e.kind()).exit();
        }
    };
    logging::init();
    run(&cli).exit();
}

/// Help and version requests are successful runs; every other parse failure is a bad flag.
fn flag_error_status(kind: ErrorKind) -> ExitStatus {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Ok,
        _ => ExitStatus::InvalidFlag,
    }
}

fn run(cli: &Cli) -> ExitStatus {
    let records = match inventory(cli) {
        Ok(records) => records,
        Err(e) => {
            println!("UNKNOWN: {:#}", e);
            return match e.downcast_ref::<CheckError>() {
                Some(_) => ExitStatus::MalformedInput,
                None    => ExitStatus::NoFilesystems,
            };
        }
    };

    if records.is_empty() {
        println!("UNKNOWN: no matching filesystems found");
        return ExitStatus::NoFilesystems;
    }
    tracing::debug!(count = records.len(), "checking filesystems");

    let verdicts = match alerts::classify_all(&records) {
        Ok(verdicts) => verdicts,
        Err(e) => {
            println!("UNKNOWN: {}", e);
            return ExitStatus::MalformedInput;
        }
    };

    let result = report::aggregate(&verdicts, cli.debug);
    tracing::debug!(overall = result.overall.label(), perfdata = %result.graph_string, "check complete");
    println!("{}", result.output_line);
    result.exit_status
}

fn inventory(cli: &Cli) -> Result<Vec<FilesystemRecord>> {
    use collectors::{df, mounts};

    if cli.statvfs {
        return mounts::read_filesystems();
    }
    let listing = match &cli.input {
        Some(path) => df::read_listing(path)?,
        None       => df::run_df()?,
    };
    Ok(df::parse_listing(&listing)?)
}
