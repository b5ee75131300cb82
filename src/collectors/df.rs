use crate::collectors::is_storage_device;
use crate::error::CheckError;
use crate::models::filesystem::FilesystemRecord;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::io::Read;
use std::process::Command;

/// Run `df -P -m` and return its raw listing.
pub fn run_df() -> Result<String> {
    let out = Command::new("df")
        .args(["-P", "-m"])
        .output()
        .context("df not found")?;

    // df exits 1 when a single mount is unreadable (stale NFS etc.) but still
    // prints every other line, so only an empty listing is fatal.
    if !out.status.success() {
        tracing::warn!(status = %out.status, stderr = %String::from_utf8_lossy(&out.stderr).trim(), "df reported errors");
    }
    if out.stdout.is_empty() {
        bail!("df produced no output ({})", out.status);
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Read a captured `df -P -m` listing from a file, or from stdin for `-`.
pub fn read_listing(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading df listing from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading df listing from {}", path))
    }
}

/// Parse a `df -P -m` listing into records for storage devices, in listing order.
///
/// Columns: device, size, used, available, capacity, mount point. The
/// capacity is kept as text so that a bad value can be reported against the
/// device it came from.
pub fn parse_listing(text: &str) -> Result<Vec<FilesystemRecord>, CheckError> {
    let mut seen = HashSet::new();
    let mut out  = Vec::new();

    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let device = match fields.first() {
            Some(&"Filesystem") | None => continue,
            Some(device)               => *device,
        };
        if !is_storage_device(device) { continue; }

        // A checked device without a capacity column cannot be evaluated.
        if fields.len() < 6 {
            return Err(CheckError::MalformedPercent {
                device: device.to_string(),
                value:  String::new(),
            });
        }

        let mount_point = fields[5..].join(" ");
        if !seen.insert(mount_point.clone()) {
            tracing::warn!(device, mount = %mount_point, "mount point listed twice, keeping the first");
            continue;
        }

        let size_mb = parse_mb(device, "size", fields[1])?;
        let used_mb = parse_mb(device, "used", fields[2])?;
        let capacity = fields[4];
        let percent_used = capacity.strip_suffix('%').unwrap_or(capacity);

        out.push(FilesystemRecord {
            device:       device.to_string(),
            size_mb,
            used_mb,
            percent_used: percent_used.to_string(),
            mount_point,
        });
    }
    Ok(out)
}

fn parse_mb(device: &str, column: &'static str, value: &str) -> Result<u64, CheckError> {
    value.parse().map_err(|_| CheckError::MalformedSize {
        device: device.to_string(),
        column,
        value:  value.to_string(),
    })
}
