use crate::collectors::is_storage_device;
use crate::models::filesystem::FilesystemRecord;
use anyhow::{Context, Result};
use std::collections::HashSet;

const MIB: u64 = 1_048_576;

/// Build records from `/proc/mounts` and `statvfs(2)` without running `df`.
///
/// Percent used is rounded up over the space available to unprivileged
/// users, the same figure `df` prints in its capacity column.
pub fn read_filesystems() -> Result<Vec<FilesystemRecord>> {
    let content = std::fs::read_to_string("/proc/mounts").context("reading /proc/mounts")?;
    let mut seen = HashSet::new();
    let mut out  = Vec::new();

    for (device, mount) in parse_mounts(&content) {
        if !is_storage_device(&device) { continue; }
        if seen.contains(&mount) { continue; }

        match statvfs_for(&device, &mount) {
            Ok(Some(rec)) => {
                seen.insert(mount);
                out.push(rec);
            }
            Ok(None) => tracing::debug!(device = %device, mount = %mount, "skipping zero-size filesystem"),
            Err(e)   => tracing::warn!(device = %device, mount = %mount, "statvfs failed: {:#}", e),
        }
    }
    Ok(out)
}

/// (device, mount point) pairs, with the octal escapes of `/proc/mounts` decoded.
fn parse_mounts(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let device = fields.next()?;
            let mount  = fields.next()?;
            Some((unescape(device), unescape(mount)))
        })
        .collect()
}

fn unescape(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let octal = bytes.get(i + 1..i + 4)
            .filter(|d| bytes[i] == b'\\' && d.iter().all(|b| (b'0'..=b'7').contains(b)));
        if let Some(digits) = octal {
            let code = digits.iter().fold(0u32, |acc, d| acc * 8 + (d - b'0') as u32);
            if let Ok(b) = u8::try_from(code) {
                out.push(b);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn statvfs_for(device: &str, mount: &str) -> Result<Option<FilesystemRecord>> {
    use nix::sys::statvfs::statvfs;
    let stat = statvfs(mount)?;

    let frsize = stat.fragment_size() as u64;
    let blocks = stat.blocks() as u64;
    if blocks == 0 { return Ok(None); }

    let used  = blocks.saturating_sub(stat.blocks_free() as u64);
    let avail = stat.blocks_available() as u64;

    Ok(Some(FilesystemRecord {
        device:       device.to_string(),
        size_mb:      blocks * frsize / MIB,
        used_mb:      used * frsize / MIB,
        percent_used: percent_used(used, avail).to_string(),
        mount_point:  mount.to_string(),
    }))
}

fn percent_used(used: u64, avail: u64) -> u64 {
    let total = used + avail;
    if total == 0 { return 0; }
    (used * 100).div_ceil(total)
}
