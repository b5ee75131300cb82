use crate::error::CheckError;
use crate::models::filesystem::FilesystemRecord;
use crate::thresholds::SizeTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ok       => "OK",
            Severity::Warning  => "Warning",
            Severity::Critical => "Critical",
        }
    }

    /// True for anything that should be shown outside of debug mode.
    pub fn is_alert(&self) -> bool {
        *self != Severity::Ok
    }
}

/// The outcome of checking one filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub mount_point:    String,
    pub severity:       Severity,
    pub percent_free:   u8,
    /// `label=value;warn;crit;min;max` perf-data token for this filesystem.
    pub graph_fragment: String,
}

/// Parse a percent-used value, accepting only plain digits in `0..=100`.
pub fn parse_percent(record: &FilesystemRecord) -> Result<u8, CheckError> {
    let raw = record.percent_used.as_str();
    let malformed = || CheckError::MalformedPercent {
        device: record.device.clone(),
        value:  raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    match raw.parse::<u8>() {
        Ok(pct) if pct <= 100 => Ok(pct),
        _                     => Err(malformed()),
    }
}

/// Quote a perf-data label that would otherwise split the token: labels
/// holding a space, `=` or `'` are wrapped in single quotes, with `'` doubled.
pub fn perfdata_label(label: &str) -> String {
    if label.contains([' ', '=', '\'']) {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}

/// Classify one filesystem against the thresholds of its size tier.
pub fn classify(record: &FilesystemRecord) -> Result<Verdict, CheckError> {
    let percent_used = parse_percent(record)?;
    let percent_free = 100 - percent_used;

    let tier = SizeTier::for_size(record.size_mb);
    let thr  = tier.thresholds();

    let severity = if percent_free <= thr.crit_percent_free {
        Severity::Critical
    } else if percent_free <= thr.warn_percent_free {
        Severity::Warning
    } else {
        Severity::Ok
    };

    let graph_warn = thr.graph_warn_mb(record.size_mb);
    let graph_crit = thr.graph_crit_mb(record.size_mb);
    let graph_fragment = format!(
        "{}={}MB;{};{};0;{}",
        perfdata_label(&record.mount_point), record.used_mb, graph_warn, graph_crit, record.size_mb
    );

    tracing::debug!(
        device = record.short_device(),
        mount = %record.mount_point,
        tier = tier.label(),
        percent_free,
        severity = severity.label(),
        "classified filesystem"
    );

    Ok(Verdict {
        mount_point: record.mount_point.clone(),
        severity,
        percent_free,
        graph_fragment,
    })
}

/// Classify every record in order, stopping at the first malformed one.
pub fn classify_all(records: &[FilesystemRecord]) -> Result<Vec<Verdict>, CheckError> {
    records.iter().map(classify).collect()
}
