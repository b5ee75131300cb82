use crate::alerts::{Severity, Verdict};
use crate::status::ExitStatus;

/// Status text used when nothing is alerting and debug mode is off.
pub const ALL_OK_TEXT: &str = "Disks OK";

/// Everything the check prints and exits with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub overall:      Severity,
    /// Status text plus `| graph string`, without a trailing newline.
    pub output_line:  String,
    pub graph_string: String,
    pub exit_status:  ExitStatus,
}

/// Render one verdict: "Critical: 4% left on /data".
pub fn render(verdict: &Verdict) -> String {
    format!(
        "{}: {}% left on {}",
        verdict.severity.label(),
        verdict.percent_free,
        verdict.mount_point
    )
}

/// Reduce the per-filesystem verdicts to one result.
pub fn aggregate(verdicts: &[Verdict], debug: bool) -> RunResult {
    let overall = verdicts
        .iter()
        .map(|v| v.severity)
        .max()
        .unwrap_or(Severity::Ok);

    let graph_string = verdicts
        .iter()
        .map(|v| v.graph_fragment.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let status_text = if debug {
        join_rendered(verdicts.iter())
    } else if overall.is_alert() {
        join_rendered(verdicts.iter().filter(|v| v.severity.is_alert()))
    } else {
        ALL_OK_TEXT.to_string()
    };

    RunResult {
        overall,
        output_line: format!("{} | {}", status_text, graph_string),
        graph_string,
        exit_status: ExitStatus::from(overall),
    }
}

fn join_rendered<'a>(verdicts: impl Iterator<Item = &'a Verdict>) -> String {
    verdicts.map(render).collect::<Vec<_>>().join(", ")
}
