//! CLI presentation: text and json formatters per command family.

use crate::error::ServiceError;
use crate::tree::{Outcome, PurgeReport, SkipReason};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct FileListOutput<'a> {
    files: &'a [PathBuf],
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ServiceError> {
    serde_json::to_string_pretty(value).map_err(|e| ServiceError::Output(e.to_string()))
}

pub fn format_file_list(files: &[PathBuf], format: &str) -> Result<String, ServiceError> {
    match format {
        "json" => to_json(&FileListOutput { files }),
        _ if files.is_empty() => Ok("No project files.".to_string()),
        _ => Ok(files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn describe_reason(reason: &SkipReason) -> String {
    match reason {
        SkipReason::NotEmpty => "still holds service entries".to_string(),
        SkipReason::AccessDenied => "permission denied".to_string(),
        SkipReason::Missing => "already gone".to_string(),
        SkipReason::Other(msg) => msg.clone(),
    }
}

pub fn format_purge_report(report: &PurgeReport, format: &str) -> Result<String, ServiceError> {
    if format == "json" {
        return to_json(report);
    }
    let mut s = format!(
        "Purge complete: {} removed, {} kept",
        report.removed_count(),
        report.skipped_count()
    );
    for removal in report.skipped() {
        if let Outcome::Skipped(reason) = &removal.outcome {
            s.push_str(&format!(
                "\n  kept {} ({})",
                removal.path.display(),
                describe_reason(reason)
            ));
        }
    }
    Ok(s)
}

/// One line per subject: `<subject>\t<yes|no label>`
pub fn format_flags(rows: &[(String, bool)], yes: &str, no: &str) -> String {
    rows.iter()
        .map(|(subject, flag)| format!("{}\t{}", subject, if *flag { yes } else { no }))
        .collect::<Vec<_>>()
        .join("\n")
}
