//! Self-demonstration: runs every operation on a scratch `demo/` directory.
//!
//! The first half uses the non-blocking variant, the second half the blocking one,
//! then the scratch tree is purged and removed.

use crate::cli::route::current_thread_runtime;
use crate::error::ServiceError;
use crate::ops::{blocking, nonblocking};
use crate::tree::PurgeReport;
use std::path::Path;

const DEMO_DIR: &str = "demo";

async fn nonblocking_steps(base: &Path, log: &mut Vec<String>) -> Result<(), ServiceError> {
    let note = base.join("note.txt");
    let data = base.join("data.json");
    let doc = base.join("doc.rtf");
    let copy_dest = base.join("copy").join("note_copy.txt");

    nonblocking::create_dir(base).await?;
    nonblocking::write_file(&note, "Hello 123 WORLD!").await?;
    let json = serde_json::to_string_pretty(&serde_json::json!({
        "user": "Artem9",
        "role": "ADMIN0",
    }))
    .map_err(|e| ServiceError::Output(e.to_string()))?;
    nonblocking::write_file(&data, &json).await?;
    nonblocking::write_file(&doc, "{\\rtf1\\ansi This is RTF 456}").await?;

    log.push(format!("Async read: {}", nonblocking::read_file(&note).await?));
    log.push(format!("Async denoise: {}", nonblocking::denoise_file(&note).await?));

    nonblocking::copy_file(&note, &copy_dest).await?;
    nonblocking::clear_file(&doc).await?;
    nonblocking::overwrite_file(&data, "{\"reset\":true}").await?;

    let files = nonblocking::list_project_files(base).await?;
    log.push(format!("Async list files: {}", files.len()));
    for file in files {
        log.push(format!("  {}", file.display()));
    }
    Ok(())
}

fn blocking_steps(base: &Path, log: &mut Vec<String>) -> Result<(), ServiceError> {
    let sync_dir = base.join("sync");
    let sync_file = sync_dir.join("a.txt");

    blocking::create_dir(&sync_dir)?;
    blocking::write_file(&sync_file, "SYNC 999 CONTENT")?;
    log.push(format!("Sync read: {}", blocking::read_file(&sync_file)?));
    log.push(format!("Sync denoise: {}", blocking::denoise_file(&sync_file)?));
    Ok(())
}

async fn cleanup(base: &Path, keep: bool) -> Result<PurgeReport, ServiceError> {
    let report = nonblocking::purge_project(base).await?;
    if !keep {
        nonblocking::delete_dir(base).await?;
    }
    Ok(report)
}

/// Run the demo under `root` and return its transcript.
pub fn run(root: &Path, keep: bool) -> Result<String, ServiceError> {
    let base = root.join(DEMO_DIR);
    let runtime = current_thread_runtime()?;
    let mut log = Vec::new();

    runtime.block_on(nonblocking_steps(&base, &mut log))?;
    blocking_steps(&base, &mut log)?;
    let report = runtime.block_on(cleanup(&base, keep))?;

    log.push(format!(
        "Purged {}: {} removed, {} kept",
        base.display(),
        report.removed_count(),
        report.skipped_count()
    ));
    Ok(log.join("\n"))
}
