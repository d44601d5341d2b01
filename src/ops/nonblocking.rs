//! Non-blocking variant: `tokio::fs`, awaited one call at a time.
//!
//! There is no fan-out: the next sibling is not started until the previous entry,
//! including its whole subtree, has been processed.

use crate::error::TreeError;
use crate::text;
use crate::tree::{Action, DirectoryEntry, EntryKind, Outcome, PurgeReport, Traversal};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, trace};

async fn ensure_parent(path: &Path) -> Result<(), TreeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| TreeError::from_io(parent, e))?;
    }
    Ok(())
}

/// Create the ancestors of `path` if needed, then replace its whole content.
pub async fn write_file(path: impl AsRef<Path>, content: &str) -> Result<(), TreeError> {
    let path = path.as_ref();
    ensure_parent(path).await?;
    fs::write(path, content)
        .await
        .map_err(|e| TreeError::from_io(path, e))
}

pub async fn read_file(path: impl AsRef<Path>) -> Result<String, TreeError> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .await
        .map_err(|e| TreeError::from_io(path, e))
}

/// Replace the content of an existing file. Fails with `NotFound` if it is absent.
pub async fn overwrite_file(path: impl AsRef<Path>, content: &str) -> Result<(), TreeError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .await
        .map_err(|e| TreeError::from_io(path, e))?;
    file.write_all(content.as_bytes())
        .await
        .map_err(|e| TreeError::from_io(path, e))?;
    file.flush().await.map_err(|e| TreeError::from_io(path, e))
}

/// Truncate an existing file to zero length.
pub async fn clear_file(path: impl AsRef<Path>) -> Result<(), TreeError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .await
        .map_err(|e| TreeError::from_io(path, e))?;
    file.set_len(0)
        .await
        .map_err(|e| TreeError::from_io(path, e))
}

/// Strip digit runs and lowercase the file in place. Returns the new content.
pub async fn denoise_file(path: impl AsRef<Path>) -> Result<String, TreeError> {
    let path = path.as_ref();
    let denoised = text::denoise(&read_file(path).await?);
    fs::write(path, &denoised)
        .await
        .map_err(|e| TreeError::from_io(path, e))?;
    Ok(denoised)
}

/// Copy `src` to `dest`, creating the ancestors of `dest`. Returns bytes copied.
pub async fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64, TreeError> {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    ensure_parent(dest).await?;
    match fs::copy(src, dest).await {
        Ok(bytes) => Ok(bytes),
        Err(e) => match fs::metadata(src).await {
            Err(src_err) => Err(TreeError::from_io(src, src_err)),
            Ok(_) => Err(TreeError::from_io(dest, e)),
        },
    }
}

/// Create `path` and its ancestors. Succeeds if it already exists.
pub async fn create_dir(path: impl AsRef<Path>) -> Result<(), TreeError> {
    let path = path.as_ref();
    fs::create_dir_all(path)
        .await
        .map_err(|e| TreeError::from_io(path, e))
}

/// Remove `path` and everything below it, service entries included.
/// Succeeds if it does not exist. A file or symlink is removed as such.
pub async fn delete_dir(path: impl AsRef<Path>) -> Result<(), TreeError> {
    let path = path.as_ref();
    let result = match fs::symlink_metadata(path).await {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path).await,
        Ok(_) => fs::remove_file(path).await,
        Err(e) => Err(e),
    };
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other.map_err(|e| TreeError::from_io(path, e)),
    }
}

/// One listing of `dir`, in the order the OS returns it.
pub async fn read_listing(dir: impl AsRef<Path>) -> Result<Vec<DirectoryEntry>, TreeError> {
    let dir = dir.as_ref();
    let mut read_dir = fs::read_dir(dir)
        .await
        .map_err(|e| TreeError::from_io(dir, e))?;
    let mut entries = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| TreeError::from_io(dir, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| TreeError::from_io(&entry.path(), e))?;
        entries.push(DirectoryEntry::new(entry.file_name(), EntryKind::from(file_type)));
    }
    Ok(entries)
}

/// Every non-service file under `root`, depth-first pre-order.
///
/// Same order and content as [`blocking::list_project_files`](super::blocking::list_project_files).
#[instrument(skip_all, fields(root = %root.as_ref().display()))]
pub async fn list_project_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, TreeError> {
    let mut traversal = Traversal::new(root.as_ref());
    let mut files = Vec::new();
    while let Some(action) = traversal.next_action() {
        match action {
            Action::ReadDir(dir) => {
                trace!(dir = %dir.display(), depth = traversal.depth(), "Listing directory");
                traversal.supply_listing(read_listing(&dir).await?)
            }
            Action::File(path) => files.push(path),
            Action::LeaveDir(_) => {}
        }
    }
    debug!(file_count = files.len(), "Listed project files");
    Ok(files)
}

/// Remove all non-service content under `root`, leaving service entries, the
/// directories that still hold them, and `root` itself.
///
/// Same end state as [`blocking::purge_project`](super::blocking::purge_project).
#[instrument(skip_all, fields(root = %root.as_ref().display()))]
pub async fn purge_project(root: impl AsRef<Path>) -> Result<PurgeReport, TreeError> {
    let mut traversal = Traversal::new(root.as_ref());
    let mut report = PurgeReport::default();
    while let Some(action) = traversal.next_action() {
        match action {
            Action::ReadDir(dir) => {
                trace!(dir = %dir.display(), depth = traversal.depth(), "Listing directory");
                traversal.supply_listing(read_listing(&dir).await?)
            }
            Action::File(path) => {
                let outcome = Outcome::from_result(fs::remove_file(&path).await);
                if let Outcome::Skipped(reason) = &outcome {
                    trace!(path = %path.display(), ?reason, "File kept");
                }
                report.record(path, EntryKind::File, outcome);
            }
            Action::LeaveDir(dir) => {
                let outcome = Outcome::from_result(fs::remove_dir(&dir).await);
                if let Outcome::Skipped(reason) = &outcome {
                    trace!(path = %dir.display(), ?reason, "Directory kept");
                }
                report.record(dir, EntryKind::Directory, outcome);
            }
        }
    }
    debug!(
        removed = report.removed_count(),
        skipped = report.skipped_count(),
        "Purged project"
    );
    Ok(report)
}
