//! The sequential mirror loop.
//!
//! Drives the enumeration plan against the network and filesystem, one
//! target at a time. Probe and transfer failures are contained per file;
//! a failed target never stops the run.

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use super::error::MirrorError;
use super::plan::{Target, lecture_targets, subdir_name};
use super::report::{FileOutcome, MirrorReport};
use crate::config::MirrorConfig;
use crate::download::HttpClient;
use crate::progress::Progress;

/// Mirrors every configured lecture file into the output tree.
///
/// Ensures the output root exists, then walks lecture indices in ascending
/// order. For each lecture the local subdirectory is created, then each
/// filename template is tried in configured order:
///
/// 1. If the local path already exists the target is skipped; on-disk
///    presence is the only idempotence signal, content is never verified.
/// 2. Otherwise the remote file is probed with a bounded HEAD request;
///    anything but 200 is a logged skip.
/// 3. Otherwise the file is streamed to disk with progress reporting.
///
/// Any probe or transfer error is recorded as
/// [`FileOutcome::Failed`] and the loop moves on to the next target.
///
/// # Errors
///
/// Returns [`MirrorError`] only for failures outside the per-file scope:
/// deriving a target URL, or creating the output root or a lecture
/// subdirectory.
pub async fn mirror_lectures(
    config: &MirrorConfig,
    client: &HttpClient,
    progress: &dyn Progress,
) -> Result<MirrorReport, MirrorError> {
    tokio::fs::create_dir_all(&config.output_root)
        .await
        .map_err(|e| MirrorError::create_dir(&config.output_root, e))?;

    info!(root = %config.output_root.display(), "starting mirror run");

    let mut report = MirrorReport::default();
    for lecture in config.lectures.clone() {
        let subdir = subdir_name(lecture);
        info!(dir = %subdir, "processing lecture directory");

        let local_dir = config.output_root.join(&subdir);
        tokio::fs::create_dir_all(&local_dir)
            .await
            .map_err(|e| MirrorError::create_dir(&local_dir, e))?;

        for target in lecture_targets(config, lecture)? {
            let outcome = process_target(client, &target, progress).await;
            report.record(&target, outcome);
        }
    }

    info!(
        downloaded = report.downloaded(),
        existing = report.skipped_existing(),
        missing = report.skipped_missing(),
        failed = report.failed(),
        total = report.total(),
        "mirror run complete"
    );

    Ok(report)
}

/// Handles a single target; never propagates probe or transfer errors.
async fn process_target(
    client: &HttpClient,
    target: &Target,
    progress: &dyn Progress,
) -> FileOutcome {
    if tokio::fs::try_exists(&target.path).await.unwrap_or(false) {
        info!(file = %target.file_name, "already exists, skipping");
        return FileOutcome::SkippedExists;
    }

    match client.probe(&target.url).await {
        Ok(status) if status != StatusCode::OK => {
            info!(
                file = %target.file_name,
                status = status.as_u16(),
                "file not found, skipping"
            );
            FileOutcome::SkippedMissing {
                status: status.as_u16(),
            }
        }
        Ok(_) => {
            info!(file = %target.file_name, "downloading");
            match client.fetch_to_path(&target.url, &target.path, progress).await {
                Ok(bytes) => {
                    debug!(file = %target.file_name, bytes, "downloaded");
                    FileOutcome::Downloaded { bytes }
                }
                Err(e) => {
                    warn!(file = %target.file_name, error = %e, "download failed");
                    FileOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        }
        Err(e) => {
            warn!(file = %target.file_name, error = %e, "download failed");
            FileOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
