//! Sequential export runner.
//!
//! Snapshots run strictly one after another with a fixed delay before the
//! first and between each, never concurrently. A failing entry is logged and
//! skipped; the remaining entries still run. There is no cancellation: once
//! started, a run goes to the end of its manifest.

use log::{info, warn};
use std::time::Duration;

use super::{ExportConfig, ManifestEntry};
use crate::host::{Downloader, Notice, Notifier, Snapshotter};
use crate::Result;

/// Outcome of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// File names saved, in manifest order.
    pub saved: Vec<String>,
    /// `(file name, reason)` for entries whose snapshot failed.
    pub failed: Vec<(String, String)>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.saved.len() + self.failed.len()
    }
}

/// Export every manifest entry, best effort.
pub async fn run_export(
    entries: &[ManifestEntry],
    snapshotter: &dyn Snapshotter,
    downloader: &dyn Downloader,
    config: &ExportConfig,
) -> ExportReport {
    let mut report = ExportReport::default();
    info!("exporting {} surfaces", entries.len());

    tokio::time::sleep(Duration::from_millis(config.initial_delay_ms)).await;

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(Duration::from_millis(config.step_delay_ms)).await;
        }
        match snapshotter.snapshot(&entry.surface_id).await {
            Ok(bytes) => {
                downloader.save(&bytes, &entry.file_name);
                report.saved.push(entry.file_name.clone());
            }
            Err(e) => {
                warn!("Skipping {} ({}): {}", entry.file_name, entry.surface_id, e);
                report.failed.push((entry.file_name.clone(), e.to_string()));
            }
        }
    }

    info!(
        "export finished: {} saved, {} failed",
        report.saved.len(),
        report.failed.len()
    );
    report
}

/// Export one surface immediately; a failure raises a notice and is returned.
pub async fn export_single(
    entry: &ManifestEntry,
    snapshotter: &dyn Snapshotter,
    downloader: &dyn Downloader,
    notifier: &dyn Notifier,
) -> Result<()> {
    match snapshotter.snapshot(&entry.surface_id).await {
        Ok(bytes) => {
            downloader.save(&bytes, &entry.file_name);
            Ok(())
        }
        Err(e) => {
            warn!("Failed to export {}: {}", entry.file_name, e);
            notifier.notify(Notice::ExportFailed {
                file_name: entry.file_name.clone(),
                reason: e.to_string(),
            });
            Err(e)
        }
    }
}
