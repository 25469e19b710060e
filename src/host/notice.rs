//! User-visible notices

use log::warn;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A single-surface export could not be captured.
    ExportFailed { file_name: String, reason: String },
    /// The assistant flow was aborted; the current model was kept.
    AssistantFailed { reason: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ExportFailed { file_name, reason } => {
                write!(f, "Could not create image {}: {}. Please try again.", file_name, reason)
            }
            Notice::AssistantFailed { reason } => {
                write!(f, "Content generation failed: {}. Your current design was kept.", reason)
            }
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Sends notices to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        warn!("{}", notice);
    }
}

/// Records notices for later inspection.
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier {
            notices: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.recorded().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.recorded().push(notice);
    }
}
