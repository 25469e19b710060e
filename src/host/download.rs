//! Saving exported bytes

use log::{debug, warn};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use crate::Result;

/// Fire-and-forget file saving. Implementations log their own failures.
pub trait Downloader: Send + Sync {
    fn save(&self, bytes: &[u8], file_name: &str);
}

/// Writes files into a directory.
pub struct DirDownloader {
    dir: PathBuf,
}

impl DirDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `bytes` to `file_name` inside the directory and return the path.
    pub fn write(&self, bytes: &[u8], file_name: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes)?;
        debug!("saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

impl Downloader for DirDownloader {
    fn save(&self, bytes: &[u8], file_name: &str) {
        if let Err(e) = self.write(bytes, file_name) {
            warn!("Failed to save {}: {}", self.dir.join(file_name).display(), e);
        }
    }
}

/// Keeps saved files in memory, in save order.
pub struct MemoryDownloader {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryDownloader {
    pub fn new() -> Self {
        MemoryDownloader {
            saved: Mutex::new(Vec::new()),
        }
    }

    // A panicking saver leaves the list intact, so a poisoned lock is still usable.
    fn saved(&self) -> MutexGuard<'_, Vec<(String, Vec<u8>)>> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn file_names(&self) -> Vec<String> {
        self.saved().iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.saved().clone()
    }
}

impl Default for MemoryDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader for MemoryDownloader {
    fn save(&self, bytes: &[u8], file_name: &str) {
        self.saved().push((file_name.to_string(), bytes.to_vec()));
    }
}
