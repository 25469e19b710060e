//! Exporting render surfaces: manifest building and the sequential runner.

pub mod manifest;
pub mod runner;

pub use manifest::{
    build_manifest, bulk_file_stem, single_file_stem, ExportMode, ManifestEntry, Placement,
    SurfaceId,
};
pub use runner::{export_single, run_export, ExportReport};

/// Smallest delay allowed between export steps. Hosts block rapid
/// successive downloads and surfaces need time to settle.
pub const MIN_EXPORT_DELAY_MS: u64 = 500;

/// Export throttling and naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Wait before the first snapshot of a bulk export.
    pub initial_delay_ms: u64,
    /// Wait between consecutive snapshots of a bulk export.
    pub step_delay_ms: u64,
    /// File extension appended to every manifest file name.
    pub extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: MIN_EXPORT_DELAY_MS,
            step_delay_ms: MIN_EXPORT_DELAY_MS,
            extension: "png".to_string(),
        }
    }
}
