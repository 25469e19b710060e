//! ProMockup
//!
//! Layout, pagination and export engine for fixed-canvas product marketing
//! pages. A `ProductModel` holds the editable content; the engine derives
//! the ordered list of views from it, decides how dense each list section
//! should be, and exports every view as a named image through host-supplied
//! snapshot and download collaborators.
//!
//! # Features
//!
//! - **Views**: main, one page per pair of features, then five fixed sections
//! - **Density**: comparison and box-contents sections shrink as they grow
//! - **Export**: sequential, throttled and best effort
//! - **Assistant** (default feature): structured content from a generative service
//!
//! # Example
//!
//! ```no_run
//! use promockup::host::{DirDownloader, PlanSnapshotter};
//! use promockup::{MockupConfig, Studio};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut studio = Studio::new(MockupConfig::default())?;
//! studio.select_view(1);
//! println!("editing {}", studio.current_section());
//!
//! let snapshotter = PlanSnapshotter::new(studio.model(), studio.config());
//! let report = studio
//!     .export_all(&snapshotter, &DirDownloader::new("out"))
//!     .await;
//! println!("saved {} files", report.saved.len());
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

pub mod error;
pub use error::{Error, Result};

pub mod model;
pub mod layout;
pub mod export;

// Snapshot, download and notice collaborators
pub mod host;

pub mod assistant;
pub mod studio;

pub use assistant::FallbackPolicy;
pub use export::{ExportConfig, ExportMode, ExportReport, ManifestEntry};
pub use layout::{SectionRef, ViewRouter};
pub use model::ProductModel;
pub use studio::Studio;

/// Size of every render surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1080,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MockupConfig {
    pub canvas: Canvas,
    /// Features shown on each features page.
    pub features_per_page: usize,
    /// FAQ entries rendered before the rest are hidden.
    pub faq_display_limit: usize,
    /// Reasons rendered on the why-choose surface.
    pub reasons_display_limit: usize,
    pub export: ExportConfig,
    /// Image policy for assistant items whose directive did not resolve.
    pub fallback: FallbackPolicy,
}

impl Default for MockupConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            features_per_page: layout::FEATURES_PER_PAGE,
            faq_display_limit: 5,
            reasons_display_limit: 3,
            export: ExportConfig::default(),
            fallback: FallbackPolicy::default(),
        }
    }
}

impl MockupConfig {
    pub fn validate(&self) -> Result<()> {
        if self.features_per_page == 0 {
            return Err(Error::Config("features_per_page must be at least 1".to_string()));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::Config(format!(
                "canvas must not be empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        let min = export::MIN_EXPORT_DELAY_MS;
        if self.export.initial_delay_ms < min || self.export.step_delay_ms < min {
            return Err(Error::Config(format!(
                "export delays must be at least {}ms",
                min
            )));
        }
        if self.export.extension.trim().is_empty() {
            return Err(Error::Config("export extension must not be empty".to_string()));
        }
        Ok(())
    }
}
