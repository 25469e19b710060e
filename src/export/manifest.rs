//! Export manifests: which render surfaces to capture, under which file names.
//!
//! Bulk manifests always follow the canonical order main, feature pages,
//! why-choose, comparison, FAQ, box contents, buy-now. Archive tooling relies
//! on that order and on the numbered file name prefixes.

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::layout::{router_for, SectionRef};
use crate::model::ProductModel;
use crate::MockupConfig;

/// Where a render surface lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The interactive, possibly zoomed preview.
    Preview,
    /// The hidden native-resolution copy used for bulk export.
    Offscreen,
}

/// Address of one render surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SurfaceId(String);

impl SurfaceId {
    pub fn for_section(section: SectionRef, placement: Placement) -> Self {
        let hidden = placement == Placement::Offscreen;
        let id = match section {
            SectionRef::FeaturesPage(page) if hidden => {
                format!("features-canvas-hidden-{}", page + 1)
            }
            SectionRef::FeaturesPage(page) => format!("features-canvas-{}", page + 1),
            fixed => {
                let base = match fixed {
                    SectionRef::Main => "mockup-canvas",
                    SectionRef::WhyChoose => "why-choose-canvas",
                    SectionRef::Comparison => "comparison-canvas",
                    SectionRef::Faq => "faq-canvas",
                    SectionRef::BoxContents => "box-contents-canvas",
                    SectionRef::BuyNow | SectionRef::FeaturesPage(_) => "buy-now-canvas",
                };
                if hidden {
                    format!("{}-hidden", base)
                } else {
                    base.to_string()
                }
            }
        };
        SurfaceId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// The section at this view index (already clamped by the caller).
    Single(usize),
    All,
}

/// One surface to capture and the file name to save it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub surface_id: SurfaceId,
    pub file_name: String,
    pub section: SectionRef,
}

/// File stem for a single-surface export.
pub fn single_file_stem(section: SectionRef, timestamp_ms: u64) -> String {
    match section {
        SectionRef::Main => format!("product-main-{}", timestamp_ms),
        SectionRef::FeaturesPage(page) => format!("product-features-{}-{}", page + 1, timestamp_ms),
        SectionRef::WhyChoose => format!("product-why-choose-{}", timestamp_ms),
        SectionRef::Comparison => format!("product-comparison-{}", timestamp_ms),
        SectionRef::Faq => format!("product-faq-{}", timestamp_ms),
        SectionRef::BoxContents => format!("product-contents-{}", timestamp_ms),
        SectionRef::BuyNow => format!("product-buy-now-{}", timestamp_ms),
    }
}

/// File stem for an entry of a bulk export; the numeric prefix keeps
/// archives sorted in view order.
pub fn bulk_file_stem(section: SectionRef, timestamp_ms: u64) -> String {
    match section {
        SectionRef::Main => format!("01-Main-{}", timestamp_ms),
        SectionRef::FeaturesPage(page) => format!("02-Feature-{}-{}", page + 1, timestamp_ms),
        SectionRef::WhyChoose => format!("03-WhyChoose-{}", timestamp_ms),
        SectionRef::Comparison => format!("04-Comparison-{}", timestamp_ms),
        SectionRef::Faq => format!("05-FAQ-{}", timestamp_ms),
        SectionRef::BoxContents => format!("06-Contents-{}", timestamp_ms),
        SectionRef::BuyNow => format!("07-BuyNow-{}", timestamp_ms),
    }
}

/// Build the manifest for `mode`. Every entry shares `timestamp_ms`.
pub fn build_manifest(
    model: &ProductModel,
    mode: ExportMode,
    config: &MockupConfig,
    timestamp_ms: u64,
) -> Vec<ManifestEntry> {
    let router = router_for(model, config);
    let ext = &config.export.extension;
    let entries: Vec<ManifestEntry> = match mode {
        ExportMode::Single(view) => {
            let section = router.section_at(view);
            vec![ManifestEntry {
                surface_id: SurfaceId::for_section(section, Placement::Preview),
                file_name: format!("{}.{}", single_file_stem(section, timestamp_ms), ext),
                section,
            }]
        }
        ExportMode::All => router
            .sections()
            .map(|section| ManifestEntry {
                surface_id: SurfaceId::for_section(section, Placement::Offscreen),
                file_name: format!("{}.{}", bulk_file_stem(section, timestamp_ms), ext),
                section,
            })
            .collect(),
    };
    debug!("built manifest with {} entries for {:?}", entries.len(), mode);
    entries
}
