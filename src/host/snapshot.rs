//! Capturing render surfaces as image bytes

use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::HashMap;

use crate::export::{Placement, SurfaceId};
use crate::layout::{plan_all, SurfaceLayout};
use crate::model::ProductModel;
use crate::{Error, MockupConfig, Result};

/// Renders one surface at the canvas's native resolution, 1:1, regardless of
/// any zoom applied to the interactive preview.
pub trait Snapshotter: Send + Sync {
    fn snapshot<'a>(&'a self, surface: &'a SurfaceId) -> BoxFuture<'a, Result<Vec<u8>>>;
}

/// Returns empty buffers for every surface.
pub struct NoopSnapshotter;

impl NoopSnapshotter {
    pub fn new() -> Self {
        NoopSnapshotter
    }
}

impl Default for NoopSnapshotter {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshotter for NoopSnapshotter {
    fn snapshot<'a>(&'a self, _surface: &'a SurfaceId) -> BoxFuture<'a, Result<Vec<u8>>> {
        async { Ok(Vec::new()) }.boxed()
    }
}

/// Snapshots a surface as its JSON layout plan.
///
/// Used for dry runs and by external rasterizers that consume plans instead
/// of pixels. Both the preview and the offscreen copy of each section resolve
/// to the same plan.
pub struct PlanSnapshotter {
    surfaces: HashMap<SurfaceId, SurfaceLayout>,
}

impl PlanSnapshotter {
    pub fn new(model: &ProductModel, config: &MockupConfig) -> Self {
        let mut surfaces = HashMap::new();
        for layout in plan_all(model, config) {
            for placement in [Placement::Preview, Placement::Offscreen] {
                surfaces.insert(SurfaceId::for_section(layout.section, placement), layout.clone());
            }
        }
        Self { surfaces }
    }

    pub fn layout(&self, surface: &SurfaceId) -> Option<&SurfaceLayout> {
        self.surfaces.get(surface)
    }
}

impl Snapshotter for PlanSnapshotter {
    fn snapshot<'a>(&'a self, surface: &'a SurfaceId) -> BoxFuture<'a, Result<Vec<u8>>> {
        async move {
            let layout = self
                .surfaces
                .get(surface)
                .ok_or_else(|| Error::snapshot(surface.as_str(), "no such surface"))?;
            layout.to_json()
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SectionRef;

    #[tokio::test]
    async fn plan_snapshot_resolves_both_placements() {
        let snap = PlanSnapshotter::new(&ProductModel::default(), &MockupConfig::default());
        let preview = SurfaceId::for_section(SectionRef::Faq, Placement::Preview);
        let hidden = SurfaceId::for_section(SectionRef::Faq, Placement::Offscreen);
        let a = snap.snapshot(&preview).await.unwrap();
        let b = snap.snapshot(&hidden).await.unwrap();
        assert_eq!(a, b);
        let json: serde_json::Value = serde_json::from_slice(&a).unwrap();
        assert_eq!(json["plan"]["kind"], "faq");
        assert_eq!(json["canvas"]["width"], 1080);
    }

    #[tokio::test]
    async fn unknown_surface_is_a_snapshot_error() {
        let snap = PlanSnapshotter::new(&ProductModel::default(), &MockupConfig::default());
        // Default model has one feature page only.
        let missing = SurfaceId::for_section(SectionRef::FeaturesPage(4), Placement::Preview);
        let err = snap.snapshot(&missing).await.unwrap_err();
        assert!(matches!(err, Error::Snapshot { .. }));
    }
}
