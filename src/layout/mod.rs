//! Layout derivation: density tiers, feature pagination, view routing and
//! render-surface plans. Everything here is a pure function of the model and
//! the config, safe to recompute on every render.

pub mod density;
pub mod paginate;
pub mod router;
pub mod surface;

pub use density::{resolve_density, DensityLevel, DensityTier, SectionKind};
pub use paginate::{page_count, FeaturePages, FEATURES_PER_PAGE};
pub use router::{SectionRef, ViewRouter, FIXED_SECTIONS};
pub use surface::{plan_all, plan_section, SurfaceLayout, SurfacePlan};

use crate::model::ProductModel;
use crate::MockupConfig;

/// Router for the model's current feature page count.
pub fn router_for(model: &ProductModel, config: &MockupConfig) -> ViewRouter {
    ViewRouter::new(page_count(model.features.len(), config.features_per_page))
}
