//! Render-surface plans.
//!
//! A plan is the renderer-agnostic description of one canvas: which items it
//! shows, which density tier it uses, which placeholders it needs. Renderers
//! draw plans; the plan snapshotter serializes them.

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::density::{resolve_density, DensityTier, SectionKind};
use super::paginate::FeaturePages;
use super::router::{SectionRef, ViewRouter};
use crate::model::{BoxContentItem, ComparisonRow, FaqItem, Feature, ImageRef, ProductModel};
use crate::{Canvas, MockupConfig};

const HEADLINE_PLACEHOLDER: &str = "Product headline here";
const DESCRIPTION_PLACEHOLDER: &str = "Product description appears here...";
const CTA_PLACEHOLDER: &str = "Order now";
const STOCK_CAPTION_FALLBACK: &str = "left in stock";

/// A run of description text; highlighted runs are drawn as badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSegment {
    pub text: String,
    pub highlighted: bool,
}

/// Split `text` at `*` markers: odd-numbered runs are highlighted.
pub fn highlight_segments(text: &str) -> Vec<TextSegment> {
    text.split('*')
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| TextSegment {
            text: part.to_string(),
            highlighted: i % 2 == 1,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCard {
    pub id: String,
    pub title: String,
    pub segments: Vec<TextSegment>,
    pub image: Option<ImageRef>,
    /// Image and text swap sides.
    pub reversed: bool,
}

impl FeatureCard {
    fn new(feature: &Feature, slot: usize) -> Self {
        Self {
            id: feature.id.clone(),
            title: feature.title.clone(),
            segments: highlight_segments(&feature.description),
            image: feature.image.clone(),
            reversed: slot % 2 == 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainPlan {
    pub headline: String,
    pub description: String,
    pub cta_text: String,
    pub image: Option<ImageRef>,
    pub sold_count: String,
    pub rating: String,
    pub rating_count: String,
    /// Digits of the stock text.
    pub stock_figure: String,
    /// Stock text without digits.
    pub stock_caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturesPagePlan {
    pub page: usize,
    pub page_count: usize,
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<FeatureCard>,
    /// Empty slots on a short last page.
    pub placeholder_slots: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhyChoosePlan {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<FeatureCard>,
    pub filler_slots: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPlan {
    pub title: String,
    pub subtitle: String,
    pub product_name: String,
    pub competitor_name: String,
    pub density: DensityTier,
    pub rows: Vec<ComparisonRow>,
    pub empty_state: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqPlan {
    pub title: String,
    pub subtitle: String,
    pub density: DensityTier,
    pub items: Vec<FaqItem>,
    /// Entries kept on the model but not drawn.
    pub hidden_count: usize,
    pub empty_state: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxContentsPlan {
    pub title: String,
    pub density: DensityTier,
    pub items: Vec<BoxContentItem>,
    pub empty_state: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyNowPlan {
    pub headline: String,
    pub sub_headline: String,
    pub cta_text: String,
    pub footer_features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SurfacePlan {
    Main(MainPlan),
    FeaturesPage(FeaturesPagePlan),
    WhyChoose(WhyChoosePlan),
    Comparison(ComparisonPlan),
    Faq(FaqPlan),
    BoxContents(BoxContentsPlan),
    BuyNow(BuyNowPlan),
}

/// A plan bound to its section and canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceLayout {
    pub section: SectionRef,
    pub canvas: Canvas,
    pub plan: SurfacePlan,
}

impl SurfaceLayout {
    pub fn to_json(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Hex SHA-256 of the compact JSON form; stable for equal layouts.
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(Sha256::digest(&bytes))
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn main_plan(model: &ProductModel) -> MainPlan {
    let stock_figure: String = model.stock_text.chars().filter(char::is_ascii_digit).collect();
    let caption: String = model
        .stock_text
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect();
    MainPlan {
        headline: or_placeholder(&model.headline, HEADLINE_PLACEHOLDER),
        description: or_placeholder(&model.description, DESCRIPTION_PLACEHOLDER),
        cta_text: or_placeholder(&model.cta_text, CTA_PLACEHOLDER),
        image: model.image.clone(),
        sold_count: model.sold_count.clone(),
        rating: model.rating.clone(),
        rating_count: model.rating_count.clone(),
        stock_figure,
        stock_caption: or_placeholder(caption.trim(), STOCK_CAPTION_FALLBACK),
    }
}

fn features_plan(model: &ProductModel, page: usize, config: &MockupConfig) -> FeaturesPagePlan {
    let pages = FeaturePages::new(&model.features, config.features_per_page);
    let items = pages.page(page);
    let cards: Vec<FeatureCard> = items
        .iter()
        .enumerate()
        .map(|(slot, f)| FeatureCard::new(f, slot))
        .collect();
    let placeholder_slots = if cards.is_empty() {
        0
    } else {
        pages.page_size() - cards.len()
    };
    FeaturesPagePlan {
        page,
        page_count: pages.page_count(),
        title: model.features_title.clone(),
        subtitle: model.features_subtitle.clone(),
        cards,
        placeholder_slots,
    }
}

fn why_choose_plan(model: &ProductModel, config: &MockupConfig) -> WhyChoosePlan {
    let limit = config.reasons_display_limit;
    let cards: Vec<FeatureCard> = model
        .reasons
        .iter()
        .take(limit)
        .map(|r| FeatureCard::new(r, 0))
        .collect();
    WhyChoosePlan {
        title: model.why_choose_title.clone(),
        subtitle: model.why_choose_subtitle.clone(),
        filler_slots: limit.saturating_sub(cards.len()),
        cards,
    }
}

fn comparison_plan(model: &ProductModel) -> ComparisonPlan {
    let rows = &model.comparison_rows;
    ComparisonPlan {
        title: model.comparison_title.clone(),
        subtitle: model.comparison_subtitle.clone(),
        product_name: model.comparison_product_name.clone(),
        competitor_name: model.comparison_competitor_name.clone(),
        density: resolve_density(SectionKind::Comparison, rows.len()),
        rows: rows.clone(),
        empty_state: rows.is_empty(),
    }
}

fn faq_plan(model: &ProductModel, config: &MockupConfig) -> FaqPlan {
    let items: Vec<FaqItem> = model
        .faqs
        .iter()
        .take(config.faq_display_limit)
        .cloned()
        .collect();
    FaqPlan {
        title: model.faq_title.clone(),
        subtitle: model.faq_subtitle.clone(),
        density: resolve_density(SectionKind::Faq, model.faqs.len()),
        hidden_count: model.faqs.len() - items.len(),
        empty_state: model.faqs.is_empty(),
        items,
    }
}

fn box_contents_plan(model: &ProductModel) -> BoxContentsPlan {
    let items = &model.box_contents_items;
    BoxContentsPlan {
        title: model.box_contents_title.clone(),
        density: resolve_density(SectionKind::BoxContents, items.len()),
        items: items.clone(),
        empty_state: items.is_empty(),
    }
}

fn buy_now_plan(model: &ProductModel) -> BuyNowPlan {
    BuyNowPlan {
        headline: model.buy_now_headline.clone(),
        sub_headline: model.buy_now_sub_headline.clone(),
        cta_text: model.buy_now_cta_text.clone(),
        footer_features: model.buy_now_footer_features.clone(),
    }
}

/// Plan the surface for one section.
pub fn plan_section(
    model: &ProductModel,
    section: SectionRef,
    config: &MockupConfig,
) -> SurfaceLayout {
    let plan = match section {
        SectionRef::Main => SurfacePlan::Main(main_plan(model)),
        SectionRef::FeaturesPage(page) => {
            SurfacePlan::FeaturesPage(features_plan(model, page, config))
        }
        SectionRef::WhyChoose => SurfacePlan::WhyChoose(why_choose_plan(model, config)),
        SectionRef::Comparison => SurfacePlan::Comparison(comparison_plan(model)),
        SectionRef::Faq => SurfacePlan::Faq(faq_plan(model, config)),
        SectionRef::BoxContents => SurfacePlan::BoxContents(box_contents_plan(model)),
        SectionRef::BuyNow => SurfacePlan::BuyNow(buy_now_plan(model)),
    };
    SurfaceLayout {
        section,
        canvas: config.canvas,
        plan,
    }
}

/// Plan every surface of the model in canonical view order.
pub fn plan_all(model: &ProductModel, config: &MockupConfig) -> Vec<SurfaceLayout> {
    let pages = FeaturePages::new(&model.features, config.features_per_page);
    let router = ViewRouter::new(pages.page_count());
    router
        .sections()
        .map(|section| plan_section(model, section, config))
        .collect()
}
