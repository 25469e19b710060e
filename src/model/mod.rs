//! Content model: the product description every page is rendered from.
//!
//! A [`ProductModel`] holds scalar text fields per section plus five ordered
//! item collections (features, reasons, comparison rows, FAQ entries and box
//! contents). Every edit operation is pure: it takes `&self` and returns a new
//! model, so the host can detect changes with a plain equality check.
//!
//! Editing or removing an id that is not present in its collection is a
//! silent no-op. An editor races renders against user actions, and a stale
//! id must never surface as an error.

mod defaults;
mod image;

pub use defaults::default_model;
pub use image::{ImageRef, DEFAULT_MIME};

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Generate a fresh item identifier.
pub fn fresh_id() -> String {
    format!("item-{}", Uuid::new_v4())
}

/// A feature card. Reasons on the why-choose page share the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub id: String,
    pub feature_name: String,
    pub product_value: String,
    pub competitor_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxContentItem {
    pub id: String,
    pub text: String,
    pub count: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// The item collections of a product model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSection {
    Features,
    Reasons,
    Comparison,
    Faq,
    BoxContents,
}

impl ItemSection {
    pub const ALL: [ItemSection; 5] = [
        ItemSection::Features,
        ItemSection::Reasons,
        ItemSection::Comparison,
        ItemSection::Faq,
        ItemSection::BoxContents,
    ];
}

impl fmt::Display for ItemSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemSection::Features => "features",
            ItemSection::Reasons => "reasons",
            ItemSection::Comparison => "comparisonRows",
            ItemSection::Faq => "faqs",
            ItemSection::BoxContents => "boxContentsItems",
        };
        f.write_str(name)
    }
}

/// A content item together with the collection it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentItem {
    Feature(Feature),
    Reason(Feature),
    ComparisonRow(ComparisonRow),
    Faq(FaqItem),
    BoxContent(BoxContentItem),
}

impl ContentItem {
    pub fn section(&self) -> ItemSection {
        match self {
            ContentItem::Feature(_) => ItemSection::Features,
            ContentItem::Reason(_) => ItemSection::Reasons,
            ContentItem::ComparisonRow(_) => ItemSection::Comparison,
            ContentItem::Faq(_) => ItemSection::Faq,
            ContentItem::BoxContent(_) => ItemSection::BoxContents,
        }
    }

    /// The item the editor inserts when the user presses "add" in `section`.
    pub fn blank(section: ItemSection) -> Self {
        defaults::blank_item(section)
    }
}

/// Scalar text fields, keyed by their serialized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Headline,
    Description,
    CtaText,
    SoldCount,
    Rating,
    RatingCount,
    StockText,
    FeaturesTitle,
    FeaturesSubtitle,
    WhyChooseTitle,
    WhyChooseSubtitle,
    ComparisonTitle,
    ComparisonSubtitle,
    ComparisonProductName,
    ComparisonCompetitorName,
    FaqTitle,
    FaqSubtitle,
    BoxContentsTitle,
    BuyNowHeadline,
    BuyNowSubHeadline,
    BuyNowCtaText,
}

impl ScalarField {
    pub const ALL: [ScalarField; 21] = [
        ScalarField::Headline,
        ScalarField::Description,
        ScalarField::CtaText,
        ScalarField::SoldCount,
        ScalarField::Rating,
        ScalarField::RatingCount,
        ScalarField::StockText,
        ScalarField::FeaturesTitle,
        ScalarField::FeaturesSubtitle,
        ScalarField::WhyChooseTitle,
        ScalarField::WhyChooseSubtitle,
        ScalarField::ComparisonTitle,
        ScalarField::ComparisonSubtitle,
        ScalarField::ComparisonProductName,
        ScalarField::ComparisonCompetitorName,
        ScalarField::FaqTitle,
        ScalarField::FaqSubtitle,
        ScalarField::BoxContentsTitle,
        ScalarField::BuyNowHeadline,
        ScalarField::BuyNowSubHeadline,
        ScalarField::BuyNowCtaText,
    ];

    /// The camelCase key used in serialized models.
    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Headline => "headline",
            ScalarField::Description => "description",
            ScalarField::CtaText => "ctaText",
            ScalarField::SoldCount => "soldCount",
            ScalarField::Rating => "rating",
            ScalarField::RatingCount => "ratingCount",
            ScalarField::StockText => "stockText",
            ScalarField::FeaturesTitle => "featuresTitle",
            ScalarField::FeaturesSubtitle => "featuresSubtitle",
            ScalarField::WhyChooseTitle => "whyChooseTitle",
            ScalarField::WhyChooseSubtitle => "whyChooseSubtitle",
            ScalarField::ComparisonTitle => "comparisonTitle",
            ScalarField::ComparisonSubtitle => "comparisonSubtitle",
            ScalarField::ComparisonProductName => "comparisonProductName",
            ScalarField::ComparisonCompetitorName => "comparisonCompetitorName",
            ScalarField::FaqTitle => "faqTitle",
            ScalarField::FaqSubtitle => "faqSubtitle",
            ScalarField::BoxContentsTitle => "boxContentsTitle",
            ScalarField::BuyNowHeadline => "buyNowHeadline",
            ScalarField::BuyNowSubHeadline => "buyNowSubHeadline",
            ScalarField::BuyNowCtaText => "buyNowCtaText",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A partial update for a content item.
///
/// Fields that do not exist on the target item kind are ignored, so one patch
/// type serves every collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` clears the image.
    pub image: Option<Option<ImageRef>>,
    pub feature_name: Option<String>,
    pub product_value: Option<String>,
    pub competitor_value: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub text: Option<String>,
    pub count: Option<String>,
}

impl ItemPatch {
    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.title = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn image(mut self, v: Option<ImageRef>) -> Self {
        self.image = Some(v);
        self
    }

    pub fn feature_name(mut self, v: impl Into<String>) -> Self {
        self.feature_name = Some(v.into());
        self
    }

    pub fn product_value(mut self, v: impl Into<String>) -> Self {
        self.product_value = Some(v.into());
        self
    }

    pub fn competitor_value(mut self, v: impl Into<String>) -> Self {
        self.competitor_value = Some(v.into());
        self
    }

    pub fn question(mut self, v: impl Into<String>) -> Self {
        self.question = Some(v.into());
        self
    }

    pub fn answer(mut self, v: impl Into<String>) -> Self {
        self.answer = Some(v.into());
        self
    }

    pub fn text(mut self, v: impl Into<String>) -> Self {
        self.text = Some(v.into());
        self
    }

    pub fn count(mut self, v: impl Into<String>) -> Self {
        self.count = Some(v.into());
        self
    }
}

/// Shared behaviour of every item kind stored in a collection.
trait Item {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn apply(&mut self, patch: &ItemPatch);
}

fn set_if(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        target.clone_from(v);
    }
}

impl Item for Feature {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ItemPatch) {
        set_if(&mut self.title, &patch.title);
        set_if(&mut self.description, &patch.description);
        if let Some(image) = &patch.image {
            self.image.clone_from(image);
        }
    }
}

impl Item for ComparisonRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ItemPatch) {
        set_if(&mut self.feature_name, &patch.feature_name);
        set_if(&mut self.product_value, &patch.product_value);
        set_if(&mut self.competitor_value, &patch.competitor_value);
    }
}

impl Item for FaqItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ItemPatch) {
        set_if(&mut self.question, &patch.question);
        set_if(&mut self.answer, &patch.answer);
    }
}

impl Item for BoxContentItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ItemPatch) {
        set_if(&mut self.text, &patch.text);
        set_if(&mut self.count, &patch.count);
        if let Some(image) = &patch.image {
            self.image.clone_from(image);
        }
    }
}

// Empty or duplicate ids are replaced so ids stay unique per collection.
fn insert<T: Item>(items: &mut Vec<T>, mut item: T) {
    if item.id().is_empty() || items.iter().any(|i| i.id() == item.id()) {
        item.set_id(fresh_id());
    }
    items.push(item);
}

// Later duplicates lose their id; the first occurrence keeps it.
fn dedupe<T: Item>(items: &mut [T]) -> usize {
    let mut seen = HashSet::new();
    let mut replaced = 0;
    for item in items.iter_mut() {
        if item.id().is_empty() || !seen.insert(item.id().to_string()) {
            let id = fresh_id();
            seen.insert(id.clone());
            item.set_id(id);
            replaced += 1;
        }
    }
    replaced
}

fn update<T: Item>(items: &mut [T], id: &str, patch: &ItemPatch) {
    if let Some(item) = items.iter_mut().find(|i| i.id() == id) {
        item.apply(patch);
    }
}

fn remove<T: Item>(items: &mut Vec<T>, id: &str) {
    items.retain(|i| i.id() != id);
}

fn ids<T: Item>(items: &[T]) -> Vec<&str> {
    items.iter().map(Item::id).collect()
}

/// The live product description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductModel {
    // Main page
    pub headline: String,
    pub description: String,
    pub cta_text: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    pub sold_count: String,
    pub rating: String,
    pub rating_count: String,
    pub stock_text: String,

    // Features pages
    pub features_title: String,
    pub features_subtitle: String,
    pub features: Vec<Feature>,

    // Why choose page
    pub why_choose_title: String,
    pub why_choose_subtitle: String,
    pub reasons: Vec<Feature>,

    // Comparison page
    pub comparison_title: String,
    pub comparison_subtitle: String,
    pub comparison_product_name: String,
    pub comparison_competitor_name: String,
    pub comparison_rows: Vec<ComparisonRow>,

    // FAQ page
    pub faq_title: String,
    pub faq_subtitle: String,
    pub faqs: Vec<FaqItem>,

    // Box contents page
    pub box_contents_title: String,
    pub box_contents_items: Vec<BoxContentItem>,

    // Buy now page
    pub buy_now_headline: String,
    pub buy_now_sub_headline: String,
    pub buy_now_cta_text: String,
    pub buy_now_footer_features: Vec<String>,
}

impl Default for ProductModel {
    fn default() -> Self {
        default_model()
    }
}

impl ProductModel {
    /// Parse a model from its JSON form.
    ///
    /// Empty or repeated item ids are replaced, see [`ProductModel::with_unique_ids`].
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let model: ProductModel = serde_json::from_str(json)?;
        Ok(model.with_unique_ids())
    }

    /// Give every empty or repeated item id in each collection a fresh id.
    pub fn with_unique_ids(mut self) -> Self {
        let replaced = dedupe(&mut self.features)
            + dedupe(&mut self.reasons)
            + dedupe(&mut self.comparison_rows)
            + dedupe(&mut self.faqs)
            + dedupe(&mut self.box_contents_items);
        if replaced > 0 {
            debug!("replaced {} empty or duplicate item ids", replaced);
        }
        self
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn field(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Headline => &self.headline,
            ScalarField::Description => &self.description,
            ScalarField::CtaText => &self.cta_text,
            ScalarField::SoldCount => &self.sold_count,
            ScalarField::Rating => &self.rating,
            ScalarField::RatingCount => &self.rating_count,
            ScalarField::StockText => &self.stock_text,
            ScalarField::FeaturesTitle => &self.features_title,
            ScalarField::FeaturesSubtitle => &self.features_subtitle,
            ScalarField::WhyChooseTitle => &self.why_choose_title,
            ScalarField::WhyChooseSubtitle => &self.why_choose_subtitle,
            ScalarField::ComparisonTitle => &self.comparison_title,
            ScalarField::ComparisonSubtitle => &self.comparison_subtitle,
            ScalarField::ComparisonProductName => &self.comparison_product_name,
            ScalarField::ComparisonCompetitorName => &self.comparison_competitor_name,
            ScalarField::FaqTitle => &self.faq_title,
            ScalarField::FaqSubtitle => &self.faq_subtitle,
            ScalarField::BoxContentsTitle => &self.box_contents_title,
            ScalarField::BuyNowHeadline => &self.buy_now_headline,
            ScalarField::BuyNowSubHeadline => &self.buy_now_sub_headline,
            ScalarField::BuyNowCtaText => &self.buy_now_cta_text,
        }
    }

    fn field_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Headline => &mut self.headline,
            ScalarField::Description => &mut self.description,
            ScalarField::CtaText => &mut self.cta_text,
            ScalarField::SoldCount => &mut self.sold_count,
            ScalarField::Rating => &mut self.rating,
            ScalarField::RatingCount => &mut self.rating_count,
            ScalarField::StockText => &mut self.stock_text,
            ScalarField::FeaturesTitle => &mut self.features_title,
            ScalarField::FeaturesSubtitle => &mut self.features_subtitle,
            ScalarField::WhyChooseTitle => &mut self.why_choose_title,
            ScalarField::WhyChooseSubtitle => &mut self.why_choose_subtitle,
            ScalarField::ComparisonTitle => &mut self.comparison_title,
            ScalarField::ComparisonSubtitle => &mut self.comparison_subtitle,
            ScalarField::ComparisonProductName => &mut self.comparison_product_name,
            ScalarField::ComparisonCompetitorName => &mut self.comparison_competitor_name,
            ScalarField::FaqTitle => &mut self.faq_title,
            ScalarField::FaqSubtitle => &mut self.faq_subtitle,
            ScalarField::BoxContentsTitle => &mut self.box_contents_title,
            ScalarField::BuyNowHeadline => &mut self.buy_now_headline,
            ScalarField::BuyNowSubHeadline => &mut self.buy_now_sub_headline,
            ScalarField::BuyNowCtaText => &mut self.buy_now_cta_text,
        }
    }

    pub fn set_field(&self, field: ScalarField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.field_mut(field) = value.into();
        next
    }

    /// Replace (or clear) the main product image.
    pub fn set_image(&self, image: Option<ImageRef>) -> Self {
        let mut next = self.clone();
        next.image = image;
        next
    }

    /// Edit one buy-now footer feature; an index past the end is a no-op.
    pub fn set_footer_feature(&self, index: usize, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.buy_now_footer_features.get_mut(index) {
            *slot = value.into();
        }
        next
    }

    pub fn set_footer_features(&self, features: Vec<String>) -> Self {
        let mut next = self.clone();
        next.buy_now_footer_features = features;
        next
    }

    /// Append an item to the collection it belongs to.
    ///
    /// An empty id, or one already present in that collection, is replaced
    /// by a fresh id.
    pub fn add_item(&self, item: ContentItem) -> Self {
        let mut next = self.clone();
        match item {
            ContentItem::Feature(f) => insert(&mut next.features, f),
            ContentItem::Reason(r) => insert(&mut next.reasons, r),
            ContentItem::ComparisonRow(c) => insert(&mut next.comparison_rows, c),
            ContentItem::Faq(q) => insert(&mut next.faqs, q),
            ContentItem::BoxContent(b) => insert(&mut next.box_contents_items, b),
        }
        next
    }

    /// Append the editor's blank template item to `section`.
    pub fn add_blank_item(&self, section: ItemSection) -> Self {
        self.add_item(ContentItem::blank(section))
    }

    pub fn update_item(&self, section: ItemSection, id: &str, patch: &ItemPatch) -> Self {
        let mut next = self.clone();
        match section {
            ItemSection::Features => update(&mut next.features, id, patch),
            ItemSection::Reasons => update(&mut next.reasons, id, patch),
            ItemSection::Comparison => update(&mut next.comparison_rows, id, patch),
            ItemSection::Faq => update(&mut next.faqs, id, patch),
            ItemSection::BoxContents => update(&mut next.box_contents_items, id, patch),
        }
        next
    }

    pub fn remove_item(&self, section: ItemSection, id: &str) -> Self {
        let mut next = self.clone();
        match section {
            ItemSection::Features => remove(&mut next.features, id),
            ItemSection::Reasons => remove(&mut next.reasons, id),
            ItemSection::Comparison => remove(&mut next.comparison_rows, id),
            ItemSection::Faq => remove(&mut next.faqs, id),
            ItemSection::BoxContents => remove(&mut next.box_contents_items, id),
        }
        next
    }

    pub fn item_ids(&self, section: ItemSection) -> Vec<&str> {
        match section {
            ItemSection::Features => ids(&self.features),
            ItemSection::Reasons => ids(&self.reasons),
            ItemSection::Comparison => ids(&self.comparison_rows),
            ItemSection::Faq => ids(&self.faqs),
            ItemSection::BoxContents => ids(&self.box_contents_items),
        }
    }

    pub fn item_count(&self, section: ItemSection) -> usize {
        match section {
            ItemSection::Features => self.features.len(),
            ItemSection::Reasons => self.reasons.len(),
            ItemSection::Comparison => self.comparison_rows.len(),
            ItemSection::Faq => self.faqs.len(),
            ItemSection::BoxContents => self.box_contents_items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn feature(id: &str, title: &str) -> Feature {
        Feature {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            image: None,
        }
    }

    #[test]
    fn set_field_returns_new_model() {
        let m = ProductModel::default();
        let next = m.set_field(ScalarField::Headline, "New headline");
        assert_eq!(next.headline, "New headline");
        assert_ne!(m, next);
        assert_eq!(next.field(ScalarField::Headline), "New headline");
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let m = ProductModel::default();
        assert_eq!(m.remove_item(ItemSection::Features, "nonexistent-id"), m);
        assert_eq!(m.remove_item(ItemSection::BoxContents, "nonexistent-id"), m);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let m = ProductModel::default();
        let patch = ItemPatch::default().title("x");
        assert_eq!(m.update_item(ItemSection::Reasons, "missing", &patch), m);
    }

    #[test]
    fn add_item_assigns_fresh_id_when_missing_or_taken() {
        let m = ProductModel::default().add_item(ContentItem::Feature(feature("", "A")));
        let last = m.features.last().unwrap();
        assert!(last.id.starts_with("item-"));

        let taken = m.features[0].id.clone();
        let m = m.add_item(ContentItem::Feature(feature(&taken, "B")));
        let set: HashSet<&str> = m.item_ids(ItemSection::Features).into_iter().collect();
        assert_eq!(set.len(), m.features.len());
    }

    #[test]
    fn add_item_keeps_unique_caller_id() {
        let m = ProductModel::default().add_item(ContentItem::Faq(FaqItem {
            id: "q-new".into(),
            question: "Q".into(),
            answer: "A".into(),
        }));
        assert_eq!(m.faqs.last().unwrap().id, "q-new");
    }

    #[test]
    fn update_patches_only_relevant_fields() {
        let m = ProductModel::default();
        let id = m.box_contents_items[0].id.clone();
        let patch = ItemPatch::default()
            .text("Charger")
            .count("2x")
            .title("ignored")
            .image(Some(ImageRef::new("charger.png")));
        let next = m.update_item(ItemSection::BoxContents, &id, &patch);
        let item = &next.box_contents_items[0];
        assert_eq!(item.text, "Charger");
        assert_eq!(item.count, "2x");
        assert_eq!(item.image, Some(ImageRef::new("charger.png")));
        assert_eq!(next.features, m.features);
    }

    #[test]
    fn patch_can_clear_image() {
        let m = ProductModel::default();
        let id = m.features[0].id.clone();
        let set = ItemPatch::default().image(Some("a.png".into()));
        let with = m.update_item(ItemSection::Features, &id, &set);
        let without =
            with.update_item(ItemSection::Features, &id, &ItemPatch::default().image(None));
        assert!(without.features[0].image.is_none());
    }

    #[test]
    fn footer_feature_out_of_range_is_noop() {
        let m = ProductModel::default();
        assert_eq!(m.set_footer_feature(99, "x"), m);
        let next = m.set_footer_feature(0, "Free returns");
        assert_eq!(next.buy_now_footer_features[0], "Free returns");
    }

    #[test]
    fn scalar_keys_round_trip() {
        for field in ScalarField::ALL {
            assert_eq!(ScalarField::from_key(field.key()), Some(field));
        }
        assert_eq!(ScalarField::from_key("nope"), None);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = ProductModel::default().to_json_pretty().unwrap();
        assert!(json.contains("\"boxContentsItems\""));
        assert!(json.contains("\"buyNowFooterFeatures\""));
        assert!(json.contains("\"featureName\""));
        let back = ProductModel::from_json(&json).unwrap();
        assert_eq!(back, ProductModel::default());
    }

    #[test]
    fn loaded_duplicate_ids_are_made_unique() {
        let mut m = ProductModel::default();
        m.features[1].id = m.features[0].id.clone();
        m.faqs[2].id = String::new();
        let json = m.to_json_pretty().unwrap();

        let loaded = ProductModel::from_json(&json).unwrap();
        assert_eq!(loaded.features[0].id, "1");
        assert_ne!(loaded.features[0].id, loaded.features[1].id);
        assert!(loaded.features[1].id.starts_with("item-"));
        assert!(!loaded.faqs[2].id.is_empty());
        for section in ItemSection::ALL {
            let ids: HashSet<&str> = loaded.item_ids(section).into_iter().collect();
            assert_eq!(ids.len(), loaded.item_count(section));
        }

        let first = loaded.features[0].id.clone();
        let removed = loaded.remove_item(ItemSection::Features, &first);
        assert_eq!(removed.features.len(), 1);
        assert_eq!(removed.features[0].title, m.features[1].title);

        let patch = ItemPatch::default().title("X");
        let patched = loaded.update_item(ItemSection::Features, &first, &patch);
        assert_eq!(patched.features[0].title, "X");
        assert_eq!(patched.features[1].title, m.features[1].title);
    }

    #[test]
    fn unique_ids_are_left_alone() {
        let m = ProductModel::default();
        assert_eq!(m.clone().with_unique_ids(), m);
    }

    #[test]
    fn blank_items_land_in_their_section() {
        let m = ProductModel::default();
        for section in ItemSection::ALL {
            let next = m.add_blank_item(section);
            assert_eq!(next.item_count(section), m.item_count(section) + 1);
        }
    }
}
