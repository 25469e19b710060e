//! Structured content returned by the generative service.
//!
//! Every top-level field is optional: scalars fall back to the default
//! snapshot and lists fall back to empty. Items inside a list must carry
//! their primary text (`title`, `featureName`, `question` or `text`);
//! anything else is a malformed response and aborts the flow.

use serde::Deserialize;

use super::images::ImageDirective;
use crate::model::{
    default_model, fresh_id, BoxContentItem, ComparisonRow, FaqItem, Feature, ImageRef,
    ProductModel,
};
use crate::{Error, Result};

/// Image fields shared by features, reasons and box items.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageHints {
    #[serde(default)]
    pub image_source: Option<String>,
    #[serde(default)]
    pub user_image_index: Option<i64>,
    #[serde(default)]
    pub generation_prompt: Option<String>,
}

impl ImageHints {
    pub fn directive(&self) -> ImageDirective {
        let index = self
            .user_image_index
            .and_then(|i| usize::try_from(i).ok());
        match self.image_source.as_deref() {
            Some("upload") => match index {
                Some(i) => ImageDirective::UseReference(i),
                None => ImageDirective::None,
            },
            Some("generate") => match self.generation_prompt.as_deref().map(str::trim) {
                Some(p) if !p.is_empty() => ImageDirective::Synthesize {
                    base: index,
                    instruction: p.to_string(),
                },
                _ => ImageDirective::None,
            },
            _ => ImageDirective::None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFeature {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub hints: ImageHints,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRow {
    #[serde(default)]
    pub feature_name: Option<String>,
    #[serde(default)]
    pub product_value: Option<String>,
    #[serde(default)]
    pub competitor_value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFaq {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBoxItem {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
    #[serde(flatten)]
    pub hints: ImageHints,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub headline: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub sold_count: Option<String>,
    pub rating: Option<String>,
    pub rating_count: Option<String>,
    pub stock_text: Option<String>,
    pub features_title: Option<String>,
    pub features_subtitle: Option<String>,
    pub features: Option<Vec<GeneratedFeature>>,
    pub why_choose_title: Option<String>,
    pub why_choose_subtitle: Option<String>,
    pub reasons: Option<Vec<GeneratedFeature>>,
    pub comparison_title: Option<String>,
    pub comparison_subtitle: Option<String>,
    pub comparison_product_name: Option<String>,
    pub comparison_competitor_name: Option<String>,
    pub comparison_rows: Option<Vec<GeneratedRow>>,
    pub faq_title: Option<String>,
    pub faq_subtitle: Option<String>,
    pub faqs: Option<Vec<GeneratedFaq>>,
    pub box_contents_title: Option<String>,
    pub box_contents_items: Option<Vec<GeneratedBoxItem>>,
    pub buy_now_headline: Option<String>,
    pub buy_now_sub_headline: Option<String>,
    pub buy_now_cta_text: Option<String>,
    pub buy_now_footer_features: Option<Vec<String>>,
}

/// Resolved images for the three image-bearing lists, by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedImages {
    pub main: Option<ImageRef>,
    pub features: Vec<Option<ImageRef>>,
    pub reasons: Vec<Option<ImageRef>>,
    pub box_items: Vec<Option<ImageRef>>,
}

fn require(value: &Option<String>, list: &str, index: usize, field: &str) -> Result<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(Error::Validation(format!(
            "{}[{}] is missing `{}`",
            list, index, field
        ))),
    }
}

impl GeneratedContent {
    /// Parse and validate the raw response text.
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text.trim())?;
        if !value.is_object() {
            return Err(Error::Validation("expected a JSON object".to_string()));
        }
        let content: GeneratedContent = serde_json::from_value(value)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, f) in self.features.iter().flatten().enumerate() {
            require(&f.title, "features", i, "title")?;
        }
        for (i, r) in self.reasons.iter().flatten().enumerate() {
            require(&r.title, "reasons", i, "title")?;
        }
        for (i, r) in self.comparison_rows.iter().flatten().enumerate() {
            require(&r.feature_name, "comparisonRows", i, "featureName")?;
        }
        for (i, q) in self.faqs.iter().flatten().enumerate() {
            require(&q.question, "faqs", i, "question")?;
        }
        for (i, b) in self.box_contents_items.iter().flatten().enumerate() {
            require(&b.text, "boxContentsItems", i, "text")?;
        }
        Ok(())
    }

    pub fn feature_directives(&self) -> Vec<ImageDirective> {
        self.features.iter().flatten().map(|f| f.hints.directive()).collect()
    }

    pub fn reason_directives(&self) -> Vec<ImageDirective> {
        self.reasons.iter().flatten().map(|f| f.hints.directive()).collect()
    }

    pub fn box_item_directives(&self) -> Vec<ImageDirective> {
        self.box_contents_items
            .iter()
            .flatten()
            .map(|b| b.hints.directive())
            .collect()
    }

    /// Build a complete model. Every item gets a fresh id.
    pub fn into_model(self, images: ResolvedImages) -> ProductModel {
        let d = default_model();
        let ResolvedImages {
            main,
            features: feature_images,
            reasons: reason_images,
            box_items: box_images,
        } = images;

        let to_features = |list: Option<Vec<GeneratedFeature>>, imgs: Vec<Option<ImageRef>>| {
            let mut imgs = imgs.into_iter();
            list.unwrap_or_default()
                .into_iter()
                .map(|f| Feature {
                    id: fresh_id(),
                    title: f.title.unwrap_or_default(),
                    description: f.description.unwrap_or_default(),
                    image: imgs.next().flatten(),
                })
                .collect::<Vec<_>>()
        };

        let features = to_features(self.features, feature_images);
        let reasons = to_features(self.reasons, reason_images);

        let mut box_images = box_images.into_iter();
        let box_contents_items = self
            .box_contents_items
            .unwrap_or_default()
            .into_iter()
            .map(|b| BoxContentItem {
                id: fresh_id(),
                text: b.text.unwrap_or_default(),
                count: b
                    .count
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| "1x".to_string()),
                image: box_images.next().flatten(),
            })
            .collect();

        let comparison_rows = self
            .comparison_rows
            .unwrap_or_default()
            .into_iter()
            .map(|r| ComparisonRow {
                id: fresh_id(),
                feature_name: r.feature_name.unwrap_or_default(),
                product_value: r.product_value.unwrap_or_default(),
                competitor_value: r.competitor_value.unwrap_or_default(),
            })
            .collect();

        let faqs = self
            .faqs
            .unwrap_or_default()
            .into_iter()
            .map(|q| FaqItem {
                id: fresh_id(),
                question: q.question.unwrap_or_default(),
                answer: q.answer.unwrap_or_default(),
            })
            .collect();

        ProductModel {
            headline: self.headline.unwrap_or(d.headline),
            description: self.description.unwrap_or(d.description),
            cta_text: self.cta_text.unwrap_or(d.cta_text),
            image: main,
            sold_count: self.sold_count.unwrap_or(d.sold_count),
            rating: self.rating.unwrap_or(d.rating),
            rating_count: self.rating_count.unwrap_or(d.rating_count),
            stock_text: self.stock_text.unwrap_or(d.stock_text),
            features_title: self.features_title.unwrap_or(d.features_title),
            features_subtitle: self.features_subtitle.unwrap_or(d.features_subtitle),
            features,
            why_choose_title: self.why_choose_title.unwrap_or(d.why_choose_title),
            why_choose_subtitle: self.why_choose_subtitle.unwrap_or(d.why_choose_subtitle),
            reasons,
            comparison_title: self.comparison_title.unwrap_or(d.comparison_title),
            comparison_subtitle: self.comparison_subtitle.unwrap_or(d.comparison_subtitle),
            comparison_product_name: self
                .comparison_product_name
                .unwrap_or(d.comparison_product_name),
            comparison_competitor_name: self
                .comparison_competitor_name
                .unwrap_or(d.comparison_competitor_name),
            comparison_rows,
            faq_title: self.faq_title.unwrap_or(d.faq_title),
            faq_subtitle: self.faq_subtitle.unwrap_or(d.faq_subtitle),
            faqs,
            box_contents_title: self.box_contents_title.unwrap_or(d.box_contents_title),
            box_contents_items,
            buy_now_headline: self.buy_now_headline.unwrap_or(d.buy_now_headline),
            buy_now_sub_headline: self.buy_now_sub_headline.unwrap_or(d.buy_now_sub_headline),
            buy_now_cta_text: self.buy_now_cta_text.unwrap_or(d.buy_now_cta_text),
            buy_now_footer_features: self
                .buy_now_footer_features
                .unwrap_or(d.buy_now_footer_features),
        }
    }
}
