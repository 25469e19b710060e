//! End-to-end scenarios over the public API

use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;

use promockup::assistant::{AssistantRequest, GenerativeService};
use promockup::export::{build_manifest, ExportMode};
use promockup::host::{Notice, RecordingNotifier};
use promockup::layout::{plan_section, DensityLevel, SectionRef, SurfacePlan};
use promockup::model::{BoxContentItem, ContentItem, FaqItem, ImageRef, ItemPatch, ItemSection};
use promockup::{Error, MockupConfig, ProductModel, Result, Studio};

fn without_features() -> ProductModel {
    let mut m = ProductModel::default();
    m.features.clear();
    m
}

#[test]
fn no_features_means_six_views() {
    let cfg = MockupConfig::default();
    let studio = Studio::with_model(without_features(), cfg.clone()).unwrap();
    let router = studio.router();
    assert_eq!(router.total_views(), 6);
    assert_eq!(router.section_at(1), SectionRef::WhyChoose);
    assert_eq!(router.section_at(5), SectionRef::BuyNow);

    let names: Vec<String> = build_manifest(studio.model(), ExportMode::All, &cfg, 7)
        .into_iter()
        .map(|e| e.file_name)
        .collect();
    assert_eq!(
        names,
        vec![
            "01-Main-7.png",
            "03-WhyChoose-7.png",
            "04-Comparison-7.png",
            "05-FAQ-7.png",
            "06-Contents-7.png",
            "07-BuyNow-7.png",
        ]
    );
}

#[test]
fn third_feature_opens_a_second_page() {
    let cfg = MockupConfig::default();
    let mut studio = Studio::new(cfg.clone()).unwrap();
    studio.apply(|m| m.add_blank_item(ItemSection::Features));
    assert_eq!(studio.router().total_views(), 8);
    assert_eq!(studio.select_view(2), SectionRef::FeaturesPage(1));

    match plan_section(studio.model(), SectionRef::FeaturesPage(1), &cfg).plan {
        SurfacePlan::FeaturesPage(p) => {
            assert_eq!(p.cards.len(), 1);
            assert_eq!(p.placeholder_slots, 1);
            assert_eq!(p.page_count, 2);
        }
        other => panic!("unexpected plan {:?}", other),
    }

    let entries = build_manifest(studio.model(), ExportMode::All, &cfg, 1);
    assert_eq!(entries[1].surface_id.as_str(), "features-canvas-hidden-1");
    assert_eq!(entries[2].surface_id.as_str(), "features-canvas-hidden-2");
    assert_eq!(entries[2].file_name, "02-Feature-2-1.png");
}

#[test]
fn faq_shows_first_five_and_keeps_the_rest() {
    let cfg = MockupConfig::default();
    let mut model = ProductModel::default();
    for i in 0..2 {
        model = model.add_item(ContentItem::Faq(FaqItem {
            id: String::new(),
            question: format!("Extra {}?", i),
            answer: "Yes".to_string(),
        }));
    }
    assert_eq!(model.item_count(ItemSection::Faq), 7);

    match plan_section(&model, SectionRef::Faq, &cfg).plan {
        SurfacePlan::Faq(p) => {
            assert_eq!(p.items.len(), 5);
            assert_eq!(p.hidden_count, 2);
            assert_eq!(p.items[0].id, model.faqs[0].id);
        }
        other => panic!("unexpected plan {:?}", other),
    }
}

#[test]
fn box_contents_tighten_as_items_are_added() {
    let cfg = MockupConfig::default();
    let mut model = ProductModel::default();
    let density = |m: &ProductModel| match plan_section(m, SectionRef::BoxContents, &cfg).plan {
        SurfacePlan::BoxContents(p) => p.density.level,
        other => panic!("unexpected plan {:?}", other),
    };
    assert_eq!(density(&model), DensityLevel::Spacious);
    for _ in 0..4 {
        model = model.add_item(ContentItem::BoxContent(BoxContentItem {
            id: String::new(),
            text: "Sticker".to_string(),
            count: "2x".to_string(),
            image: None,
        }));
    }
    assert_eq!(model.item_count(ItemSection::BoxContents), 7);
    assert_eq!(density(&model), DensityLevel::Compact);
}

#[test]
fn unknown_ids_are_ignored() {
    let model = ProductModel::default();
    let patch = ItemPatch::default().title("nope");
    assert_eq!(model.update_item(ItemSection::Features, "missing", &patch), model);
    assert_eq!(model.remove_item(ItemSection::Reasons, "missing"), model);
}

#[test]
fn model_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let model = ProductModel::default()
        .update_item(ItemSection::Features, "1", &ItemPatch::default().title("Edited"));
    std::fs::write(&path, model.to_json_pretty().unwrap()).unwrap();
    let loaded = ProductModel::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, model);
    assert_eq!(loaded.features[0].title, "Edited");
}

struct CannedService(String);

impl GenerativeService for CannedService {
    fn generate_content<'a>(&'a self, _req: &'a AssistantRequest) -> BoxFuture<'a, Result<String>> {
        let text = self.0.clone();
        async move { Ok(text) }.boxed()
    }

    fn edit_image<'a>(
        &'a self,
        base: &'a ImageRef,
        _instruction: &'a str,
    ) -> BoxFuture<'a, Result<Option<ImageRef>>> {
        let edited = ImageRef::new(format!("{}+edit", base.as_str()));
        async move { Ok(Some(edited)) }.boxed()
    }
}

fn request() -> AssistantRequest {
    AssistantRequest::new(
        "Trail Bottle",
        "Insulated 750ml steel bottle",
        vec![ImageRef::new("front"), ImageRef::new("side")],
    )
}

#[tokio::test]
async fn assistant_replaces_the_model_and_reclamps_the_view() {
    let notifier = Arc::new(RecordingNotifier::new());
    let mut studio = Studio::new(MockupConfig::default())
        .unwrap()
        .with_notifier(notifier.clone());
    studio.select_view(100);

    let service = CannedService(
        r#"{
            "headline": "Cold for 24 hours",
            "features": [{"title": "Insulated", "imageSource": "generate", "userImageIndex": 1,
                          "generationPrompt": "Add frost"}],
            "faqs": [{"question": "Dishwasher safe?", "answer": "Hand wash only"}]
        }"#
        .to_string(),
    );
    studio.run_assistant(&service, &request()).await.unwrap();

    let m = studio.model();
    assert_eq!(m.headline, "Cold for 24 hours");
    assert_eq!(m.image, Some(ImageRef::new("front")));
    assert_eq!(m.features[0].image, Some(ImageRef::new("side+edit")));
    assert!(m.comparison_rows.is_empty());
    assert_eq!(studio.router().total_views(), 7);
    assert_eq!(studio.current_view(), 6);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn malformed_assistant_response_keeps_the_model() {
    let notifier = Arc::new(RecordingNotifier::new());
    let mut studio = Studio::new(MockupConfig::default())
        .unwrap()
        .with_notifier(notifier.clone());
    let before = studio.model().clone();

    let service = CannedService(r#"{"features": [{"description": "no title"}]}"#.to_string());
    let err = studio.run_assistant(&service, &request()).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(studio.model(), &before);

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert!(matches!(notices[0], Notice::AssistantFailed { .. }));
}
